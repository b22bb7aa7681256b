//! testlet - Testlet validation and constrained randomization
//!
//! A testlet is a fixed set of items with an exact per-type composition
//! (reference: 4 pretest + 6 operational). Randomizing it yields a head of
//! pretest items followed by a uniformly shuffled tail of everything else.
//!
//! # Modules
//!
//! - [`models`] - `Item` and `ItemType`
//! - [`config`] - Composition rules and app configuration (YAML)
//! - [`validation`] - Item set checks against the composition
//! - [`testlet`] - `Testlet` construction and randomization
//! - [`error`] - Error types
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod testlet;
pub mod validation;

// Convenient re-exports at crate root
pub use config::{HeadSegment, TestletConfig};
pub use error::{ConfigError, TestletError, ValidationError};
pub use models::{Item, ItemType};
pub use testlet::{Testlet, TestletBuilder};
