//! Testlet Error Types
//!
//! Construction is the only fallible step. Randomization never fails on a
//! constructed testlet.

use thiserror::Error;

use crate::models::ItemType;

/// Item set violates the configured composition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("wrong number of items: expected {expected}, got {actual}")]
    WrongItemCount { expected: usize, actual: usize },

    #[error("wrong number of items of type {item_type}: expected {expected}, got {actual}")]
    WrongItemTypeCount {
        item_type: ItemType,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate item id: '{0}'")]
    DuplicateItemId(String),
}

/// Configuration could not be loaded or is incoherent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("required item counts must not be empty")]
    NoRequiredCounts,

    #[error(
        "head segment needs {head} items of type {item_type}, but only {available} are required"
    )]
    HeadSegmentTooLarge {
        item_type: ItemType,
        head: usize,
        available: usize,
    },
}

/// Top-level error returned by testlet construction.
#[derive(Debug, Error)]
pub enum TestletError {
    /// Absent or empty argument. The caller must fix the call site.
    #[error("invalid argument: {param} is required")]
    InvalidArgument { param: &'static str },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl TestletError {
    /// Returns the validation failure, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            TestletError::Validation(e) => Some(e),
            _ => None,
        }
    }
}
