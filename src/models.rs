// models.rs - Item and item type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Item category
///
/// Ordering follows declaration order; validation walks required counts in
/// this order, so error attribution is deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ItemType {
    Pretest,     // Field-tested, not scored
    Operational, // Counts toward the score
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Pretest => write!(f, "Pretest"),
            ItemType::Operational => write!(f, "Operational"),
        }
    }
}

/// A single test item.
///
/// Immutable once built: fields are private and only exposed by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    item_id: String,
    item_type: ItemType,
}

impl Item {
    pub fn new(item_id: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            item_id: item_id.into(),
            item_type,
        }
    }

    #[inline]
    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    #[inline]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    #[inline]
    pub fn is_type(&self, item_type: ItemType) -> bool {
        self.item_type == item_type
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.item_id, self.item_type)
    }
}
