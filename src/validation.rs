//! Item set validation
//!
//! Checks a candidate item set against the configured composition. Order of
//! checks: total count, then each required item type (ascending), then id
//! uniqueness. The first failing check is reported.
//!
//! An item of a type missing from `required_counts` can never pass: the total
//! equals the sum of required counts, and every listed type matches exactly, so
//! no slot is left for an unlisted type. It surfaces as a count mismatch on a
//! listed type.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::config::TestletConfig;
use crate::error::ValidationError;
use crate::models::{Item, ItemType};

/// Validate `items` against `config`.
///
/// # Errors
/// - `WrongItemCount` when the total differs from the required sum
/// - `WrongItemTypeCount` for the first item type whose count differs
/// - `DuplicateItemId` when an id appears twice
pub fn validate_items(items: &[Item], config: &TestletConfig) -> Result<(), ValidationError> {
    let expected = config.items_count_required();
    if items.len() != expected {
        return Err(ValidationError::WrongItemCount {
            expected,
            actual: items.len(),
        });
    }

    let counts = count_by_type(items);
    for (&item_type, &expected) in &config.required_counts {
        let actual = counts.get(&item_type).copied().unwrap_or(0);
        if actual != expected {
            return Err(ValidationError::WrongItemTypeCount {
                item_type,
                expected,
                actual,
            });
        }
    }

    let mut seen = FxHashSet::default();
    for item in items {
        if !seen.insert(item.item_id()) {
            return Err(ValidationError::DuplicateItemId(item.item_id().to_string()));
        }
    }

    Ok(())
}

/// Count items per item type
pub fn count_by_type(items: &[Item]) -> FxHashMap<ItemType, usize> {
    let mut counts = FxHashMap::default();
    for item in items {
        *counts.entry(item.item_type()).or_insert(0) += 1;
    }
    counts
}
