use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::models::ItemType;

/// Reference composition: 4 pretest + 6 operational items.
pub const DEFAULT_PRETEST_COUNT: usize = 4;
pub const DEFAULT_OPERATIONAL_COUNT: usize = 6;
/// Reference head segment: 2 pretest items lead every randomized testlet.
pub const DEFAULT_HEAD_COUNT: usize = 2;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    #[serde(default)]
    pub testlet: TestletConfig,
}

/// Leading segment of a randomized testlet, drawn from a single item type.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct HeadSegment {
    pub item_type: ItemType,
    pub count: usize,
}

/// Testlet composition rules.
///
/// `required_counts` fixes how many items of each type a testlet holds;
/// `head` fixes the constrained prefix. Everything else forms the tail.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TestletConfig {
    pub required_counts: BTreeMap<ItemType, usize>,
    pub head: HeadSegment,
}

impl Default for TestletConfig {
    fn default() -> Self {
        Self {
            required_counts: BTreeMap::from([
                (ItemType::Pretest, DEFAULT_PRETEST_COUNT),
                (ItemType::Operational, DEFAULT_OPERATIONAL_COUNT),
            ]),
            head: HeadSegment {
                item_type: ItemType::Pretest,
                count: DEFAULT_HEAD_COUNT,
            },
        }
    }
}

impl TestletConfig {
    /// Total number of items a testlet must hold
    pub fn items_count_required(&self) -> usize {
        self.required_counts.values().sum()
    }

    /// Number of items following the head segment
    pub fn tail_count(&self) -> usize {
        self.items_count_required().saturating_sub(self.head.count)
    }

    /// Required count for one item type (0 when unlisted)
    pub fn required_count(&self, item_type: ItemType) -> usize {
        self.required_counts.get(&item_type).copied().unwrap_or(0)
    }

    /// Check the rules are satisfiable.
    ///
    /// The head segment can never ask for more items of its type than a valid
    /// testlet holds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.required_counts.is_empty() {
            return Err(ConfigError::NoRequiredCounts);
        }

        let available = self.required_count(self.head.item_type);
        if self.head.count > available {
            return Err(ConfigError::HeadSegmentTooLarge {
                item_type: self.head.item_type,
                head: self.head.count,
                available,
            });
        }

        Ok(())
    }

    /// Parse and validate testlet rules from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: TestletConfig =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load testlet rules from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml`
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        Self::from_file(format!("config/{}.yaml", env))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.testlet.validate()?;
        Ok(config)
    }
}
