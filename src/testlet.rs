//! Testlet - validated item set with constrained randomization
//!
//! A [`Testlet`] owns exactly the items its [`TestletConfig`] requires and
//! produces a fresh random ordering on every call to [`Testlet::randomize`]:
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────┐
//! │  Head (head.count items) │  Tail (everything else)                  │
//! │  only head.item_type     │  mixed types, uniformly permuted         │
//! └──────────────────────────┴──────────────────────────────────────────┘
//! ```
//!
//! The stored items are never reordered; each call is an independent draw.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace, warn};

use crate::config::TestletConfig;
use crate::error::TestletError;
use crate::models::Item;
use crate::validation::validate_items;

#[derive(Debug, Clone)]
pub struct Testlet {
    testlet_id: String,
    items: Vec<Item>,
    config: TestletConfig,
}

impl Testlet {
    /// Create a testlet with the reference composition
    /// (4 pretest + 6 operational, 2 pretest items leading).
    ///
    /// # Errors
    /// - `InvalidArgument` if `testlet_id` is empty
    /// - `Validation` if `items` does not match the composition
    ///
    /// # Examples
    /// ```
    /// use testlet::{Item, ItemType, Testlet};
    ///
    /// let items: Vec<Item> = (1..=10)
    ///     .map(|i| {
    ///         let t = if i <= 4 { ItemType::Pretest } else { ItemType::Operational };
    ///         Item::new(format!("item-{}", i), t)
    ///     })
    ///     .collect();
    ///
    /// let testlet = Testlet::new("testlet-1", items).unwrap();
    /// let order = testlet.randomize();
    /// assert_eq!(order.len(), 10);
    /// assert!(order[..2].iter().all(|i| i.item_type() == ItemType::Pretest));
    /// ```
    pub fn new(testlet_id: impl Into<String>, items: Vec<Item>) -> Result<Self, TestletError> {
        Self::with_config(testlet_id, items, TestletConfig::default())
    }

    /// Create a testlet with explicit composition rules
    pub fn with_config(
        testlet_id: impl Into<String>,
        items: Vec<Item>,
        config: TestletConfig,
    ) -> Result<Self, TestletError> {
        Self::builder()
            .testlet_id(testlet_id)
            .items(items)
            .config(config)
            .build()
    }

    pub fn builder() -> TestletBuilder {
        TestletBuilder::default()
    }

    pub fn testlet_id(&self) -> &str {
        &self.testlet_id
    }

    /// Items in construction order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &TestletConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Randomize using the thread-local RNG.
    pub fn randomize(&self) -> Vec<Item> {
        self.randomize_with(&mut rand::thread_rng())
    }

    /// Randomize using a caller-supplied RNG.
    ///
    /// Head: `head.count` items drawn without replacement from items of
    /// `head.item_type`, every ordered selection equally likely.
    /// Tail: all remaining items, uniformly permuted independently of the head.
    pub fn randomize_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Item> {
        let head = self.config.head;

        let mut head_pool: Vec<usize> = (0..self.items.len())
            .filter(|&i| self.items[i].is_type(head.item_type))
            .collect();
        // Guaranteed by config + item validation at construction
        debug_assert!(
            head_pool.len() >= head.count,
            "head pool of {} has {} items, needs {}",
            head.item_type,
            head_pool.len(),
            head.count
        );

        let (chosen, _) = head_pool.partial_shuffle(rng, head.count);
        let chosen = chosen.to_vec();

        let mut in_head = vec![false; self.items.len()];
        for &i in &chosen {
            in_head[i] = true;
        }

        let mut tail: Vec<usize> = (0..self.items.len()).filter(|&i| !in_head[i]).collect();
        tail.shuffle(rng);

        trace!(
            testlet_id = %self.testlet_id,
            head = ?chosen,
            tail = ?tail,
            "testlet randomized"
        );

        chosen
            .iter()
            .chain(tail.iter())
            .map(|&i| self.items[i].clone())
            .collect()
    }
}

/// Step-by-step construction.
///
/// A field that is never set is reported as an `InvalidArgument`, before any
/// composition checks run.
#[derive(Debug, Default)]
pub struct TestletBuilder {
    testlet_id: Option<String>,
    items: Option<Vec<Item>>,
    config: Option<TestletConfig>,
}

impl TestletBuilder {
    pub fn testlet_id(mut self, testlet_id: impl Into<String>) -> Self {
        self.testlet_id = Some(testlet_id.into());
        self
    }

    pub fn items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Composition rules; defaults to [`TestletConfig::default`]
    pub fn config(mut self, config: TestletConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn build(self) -> Result<Testlet, TestletError> {
        let testlet_id = match self.testlet_id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(TestletError::InvalidArgument { param: "testlet_id" }),
        };
        let items = self
            .items
            .ok_or(TestletError::InvalidArgument { param: "items" })?;
        let config = self.config.unwrap_or_default();

        config.validate()?;

        if let Err(e) = validate_items(&items, &config) {
            warn!(testlet_id = %testlet_id, error = %e, "testlet rejected");
            return Err(e.into());
        }

        debug!(
            testlet_id = %testlet_id,
            items = items.len(),
            head = config.head.count,
            "testlet created"
        );

        Ok(Testlet {
            testlet_id,
            items,
            config,
        })
    }
}
