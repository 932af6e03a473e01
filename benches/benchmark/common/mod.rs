use criterion::Criterion;
use sequence_rail::Outcome;
use std::sync::OnceLock;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Test Data & Domain Types
// ============================================================================

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub struct Item {
    pub id: u32,
    pub sku: String,
    pub quantity: u32,
}

impl Item {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            sku: format!("SKU-{id:06}"),
            quantity: id % 97,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    Missing(u32),
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupError::Missing(id) => write!(f, "item {id} not found"),
        }
    }
}

/// Ids `1..=n`.
pub fn item_ids(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

/// Ids `1..=100_000`, shared across benches.
pub fn large_item_ids() -> &'static Vec<u32> {
    static INSTANCE: OnceLock<Vec<u32>> = OnceLock::new();
    INSTANCE.get_or_init(|| item_ids(100_000))
}

// ============================================================================
// Simulation Functions
// ============================================================================

/// Every id divisible by 17 is missing.
pub fn lookup_item(id: u32) -> Outcome<Item, LookupError> {
    if id % 17 == 0 {
        Outcome::failure(LookupError::Missing(id))
    } else {
        Outcome::success(Item::new(id))
    }
}

/// Lookup that never fails, for the all-success path.
pub fn lookup_present_item(id: u32) -> Outcome<Item, LookupError> {
    Outcome::success(Item::new(id))
}

// ============================================================================
// Criterion Configuration
// ============================================================================

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(100)
        .warm_up_time(Duration::from_secs(3))
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.05)
}
