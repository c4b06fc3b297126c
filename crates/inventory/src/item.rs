use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One inventory entry as the persistent store returns it.
///
/// The store owns this shape; `name` is the unique, immutable key. Timestamps
/// are store-managed and informational only; the in-memory layer never reads
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Live working copy of one item, held by [`crate::InMemoryIndex`].
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevel {
    pub quantity: i64,
    pub price: f64,
}

/// Item as surfaced by listings, searches and the low-stock view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl ItemSummary {
    pub fn new(name: impl Into<String>, level: StockLevel) -> Self {
        Self {
            name: name.into(),
            quantity: level.quantity,
            price: level.price,
        }
    }
}
