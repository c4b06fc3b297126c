//! Durable item/setting storage port.

use async_trait::async_trait;
use thiserror::Error;

use stockroom_inventory::ItemRecord;

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryItemStore;
pub use sqlite::SqliteItemStore;

/// Setting key under which the low-stock threshold is persisted.
pub const LOW_STOCK_THRESHOLD_KEY: &str = "low_stock_threshold";

/// Store-layer error.
///
/// Uniqueness violations get their own variant so the caller can translate
/// them into a domain-level `AlreadyExists`; everything else is an opaque
/// database failure that propagates unmodified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A create collided with an existing row (name uniqueness).
    #[error("unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Any other storage failure (connection, IO, malformed row).
    #[error("database error: {0}")]
    Database(String),
}

impl StoreError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }
}

/// Port for durable item storage plus a single scalar setting table.
///
/// All methods are atomic per call; the store offers no multi-call
/// transactions (the manager's write-through sequencing relies only on
/// per-call atomicity).
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Insert a new item. Fails with [`StoreError::UniqueViolation`] if the
    /// name is already taken.
    async fn create_item(&self, name: &str, quantity: i64, price: f64) -> Result<(), StoreError>;

    /// All items currently stored, in name order.
    async fn read_all_items(&self) -> Result<Vec<ItemRecord>, StoreError>;

    /// Update the provided fields of an existing item. Returns whether a row
    /// was affected.
    async fn update_item(
        &self,
        name: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<bool, StoreError>;

    /// Delete an item. Returns whether a row was affected.
    async fn delete_item(&self, name: &str) -> Result<bool, StoreError>;

    /// Read a setting value, `None` if the key was never written.
    async fn read_setting(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write (insert or replace) a setting value.
    async fn write_setting(&self, key: &str, value: &str) -> Result<(), StoreError>;
}
