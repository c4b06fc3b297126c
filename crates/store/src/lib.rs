//! `stockroom-store` — persistence and coordination.
//!
//! The [`ItemStore`] port abstracts durable item/setting storage; the
//! [`InventoryManager`] coordinates the store with the in-memory index layer
//! using a write-through discipline (durable write first, in-memory state
//! after).

pub mod item_store;
pub mod manager;

pub use item_store::{InMemoryItemStore, ItemStore, SqliteItemStore, StoreError};
pub use manager::{InventoryError, InventoryManager};
