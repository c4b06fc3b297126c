//! In-memory item store.
//!
//! Intended for tests/dev. Mirrors the SQLite store's semantics (name
//! uniqueness, per-call atomicity, store-managed timestamps) without IO.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use stockroom_inventory::ItemRecord;

use super::{ItemStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    items: BTreeMap<String, ItemRecord>,
    settings: HashMap<String, String>,
}

/// In-memory [`ItemStore`] backed by a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    inner: RwLock<Inner>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn create_item(&self, name: &str, quantity: i64, price: f64) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::database("lock poisoned"))?;

        if inner.items.contains_key(name) {
            return Err(StoreError::UniqueViolation(format!(
                "items.name: '{name}'"
            )));
        }

        let now = Utc::now();
        inner.items.insert(
            name.to_string(),
            ItemRecord {
                name: name.to_string(),
                quantity,
                price,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(())
    }

    async fn read_all_items(&self) -> Result<Vec<ItemRecord>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::database("lock poisoned"))?;
        Ok(inner.items.values().cloned().collect())
    }

    async fn update_item(
        &self,
        name: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::database("lock poisoned"))?;

        let Some(record) = inner.items.get_mut(name) else {
            return Ok(false);
        };
        if let Some(quantity) = quantity {
            record.quantity = quantity;
        }
        if let Some(price) = price {
            record.price = price;
        }
        record.updated_at = Utc::now();
        Ok(true)
    }

    async fn delete_item(&self, name: &str) -> Result<bool, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::database("lock poisoned"))?;
        Ok(inner.items.remove(name).is_some())
    }

    async fn read_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::database("lock poisoned"))?;
        Ok(inner.settings.get(key).cloned())
    }

    async fn write_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::database("lock poisoned"))?;
        inner.settings.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
