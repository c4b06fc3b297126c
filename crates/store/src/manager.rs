//! Inventory coordinator.
//!
//! Every mutation runs the same write-through sequence: durable store write
//! first, then the canonical in-memory index, then low-stock reconciliation.
//! A failed store call returns before any in-memory state is touched, so the
//! sequence is all-or-nothing from the caller's perspective even though the
//! store offers no transactions.
//!
//! One manager instance exists per process. Callers are expected to wrap it
//! in a single coarse lock; reads also need exclusive access because the
//! low-stock view repairs itself lazily on read.

use thiserror::Error;

use stockroom_core::{DomainError, validate};
use stockroom_inventory::{DEFAULT_THRESHOLD, InMemoryIndex, ItemSummary, LowStockIndex, StockLevel};

use crate::item_store::{ItemStore, LOW_STOCK_THRESHOLD_KEY, StoreError};

/// Error surfaced by manager operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    #[error("item already exists")]
    AlreadyExists,

    #[error("item not found")]
    NotFound,

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DomainError> for InventoryError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::AlreadyExists => Self::AlreadyExists,
            DomainError::NotFound => Self::NotFound,
        }
    }
}

/// Coordinates the persistent store, the canonical index and the low-stock
/// view.
#[derive(Debug)]
pub struct InventoryManager<S> {
    store: S,
    items: InMemoryIndex,
    low_stock: LowStockIndex,
    threshold: i64,
}

impl<S: ItemStore> InventoryManager<S> {
    /// Create an empty manager. Call [`load`](Self::load) before serving.
    pub fn new(store: S) -> Self {
        Self {
            store,
            items: InMemoryIndex::new(),
            low_stock: LowStockIndex::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Hydrate in-memory state from the store: threshold setting, then every
    /// item record, then one full low-stock rebuild. The only place a full
    /// initial scan is unavoidable.
    pub async fn load(&mut self) -> Result<(), InventoryError> {
        self.threshold = match self.store.read_setting(LOW_STOCK_THRESHOLD_KEY).await? {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "stored threshold is not an integer; using default");
                DEFAULT_THRESHOLD
            }),
            None => DEFAULT_THRESHOLD,
        };

        let records = self.store.read_all_items().await?;
        self.items.clear();
        for record in &records {
            self.items.set(
                record.name.clone(),
                StockLevel {
                    quantity: record.quantity,
                    price: record.price,
                },
            );
        }
        self.low_stock.rebuild_from(&self.items, self.threshold);

        tracing::info!(
            items = self.items.len(),
            threshold = self.threshold,
            "hydrated inventory from store"
        );
        Ok(())
    }

    /// Create a new item.
    pub async fn add_item(
        &mut self,
        name: &str,
        quantity: i64,
        price: f64,
    ) -> Result<ItemSummary, InventoryError> {
        validate::item_name(name)?;
        let quantity = validate::quantity(quantity)?;
        let price = validate::price(price)?;

        if self.items.contains(name) {
            return Err(InventoryError::AlreadyExists);
        }

        match self.store.create_item(name, quantity, price).await {
            Ok(()) => {}
            // The store is the uniqueness authority; the index pre-check can
            // miss rows written outside this process.
            Err(StoreError::UniqueViolation(_)) => return Err(InventoryError::AlreadyExists),
            Err(err) => return Err(err.into()),
        }

        let level = StockLevel { quantity, price };
        self.items.set(name, level);
        if quantity < self.threshold {
            self.low_stock.push(quantity, name);
        }

        Ok(ItemSummary::new(name, level))
    }

    /// Update quantity and/or price of an existing item.
    pub async fn update_item(
        &mut self,
        name: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<ItemSummary, InventoryError> {
        let Some(current) = self.items.get(name) else {
            return Err(InventoryError::NotFound);
        };
        if quantity.is_none() && price.is_none() {
            return Err(InventoryError::Validation(
                "at least one of quantity or price must be provided".into(),
            ));
        }
        let quantity = quantity.map(validate::quantity).transpose()?;
        let price = price.map(validate::price).transpose()?;

        if !self.store.update_item(name, quantity, price).await? {
            // Index said present but the store disagreed; report the store's
            // verdict without touching in-memory state.
            return Err(InventoryError::NotFound);
        }

        let level = StockLevel {
            quantity: quantity.unwrap_or(current.quantity),
            price: price.unwrap_or(current.price),
        };
        self.items.set(name, level);
        self.low_stock.rebuild_from(&self.items, self.threshold);

        Ok(ItemSummary::new(name, level))
    }

    /// Delete an item.
    pub async fn delete_item(&mut self, name: &str) -> Result<(), InventoryError> {
        if !self.items.contains(name) {
            return Err(InventoryError::NotFound);
        }

        if !self.store.delete_item(name).await? {
            return Err(InventoryError::NotFound);
        }

        self.items.remove(name);
        self.low_stock.rebuild_from(&self.items, self.threshold);
        Ok(())
    }

    /// All items, in index iteration order (name-lexicographic).
    pub fn list_all(&self) -> Vec<ItemSummary> {
        self.items
            .entries()
            .map(|(name, level)| ItemSummary::new(name, level))
            .collect()
    }

    /// Items strictly below the threshold, ascending by (quantity, name).
    pub fn list_low_stock(&mut self) -> Vec<ItemSummary> {
        self.low_stock.drain_valid(&self.items, self.threshold)
    }

    /// Case-insensitive substring search over item names. An empty query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<ItemSummary> {
        let needle = query.to_lowercase();
        self.items
            .entries()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, level)| ItemSummary::new(name, level))
            .collect()
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    /// Persist a new threshold and rebuild the low-stock view against it.
    /// Negative values are accepted and make nothing low-stock.
    pub async fn set_threshold(&mut self, value: i64) -> Result<(), InventoryError> {
        self.store
            .write_setting(LOW_STOCK_THRESHOLD_KEY, &value.to_string())
            .await?;

        self.threshold = value;
        self.low_stock.rebuild_from(&self.items, self.threshold);
        Ok(())
    }
}
