//! Service wiring: one store connection, one hydrated manager.

use tokio::sync::Mutex;

use stockroom_store::{InventoryError, InventoryManager, SqliteItemStore};

/// The manager type served by this API.
pub type AppManager = InventoryManager<SqliteItemStore>;

/// Process-wide services handed to every handler.
///
/// The single `Mutex` is deliberate: it serializes the whole write-through
/// sequence of each mutation, and reads need it too because the low-stock
/// view repairs itself on read.
pub struct AppServices {
    manager: Mutex<AppManager>,
}

impl AppServices {
    /// Connect to the database at `url`, hydrate the manager, and wrap it for
    /// the handler layer.
    pub async fn connect(url: &str) -> Result<Self, InventoryError> {
        let store = SqliteItemStore::connect(url).await?;
        let mut manager = InventoryManager::new(store);
        manager.load().await?;

        Ok(Self {
            manager: Mutex::new(manager),
        })
    }

    pub fn manager(&self) -> &Mutex<AppManager> {
        &self.manager
    }
}
