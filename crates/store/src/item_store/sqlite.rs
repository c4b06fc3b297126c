//! SQLite-backed item store.
//!
//! Persists items and settings in a single SQLite database via `sqlx`.
//! `connect` bootstraps the schema and seeds the default low-stock threshold,
//! so a fresh database is usable immediately.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};
use tracing::instrument;

use stockroom_inventory::{DEFAULT_THRESHOLD, ItemRecord};

use super::{ItemStore, LOW_STOCK_THRESHOLD_KEY, StoreError};

/// SQLite-backed [`ItemStore`].
///
/// `SqlitePool` is `Send + Sync`, so the store handle can be shared freely;
/// serialization of mutations is the manager's job, not the store's.
#[derive(Debug, Clone)]
pub struct SqliteItemStore {
    pool: SqlitePool,
}

impl SqliteItemStore {
    /// Open (or create) the database at `url` and bootstrap the schema.
    ///
    /// Accepts any sqlx SQLite URL, e.g. `sqlite://stockroom.db?mode=rwc` or
    /// `sqlite::memory:`.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        // One connection: all mutations are serialized behind the manager's
        // lock anyway, and `sqlite::memory:` databases are per-connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await
            .map_err(map_sqlx_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                name       TEXT PRIMARY KEY,
                quantity   INTEGER NOT NULL,
                price      REAL NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(map_sqlx_err)?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(map_sqlx_err)?;

        sqlx::query("INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)")
            .bind(LOW_STOCK_THRESHOLD_KEY)
            .bind(DEFAULT_THRESHOLD.to_string())
            .execute(&pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    #[instrument(skip(self), err)]
    async fn create_item(&self, name: &str, quantity: i64, price: f64) -> Result<(), StoreError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO items (name, quantity, price, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?4)
            "#,
        )
        .bind(name)
        .bind(quantity)
        .bind(price)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn read_all_items(&self) -> Result<Vec<ItemRecord>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT name, quantity, price, created_at, updated_at
            FROM items
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        rows.into_iter()
            .map(|row| {
                Ok(ItemRecord {
                    name: row.try_get("name").map_err(map_sqlx_err)?,
                    quantity: row.try_get("quantity").map_err(map_sqlx_err)?,
                    price: row.try_get("price").map_err(map_sqlx_err)?,
                    created_at: row.try_get("created_at").map_err(map_sqlx_err)?,
                    updated_at: row.try_get("updated_at").map_err(map_sqlx_err)?,
                })
            })
            .collect()
    }

    #[instrument(skip(self), err)]
    async fn update_item(
        &self,
        name: &str,
        quantity: Option<i64>,
        price: Option<f64>,
    ) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE items
            SET quantity   = COALESCE(?1, quantity),
                price      = COALESCE(?2, price),
                updated_at = ?3
            WHERE name = ?4
            "#,
        )
        .bind(quantity)
        .bind(price)
        .bind(Utc::now())
        .bind(name)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self), err)]
    async fn delete_item(&self, name: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM items WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn read_setting(&self, key: &str) -> Result<Option<String>, StoreError> {
        let row = sqlx::query("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        row.map(|r| r.try_get("value").map_err(map_sqlx_err))
            .transpose()
    }

    #[instrument(skip(self), err)]
    async fn write_setting(&self, key: &str, value: &str) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;
        Ok(())
    }
}

/// Map sqlx errors, keeping uniqueness violations distinguishable.
fn map_sqlx_err(err: sqlx::Error) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            return StoreError::UniqueViolation(db_err.message().to_string());
        }
    }
    StoreError::database(err.to_string())
}
