//! Per-request store access.
//!
//! [`ReadingStore`] is the seam the HTTP layer depends on. The MySQL
//! implementation acquires a fresh connection for each call and releases it
//! on every exit path, including query failures.

use async_trait::async_trait;
use healthmon_core::reading::SensorReading;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;

use crate::repositories::SensorReadingRepo;
use crate::{StoreConfig, StoreError};

/// Read-only access to sensor readings.
#[async_trait]
pub trait ReadingStore: Send + Sync {
    /// The newest reading, or `None` when the table is empty.
    async fn latest(&self) -> Result<Option<SensorReading>, StoreError>;

    /// Up to `limit` readings ordered newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<SensorReading>, StoreError>;

    /// Round-trip a trivial query to check the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// MySQL-backed [`ReadingStore`] with one short-lived connection per call.
#[derive(Debug, Clone)]
pub struct MySqlReadingStore {
    options: MySqlConnectOptions,
}

impl MySqlReadingStore {
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    /// Build a store from configuration. Fails only on a malformed URL.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        config
            .connect_options()
            .map(Self::new)
            .map_err(StoreError::Connection)
    }

    async fn acquire(&self) -> Result<MySqlConnection, StoreError> {
        let conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(StoreError::Connection)?;
        tracing::debug!("Store connection opened");
        Ok(conn)
    }
}

/// Close `conn`, logging rather than propagating a failed close.
async fn release(conn: MySqlConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Store connection did not close cleanly");
    }
}

#[async_trait]
impl ReadingStore for MySqlReadingStore {
    async fn latest(&self) -> Result<Option<SensorReading>, StoreError> {
        let mut conn = self.acquire().await?;
        let result = SensorReadingRepo::latest(&mut conn).await;
        release(conn).await;

        let row = result.map_err(StoreError::Query)?;
        Ok(row.map(SensorReading::from))
    }

    async fn recent(&self, limit: u32) -> Result<Vec<SensorReading>, StoreError> {
        let mut conn = self.acquire().await?;
        let result = SensorReadingRepo::recent(&mut conn, limit).await;
        release(conn).await;

        let rows = result.map_err(StoreError::Query)?;
        Ok(rows.into_iter().map(SensorReading::from).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.acquire().await?;
        let result = sqlx::query("SELECT 1").execute(&mut conn).await;
        release(conn).await;

        result.map(|_| ()).map_err(StoreError::Query)
    }
}
