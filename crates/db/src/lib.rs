//! Read-only access to the `sensor_readings` table.
//!
//! Every store operation opens its own MySQL connection, runs one query and
//! closes the connection again. There is no pool.

pub mod config;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::StoreConfig;
pub use store::{MySqlReadingStore, ReadingStore};

/// Failure talking to the relational store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Could not reach or authenticate to the store.
    #[error("Store connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// The query itself failed.
    #[error("Store query failed: {0}")]
    Query(#[source] sqlx::Error),
}
