#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use healthmon_core::reading::SensorReading;
use healthmon_core::thresholds::SharedThresholds;
use healthmon_db::{ReadingStore, StoreError};
use http_body_util::BodyExt;
use tower::ServiceExt;

use healthmon_api::config::ServerConfig;
use healthmon_api::router::build_app_router;
use healthmon_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory stores
// ---------------------------------------------------------------------------

/// Store backed by a vector, ordered newest first like the SQL queries.
pub struct MemoryStore {
    rows: Vec<SensorReading>,
}

impl MemoryStore {
    pub fn new(mut rows: Vec<SensorReading>) -> Self {
        rows.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { rows }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl ReadingStore for MemoryStore {
    async fn latest(&self) -> Result<Option<SensorReading>, StoreError> {
        Ok(self.rows.first().cloned())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<SensorReading>, StoreError> {
        Ok(self.rows.iter().take(limit as usize).cloned().collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store that refuses every connection.
pub struct UnreachableStore;

fn refused() -> StoreError {
    StoreError::Connection(sqlx::Error::Io(std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        "connection refused by 10.0.0.7:3306",
    )))
}

#[async_trait]
impl ReadingStore for UnreachableStore {
    async fn latest(&self) -> Result<Option<SensorReading>, StoreError> {
        Err(refused())
    }

    async fn recent(&self, _limit: u32) -> Result<Vec<SensorReading>, StoreError> {
        Err(refused())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(refused())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A reading `age_secs` seconds before a fixed base instant.
pub fn reading(
    age_secs: i64,
    body_temp: Option<f64>,
    ambient_temp: Option<f64>,
    accel: [Option<f64>; 3],
) -> SensorReading {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    SensorReading {
        timestamp: base - Duration::seconds(age_secs),
        body_temp,
        ambient_temp,
        accel_x: accel[0],
        accel_y: accel[1],
        accel_z: accel[2],
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router over `store`, returning the shared
/// thresholds so tests can inspect them.
pub fn build_test_app(store: impl ReadingStore + 'static) -> (Router, Arc<SharedThresholds>) {
    let thresholds = Arc::new(SharedThresholds::default());
    let state = AppState {
        store: Arc::new(store),
        thresholds: Arc::clone(&thresholds),
    };
    (build_app_router(state, &test_config()), thresholds)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}
