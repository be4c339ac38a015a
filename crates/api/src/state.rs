use std::sync::Arc;

use healthmon_core::thresholds::SharedThresholds;
use healthmon_db::ReadingStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Sensor-readings store. Opens a fresh connection per call.
    pub store: Arc<dyn ReadingStore>,
    /// Alert thresholds, shared by every request for the process lifetime.
    pub thresholds: Arc<SharedThresholds>,
}
