//! Handlers for sensor reading endpoints.

use axum::extract::State;
use axum::Json;
use healthmon_core::reading::{self, HistoryPoint, LatestReading, HISTORY_LIMIT};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /sensorData
///
/// The newest reading with each metric classified against the current
/// thresholds. An empty store yields three `null` / `Normal` metrics.
pub async fn get_sensor_data(State(state): State<AppState>) -> AppResult<Json<LatestReading>> {
    tracing::debug!("Fetching real-time sensor data");
    let latest = state.store.latest().await?;
    if latest.is_none() {
        tracing::debug!("No real-time data available");
    }

    let thresholds = state.thresholds.snapshot();
    Ok(Json(LatestReading::derive(latest.as_ref(), &thresholds)))
}

/// GET /historicalData
///
/// Up to [`HISTORY_LIMIT`] readings, newest first.
pub async fn get_historical_data(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<HistoryPoint>>> {
    tracing::debug!("Fetching historical data");
    let rows = state.store.recent(HISTORY_LIMIT).await?;
    Ok(Json(reading::history(&rows)))
}
