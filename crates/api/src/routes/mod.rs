pub mod control;
pub mod health;
pub mod sensor;

use axum::Router;

use crate::state::AppState;

/// Build the monitoring route tree.
///
/// Paths are mounted at the root so existing dashboard clients keep working.
///
/// ```text
/// GET  /sensorData                        latest reading with statuses
/// GET  /historicalData                    up to 100 readings, newest first
///
/// POST /setThresholds                     partial threshold update (JSON body)
/// POST /setRgbLed?color=                  LED control stub
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(sensor::router())
        .merge(control::router())
}
