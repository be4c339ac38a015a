//! Route definitions for sensor reading endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::sensor;
use crate::state::AppState;

/// ```text
/// GET /sensorData      -> get_sensor_data
/// GET /historicalData  -> get_historical_data
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sensorData", get(sensor::get_sensor_data))
        .route("/historicalData", get(sensor::get_historical_data))
}
