//! Route definitions for threshold and actuator control.

use axum::routing::post;
use axum::Router;

use crate::handlers::{actuator, thresholds};
use crate::state::AppState;

/// ```text
/// POST /setThresholds  -> set_thresholds
/// POST /setRgbLed      -> set_rgb_led
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/setThresholds", post(thresholds::set_thresholds))
        .route("/setRgbLed", post(actuator::set_rgb_led))
}
