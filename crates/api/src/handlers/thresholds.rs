//! Handler for the alert threshold endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use healthmon_core::thresholds::{ThresholdInput, ThresholdUpdate};

use crate::error::AppResult;
use crate::state::AppState;

/// Confirmation text returned after an update.
pub const THRESHOLDS_UPDATED: &str = "Thresholds updated successfully";

/// POST /setThresholds
///
/// Overwrite whichever of `bodyTemp`, `ambientTemp`, `movement` are present.
/// Values that do not parse as numbers (including `null`) are stored as NaN,
/// which disables alerting for that metric until the next update. A body
/// sent without a JSON content type carries no fields and changes nothing.
pub async fn set_thresholds(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<&'static str> {
    let input = if is_json(&headers) {
        ThresholdInput::from_body(&body)?
    } else {
        ThresholdInput::default()
    };

    let update = ThresholdUpdate::from(&input);
    if update.has_nan() {
        tracing::warn!(?input, "Non-numeric threshold stored as NaN");
    }

    let current = state.thresholds.apply(&update);
    tracing::info!(
        body_temp = current.body_temp,
        ambient_temp = current.ambient_temp,
        movement = current.movement,
        "Thresholds updated",
    );

    Ok(THRESHOLDS_UPDATED)
}

/// Whether the request declares an `application/json` body.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}
