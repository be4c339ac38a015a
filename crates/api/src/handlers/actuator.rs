//! Handler for the RGB LED control stub.

use axum::extract::Query;
use healthmon_core::actuator::{invalid_color, LedColor};
use serde::Deserialize;

use crate::error::AppResult;

/// Query parameters for `POST /setRgbLed`.
#[derive(Debug, Deserialize)]
pub struct LedQuery {
    pub color: Option<String>,
}

/// POST /setRgbLed?color=<off|red|green|blue>
///
/// Acknowledges the requested color. No hardware is driven.
pub async fn set_rgb_led(Query(query): Query<LedQuery>) -> AppResult<String> {
    let color: LedColor = query
        .color
        .as_deref()
        .ok_or_else(invalid_color)?
        .parse()?;

    tracing::info!(%color, "RGB LED set");
    Ok(format!("RGB LED set to {color}"))
}
