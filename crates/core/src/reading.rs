//! Sensor readings and the response shapes derived from them.
//!
//! The latest-reading view keeps missing temperatures as `null`, while the
//! history view reports them as `0`. Both derive movement the same way.

use chrono::SecondsFormat;
use serde::{Serialize, Serializer};

use crate::movement;
use crate::thresholds::{evaluate, MetricStatus, ThresholdConfig};
use crate::types::Timestamp;

/// Maximum number of rows the history view returns.
pub const HISTORY_LIMIT: u32 = 100;

/// One stored sample, as written by the ingestion pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub timestamp: Timestamp,
    pub body_temp: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub accel_x: Option<f64>,
    pub accel_y: Option<f64>,
    pub accel_z: Option<f64>,
}

impl SensorReading {
    /// Derived movement magnitude for this sample.
    pub fn movement(&self) -> f64 {
        movement::magnitude(self.accel_x, self.accel_y, self.accel_z)
    }
}

/// A metric value annotated with its threshold status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricReading {
    pub value: Option<f64>,
    pub status: MetricStatus,
}

impl MetricReading {
    pub fn new(value: Option<f64>, threshold: f64) -> Self {
        Self {
            value,
            status: evaluate(value, threshold),
        }
    }

    /// No value, never an alert.
    pub fn absent() -> Self {
        Self {
            value: None,
            status: MetricStatus::Normal,
        }
    }
}

/// `GET /sensorData` response body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestReading {
    pub body_temp: MetricReading,
    pub ambient_temp: MetricReading,
    pub movement: MetricReading,
}

impl LatestReading {
    /// Annotate the newest sample (or its absence) against `thresholds`.
    pub fn derive(reading: Option<&SensorReading>, thresholds: &ThresholdConfig) -> Self {
        let Some(reading) = reading else {
            return Self {
                body_temp: MetricReading::absent(),
                ambient_temp: MetricReading::absent(),
                movement: MetricReading::absent(),
            };
        };

        Self {
            body_temp: MetricReading::new(reading.body_temp, thresholds.body_temp),
            ambient_temp: MetricReading::new(reading.ambient_temp, thresholds.ambient_temp),
            movement: MetricReading::new(Some(reading.movement()), thresholds.movement),
        }
    }
}

/// One entry of the `GET /historicalData` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    #[serde(serialize_with = "serialize_millis")]
    pub timestamp: Timestamp,
    pub body_temp: f64,
    pub ambient_temp: f64,
    pub movement: f64,
}

/// RFC 3339 with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`.
fn serialize_millis<S: Serializer>(ts: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl From<&SensorReading> for HistoryPoint {
    fn from(reading: &SensorReading) -> Self {
        Self {
            timestamp: reading.timestamp,
            body_temp: reading.body_temp.unwrap_or(0.0),
            ambient_temp: reading.ambient_temp.unwrap_or(0.0),
            movement: reading.movement(),
        }
    }
}

/// Map rows to history points, preserving order and capping at
/// [`HISTORY_LIMIT`].
pub fn history(readings: &[SensorReading]) -> Vec<HistoryPoint> {
    readings
        .iter()
        .take(HISTORY_LIMIT as usize)
        .map(HistoryPoint::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
