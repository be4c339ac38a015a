//! `sensor_readings` row model.

use healthmon_core::reading::SensorReading;
use healthmon_core::types::Timestamp;
use sqlx::FromRow;

/// A row of `sensor_readings`. Written by the ingestion pipeline; this
/// service never inserts or updates.
#[derive(Debug, Clone, FromRow)]
pub struct SensorReadingRow {
    pub timestamp: Timestamp,
    pub body_temp: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub accel_x: Option<f64>,
    pub accel_y: Option<f64>,
    pub accel_z: Option<f64>,
}

impl From<SensorReadingRow> for SensorReading {
    fn from(row: SensorReadingRow) -> Self {
        Self {
            timestamp: row.timestamp,
            body_temp: row.body_temp,
            ambient_temp: row.ambient_temp,
            accel_x: row.accel_x,
            accel_y: row.accel_y,
            accel_z: row.accel_z,
        }
    }
}
