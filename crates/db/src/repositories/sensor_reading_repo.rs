//! Repository for the `sensor_readings` table (read-only time-series).

use sqlx::MySqlConnection;

use crate::models::sensor_reading::SensorReadingRow;

/// Column list for `sensor_readings` SELECT queries.
const COLUMNS: &str = "timestamp, body_temp, ambient_temp, accel_x, accel_y, accel_z";

/// Provides query operations for sensor readings.
pub struct SensorReadingRepo;

impl SensorReadingRepo {
    /// The newest reading, if any.
    pub async fn latest(
        conn: &mut MySqlConnection,
    ) -> Result<Option<SensorReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings \
             ORDER BY timestamp DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, SensorReadingRow>(&query)
            .fetch_optional(conn)
            .await
    }

    /// Up to `limit` readings, newest first.
    pub async fn recent(
        conn: &mut MySqlConnection,
        limit: u32,
    ) -> Result<Vec<SensorReadingRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sensor_readings \
             ORDER BY timestamp DESC \
             LIMIT ?"
        );
        sqlx::query_as::<_, SensorReadingRow>(&query)
            .bind(limit)
            .fetch_all(conn)
            .await
    }
}
