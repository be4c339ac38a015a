//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&mut MySqlConnection` as the first argument.

pub mod sensor_reading_repo;

pub use sensor_reading_repo::SensorReadingRepo;
