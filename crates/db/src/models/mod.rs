//! Row structs for the tables this service reads.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! its conversion into the `healthmon_core` domain type.

pub mod sensor_reading;
