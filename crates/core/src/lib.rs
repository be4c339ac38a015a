//! Domain logic for the health monitor: readings, derived movement,
//! threshold evaluation and the LED actuator vocabulary.
//!
//! Pure logic, no I/O. The db and api crates feed rows in and serialize the
//! results out.

pub mod actuator;
pub mod error;
pub mod movement;
pub mod reading;
pub mod thresholds;
pub mod types;
