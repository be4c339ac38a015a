//! Request handlers.
//!
//! Each submodule provides the async handler functions for one group of
//! endpoints. Handlers delegate to the store behind [`crate::state::AppState`]
//! and map errors via [`crate::error::AppError`].

pub mod actuator;
pub mod sensor;
pub mod thresholds;
