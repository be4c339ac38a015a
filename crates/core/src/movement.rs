//! Movement magnitude derived from the accelerometer axes.
//!
//! Movement is never stored; it is recomputed from `accel_x/y/z` on every
//! read. Missing axes count as zero.

/// Number of decimal places movement values are reported with.
pub const MOVEMENT_DECIMALS: i32 = 2;

/// Euclidean magnitude of the acceleration vector, rounded to
/// [`MOVEMENT_DECIMALS`] places. `None` axes are treated as `0.0`.
pub fn magnitude(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> f64 {
    let x = x.unwrap_or(0.0);
    let y = y.unwrap_or(0.0);
    let z = z.unwrap_or(0.0);
    round_to((x * x + y * y + z * z).sqrt(), MOVEMENT_DECIMALS)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
