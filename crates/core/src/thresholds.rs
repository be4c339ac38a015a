//! Alert thresholds and metric status evaluation.
//!
//! Thresholds live in memory for the lifetime of the process. Each field is
//! an independent atomic cell: a partial update touches only the fields it
//! names, and two concurrent updates may interleave field by field.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default body temperature threshold in degrees Celsius.
pub const DEFAULT_BODY_TEMP: f64 = 37.5;

/// Default ambient temperature threshold in degrees Celsius.
pub const DEFAULT_AMBIENT_TEMP: f64 = 30.0;

/// Default movement magnitude threshold.
pub const DEFAULT_MOVEMENT: f64 = 10.0;

/// Leading numeric prefix accepted by [`parse_numeric_prefix`].
const NUMERIC_PREFIX_PATTERN: &str =
    r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)";

static NUMERIC_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NUMERIC_PREFIX_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Classification of a metric value against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricStatus {
    Normal,
    Alert,
}

/// `Alert` iff `value` is strictly greater than `threshold`.
///
/// A missing value is never an alert. A NaN threshold never alerts either,
/// since no comparison against NaN holds.
pub fn evaluate(value: Option<f64>, threshold: f64) -> MetricStatus {
    match value {
        Some(v) if v > threshold => MetricStatus::Alert,
        _ => MetricStatus::Normal,
    }
}

// ---------------------------------------------------------------------------
// Threshold values
// ---------------------------------------------------------------------------

/// A point-in-time copy of the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfig {
    pub body_temp: f64,
    pub ambient_temp: f64,
    pub movement: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            body_temp: DEFAULT_BODY_TEMP,
            ambient_temp: DEFAULT_AMBIENT_TEMP,
            movement: DEFAULT_MOVEMENT,
        }
    }
}

/// A partial threshold update. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdUpdate {
    pub body_temp: Option<f64>,
    pub ambient_temp: Option<f64>,
    pub movement: Option<f64>,
}

impl ThresholdUpdate {
    /// Whether any present field holds a NaN value.
    pub fn has_nan(&self) -> bool {
        [self.body_temp, self.ambient_temp, self.movement]
            .into_iter()
            .flatten()
            .any(f64::is_nan)
    }
}

/// An `f64` stored as its bit pattern so it can be swapped atomically.
#[derive(Debug)]
struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Release);
    }
}

/// Process-wide thresholds shared by every request handler.
///
/// Wrap in an `Arc` and hand it to the application state. Reads and writes
/// are lock-free and atomic per field, not per record.
#[derive(Debug)]
pub struct SharedThresholds {
    body_temp: AtomicF64,
    ambient_temp: AtomicF64,
    movement: AtomicF64,
}

impl Default for SharedThresholds {
    fn default() -> Self {
        Self::new(ThresholdConfig::default())
    }
}

impl SharedThresholds {
    pub fn new(initial: ThresholdConfig) -> Self {
        Self {
            body_temp: AtomicF64::new(initial.body_temp),
            ambient_temp: AtomicF64::new(initial.ambient_temp),
            movement: AtomicF64::new(initial.movement),
        }
    }

    /// Read all three fields. Each field is read atomically on its own.
    pub fn snapshot(&self) -> ThresholdConfig {
        ThresholdConfig {
            body_temp: self.body_temp.load(),
            ambient_temp: self.ambient_temp.load(),
            movement: self.movement.load(),
        }
    }

    /// Overwrite the fields present in `update` and return the resulting
    /// thresholds.
    pub fn apply(&self, update: &ThresholdUpdate) -> ThresholdConfig {
        if let Some(v) = update.body_temp {
            self.body_temp.store(v);
        }
        if let Some(v) = update.ambient_temp {
            self.ambient_temp.store(v);
        }
        if let Some(v) = update.movement {
            self.movement.store(v);
        }
        self.snapshot()
    }
}

// ---------------------------------------------------------------------------
// Input coercion
// ---------------------------------------------------------------------------

/// Parse the longest leading numeric prefix of `input`, ignoring leading
/// whitespace. Returns NaN when there is none.
///
/// `"38.2"` -> 38.2, `"40abc"` -> 40.0, `"abc"` -> NaN.
pub fn parse_numeric_prefix(input: &str) -> f64 {
    NUMERIC_PREFIX_RE
        .find(input.trim_start())
        .and_then(|m| {
            let text = m.as_str();
            match text.trim_start_matches(['+', '-']) {
                "Infinity" if text.starts_with('-') => Some(f64::NEG_INFINITY),
                "Infinity" => Some(f64::INFINITY),
                _ => text.parse::<f64>().ok(),
            }
        })
        .unwrap_or(f64::NAN)
}

/// Text a JSON value reads as when handed to [`parse_numeric_prefix`].
///
/// Arrays join their elements with `,` (so `[5, 6]` reads as `"5,6"`),
/// `null` reads as empty and objects never start with a number.
fn threshold_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(threshold_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Coerce an arbitrary JSON value into a threshold number.
///
/// Numbers pass through. Everything else is read as text and goes through
/// [`parse_numeric_prefix`], so `null`, booleans and objects become NaN.
pub fn coerce_threshold(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        other => parse_numeric_prefix(&threshold_text(other)),
    }
}

/// Raw `POST /setThresholds` payload.
///
/// A field is `Some` whenever its key is present in the body, even when the
/// value is `null`. Values stay untyped JSON so numeric strings are accepted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdInput {
    pub body_temp: Option<Value>,
    pub ambient_temp: Option<Value>,
    pub movement: Option<Value>,
}

impl ThresholdInput {
    /// Pick the threshold keys out of a JSON body. Anything other than an
    /// object carries no fields.
    pub fn from_json(body: &Value) -> Self {
        let Value::Object(fields) = body else {
            return Self::default();
        };

        Self {
            body_temp: fields.get("bodyTemp").cloned(),
            ambient_temp: fields.get("ambientTemp").cloned(),
            movement: fields.get("movement").cloned(),
        }
    }

    /// Parse a raw JSON request body. An empty body has no fields; malformed
    /// JSON is a validation error.
    pub fn from_body(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.trim_ascii().is_empty() {
            return Ok(Self::default());
        }

        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| CoreError::Validation(format!("Malformed JSON body: {e}")))?;
        Ok(Self::from_json(&body))
    }
}

impl From<&ThresholdInput> for ThresholdUpdate {
    fn from(input: &ThresholdInput) -> Self {
        Self {
            body_temp: input.body_temp.as_ref().map(coerce_threshold),
            ambient_temp: input.ambient_temp.as_ref().map(coerce_threshold),
            movement: input.movement.as_ref().map(coerce_threshold),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
