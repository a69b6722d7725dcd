//! Binary math operations with dynamic-language coercion.
//!
//! A [`MathOperation`] pairs an operator with a default value and handles
//! missing operands before the operator runs:
//!
//! - both missing → the default
//! - one missing → the other operand, unchanged
//! - both present → the operator over the numeric forms
//!
//! NaN is never special-cased; it flows through the operator.

use serde_json::Value;

use crate::path::MAX_SAFE_INTEGER;

/// An operator plus its result for "no operands".
#[derive(Debug, Clone, Copy)]
pub struct MathOperation {
    operator: fn(f64, f64) -> f64,
    default_value: f64,
}

impl MathOperation {
    pub const fn new(operator: fn(f64, f64) -> f64, default_value: f64) -> Self {
        Self {
            operator,
            default_value,
        }
    }

    pub fn default_value(&self) -> f64 {
        self.default_value
    }

    pub fn apply(&self, value: Option<f64>, other: Option<f64>) -> f64 {
        match (value, other) {
            (None, None) => self.default_value,
            (Some(value), None) => value,
            (None, Some(other)) => other,
            (Some(value), Some(other)) => (self.operator)(value, other),
        }
    }

    /// [`apply`](Self::apply) over JSON operands, coerced with [`to_number`].
    ///
    /// `None` is a missing operand; `Some(Value::Null)` is present and
    /// coerces to 0.
    pub fn apply_values(&self, value: Option<&Value>, other: Option<&Value>) -> f64 {
        self.apply(value.map(to_number), other.map(to_number))
    }
}

fn product(multiplier: f64, multiplicand: f64) -> f64 {
    multiplier * multiplicand
}

/// Multiplication; the product of no operands is 1.
pub const MULTIPLY: MathOperation = MathOperation::new(product, 1.0);

/// Multiply two numbers.
///
/// ```
/// assert_eq!(object_path::multiply(6.0, 4.0), 24.0);
/// assert!(object_path::multiply(f64::NAN, 5.0).is_nan());
/// ```
pub fn multiply(multiplier: f64, multiplicand: f64) -> f64 {
    MULTIPLY.apply(Some(multiplier), Some(multiplicand))
}

/// Numeric form of a JSON value.
///
/// | value | number |
/// |-------|--------|
/// | `null`, `false`, `""`, `[]` | 0 |
/// | `true` | 1 |
/// | number | itself |
/// | string | parsed after trimming (decimal, `0x`/`0o`/`0b`, `Infinity`), else NaN |
/// | one-element array | its element's string form, parsed |
/// | anything else | NaN |
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [Value::Null] => 0.0,
            [item @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => to_number(item),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix)
            .ok()
            .filter(|n| *n <= MAX_SAFE_INTEGER)
            .map_or(f64::NAN, |n| n as f64);
    }

    // Rust also accepts "inf" and "nan"; restrict to plain decimal syntax.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}
