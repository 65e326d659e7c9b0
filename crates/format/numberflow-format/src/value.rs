//! Input values accepted by the formatter.

use serde::{Deserialize, Serialize};

/// A number to format: either a float or its textual representation.
///
/// Text is parsed as an exact decimal by the formatter, so `"0.1"` keeps
/// its digits instead of going through binary floating point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Number(f64),
    Text(String),
}

impl NumberValue {
    /// Best-effort float view. Text that does not parse yields NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            NumberValue::Number(n) => *n,
            NumberValue::Text(s) => parse_text_f64(s).unwrap_or(f64::NAN),
        }
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, NumberValue::Text(_))
    }
}

/// Parse text the way the formatter reads it: trimmed, empty means zero,
/// `Infinity` spelled out.
pub fn parse_text_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return Some(0.0);
    }
    let (neg, body) = match t.as_bytes()[0] {
        b'-' => (true, &t[1..]),
        b'+' => (false, &t[1..]),
        _ => (false, t),
    };
    if body == "Infinity" {
        return Some(if neg {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    // Rust accepts "inf"/"nan" spellings that the decimal grammar does not.
    if !body
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    let n: f64 = body.parse().ok()?;
    Some(if neg { -n } else { n })
}

impl From<f64> for NumberValue {
    fn from(v: f64) -> Self {
        NumberValue::Number(v)
    }
}

impl From<f32> for NumberValue {
    fn from(v: f32) -> Self {
        NumberValue::Number(v as f64)
    }
}

impl From<i32> for NumberValue {
    fn from(v: i32) -> Self {
        NumberValue::Number(v as f64)
    }
}

impl From<i64> for NumberValue {
    fn from(v: i64) -> Self {
        NumberValue::Number(v as f64)
    }
}

impl From<u32> for NumberValue {
    fn from(v: u32) -> Self {
        NumberValue::Number(v as f64)
    }
}

impl From<&str> for NumberValue {
    fn from(v: &str) -> Self {
        NumberValue::Text(v.to_string())
    }
}

impl From<String> for NumberValue {
    fn from(v: String) -> Self {
        NumberValue::Text(v)
    }
}
