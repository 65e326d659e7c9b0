//! Numeric value carried alongside the keyed parts.

use numberflow_format::value::parse_text_f64;
use numberflow_format::NumberValue;

use crate::part::KeyedNumberPart;

/// Numeric input passes through untouched. Text is parsed; text the float
/// parser rejects falls back to the digits the formatter actually produced.
///
/// Text beyond the `f64` range (`"1e400"`) still formats as exact digits but
/// coerces to an infinity, which JSON serializes as `null`.
pub fn coerce_value(
    input: &NumberValue,
    negative: bool,
    integer: &[KeyedNumberPart],
    fraction: &[KeyedNumberPart],
) -> f64 {
    match input {
        NumberValue::Number(n) => *n,
        NumberValue::Text(text) => {
            parse_text_f64(text).unwrap_or_else(|| from_digits(negative, integer, fraction))
        }
    }
}

/// Rebuild a plain decimal from the digit parts and parse it.
pub fn from_digits(negative: bool, integer: &[KeyedNumberPart], fraction: &[KeyedNumberPart]) -> f64 {
    let mut s = String::new();
    if negative {
        s.push('-');
    }
    let digits = |parts: &[KeyedNumberPart], out: &mut String| {
        for part in parts {
            if let KeyedNumberPart::Digit(d) = part {
                out.push(char::from(b'0' + d.value));
            }
        }
    };
    let start = s.len();
    digits(integer, &mut s);
    if s.len() == start {
        s.push('0');
    }
    s.push('.');
    let before = s.len();
    digits(fraction, &mut s);
    if s.len() == before {
        s.push('0');
    }
    s.parse().unwrap_or(0.0)
}
