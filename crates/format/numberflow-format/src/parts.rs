//! Typed substrings produced by the formatter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a formatted substring. Mirrors the part types a JS
/// `Intl.NumberFormat#formatToParts` call reports, minus the exponent parts
/// (scientific and engineering notation are not supported).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatPartType {
    Integer,
    Fraction,
    Group,
    Decimal,
    MinusSign,
    PlusSign,
    Currency,
    PercentSign,
    Unit,
    Literal,
    Compact,
    Nan,
    Infinity,
}

impl FormatPartType {
    pub fn as_str(self) -> &'static str {
        match self {
            FormatPartType::Integer => "integer",
            FormatPartType::Fraction => "fraction",
            FormatPartType::Group => "group",
            FormatPartType::Decimal => "decimal",
            FormatPartType::MinusSign => "minusSign",
            FormatPartType::PlusSign => "plusSign",
            FormatPartType::Currency => "currency",
            FormatPartType::PercentSign => "percentSign",
            FormatPartType::Unit => "unit",
            FormatPartType::Literal => "literal",
            FormatPartType::Compact => "compact",
            FormatPartType::Nan => "nan",
            FormatPartType::Infinity => "infinity",
        }
    }

    /// True for the two parts that stand in for a non-finite value.
    #[inline]
    pub fn is_non_finite(self) -> bool {
        matches!(self, FormatPartType::Nan | FormatPartType::Infinity)
    }
}

impl fmt::Display for FormatPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One typed substring of a formatted number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatPart {
    #[serde(rename = "type")]
    pub ty: FormatPartType,
    pub value: String,
}

impl FormatPart {
    pub fn new(ty: FormatPartType, value: impl Into<String>) -> Self {
        Self {
            ty,
            value: value.into(),
        }
    }
}

/// Concatenate parts back into the rendered text.
pub fn join_parts(parts: &[FormatPart]) -> String {
    parts.iter().map(|p| p.value.as_str()).collect()
}
