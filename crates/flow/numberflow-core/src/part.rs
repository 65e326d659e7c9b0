//! Part types and keyed parts.
//!
//! Digit parts carry a numeric value and a signed place; symbol parts carry a
//! string. The split is an enum so every consumer matches both shapes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use numberflow_format::FormatPartType;

use crate::key::PartKey;

/// Part type after the two sign variants are merged, plus the caller's
/// literal affixes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumberPartType {
    Integer,
    Fraction,
    Group,
    Decimal,
    Sign,
    Currency,
    PercentSign,
    Unit,
    Literal,
    Compact,
    Prefix,
    Suffix,
}

impl NumberPartType {
    pub const ALL: [NumberPartType; 12] = [
        NumberPartType::Integer,
        NumberPartType::Fraction,
        NumberPartType::Group,
        NumberPartType::Decimal,
        NumberPartType::Sign,
        NumberPartType::Currency,
        NumberPartType::PercentSign,
        NumberPartType::Unit,
        NumberPartType::Literal,
        NumberPartType::Compact,
        NumberPartType::Prefix,
        NumberPartType::Suffix,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NumberPartType::Integer => "integer",
            NumberPartType::Fraction => "fraction",
            NumberPartType::Group => "group",
            NumberPartType::Decimal => "decimal",
            NumberPartType::Sign => "sign",
            NumberPartType::Currency => "currency",
            NumberPartType::PercentSign => "percentSign",
            NumberPartType::Unit => "unit",
            NumberPartType::Literal => "literal",
            NumberPartType::Compact => "compact",
            NumberPartType::Prefix => "prefix",
            NumberPartType::Suffix => "suffix",
        }
    }

    /// Merge a formatter part type. Non-finite markers have no counterpart.
    pub fn merge(ty: FormatPartType) -> Option<NumberPartType> {
        Some(match ty {
            FormatPartType::Integer => NumberPartType::Integer,
            FormatPartType::Fraction => NumberPartType::Fraction,
            FormatPartType::Group => NumberPartType::Group,
            FormatPartType::Decimal => NumberPartType::Decimal,
            FormatPartType::MinusSign | FormatPartType::PlusSign => NumberPartType::Sign,
            FormatPartType::Currency => NumberPartType::Currency,
            FormatPartType::PercentSign => NumberPartType::PercentSign,
            FormatPartType::Unit => NumberPartType::Unit,
            FormatPartType::Literal => NumberPartType::Literal,
            FormatPartType::Compact => NumberPartType::Compact,
            FormatPartType::Nan | FormatPartType::Infinity => return None,
        })
    }

    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self, NumberPartType::Integer | NumberPartType::Fraction)
    }

    /// Caller affixes are literals already and cannot be overridden.
    #[inline]
    pub fn is_overridable(self) -> bool {
        !matches!(self, NumberPartType::Prefix | NumberPartType::Suffix)
    }
}

impl fmt::Display for NumberPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberPartType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberPartType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| format!("unknown part type '{s}'"))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DigitType {
    Integer,
    Fraction,
}

impl From<DigitType> for NumberPartType {
    fn from(ty: DigitType) -> Self {
        match ty {
            DigitType::Integer => NumberPartType::Integer,
            DigitType::Fraction => NumberPartType::Fraction,
        }
    }
}

/// A single decimal digit with its positional weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedDigitPart {
    #[serde(rename = "type")]
    pub ty: DigitType,
    pub value: u8,
    pub key: PartKey,
    /// 0 at the units digit, growing leftward; -1 at the first fraction digit.
    pub place: i32,
}

/// Any non-digit part: separators, signs, currency, affixes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedSymbolPart {
    #[serde(rename = "type")]
    pub ty: NumberPartType,
    pub value: String,
    pub key: PartKey,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyedNumberPart {
    Digit(KeyedDigitPart),
    Symbol(KeyedSymbolPart),
}

impl KeyedNumberPart {
    pub fn key(&self) -> &PartKey {
        match self {
            KeyedNumberPart::Digit(d) => &d.key,
            KeyedNumberPart::Symbol(s) => &s.key,
        }
    }

    pub fn part_type(&self) -> NumberPartType {
        match self {
            KeyedNumberPart::Digit(d) => d.ty.into(),
            KeyedNumberPart::Symbol(s) => s.ty,
        }
    }

    /// Place of a digit part; symbols have none.
    pub fn place(&self) -> Option<i32> {
        match self {
            KeyedNumberPart::Digit(d) => Some(d.place),
            KeyedNumberPart::Symbol(_) => None,
        }
    }

    /// Text this part renders as (before any override of digit types).
    pub fn text(&self) -> String {
        match self {
            KeyedNumberPart::Digit(d) => d.value.to_string(),
            KeyedNumberPart::Symbol(s) => s.value.clone(),
        }
    }
}
