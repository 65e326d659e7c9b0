//! Formatting options (the JSON shape mirrors `Intl.NumberFormatOptions`).

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Style {
    #[default]
    Decimal,
    Percent,
    Currency,
    Unit,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    NarrowSymbol,
    Code,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CurrencySign {
    #[default]
    Standard,
    Accounting,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnitDisplay {
    #[default]
    Short,
    Narrow,
    Long,
}

/// Only positional notations; exponent notations are rejected when parsed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Notation {
    #[default]
    Standard,
    Compact,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompactDisplay {
    #[default]
    Short,
    Long,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignDisplay {
    #[default]
    Auto,
    Always,
    ExceptZero,
    Negative,
    Never,
}

/// Grouping strategy. Accepts `true`/`false` as well as the string forms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Grouping {
    Always,
    #[default]
    Auto,
    Min2,
    Off,
}

impl Serialize for Grouping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Grouping::Always => serializer.serialize_str("always"),
            Grouping::Auto => serializer.serialize_str("auto"),
            Grouping::Min2 => serializer.serialize_str("min2"),
            Grouping::Off => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for Grouping {
    fn deserialize<D>(deserializer: D) -> Result<Grouping, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }
        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(Grouping::Always),
            Raw::Flag(false) => Ok(Grouping::Off),
            Raw::Name(name) => match name.as_str() {
                "always" | "true" => Ok(Grouping::Always),
                "auto" => Ok(Grouping::Auto),
                "min2" => Ok(Grouping::Min2),
                "false" => Ok(Grouping::Off),
                other => Err(de::Error::custom(format!(
                    "invalid useGrouping value: {other}"
                ))),
            },
        }
    }
}

/// Caller-facing options. Every field is optional in JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct FormatOptions {
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub currency_display: CurrencyDisplay,
    pub currency_sign: CurrencySign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub unit_display: UnitDisplay,
    pub notation: Notation,
    pub compact_display: CompactDisplay,
    pub use_grouping: Grouping,
    pub sign_display: SignDisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u32>,
}

impl FormatOptions {
    pub fn currency(code: impl Into<String>) -> Self {
        Self {
            style: Style::Currency,
            currency: Some(code.into()),
            ..Self::default()
        }
    }

    pub fn percent() -> Self {
        Self {
            style: Style::Percent,
            ..Self::default()
        }
    }

    pub fn unit(unit: impl Into<String>) -> Self {
        Self {
            style: Style::Unit,
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    pub fn compact() -> Self {
        Self {
            notation: Notation::Compact,
            ..Self::default()
        }
    }

    pub fn with_fraction_digits(mut self, min: u32, max: u32) -> Self {
        self.minimum_fraction_digits = Some(min);
        self.maximum_fraction_digits = Some(max);
        self
    }

    pub fn with_sign_display(mut self, sign_display: SignDisplay) -> Self {
        self.sign_display = sign_display;
        self
    }

    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.use_grouping = grouping;
        self
    }
}
