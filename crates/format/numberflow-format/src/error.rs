//! Error types for number format construction.

/// Configuration errors raised while building a [`crate::NumberFormat`].
///
/// Formatting itself never fails; every error here is a property of the
/// locale list or the options, reported once at construction time.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// A locale tag that is not well-formed BCP 47
    #[error("Incorrect locale information provided: {tag:?}")]
    InvalidLocale { tag: String },

    /// Currency style without a currency code
    #[error("Currency code is required with currency style")]
    MissingCurrency,

    /// Currency code that is not three ASCII letters
    #[error("Invalid currency code: {code}")]
    InvalidCurrency { code: String },

    /// Unit style without a unit identifier
    #[error("Unit is required with unit style")]
    MissingUnit,

    /// Unit identifier outside the supported set
    #[error("Unsupported unit: {unit}")]
    UnsupportedUnit { unit: String },

    /// A digit option outside its permitted range
    #[error("{option} value {value} is out of range [{min}, {max}]")]
    DigitOutOfRange {
        option: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// minimumFractionDigits greater than maximumFractionDigits
    #[error("minimumFractionDigits ({min}) exceeds maximumFractionDigits ({max})")]
    FractionDigitsInverted { min: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = FormatError::InvalidCurrency {
            code: "DOLLARS".into(),
        };
        assert_eq!(err.to_string(), "Invalid currency code: DOLLARS");

        let err = FormatError::DigitOutOfRange {
            option: "minimumIntegerDigits",
            value: 0,
            min: 1,
            max: 21,
        };
        assert_eq!(
            err.to_string(),
            "minimumIntegerDigits value 0 is out of range [1, 21]"
        );
    }
}
