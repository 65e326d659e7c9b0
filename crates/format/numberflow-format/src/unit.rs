//! Measurement unit labels.

use crate::error::FormatError;
use crate::options::UnitDisplay;

#[derive(Debug, PartialEq, Eq)]
struct UnitInfo {
    id: &'static str,
    short: &'static str,
    narrow: &'static str,
    singular: &'static str,
    plural: &'static str,
    /// Whether the short form is separated from the number by a space.
    short_spaced: bool,
}

static UNITS: &[UnitInfo] = &[
    UnitInfo { id: "kilometer", short: "km", narrow: "km", singular: "kilometer", plural: "kilometers", short_spaced: true },
    UnitInfo { id: "meter", short: "m", narrow: "m", singular: "meter", plural: "meters", short_spaced: true },
    UnitInfo { id: "kilogram", short: "kg", narrow: "kg", singular: "kilogram", plural: "kilograms", short_spaced: true },
    UnitInfo { id: "second", short: "sec", narrow: "s", singular: "second", plural: "seconds", short_spaced: true },
    UnitInfo { id: "minute", short: "min", narrow: "m", singular: "minute", plural: "minutes", short_spaced: true },
    UnitInfo { id: "hour", short: "hr", narrow: "h", singular: "hour", plural: "hours", short_spaced: true },
    UnitInfo { id: "byte", short: "byte", narrow: "B", singular: "byte", plural: "bytes", short_spaced: true },
    UnitInfo { id: "kilobyte", short: "kB", narrow: "kB", singular: "kilobyte", plural: "kilobytes", short_spaced: true },
    UnitInfo { id: "megabyte", short: "MB", narrow: "MB", singular: "megabyte", plural: "megabytes", short_spaced: true },
    UnitInfo { id: "gigabyte", short: "GB", narrow: "GB", singular: "gigabyte", plural: "gigabytes", short_spaced: true },
    UnitInfo { id: "liter", short: "L", narrow: "L", singular: "liter", plural: "liters", short_spaced: true },
    UnitInfo { id: "celsius", short: "°C", narrow: "°C", singular: "degree Celsius", plural: "degrees Celsius", short_spaced: false },
    UnitInfo { id: "percent", short: "%", narrow: "%", singular: "percent", plural: "percent", short_spaced: false },
    UnitInfo { id: "mile-per-hour", short: "mph", narrow: "mph", singular: "mile per hour", plural: "miles per hour", short_spaced: true },
];

/// A validated unit bound to one display width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedUnit {
    pub id: &'static str,
    pub display: UnitDisplay,
    info: &'static UnitInfo,
}

impl ResolvedUnit {
    /// Spacing literal and label to place after a number whose formatted
    /// body is `body`. Long labels are singular only for exactly "1".
    pub fn affix(&self, body: &str) -> (Option<&'static str>, &'static str) {
        match self.display {
            UnitDisplay::Short => {
                let spacing = self.info.short_spaced.then_some(" ");
                (spacing, self.info.short)
            }
            UnitDisplay::Narrow => (None, self.info.narrow),
            UnitDisplay::Long => {
                let label = if body == "1" {
                    self.info.singular
                } else {
                    self.info.plural
                };
                (Some(" "), label)
            }
        }
    }
}

pub fn resolve(unit: &str, display: UnitDisplay) -> Result<ResolvedUnit, FormatError> {
    UNITS
        .iter()
        .find(|u| u.id == unit)
        .map(|info| ResolvedUnit {
            id: info.id,
            display,
            info,
        })
        .ok_or_else(|| FormatError::UnsupportedUnit {
            unit: unit.to_string(),
        })
}
