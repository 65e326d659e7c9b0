//! numberflow-format: locale-aware number formatting into typed parts.
//!
//! A small, table-driven stand-in for `Intl.NumberFormat#formatToParts`.
//! The keyed-part transform in `numberflow-core` consumes the
//! [`PartsFormatter`] seam, so any other engine can be plugged in.

pub mod currency;
pub mod decimal;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod options;
pub mod parts;
pub mod unit;
pub mod value;

pub use error::FormatError;
pub use formatter::{NumberFormat, PartsFormatter};
pub use options::{
    CompactDisplay, CurrencyDisplay, CurrencySign, FormatOptions, Grouping, Notation,
    SignDisplay, Style, UnitDisplay,
};
pub use parts::{join_parts, FormatPart, FormatPartType};
pub use value::NumberValue;
