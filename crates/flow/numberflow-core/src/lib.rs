//! numberflow-core: stably keyed number parts (engine-agnostic)
//!
//! Formats a number into parts and keys every part so that the same visual
//! slot keeps its key from one value to the next. Renderers diff consecutive
//! [`Data`] by key to animate digits in place.

pub mod acquire;
pub mod classify;
pub mod coerce;
pub mod config;
pub mod data;
pub mod diff;
pub mod error;
pub mod json;
pub mod key;
pub mod keying;
pub mod overrides;
pub mod part;
pub mod transform;

// Re-exports for consumers (adapters)
pub use config::FlowConfig;
pub use data::Data;
pub use diff::{diff, trend, SlotChange, Trend};
pub use error::FlowError;
pub use key::{KeyCounter, PartKey};
pub use overrides::Overrides;
pub use part::{DigitType, KeyedDigitPart, KeyedNumberPart, KeyedSymbolPart, NumberPartType};
pub use transform::{format_to_data, to_keyed_parts, NumberFlow};
pub use numberflow_format::{FormatOptions, NumberFormat, NumberValue, PartsFormatter};
