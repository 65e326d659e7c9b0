//! Classification and override pass.
//!
//! Routes each raw part into `pre`, `integer`, `fraction` or `post`, splitting
//! digit runs into single digits. Everything except the integer run is keyed
//! here in encounter order; the integer run is staged for [`crate::keying`].

use numberflow_format::FormatPartType;

use crate::acquire::{SourcePart, SourceType};
use crate::key::KeyCounter;
use crate::overrides::Overrides;
use crate::part::{DigitType, KeyedDigitPart, KeyedNumberPart, KeyedSymbolPart, NumberPartType};

/// An integer-run element waiting for right-to-left keying.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StagedIntegerPart {
    Digit(u8),
    Group(String),
}

#[derive(Debug, Default)]
pub struct Classified {
    pub pre: Vec<KeyedNumberPart>,
    pub staged_integer: Vec<StagedIntegerPart>,
    pub fraction: Vec<KeyedNumberPart>,
    pub post: Vec<KeyedNumberPart>,
    pub value_as_string: String,
    pub counter: KeyCounter,
    /// Whether the sign part came from a minus sign.
    pub negative: bool,
}

fn split_digits(text: &str) -> impl Iterator<Item = u8> + '_ {
    text.chars().filter_map(move |c| match c.to_digit(10) {
        Some(d) => Some(d as u8),
        None => {
            log::warn!("skipping non-decimal character {c:?} in digit run {text:?}");
            None
        }
    })
}

/// Classify raw parts. Returns `None` when the formatter reported a
/// non-finite value.
pub fn classify(parts: Vec<SourcePart>, overrides: Option<&Overrides>) -> Option<Classified> {
    let mut out = Classified::default();
    let mut seen_integer = false;
    let mut seen_decimal = false;

    for part in parts {
        let ty = match part.ty {
            SourceType::Prefix => NumberPartType::Prefix,
            SourceType::Suffix => NumberPartType::Suffix,
            SourceType::Format(raw) => {
                if raw == FormatPartType::MinusSign {
                    out.negative = true;
                }
                NumberPartType::merge(raw)?
            }
        };
        let display = overrides
            .and_then(|o| o.get(ty))
            .unwrap_or(part.value.as_str());
        out.value_as_string.push_str(display);

        match ty {
            // Digit structure always comes from the formatter's text, never
            // from an override string.
            NumberPartType::Integer => {
                seen_integer = true;
                out.staged_integer
                    .extend(split_digits(&part.value).map(StagedIntegerPart::Digit));
            }
            NumberPartType::Group => {
                out.staged_integer
                    .push(StagedIntegerPart::Group(display.to_string()));
            }
            NumberPartType::Decimal => {
                seen_decimal = true;
                let key = out.counter.next(ty);
                out.fraction.push(KeyedNumberPart::Symbol(KeyedSymbolPart {
                    ty,
                    value: display.to_string(),
                    key,
                }));
            }
            NumberPartType::Fraction => {
                for digit in split_digits(&part.value) {
                    let key = out.counter.next(ty);
                    out.fraction.push(KeyedNumberPart::Digit(KeyedDigitPart {
                        ty: DigitType::Fraction,
                        value: digit,
                        place: -1 - key.ordinal as i32,
                        key,
                    }));
                }
            }
            NumberPartType::Sign
            | NumberPartType::Currency
            | NumberPartType::PercentSign
            | NumberPartType::Unit
            | NumberPartType::Literal
            | NumberPartType::Compact
            | NumberPartType::Prefix
            | NumberPartType::Suffix => {
                let key = out.counter.next(ty);
                let bucket = if seen_integer || seen_decimal {
                    &mut out.post
                } else {
                    &mut out.pre
                };
                bucket.push(KeyedNumberPart::Symbol(KeyedSymbolPart {
                    ty,
                    value: display.to_string(),
                    key,
                }));
            }
        }
    }
    Some(out)
}
