//! Right-to-left keying of the integer run.
//!
//! Digits are numbered from the units position outward so that the same
//! positional slot keeps its key when the number gains or loses leading
//! digits: 99 and 100 share `integer:0` and `integer:1`, and only 100 has
//! `integer:2`.

use crate::classify::StagedIntegerPart;
use crate::key::KeyCounter;
use crate::part::{DigitType, KeyedDigitPart, KeyedNumberPart, KeyedSymbolPart, NumberPartType};

pub fn key_integer(staged: Vec<StagedIntegerPart>, counter: &mut KeyCounter) -> Vec<KeyedNumberPart> {
    let mut keyed = Vec::with_capacity(staged.len());
    for part in staged.into_iter().rev() {
        keyed.push(match part {
            StagedIntegerPart::Digit(value) => {
                let key = counter.next(NumberPartType::Integer);
                KeyedNumberPart::Digit(KeyedDigitPart {
                    ty: DigitType::Integer,
                    value,
                    place: key.ordinal as i32,
                    key,
                })
            }
            StagedIntegerPart::Group(value) => KeyedNumberPart::Symbol(KeyedSymbolPart {
                ty: NumberPartType::Group,
                value,
                key: counter.next(NumberPartType::Group),
            }),
        });
    }
    keyed.reverse();
    keyed
}
