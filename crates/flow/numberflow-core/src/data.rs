//! The keyed output of one transform call.

use serde::{Deserialize, Serialize};

use crate::key::PartKey;
use crate::part::KeyedNumberPart;

/// A number split into four ordered buckets of keyed parts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Data {
    /// Symbols before the numeric body.
    pub pre: Vec<KeyedNumberPart>,
    /// Integer digits and group separators, most significant first.
    pub integer: Vec<KeyedNumberPart>,
    /// Decimal separator then fraction digits.
    pub fraction: Vec<KeyedNumberPart>,
    /// Symbols after the numeric body.
    pub post: Vec<KeyedNumberPart>,
    /// Full rendered text with overrides applied.
    pub value_as_string: String,
    pub value: f64,
}

impl Data {
    /// All parts in display order.
    pub fn parts(&self) -> impl Iterator<Item = &KeyedNumberPart> {
        self.pre
            .iter()
            .chain(self.integer.iter())
            .chain(self.fraction.iter())
            .chain(self.post.iter())
    }

    pub fn keys(&self) -> impl Iterator<Item = &PartKey> {
        self.parts().map(KeyedNumberPart::key)
    }

    pub fn find(&self, key: &PartKey) -> Option<&KeyedNumberPart> {
        self.parts().find(|p| p.key() == key)
    }

    /// Count of integer plus fraction digits.
    pub fn digit_count(&self) -> usize {
        self.parts().filter(|p| p.place().is_some()).count()
    }
}
