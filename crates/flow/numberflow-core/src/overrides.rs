//! Literal replacements for a part type's natural rendering.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::part::NumberPartType;

/// Map from merged part type to replacement text.
///
/// Lookups only happen for types actually present in a formatted number, so
/// unused entries are harmless. Entries for `prefix`/`suffix` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overrides(HashMap<NumberPartType, String>);

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, ty: NumberPartType, value: impl Into<String>) -> Self {
        self.insert(ty, value);
        self
    }

    pub fn insert(&mut self, ty: NumberPartType, value: impl Into<String>) -> Option<String> {
        if !ty.is_overridable() {
            log::trace!("ignoring override for caller affix type '{ty}'");
        }
        self.0.insert(ty, value.into())
    }

    /// Replacement for `ty`, if one applies.
    pub fn get(&self, ty: NumberPartType) -> Option<&str> {
        if !ty.is_overridable() {
            return None;
        }
        self.0.get(&ty).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(NumberPartType, String)> for Overrides {
    fn from_iter<I: IntoIterator<Item = (NumberPartType, String)>>(iter: I) -> Self {
        Overrides(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_affix_exclusion() {
        let overrides = Overrides::new()
            .with(NumberPartType::Group, "\u{2009}")
            .with(NumberPartType::Prefix, "ignored");
        assert_eq!(overrides.get(NumberPartType::Group), Some("\u{2009}"));
        assert_eq!(overrides.get(NumberPartType::Decimal), None);
        assert_eq!(overrides.get(NumberPartType::Prefix), None);
        assert_eq!(overrides.len(), 2);
    }

    #[test]
    fn json_is_a_plain_object() {
        let overrides: Overrides =
            serde_json::from_str(r#"{ "group": " ", "sign": "−" }"#).unwrap();
        assert_eq!(overrides.get(NumberPartType::Sign), Some("−"));
        assert!(serde_json::from_str::<Overrides>(r#"{ "minusSign": "−" }"#).is_err());
    }
}
