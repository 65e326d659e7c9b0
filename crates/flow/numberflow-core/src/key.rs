//! Part keys and the per-call ordinal allocator.
//!
//! A key is `<type>:<ordinal>`. Keys are plain strings on the wire; the
//! structured form only exists so callers can inspect type and ordinal
//! without re-parsing.

use hashbrown::HashMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::part::NumberPartType;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartKey {
    pub ty: NumberPartType,
    pub ordinal: u32,
}

impl PartKey {
    pub fn new(ty: NumberPartType, ordinal: u32) -> Self {
        Self { ty, ordinal }
    }

    /// Parse `<type>:<ordinal>`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let (ty, ordinal) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("invalid part key '{s}': missing ':'"))?;
        let ty: NumberPartType = ty.parse()?;
        let ordinal: u32 = ordinal
            .parse()
            .map_err(|_| format!("invalid part key '{s}': bad ordinal"))?;
        Ok(PartKey { ty, ordinal })
    }
}

impl fmt::Display for PartKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ty, self.ordinal)
    }
}

impl FromStr for PartKey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartKey::parse(s)
    }
}

impl Serialize for PartKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PartKey {
    fn deserialize<D>(deserializer: D) -> Result<PartKey, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PartKey::parse(&s).map_err(de::Error::custom)
    }
}

/// Monotonic per-type ordinals for one transform call.
#[derive(Default, Debug)]
pub struct KeyCounter {
    next: HashMap<NumberPartType, u32>,
}

impl KeyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next key for `ty`.
    #[inline]
    pub fn next(&mut self, ty: NumberPartType) -> PartKey {
        let slot = self.next.entry(ty).or_insert(0);
        let key = PartKey::new(ty, *slot);
        *slot += 1;
        key
    }

    /// Number of keys handed out for `ty` so far.
    pub fn issued(&self, ty: NumberPartType) -> u32 {
        self.next.get(&ty).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let key = PartKey::new(NumberPartType::PercentSign, 3);
        assert_eq!(key.to_string(), "percentSign:3");
        assert_eq!(PartKey::parse("percentSign:3").unwrap(), key);
        assert_eq!("integer:10".parse::<PartKey>().unwrap().ordinal, 10);
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!(PartKey::parse("integer").is_err());
        assert!(PartKey::parse("integer:-1").is_err());
        assert!(PartKey::parse("integer:x").is_err());
        assert!(PartKey::parse("digit:0").is_err());
        assert!(PartKey::parse(":0").is_err());
    }

    #[test]
    fn serializes_as_string() {
        let key = PartKey::new(NumberPartType::Group, 1);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"group:1\"");
        let back: PartKey = serde_json::from_str("\"group:1\"").unwrap();
        assert_eq!(back, key);
        assert!(serde_json::from_str::<PartKey>("\"group\"").is_err());
    }

    #[test]
    fn counters_are_per_type() {
        let mut counter = KeyCounter::new();
        assert_eq!(counter.next(NumberPartType::Integer).ordinal, 0);
        assert_eq!(counter.next(NumberPartType::Integer).ordinal, 1);
        assert_eq!(counter.next(NumberPartType::Group).ordinal, 0);
        assert_eq!(counter.issued(NumberPartType::Integer), 2);
        assert_eq!(counter.issued(NumberPartType::Fraction), 0);
    }
}
