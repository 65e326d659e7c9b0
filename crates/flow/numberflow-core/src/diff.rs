//! Slot changes between two consecutive renders.
//!
//! Renderers animate per key: a key present in both renders is the same
//! visual slot, so the only question is whether its content changed.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::Data;
use crate::key::PartKey;
use crate::part::KeyedNumberPart;

/// Direction of a value change, used to pick roll direction for digits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
    #[default]
    None,
}

impl Trend {
    pub fn between(prev: f64, next: f64) -> Trend {
        if next > prev {
            Trend::Up
        } else if next < prev {
            Trend::Down
        } else {
            Trend::None
        }
    }
}

pub fn trend(prev: &Data, next: &Data) -> Trend {
    Trend::between(prev.value, next.value)
}

/// What happened to one key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SlotChange {
    Enter { key: PartKey },
    Exit { key: PartKey },
    Update { key: PartKey, from: String, to: String },
    Keep { key: PartKey },
}

impl SlotChange {
    pub fn key(&self) -> &PartKey {
        match self {
            SlotChange::Enter { key }
            | SlotChange::Exit { key }
            | SlotChange::Update { key, .. }
            | SlotChange::Keep { key } => key,
        }
    }
}

/// Classify every key of `next` in display order, followed by the keys
/// that only `prev` has, in `prev`'s display order.
pub fn diff(prev: &Data, next: &Data) -> Vec<SlotChange> {
    let before: HashMap<&PartKey, &KeyedNumberPart> = prev.parts().map(|p| (p.key(), p)).collect();
    let mut changes = Vec::with_capacity(before.len().max(next.parts().count()));

    for part in next.parts() {
        let key = *part.key();
        changes.push(match before.get(&key) {
            None => SlotChange::Enter { key },
            Some(old) => {
                let (from, to) = (old.text(), part.text());
                if from == to {
                    SlotChange::Keep { key }
                } else {
                    SlotChange::Update { key, from, to }
                }
            }
        });
    }
    for part in prev.parts() {
        if next.find(part.key()).is_none() {
            changes.push(SlotChange::Exit { key: *part.key() });
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlowConfig;
    use crate::transform::NumberFlow;

    fn flow() -> NumberFlow {
        NumberFlow::new(FlowConfig::default()).unwrap()
    }

    #[test]
    fn trend_follows_value() {
        assert_eq!(Trend::between(1.0, 2.0), Trend::Up);
        assert_eq!(Trend::between(2.0, 1.0), Trend::Down);
        assert_eq!(Trend::between(2.0, 2.0), Trend::None);
        let f = flow();
        assert_eq!(trend(&f.data(9.0).unwrap(), &f.data(10.0).unwrap()), Trend::Up);
    }

    #[test]
    fn growth_enters_only_the_new_leading_digit() {
        let f = flow();
        let changes = diff(&f.data(99.0).unwrap(), &f.data(100.0).unwrap());
        let summary: Vec<String> = changes
            .iter()
            .map(|c| match c {
                SlotChange::Enter { key } => format!("+{key}"),
                SlotChange::Exit { key } => format!("-{key}"),
                SlotChange::Update { key, from, to } => format!("{key}:{from}>{to}"),
                SlotChange::Keep { key } => format!("={key}"),
            })
            .collect();
        assert_eq!(summary, vec!["+integer:2", "integer:1:9>0", "integer:0:9>0"]);
    }

    #[test]
    fn shrink_exits_after_next_parts() {
        let f = flow();
        let changes = diff(&f.data(1000.5).unwrap(), &f.data(7.0).unwrap());
        let exits: Vec<String> = changes
            .iter()
            .filter(|c| matches!(c, SlotChange::Exit { .. }))
            .map(|c| c.key().to_string())
            .collect();
        assert_eq!(
            exits,
            vec!["integer:3", "group:0", "integer:2", "integer:1", "decimal:0", "fraction:0"]
        );
        assert_eq!(changes[0], SlotChange::Update {
            key: "integer:0".parse().unwrap(),
            from: "0".into(),
            to: "7".into(),
        });
    }

    #[test]
    fn slot_changes_serialize_with_kind_tag() {
        let change = SlotChange::Enter {
            key: "sign:0".parse().unwrap(),
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            serde_json::json!({ "kind": "enter", "key": "sign:0" })
        );
    }
}
