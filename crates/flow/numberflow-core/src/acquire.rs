//! Part acquisition: run the formatter and splice in caller affixes.

use numberflow_format::{FormatPartType, NumberValue, PartsFormatter};

/// Origin of a raw part before classification.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SourceType {
    Format(FormatPartType),
    Prefix,
    Suffix,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcePart {
    pub ty: SourceType,
    pub value: String,
}

/// Formatter parts with `prefix` in front and `suffix` behind. Empty
/// affixes count as absent.
pub fn acquire<F: PartsFormatter + ?Sized>(
    value: &NumberValue,
    formatter: &F,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Vec<SourcePart> {
    let formatted = formatter.format_to_parts(value);
    let mut parts = Vec::with_capacity(formatted.len() + 2);
    if let Some(prefix) = prefix.filter(|s| !s.is_empty()) {
        parts.push(SourcePart {
            ty: SourceType::Prefix,
            value: prefix.to_string(),
        });
    }
    parts.extend(formatted.into_iter().map(|p| SourcePart {
        ty: SourceType::Format(p.ty),
        value: p.value,
    }));
    if let Some(suffix) = suffix.filter(|s| !s.is_empty()) {
        parts.push(SourcePart {
            ty: SourceType::Suffix,
            value: suffix.to_string(),
        });
    }
    parts
}
