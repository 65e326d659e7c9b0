//! Locale symbol tables and locale negotiation.

use crate::error::FormatError;

/// Where an affix sits relative to the number body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AffixPosition {
    Before,
    After,
}

/// Placement of a percent sign or currency symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AffixPattern {
    pub position: AffixPosition,
    /// Literal between the body and the affix, if any.
    pub spacing: Option<&'static str>,
}

/// Compact-notation labels for the thousand, million, billion and trillion tiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CompactLabels {
    pub labels: [&'static str; 4],
    pub spacing: Option<&'static str>,
}

/// Symbols and patterns for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal: &'static str,
    pub group: &'static str,
    pub minus: &'static str,
    pub plus: &'static str,
    pub primary_group: usize,
    pub secondary_group: usize,
    pub min_grouping_digits: usize,
    pub percent: AffixPattern,
    pub currency: AffixPattern,
    pub compact_short: CompactLabels,
    pub compact_long: CompactLabels,
}

const NBSP: &str = "\u{a0}";
const NNBSP: &str = "\u{202f}";

const EN_COMPACT_SHORT: CompactLabels = CompactLabels {
    labels: ["K", "M", "B", "T"],
    spacing: None,
};
const EN_COMPACT_LONG: CompactLabels = CompactLabels {
    labels: ["thousand", "million", "billion", "trillion"],
    spacing: Some(" "),
};
const DE_COMPACT_SHORT: CompactLabels = CompactLabels {
    labels: ["Tsd.", "Mio.", "Mrd.", "Bio."],
    spacing: Some(NBSP),
};
const DE_COMPACT_LONG: CompactLabels = CompactLabels {
    labels: ["Tausend", "Millionen", "Milliarden", "Billionen"],
    spacing: Some(" "),
};

pub static LOCALES: &[LocaleData] = &[
    LocaleData {
        tag: "en",
        decimal: ".",
        group: ",",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: None,
        },
        currency: AffixPattern {
            position: AffixPosition::Before,
            spacing: None,
        },
        compact_short: EN_COMPACT_SHORT,
        compact_long: EN_COMPACT_LONG,
    },
    LocaleData {
        tag: "en-IN",
        decimal: ".",
        group: ",",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 2,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: None,
        },
        currency: AffixPattern {
            position: AffixPosition::Before,
            spacing: None,
        },
        compact_short: EN_COMPACT_SHORT,
        compact_long: EN_COMPACT_LONG,
    },
    LocaleData {
        tag: "de",
        decimal: ",",
        group: ".",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NBSP),
        },
        currency: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NBSP),
        },
        compact_short: DE_COMPACT_SHORT,
        compact_long: DE_COMPACT_LONG,
    },
    LocaleData {
        tag: "de-CH",
        decimal: ".",
        group: "\u{2019}",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: None,
        },
        currency: AffixPattern {
            position: AffixPosition::Before,
            spacing: Some(NBSP),
        },
        compact_short: DE_COMPACT_SHORT,
        compact_long: DE_COMPACT_LONG,
    },
    LocaleData {
        tag: "fr",
        decimal: ",",
        group: NNBSP,
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NNBSP),
        },
        currency: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NBSP),
        },
        compact_short: CompactLabels {
            labels: ["k", "M", "Md", "Bn"],
            spacing: Some(NBSP),
        },
        compact_long: CompactLabels {
            labels: ["mille", "millions", "milliards", "billions"],
            spacing: Some(" "),
        },
    },
    LocaleData {
        tag: "es",
        decimal: ",",
        group: ".",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 2,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NBSP),
        },
        currency: AffixPattern {
            position: AffixPosition::After,
            spacing: Some(NBSP),
        },
        compact_short: CompactLabels {
            labels: ["mil", "M", "mil M", "B"],
            spacing: Some(NBSP),
        },
        compact_long: CompactLabels {
            labels: ["mil", "millones", "mil millones", "billones"],
            spacing: Some(" "),
        },
    },
    LocaleData {
        tag: "pt",
        decimal: ",",
        group: ".",
        minus: "-",
        plus: "+",
        primary_group: 3,
        secondary_group: 3,
        min_grouping_digits: 1,
        percent: AffixPattern {
            position: AffixPosition::After,
            spacing: None,
        },
        currency: AffixPattern {
            position: AffixPosition::Before,
            spacing: Some(NBSP),
        },
        compact_short: CompactLabels {
            labels: ["mil", "mi", "bi", "tri"],
            spacing: Some(NBSP),
        },
        compact_long: CompactLabels {
            labels: ["mil", "milhões", "bilhões", "trilhões"],
            spacing: Some(" "),
        },
    },
];

/// Locale used when nothing in the requested list is supported.
pub const DEFAULT_LOCALE: &str = "en";

/// Check the shape of a BCP 47 tag: a 2-3 or 5-8 letter language subtag
/// followed by 1-8 character alphanumeric subtags.
pub fn is_well_formed_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let Some(language) = subtags.next() else {
        return false;
    };
    let language_ok = matches!(language.len(), 2 | 3 | 5..=8)
        && language.bytes().all(|b| b.is_ascii_alphabetic());
    language_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}

fn find(tag: &str) -> Option<&'static LocaleData> {
    LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(tag))
}

fn default_locale() -> &'static LocaleData {
    &LOCALES[0]
}

/// Pick the first supported locale from a preference list.
///
/// Every tag is validated even when an earlier one already matched, so a
/// malformed list is always an error. Each tag is tried as-is, then with
/// trailing subtags removed one at a time (`de-CH-1996` → `de-CH` → `de`).
pub fn negotiate<S: AsRef<str>>(requested: &[S]) -> Result<&'static LocaleData, FormatError> {
    for tag in requested {
        let tag = tag.as_ref();
        if !is_well_formed_tag(tag) {
            return Err(FormatError::InvalidLocale {
                tag: tag.to_string(),
            });
        }
    }
    for tag in requested {
        let mut candidate = tag.as_ref();
        loop {
            if let Some(found) = find(candidate) {
                return Ok(found);
            }
            match candidate.rfind('-') {
                Some(cut) => candidate = &candidate[..cut],
                None => break,
            }
        }
    }
    if !requested.is_empty() {
        log::debug!("no supported locale requested, falling back to '{DEFAULT_LOCALE}'");
    }
    Ok(default_locale())
}
