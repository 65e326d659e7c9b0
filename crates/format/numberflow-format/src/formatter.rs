//! The number formatter: options in, typed parts out.

use crate::currency::{self, ResolvedCurrency};
use crate::decimal::{Decimal, Parsed};
use crate::error::FormatError;
use crate::locale::{self, AffixPattern, AffixPosition, LocaleData};
use crate::options::{
    CompactDisplay, CurrencySign, FormatOptions, Grouping, Notation, SignDisplay, Style,
};
use crate::parts::{join_parts, FormatPart, FormatPartType};
use crate::unit::{self, ResolvedUnit};
use crate::value::NumberValue;

const NBSP: &str = "\u{a0}";
const NAN_TEXT: &str = "NaN";
const INFINITY_TEXT: &str = "∞";
const PERCENT_SIGN: &str = "%";
const MAX_COMPACT_TIER: usize = 4;

/// Anything that can split a number into typed parts covering its full
/// rendered text. Non-finite inputs must come back as `nan` / `infinity`
/// parts rather than failing.
pub trait PartsFormatter {
    fn format_to_parts(&self, value: &NumberValue) -> Vec<FormatPart>;

    fn format(&self, value: &NumberValue) -> String {
        join_parts(&self.format_to_parts(value))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Rounding {
    Fraction { min: usize, max: usize },
    /// Integers, but never fewer than two significant digits.
    Compact,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum StyleAffix {
    None,
    Percent,
    Currency(ResolvedCurrency),
    Unit(ResolvedUnit),
}

/// A configured formatter. Construction validates everything up front so
/// formatting is infallible.
#[derive(Clone, Debug)]
pub struct NumberFormat {
    locale: &'static LocaleData,
    options: FormatOptions,
    affix: StyleAffix,
    rounding: Rounding,
    min_integer: usize,
    /// Minimum integer digits beyond the primary group before grouping
    /// kicks in; `None` disables grouping.
    min_grouping: Option<usize>,
}

fn check_range(option: &'static str, value: u32, min: u32, max: u32) -> Result<u32, FormatError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(FormatError::DigitOutOfRange {
            option,
            value,
            min,
            max,
        })
    }
}

impl NumberFormat {
    pub fn new<S: AsRef<str>>(locales: &[S], options: &FormatOptions) -> Result<Self, FormatError> {
        let locale = locale::negotiate(locales)?;

        let min_integer = match options.minimum_integer_digits {
            Some(v) => check_range("minimumIntegerDigits", v, 1, 21)?,
            None => 1,
        };
        let min_fraction = options
            .minimum_fraction_digits
            .map(|v| check_range("minimumFractionDigits", v, 0, 100))
            .transpose()?;
        let max_fraction = options
            .maximum_fraction_digits
            .map(|v| check_range("maximumFractionDigits", v, 0, 100))
            .transpose()?;

        let affix = match options.style {
            Style::Decimal => StyleAffix::None,
            Style::Percent => StyleAffix::Percent,
            Style::Currency => {
                let code = options
                    .currency
                    .as_deref()
                    .ok_or(FormatError::MissingCurrency)?;
                StyleAffix::Currency(currency::resolve(code, options.currency_display)?)
            }
            Style::Unit => {
                let id = options.unit.as_deref().ok_or(FormatError::MissingUnit)?;
                StyleAffix::Unit(unit::resolve(id, options.unit_display)?)
            }
        };

        let (default_min, default_max) = match &affix {
            StyleAffix::Currency(c) => (c.digits, c.digits),
            StyleAffix::Percent => (0, 0),
            StyleAffix::None | StyleAffix::Unit(_) => (0, 3),
        };
        let compact = options.notation == Notation::Compact;
        let rounding = match (min_fraction, max_fraction) {
            (None, None) if compact => Rounding::Compact,
            (None, None) => Rounding::Fraction {
                min: default_min as usize,
                max: default_max as usize,
            },
            (Some(min), None) => Rounding::Fraction {
                min: min as usize,
                max: default_max.max(min) as usize,
            },
            (None, Some(max)) => Rounding::Fraction {
                min: default_min.min(max) as usize,
                max: max as usize,
            },
            (Some(min), Some(max)) => {
                if min > max {
                    return Err(FormatError::FractionDigitsInverted { min, max });
                }
                Rounding::Fraction {
                    min: min as usize,
                    max: max as usize,
                }
            }
        };

        let min_grouping = match options.use_grouping {
            Grouping::Off => None,
            Grouping::Always => Some(1),
            Grouping::Min2 => Some(2),
            Grouping::Auto if compact => Some(2),
            Grouping::Auto => Some(locale.min_grouping_digits.max(1)),
        };

        Ok(Self {
            locale,
            options: options.clone(),
            affix,
            rounding,
            min_integer: min_integer as usize,
            min_grouping,
        })
    }

    /// Tag of the locale actually used after negotiation.
    pub fn resolved_locale(&self) -> &'static str {
        self.locale.tag
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Resolved (min, max) fraction digits; `None` under compact rounding.
    pub fn fraction_digits(&self) -> Option<(usize, usize)> {
        match self.rounding {
            Rounding::Fraction { min, max } => Some((min, max)),
            Rounding::Compact => None,
        }
    }

    fn round(&self, d: &mut Decimal) {
        match self.rounding {
            Rounding::Fraction { min, max } => {
                d.round_at(max as i32);
                d.fit_fraction(min);
            }
            Rounding::Compact => {
                if d.magnitude() >= 2 {
                    d.round_at(0);
                } else {
                    d.round_significant(2);
                }
                d.fit_fraction(0);
            }
        }
    }

    /// Scale, round and tier a finite value. Returns the compact tier used
    /// (0 when none applies).
    fn prepare(&self, d: &mut Decimal) -> usize {
        if self.affix == StyleAffix::Percent {
            d.shift_left(2);
        }
        let compact = self.options.notation == Notation::Compact;
        let mut tier = 0;
        if compact && d.int.len() >= 4 {
            tier = ((d.int.len() - 1) / 3).min(MAX_COMPACT_TIER);
            d.shift_right(3 * tier);
        }
        self.round(d);
        if compact && tier < MAX_COMPACT_TIER && d.int.len() > 3 {
            d.shift_right(3);
            tier += 1;
            self.round(d);
        }
        d.pad_integer(self.min_integer);
        tier
    }

    fn push_integer(&self, out: &mut Vec<FormatPart>, int: &[u8]) {
        let primary = self.locale.primary_group;
        let grouped = self
            .min_grouping
            .is_some_and(|min| int.len() >= primary + min);
        if !grouped {
            out.push(FormatPart::new(FormatPartType::Integer, digits_text(int)));
            return;
        }
        let mut chunks: Vec<&[u8]> = Vec::new();
        let mut end = int.len();
        let mut size = primary;
        while end > 0 {
            let start = end.saturating_sub(size);
            chunks.push(&int[start..end]);
            end = start;
            size = self.locale.secondary_group;
        }
        for (i, chunk) in chunks.iter().rev().enumerate() {
            if i > 0 {
                out.push(FormatPart::new(FormatPartType::Group, self.locale.group));
            }
            out.push(FormatPart::new(FormatPartType::Integer, digits_text(chunk)));
        }
    }

    fn body(&self, d: &Decimal) -> Vec<FormatPart> {
        let mut out = Vec::new();
        self.push_integer(&mut out, &d.int);
        if !d.frac.is_empty() {
            out.push(FormatPart::new(FormatPartType::Decimal, self.locale.decimal));
            out.push(FormatPart::new(FormatPartType::Fraction, digits_text(&d.frac)));
        }
        out
    }

    fn compact_parts(&self, tier: usize) -> Vec<FormatPart> {
        if tier == 0 {
            return Vec::new();
        }
        let labels = match self.options.compact_display {
            CompactDisplay::Short => &self.locale.compact_short,
            CompactDisplay::Long => &self.locale.compact_long,
        };
        let mut out = Vec::with_capacity(2);
        if let Some(spacing) = labels.spacing {
            out.push(FormatPart::new(FormatPartType::Literal, spacing));
        }
        out.push(FormatPart::new(FormatPartType::Compact, labels.labels[tier - 1]));
        out
    }

    fn sign(&self, negative: bool, zero: bool) -> Option<FormatPartType> {
        let minus = Some(FormatPartType::MinusSign);
        let plus = Some(FormatPartType::PlusSign);
        match self.options.sign_display {
            SignDisplay::Auto => negative.then_some(FormatPartType::MinusSign),
            SignDisplay::Always if negative => minus,
            SignDisplay::Always => plus,
            SignDisplay::ExceptZero if zero => None,
            SignDisplay::ExceptZero if negative => minus,
            SignDisplay::ExceptZero => plus,
            SignDisplay::Negative if negative && !zero => minus,
            SignDisplay::Negative | SignDisplay::Never => None,
        }
    }

    fn assemble(&self, sign: Option<FormatPartType>, body: Vec<FormatPart>, tier: usize) -> Vec<FormatPart> {
        let accounting = matches!(self.affix, StyleAffix::Currency(_))
            && self.options.currency_sign == CurrencySign::Accounting
            && sign == Some(FormatPartType::MinusSign);

        let mut out = Vec::with_capacity(body.len() + 6);
        if accounting {
            out.push(FormatPart::new(FormatPartType::Literal, "("));
        } else if let Some(ty) = sign {
            let text = match ty {
                FormatPartType::PlusSign => self.locale.plus,
                _ => self.locale.minus,
            };
            out.push(FormatPart::new(ty, text));
        }

        let body_text = join_parts(&body);
        let compact = self.compact_parts(tier);
        match &self.affix {
            StyleAffix::None => {
                out.extend(body);
                out.extend(compact);
            }
            StyleAffix::Percent => {
                out.extend(body);
                out.extend(compact);
                push_suffix(&mut out, self.locale.percent, FormatPartType::PercentSign, PERCENT_SIGN);
            }
            StyleAffix::Currency(c) => match self.locale.currency.position {
                AffixPosition::Before => {
                    out.push(FormatPart::new(FormatPartType::Currency, c.display.as_str()));
                    let spacing = self.locale.currency.spacing.or_else(|| {
                        currency::needs_spacing_before_number(&c.display).then_some(NBSP)
                    });
                    if let Some(spacing) = spacing {
                        out.push(FormatPart::new(FormatPartType::Literal, spacing));
                    }
                    out.extend(body);
                    out.extend(compact);
                }
                AffixPosition::After => {
                    out.extend(body);
                    out.extend(compact);
                    push_suffix(&mut out, self.locale.currency, FormatPartType::Currency, &c.display);
                }
            },
            StyleAffix::Unit(u) => {
                out.extend(body);
                out.extend(compact);
                let (spacing, label) = u.affix(&body_text);
                if let Some(spacing) = spacing {
                    out.push(FormatPart::new(FormatPartType::Literal, spacing));
                }
                out.push(FormatPart::new(FormatPartType::Unit, label));
            }
        }

        if accounting {
            out.push(FormatPart::new(FormatPartType::Literal, ")"));
        }
        out
    }
}

fn push_suffix(out: &mut Vec<FormatPart>, pattern: AffixPattern, ty: FormatPartType, text: &str) {
    if let Some(spacing) = pattern.spacing {
        out.push(FormatPart::new(FormatPartType::Literal, spacing));
    }
    out.push(FormatPart::new(ty, text));
}

fn digits_text(digits: &[u8]) -> String {
    digits.iter().map(|d| (b'0' + d) as char).collect()
}

impl PartsFormatter for NumberFormat {
    fn format_to_parts(&self, value: &NumberValue) -> Vec<FormatPart> {
        match Parsed::from_value(value) {
            Parsed::NaN => {
                let body = vec![FormatPart::new(FormatPartType::Nan, NAN_TEXT)];
                self.assemble(None, body, 0)
            }
            Parsed::Infinite { negative } => {
                let body = vec![FormatPart::new(FormatPartType::Infinity, INFINITY_TEXT)];
                self.assemble(self.sign(negative, false), body, 0)
            }
            Parsed::Finite(mut d) => {
                let tier = self.prepare(&mut d);
                let sign = self.sign(d.negative, d.is_zero());
                let body = self.body(&d);
                self.assemble(sign, body, tier)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en(options: FormatOptions) -> NumberFormat {
        NumberFormat::new(&["en-US"], &options).unwrap()
    }

    fn types(parts: &[FormatPart]) -> Vec<FormatPartType> {
        parts.iter().map(|p| p.ty).collect()
    }

    #[test]
    fn default_decimal_groups_and_rounds_to_three() {
        let f = en(FormatOptions::default());
        assert_eq!(f.format(&1234567.891_5.into()), "1,234,567.892");
        assert_eq!(f.format(&0.into()), "0");
        assert_eq!(f.format(&(-0.0).into()), "-0");
        assert_eq!(f.fraction_digits(), Some((0, 3)));
    }

    #[test]
    fn parts_for_grouped_fraction() {
        let f = en(FormatOptions::default());
        let parts = f.format_to_parts(&(-1234.5).into());
        assert_eq!(
            types(&parts),
            vec![
                FormatPartType::MinusSign,
                FormatPartType::Integer,
                FormatPartType::Group,
                FormatPartType::Integer,
                FormatPartType::Decimal,
                FormatPartType::Fraction,
            ]
        );
        assert_eq!(join_parts(&parts), "-1,234.5");
    }

    #[test]
    fn non_finite_values_become_marker_parts() {
        let f = en(FormatOptions::default());
        assert_eq!(
            f.format_to_parts(&f64::NAN.into()),
            vec![FormatPart::new(FormatPartType::Nan, "NaN")]
        );
        assert_eq!(f.format(&f64::NEG_INFINITY.into()), "-∞");
        assert_eq!(
            types(&f.format_to_parts(&"abc".into())),
            vec![FormatPartType::Nan]
        );
    }

    #[test]
    fn sign_display_modes() {
        let f = en(FormatOptions::default().with_sign_display(SignDisplay::Always));
        assert_eq!(f.format(&5.into()), "+5");
        assert_eq!(f.format(&0.into()), "+0");
        let f = en(FormatOptions::default().with_sign_display(SignDisplay::ExceptZero));
        assert_eq!(f.format(&0.into()), "0");
        assert_eq!(f.format(&(-0.0001).into()), "0");
        assert_eq!(f.format(&(-2).into()), "-2");
        let f = en(FormatOptions::default().with_sign_display(SignDisplay::Negative));
        assert_eq!(f.format(&(-0.0).into()), "0");
        assert_eq!(f.format(&(-3).into()), "-3");
        let f = en(FormatOptions::default().with_sign_display(SignDisplay::Never));
        assert_eq!(f.format(&(-3).into()), "3");
    }

    #[test]
    fn digit_option_resolution() {
        let f = en(FormatOptions {
            maximum_fraction_digits: Some(1),
            ..FormatOptions::default()
        });
        assert_eq!(f.fraction_digits(), Some((0, 1)));
        let f = en(FormatOptions {
            minimum_fraction_digits: Some(5),
            ..FormatOptions::default()
        });
        assert_eq!(f.fraction_digits(), Some((5, 5)));
        let f = en(FormatOptions::currency("USD").with_fraction_digits(0, 0));
        assert_eq!(f.format(&1.5.into()), "$2");

        let err = NumberFormat::new(&["en"], &FormatOptions::default().with_fraction_digits(3, 1))
            .unwrap_err();
        assert_eq!(err, FormatError::FractionDigitsInverted { min: 3, max: 1 });
        let err = NumberFormat::new(
            &["en"],
            &FormatOptions {
                minimum_integer_digits: Some(0),
                ..FormatOptions::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, FormatError::DigitOutOfRange { .. }));
    }

    #[test]
    fn minimum_integer_digits_pad() {
        let f = en(FormatOptions {
            minimum_integer_digits: Some(3),
            ..FormatOptions::default()
        });
        assert_eq!(f.format(&7.into()), "007");
    }

    #[test]
    fn missing_style_inputs_are_errors() {
        let opts = FormatOptions {
            style: Style::Currency,
            ..FormatOptions::default()
        };
        assert_eq!(
            NumberFormat::new(&["en"], &opts).unwrap_err(),
            FormatError::MissingCurrency
        );
        let opts = FormatOptions {
            style: Style::Unit,
            ..FormatOptions::default()
        };
        assert_eq!(
            NumberFormat::new(&["en"], &opts).unwrap_err(),
            FormatError::MissingUnit
        );
    }
}
