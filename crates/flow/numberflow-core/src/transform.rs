//! The keyed-part transform and a reusable flow built around it.

use numberflow_format::{NumberFormat, NumberValue, PartsFormatter};

use crate::acquire::acquire;
use crate::classify::classify;
use crate::coerce::coerce_value;
use crate::config::FlowConfig;
use crate::data::Data;
use crate::error::FlowError;
use crate::keying::key_integer;
use crate::overrides::Overrides;

/// Turn `value` into keyed parts using `formatter`.
///
/// Returns `None` when the formatter renders the value as NaN or infinity.
/// Keys are allocated fresh for every call; the same slot gets the same key
/// across calls because integer digits are numbered from the units digit
/// and fraction digits from the decimal separator.
pub fn format_to_data<F: PartsFormatter + ?Sized>(
    value: &NumberValue,
    formatter: &F,
    overrides: Option<&Overrides>,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Option<Data> {
    let raw = acquire(value, formatter, prefix, suffix);
    let Some(classified) = classify(raw, overrides) else {
        log::debug!("no keyed data for non-finite value {value:?}");
        return None;
    };

    let mut counter = classified.counter;
    let integer = key_integer(classified.staged_integer, &mut counter);
    let value = coerce_value(value, classified.negative, &integer, &classified.fraction);

    Some(Data {
        pre: classified.pre,
        integer,
        fraction: classified.fraction,
        post: classified.post,
        value_as_string: classified.value_as_string,
        value,
    })
}

/// One-shot convenience: build the formatter from `config` and transform.
pub fn to_keyed_parts(
    value: impl Into<NumberValue>,
    config: &FlowConfig,
) -> Result<Option<Data>, FlowError> {
    let flow = NumberFlow::new(config.clone())?;
    Ok(flow.data(value))
}

/// A configured formatter plus overrides and affixes, reused across values.
#[derive(Clone, Debug)]
pub struct NumberFlow {
    formatter: NumberFormat,
    overrides: Overrides,
    prefix: Option<String>,
    suffix: Option<String>,
}

impl NumberFlow {
    pub fn new(config: FlowConfig) -> Result<Self, FlowError> {
        let formatter = NumberFormat::new(config.locales.as_slice(), &config.format)?;
        Ok(Self {
            formatter,
            overrides: config.overrides,
            prefix: config.prefix,
            suffix: config.suffix,
        })
    }

    pub fn data(&self, value: impl Into<NumberValue>) -> Option<Data> {
        let value = value.into();
        format_to_data(
            &value,
            &self.formatter,
            (!self.overrides.is_empty()).then_some(&self.overrides),
            self.prefix.as_deref(),
            self.suffix.as_deref(),
        )
    }

    pub fn formatter(&self) -> &NumberFormat {
        &self.formatter
    }

    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::NumberPartType;
    use numberflow_format::{FormatError, FormatOptions, FormatPart, FormatPartType, Style};

    /// Formatter stub that always returns the same parts.
    struct Fixed(Vec<FormatPart>);

    impl PartsFormatter for Fixed {
        fn format_to_parts(&self, _: &NumberValue) -> Vec<FormatPart> {
            self.0.clone()
        }
    }

    #[test]
    fn works_over_any_parts_formatter() {
        let stub = Fixed(vec![
            FormatPart::new(FormatPartType::Integer, "7"),
            FormatPart::new(FormatPartType::Unit, "x"),
        ]);
        let data = format_to_data(&NumberValue::Number(7.0), &stub, None, None, None).unwrap();
        assert_eq!(data.value_as_string, "7x");
        assert_eq!(data.post[0].key().to_string(), "unit:0");
        assert_eq!(data.value, 7.0);
    }

    #[test]
    fn abstains_on_non_finite_parts() {
        let stub = Fixed(vec![FormatPart::new(FormatPartType::Nan, "NaN")]);
        assert!(format_to_data(&NumberValue::Number(f64::NAN), &stub, None, None, None).is_none());
    }

    #[test]
    fn flow_reuses_configuration() {
        let flow = NumberFlow::new(
            FlowConfig::new(["en"], FormatOptions::default())
                .with_overrides(Overrides::new().with(NumberPartType::Group, "'")),
        )
        .unwrap();
        assert_eq!(flow.data(1234.0).unwrap().value_as_string, "1'234");
        assert_eq!(flow.data(5.0).unwrap().value_as_string, "5");
        assert_eq!(flow.formatter().resolved_locale(), "en");
    }

    #[test]
    fn config_errors_surface_once() {
        let cfg = FlowConfig::new(
            ["en"],
            FormatOptions {
                style: Style::Currency,
                ..FormatOptions::default()
            },
        );
        let err = to_keyed_parts(1.0, &cfg).unwrap_err();
        assert_eq!(err, FlowError::Format(FormatError::MissingCurrency));
    }
}
