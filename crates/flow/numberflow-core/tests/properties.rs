use numberflow_core::{DigitType, FlowConfig, FormatOptions, KeyedNumberPart, NumberFlow};
use numberflow_format::SignDisplay;
use proptest::prelude::*;
use std::collections::HashSet;

fn flows() -> Vec<NumberFlow> {
    vec![
        NumberFlow::new(FlowConfig::default()).unwrap(),
        NumberFlow::new(FlowConfig::new(["de"], FormatOptions::currency("EUR"))).unwrap(),
        NumberFlow::new(
            FlowConfig::new(["en-IN"], FormatOptions::percent())
                .with_prefix("≈")
                .with_suffix("!"),
        )
        .unwrap(),
        NumberFlow::new(FlowConfig::new(
            ["fr"],
            FormatOptions::unit("kilometer").with_sign_display(SignDisplay::ExceptZero),
        ))
        .unwrap(),
    ]
}

proptest! {
    #[test]
    fn keys_never_collide(value in -1.0e12..1.0e12f64) {
        for flow in flows() {
            let data = flow.data(value).unwrap();
            let mut seen = HashSet::new();
            for key in data.keys() {
                prop_assert!(seen.insert(*key), "duplicate key {} in {:?}", key, data.value_as_string);
            }
        }
    }

    #[test]
    fn place_follows_ordinal(value in -1.0e9..1.0e9f64) {
        let data = NumberFlow::new(FlowConfig::default()).unwrap().data(value).unwrap();
        for part in data.integer.iter().chain(data.fraction.iter()) {
            if let KeyedNumberPart::Digit(d) = part {
                let ordinal = d.key.ordinal as i32;
                match d.ty {
                    DigitType::Integer => {
                        prop_assert_eq!(d.place, ordinal);
                    }
                    DigitType::Fraction => {
                        prop_assert_eq!(d.place, -1 - ordinal);
                    }
                }
            }
        }
    }

    #[test]
    fn units_digit_is_always_integer_zero(n in 0u64..1_000_000_000_000, extra in 0u64..10) {
        let flow = NumberFlow::new(FlowConfig::default()).unwrap();
        let small = flow.data(n as f64).unwrap();
        let grown = flow.data((n * 10 + extra) as f64).unwrap();
        let units = small.find(&"integer:0".parse().unwrap()).unwrap();
        prop_assert_eq!(units.text(), (n % 10).to_string());
        // Gaining a digit never drops a key.
        for key in small.keys() {
            prop_assert!(grown.find(key).is_some(), "{} lost growing {} -> {}", key, n, n * 10 + extra);
        }
    }

    #[test]
    fn parts_concatenate_to_value_as_string(value in -1.0e15..1.0e15f64) {
        for flow in flows() {
            let data = flow.data(value).unwrap();
            let joined: String = data.parts().map(KeyedNumberPart::text).collect();
            prop_assert_eq!(joined, data.value_as_string);
        }
    }
}
