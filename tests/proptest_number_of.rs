//! Property-based tests for number parsing and memoization using proptest

use libscalar::error::Result;
use libscalar::prelude::*;
use proptest::prelude::*;
use std::cell::Cell;

// Infinities are spelled the only way the parser accepts them
fn spell(v: f64) -> String {
    if v.is_infinite() {
        let sign = if v < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else {
        v.to_string()
    }
}

// Strategy for numerals `str::parse::<f64>` accepts
fn numeral_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<f64>().prop_map(spell),
        any::<i64>().prop_map(|v| v.to_string()),
        any::<i32>().prop_map(|v| v.to_string()),
        "-?[0-9]{1,12}\\.[0-9]{1,12}",
        "-?[0-9]{1,3}(\\.[0-9]{1,4})?[eE]-?[0-9]{1,2}",
    ]
}

// Strategy for text that is never a numeral
fn garbage_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[g-hj-mo-z][a-z]{0,8}|[0-9]{1,4}[g-z]{2,4}|[0-9]+\\.[0-9]+\\.[0-9]+",
        // Spellings of the special values that only differ in case
        "[+-]?([iI][nN][fF]|[nN][aA][nN]|[iI][nN][fF][iI][nN][iI][tT][yY])"
            .prop_filter("canonical spelling", |s| {
                let unsigned = s.trim_start_matches(['+', '-']);
                unsigned != "NaN" && unsigned != "Infinity"
            }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: the canonical value equals the standard parse
    #[test]
    fn prop_as_f64_matches_parse(text in numeral_strategy()) {
        let expected: f64 = text.parse().unwrap();
        let number = NumberOf::new(&text);

        if expected.is_nan() {
            prop_assert!(number.as_f64().is_nan());
        } else {
            prop_assert_eq!(number.as_f64(), expected);
        }
    }

    /// Property: typed views are narrowing casts of the canonical value
    #[test]
    fn prop_views_derive_from_canonical_value(text in numeral_strategy()) {
        let number = NumberOf::new(&text);
        let value = number.as_f64();

        prop_assert_eq!(number.as_i32(), value as i32);
        prop_assert_eq!(number.as_i64(), value as i64);
        prop_assert_eq!(number.as_f32().to_bits(), (value as f32).to_bits());
    }

    /// Property: integers within i64 survive the round trip exactly when
    /// representable as f64
    #[test]
    fn prop_safe_integers_round_trip(v in -(1i64 << 53)..=(1i64 << 53)) {
        prop_assert_eq!(NumberOf::new(&v.to_string()).as_i64(), v);
    }

    /// Property: invalid text is rejected with a parse cause
    #[test]
    fn prop_garbage_faults(text in garbage_strategy()) {
        let fault = NumberOf::try_new(&text).unwrap_err();
        let is_parse = matches!(fault.cause(), Error::Parse { input, .. } if *input == text);
        prop_assert!(is_parse);
    }

    /// Property: a sticky scalar runs its computation once for any number of calls
    #[test]
    fn prop_sticky_runs_once(calls in 1usize..50, fail in any::<bool>(), payload in any::<i64>()) {
        let runs = Cell::new(0);
        let sticky = Sticky::new(|| -> Result<i64> {
            runs.set(runs.get() + 1);
            if fail {
                Err(Error::Source(payload.to_string()))
            } else {
                Ok(payload)
            }
        });

        let first = sticky.value();
        for _ in 1..calls {
            match (&first, sticky.value()) {
                (Ok(a), Ok(b)) => prop_assert_eq!(*a, b),
                (Err(Error::Source(a)), Err(Error::Source(b))) => prop_assert_eq!(a, &b),
                (a, b) => prop_assert!(false, "results diverged: {:?} vs {:?}", a, b),
            }
        }
        prop_assert_eq!(runs.get(), 1);
    }
}
