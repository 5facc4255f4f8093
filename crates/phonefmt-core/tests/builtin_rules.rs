use phonefmt_core::{format_national, itu_to_epp, national_to_epp, PhoneError, RuleTable};
use std::thread;

#[test]
fn format_national_with_builtin_rules() {
    let rules = RuleTable::builtin();
    let cases: [(&str, &[&str], &str); 4] = [
        ("020-7925-0918", &["GB"], "020 79250918"),
        ("0300 126 7000", &["GB"], "0300 1267000"),
        ("202-456-2121", &["GB", "US"], "(202) 456-2121"),
        ("12345678", &["SZ"], "12345678"),
    ];

    for (value, countries, expected) in cases {
        let formatted = format_national(value, countries, rules).expect("format national");
        assert_eq!(formatted, expected, "{value} in {countries:?}");
    }
}

#[test]
fn format_national_rejects_numbers_outside_candidates() {
    let rules = RuleTable::builtin();
    let cases: [(&str, &[&str]); 3] = [
        ("+44 20 7925 0918", &["GB"]),
        ("202-456-2121", &["FR", "ES"]),
        ("202-456-2122", &["USA"]),
    ];

    for (value, countries) in cases {
        let err = format_national(value, countries, rules).unwrap_err();
        assert!(
            matches!(err, PhoneError::NoMatch { .. }),
            "{value} in {countries:?}: {err}"
        );
        assert!(err.to_string().contains(value));
    }
}

#[test]
fn national_to_epp_with_builtin_rules() {
    let rules = RuleTable::builtin();
    let cases = [
        ("020-7925-0918", "GB", "+44.2079250918"),
        ("0300 126 7000", "GB", "+44.3001267000"),
        ("202-456-2121", "US", "+1.2024562121"),
        ("12345678", "SZ", "+268.12345678"),
        ("(650) 253-0000x404", "US", "+1.6502530000x404"),
        ("(020) 7925 0918", "GB", "+44.2079250918"),
    ];

    for (value, country, expected) in cases {
        let epp = national_to_epp(value, country, rules).expect("national to epp");
        assert_eq!(epp, expected, "{value} ({country})");
    }
}

#[test]
fn national_to_epp_rejects_badly_formatted_numbers() {
    let rules = RuleTable::builtin();
    for (value, country) in [
        ("+44 20 7925 0918", "GB"),
        ("202-456-2121", "ES"),
        ("(650) 253-000x404", "US"),
    ] {
        let err = national_to_epp(value, country, rules).unwrap_err();
        assert_eq!(
            err,
            PhoneError::InvalidNationalNumber {
                value: value.to_string(),
                country: country.to_string(),
            }
        );
    }
}

#[test]
fn national_to_epp_rejects_unknown_countries() {
    let rules = RuleTable::builtin();
    for country in ["XX", "GBR", "G", "GBRT", "12"] {
        let err = national_to_epp("202-456-2122", country, rules).unwrap_err();
        assert_eq!(
            err,
            PhoneError::CountryNotFound {
                country: country.to_string()
            }
        );
        assert!(err.to_string().contains(country));
    }
}

#[test]
fn national_epp_output_feeds_itu_conversion() {
    let rules = RuleTable::builtin();
    let epp = national_to_epp("(650) 253-0000x404", "US", rules).expect("national to epp");
    let again = itu_to_epp(epp.as_str()).expect("itu to epp");
    assert_eq!(again, epp);
}

#[test]
fn conversions_run_concurrently() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let rules = RuleTable::builtin();
                national_to_epp("020-7925-0918", "GB", rules)
                    .expect("national to epp")
                    .into_string()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("join"), "+44.2079250918");
    }
}
