use crate::domain::CountryCode;
use crate::rules::rule::CountryRule;
use crate::rules::source::RuleTable;
use once_cell::sync::Lazy;

struct BuiltinRule {
    country: &'static str,
    pattern: &'static str,
    replacement: Option<&'static str>,
    strip: Option<&'static str>,
    dial_code: &'static str,
}

const NANP_PATTERN: &str =
    r"^\(?([2-9][0-9]{2})\)?[\s.-]?([2-9][0-9]{2})[\s.-]?([0-9]{4})(\s*[x#]\s*[0-9]+)?$";
const NANP_REPLACEMENT: &str = "(${1}) ${2}-${3}${4}";
const TRUNK_ZERO_STRIP: &str = r"^\(?0|[^0-9]";
const NON_DIGIT_STRIP: &str = r"[^0-9]";

const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        country: "AU",
        pattern: r"^\(?0([2-478])\)?[\s-]?([0-9]{4})[\s-]?([0-9]{4})$",
        replacement: Some("(0${1}) ${2} ${3}"),
        strip: Some(TRUNK_ZERO_STRIP),
        dial_code: "61",
    },
    BuiltinRule {
        country: "CA",
        pattern: NANP_PATTERN,
        replacement: Some(NANP_REPLACEMENT),
        strip: Some(NON_DIGIT_STRIP),
        dial_code: "1",
    },
    BuiltinRule {
        country: "DE",
        pattern: r"^\(?0[1-9][0-9]{1,4}\)?[\s/-]?[0-9]{3,9}$",
        replacement: None,
        strip: Some(TRUNK_ZERO_STRIP),
        dial_code: "49",
    },
    BuiltinRule {
        country: "ES",
        pattern: r"^([6789][0-9]{2})[\s.-]?([0-9]{3})[\s.-]?([0-9]{3})$",
        replacement: Some("${1} ${2} ${3}"),
        strip: Some(NON_DIGIT_STRIP),
        dial_code: "34",
    },
    BuiltinRule {
        country: "FR",
        pattern: r"^0([1-9])[\s.-]?([0-9]{2})[\s.-]?([0-9]{2})[\s.-]?([0-9]{2})[\s.-]?([0-9]{2})$",
        replacement: Some("0${1} ${2} ${3} ${4} ${5}"),
        strip: Some(TRUNK_ZERO_STRIP),
        dial_code: "33",
    },
    BuiltinRule {
        country: "GB",
        pattern: r"^\(?(0[0-9]{2,4})\)?[\s-]?([0-9]{3,4})[\s-]?([0-9]{3,4})$",
        replacement: Some("${1} ${2}${3}"),
        strip: Some(TRUNK_ZERO_STRIP),
        dial_code: "44",
    },
    BuiltinRule {
        country: "IE",
        pattern: r"^\(?0[1-9][0-9]?\)?[\s-]?[0-9]{3}[\s-]?[0-9]{3,4}$",
        replacement: None,
        strip: Some(TRUNK_ZERO_STRIP),
        dial_code: "353",
    },
    BuiltinRule {
        country: "SZ",
        pattern: r"^[0-9]{4}[\s-]?[0-9]{4}$",
        replacement: None,
        strip: Some(NON_DIGIT_STRIP),
        dial_code: "268",
    },
    BuiltinRule {
        country: "US",
        pattern: NANP_PATTERN,
        replacement: Some(NANP_REPLACEMENT),
        strip: Some(NON_DIGIT_STRIP),
        dial_code: "1",
    },
];

static BUILTIN: Lazy<RuleTable> = Lazy::new(|| {
    let mut table = RuleTable::new();
    for entry in BUILTIN_RULES {
        let country = CountryCode::new(entry.country).expect("builtin country code");
        let rule = CountryRule::new(
            entry.pattern,
            entry.replacement,
            entry.strip,
            entry.dial_code,
        )
        .expect("builtin country rule");
        table.insert(country, rule);
    }
    table
});

impl RuleTable {
    /// Rules bundled with the crate, built once on first use.
    pub fn builtin() -> &'static RuleTable {
        &BUILTIN
    }
}
