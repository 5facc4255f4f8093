use crate::domain::DialCode;
use crate::error::RuleError;
use regex::Regex;
use std::borrow::Cow;

/// Formatting and EPP reconstruction data for one country.
#[derive(Debug, Clone)]
pub struct CountryRule {
    validation: Regex,
    replacement: Option<String>,
    epp_strip: Option<Regex>,
    dial_code: DialCode,
}

impl CountryRule {
    /// Compiles a rule. `replacement` uses `regex` expansion syntax (`${1}`),
    /// `strip` is removed from a national number before EPP assembly.
    pub fn new(
        pattern: &str,
        replacement: Option<&str>,
        strip: Option<&str>,
        dial_code: &str,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            validation: compile(pattern)?,
            replacement: replacement.map(str::to_string),
            epp_strip: strip.map(compile).transpose()?,
            dial_code: DialCode::new(dial_code)?,
        })
    }

    pub fn validation_pattern(&self) -> &Regex {
        &self.validation
    }

    pub fn display_replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }

    pub fn epp_strip_pattern(&self) -> Option<&Regex> {
        self.epp_strip.as_ref()
    }

    pub fn dial_code(&self) -> &DialCode {
        &self.dial_code
    }

    pub fn matches(&self, value: &str) -> bool {
        self.validation.is_match(value)
    }

    /// Returns the display form of `value`, or `None` when it does not match.
    pub fn format(&self, value: &str) -> Option<String> {
        if !self.matches(value) {
            return None;
        }
        match &self.replacement {
            None => Some(value.to_string()),
            Some(replacement) => Some(
                self.validation
                    .replace_all(value, replacement.as_str())
                    .trim()
                    .to_string(),
            ),
        }
    }

    pub(crate) fn strip_for_epp<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match &self.epp_strip {
            Some(strip) => strip.replace_all(value, ""),
            None => Cow::Borrowed(value),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, RuleError> {
    Regex::new(pattern).map_err(|err| RuleError::InvalidPattern {
        pattern: pattern.to_string(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::CountryRule;
    use crate::error::RuleError;

    #[test]
    fn format_without_replacement_returns_input() {
        let rule = CountryRule::new(r"^[0-9]{4}[\s-]?[0-9]{4}$", None, None, "268").unwrap();
        assert_eq!(rule.format("1234-5678").as_deref(), Some("1234-5678"));
    }

    #[test]
    fn format_applies_replacement_and_trims() {
        let rule = CountryRule::new(r"^([0-9]{3})-([0-9]{4})$", Some(" ${1} ${2} "), None, "1")
            .unwrap();
        assert_eq!(rule.format("555-1212").as_deref(), Some("555 1212"));
    }

    #[test]
    fn format_returns_none_on_mismatch() {
        let rule = CountryRule::new(r"^0[0-9]+$", None, None, "44").unwrap();
        assert!(rule.format("+44 20").is_none());
    }

    #[test]
    fn strip_for_epp_removes_matches() {
        let rule = CountryRule::new(r".*", None, Some(r"^\(?0|[^0-9]"), "44").unwrap();
        assert_eq!(rule.strip_for_epp("(020) 7925-0918"), "2079250918");
    }

    #[test]
    fn new_rejects_bad_pattern() {
        let err = CountryRule::new(r"^([0-9]$", None, None, "44").unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
    }

    #[test]
    fn new_rejects_bad_dial_code() {
        let err = CountryRule::new(r"^[0-9]+$", None, None, "44a").unwrap_err();
        assert_eq!(err, RuleError::InvalidDialCode("44a".to_string()));
    }
}
