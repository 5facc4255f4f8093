use crate::domain::{CountryCode, DialCode};
use crate::error::PhoneError;
use crate::rules::rule::CountryRule;
use regex::Regex;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Per-country rule lookup consumed by the national conversions.
pub trait RuleSource {
    fn rule(&self, country: &CountryCode) -> Option<&CountryRule>;

    /// Known countries in ascending order.
    fn countries(&self) -> Vec<CountryCode>;

    /// Looks up a rule by raw code. Malformed codes (alpha-3, digits, wrong
    /// length) are reported the same way as unknown ones.
    fn get_rule(&self, country: &str) -> Result<&CountryRule, PhoneError> {
        CountryCode::new(country)
            .ok()
            .and_then(|code| self.rule(&code))
            .ok_or_else(|| PhoneError::CountryNotFound {
                country: country.to_string(),
            })
    }

    fn pattern_and_replacement(&self, country: &str) -> Result<(&Regex, Option<&str>), PhoneError> {
        let rule = self.get_rule(country)?;
        Ok((rule.validation_pattern(), rule.display_replacement()))
    }

    fn epp_reconstruction(&self, country: &str) -> Result<(Option<&Regex>, &DialCode), PhoneError> {
        let rule = self.get_rule(country)?;
        Ok((rule.epp_strip_pattern(), rule.dial_code()))
    }
}

/// Immutable country rule table keyed by alpha-2 code.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: BTreeMap<CountryCode, CountryRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rule for `country`, returning the previous one.
    pub fn insert(&mut self, country: CountryCode, rule: CountryRule) -> Option<CountryRule> {
        self.rules.insert(country, rule)
    }

    pub fn with_rule(mut self, country: CountryCode, rule: CountryRule) -> Self {
        self.insert(country, rule);
        self
    }

    /// Overlays `other`; its rules win on conflicts.
    pub fn extend(&mut self, other: RuleTable) {
        self.rules.extend(other.rules);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, CountryCode, CountryRule> {
        self.rules.iter()
    }
}

impl RuleSource for RuleTable {
    fn rule(&self, country: &CountryCode) -> Option<&CountryRule> {
        self.rules.get(country)
    }

    fn countries(&self) -> Vec<CountryCode> {
        self.rules.keys().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a CountryCode, &'a CountryRule);
    type IntoIter = btree_map::Iter<'a, CountryCode, CountryRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
