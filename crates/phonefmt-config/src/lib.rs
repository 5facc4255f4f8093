use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonefmt_core::{CountryCode, CountryRule, RuleError, RuleTable};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonefmt";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Candidate order for national formatting when none is given.
    pub default_countries: Vec<CountryCode>,
    pub rules: RuleTable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_countries: Vec::new(),
            rules: RuleTable::builtin().clone(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid country code in default_countries: {0}")]
    InvalidCountryCode(String),
    #[error("duplicate country in default_countries: {0}")]
    DuplicateCountry(String),
    #[error("invalid rule for country {country}: {source}")]
    InvalidRule {
        country: String,
        #[source]
        source: RuleError,
    },
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    default_countries: Option<Vec<String>>,
    builtin_rules: Option<bool>,
    #[serde(default)]
    countries: BTreeMap<String, CountryRuleFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CountryRuleFile {
    pattern: String,
    replacement: Option<String>,
    strip: Option<String>,
    dial_code: String,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if parsed.builtin_rules == Some(false) {
        config.rules = RuleTable::new();
    }

    let mut overrides = RuleTable::new();
    for (country, rule) in parsed.countries {
        let code = CountryCode::new(&country).map_err(|source| ConfigError::InvalidRule {
            country: country.clone(),
            source,
        })?;
        let rule = CountryRule::new(
            &rule.pattern,
            rule.replacement.as_deref(),
            rule.strip.as_deref(),
            &rule.dial_code,
        )
        .map_err(|source| ConfigError::InvalidRule { country, source })?;
        overrides.insert(code, rule);
    }
    config.rules.extend(overrides);

    if let Some(countries) = parsed.default_countries {
        let mut seen = HashSet::new();
        for raw in countries {
            let code =
                CountryCode::new(&raw).map_err(|_| ConfigError::InvalidCountryCode(raw.clone()))?;
            if !seen.insert(code.clone()) {
                return Err(ConfigError::DuplicateCountry(code.to_string()));
            }
            config.default_countries.push(code);
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, CountryRuleFile};
    use phonefmt_core::{format_national, national_to_epp, RuleSource, RuleTable};
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_defaults_to_builtin_rules() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert!(merged.default_countries.is_empty());
        assert_eq!(merged.rules.len(), RuleTable::builtin().len());
    }

    #[test]
    fn merge_config_applies_values() {
        let mut countries = BTreeMap::new();
        countries.insert(
            "xy".to_string(),
            CountryRuleFile {
                pattern: r"^[0-9]{6}$".to_string(),
                replacement: None,
                strip: None,
                dial_code: "999".to_string(),
            },
        );
        let parsed = ConfigFile {
            default_countries: Some(vec!["gb".to_string(), "US".to_string()]),
            builtin_rules: Some(false),
            countries,
        };
        let merged = merge_config(parsed).expect("merge");

        let defaults: Vec<&str> = merged
            .default_countries
            .iter()
            .map(|code| code.as_str())
            .collect();
        assert_eq!(defaults, vec!["GB", "US"]);
        assert_eq!(merged.rules.len(), 1);
        let epp = national_to_epp("123456", "XY", &merged.rules).expect("epp");
        assert_eq!(epp, "+999.123456");
    }

    #[test]
    fn merge_config_rejects_alpha3_default_country() {
        let parsed = ConfigFile {
            default_countries: Some(vec!["GBR".to_string()]),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCountryCode(code) if code == "GBR"));
    }

    #[test]
    fn merge_config_rejects_duplicate_default_country() {
        let parsed = ConfigFile {
            default_countries: Some(vec!["GB".to_string(), "gb".to_string()]),
            ..ConfigFile::default()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateCountry(code) if code == "GB"));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "default_countries = [\"US\"]\n\n[countries.GB]\npattern = '^0[0-9]{10}$'\ndial_code = \"44\"\nstrip = '^0'\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.default_countries.len(), 1);
        assert!(config.rules.get_rule("US").is_ok());
        let formatted =
            format_national("02079250918", ["GB"], &config.rules).expect("format national");
        assert_eq!(formatted, "02079250918");
    }

    #[test]
    fn load_at_path_reports_invalid_rule() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[countries.GB]\npattern = '^(0'\ndial_code = \"44\"\n",
        )
        .expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { ref country, .. } if country == "GB"));
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 3\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
