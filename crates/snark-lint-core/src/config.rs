//! Configuration types for snark-lint.
//!
//! Configuration tunes rule parameters only. There is deliberately no
//! enable flag, no severity override, and no per-line suppression: every
//! rule fires whenever its condition holds.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::warn;

/// Keys that look like suppression switches from other linters. They do
/// nothing here, so their presence earns a warning instead of silence.
const IGNORED_KEYS: &[&str] = &["enabled", "severity", "ignore", "disable"];

/// Top-level configuration for snark-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Per-rule parameter tables, keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleOptions>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;

        for (rule, options) in &config.rules {
            for key in IGNORED_KEYS {
                if options.options.contains_key(*key) {
                    warn!(rule, key, "rules cannot be turned off; this key does nothing");
                }
            }
        }

        Ok(config)
    }

    /// Parameters for `rule_name`, if the file has a table for it.
    #[must_use]
    pub fn rule_options(&self, rule_name: &str) -> Option<&RuleOptions> {
        self.rules.get(rule_name)
    }
}

/// Parameters for one rule, as free-form TOML values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOptions {
    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleOptions {
    /// Gets an option value as a specific type.
    #[must_use]
    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.options
            .get(key)
            .and_then(|v| v.clone().try_into().ok())
    }

    /// Gets a string array option.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Vec<String> {
        self.options
            .get(key)
            .and_then(|v| v.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_rule_tables() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert!(config.rule_options("single-letter-name").is_none());
    }

    #[test]
    fn parse_reads_rule_parameters() {
        let toml = r#"
[rules.single-letter-name]
exempt = ["i", "j", "k"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        let options = config.rule_options("single-letter-name").unwrap();
        assert_eq!(options.get_str_array("exempt"), vec!["i", "j", "k"]);
    }

    #[test]
    fn get_decodes_typed_values() {
        let toml = r#"
[rules.some-rule]
limit = 72
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        let options = config.rule_options("some-rule").unwrap();
        assert_eq!(options.get::<usize>("limit"), Some(72));
        assert_eq!(options.get::<usize>("missing"), None);
    }

    #[test]
    fn suppression_keys_are_accepted_but_inert() {
        // parse succeeds; the key just has no effect anywhere
        let toml = r#"
[rules.function-naming]
enabled = false
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert!(config.rule_options("function-naming").is_some());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("rules = not toml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file(std::path::Path::new("/no/such/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
