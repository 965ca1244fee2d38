//! Matcher configuration snapshot.
//!
//! The configuration is an immutable value handed to [`crate::pattern::compile`]
//! on every recompilation. Patterns remember the snapshot they were built from
//! so stale pattern sets can be detected after the settings change.

use crate::error::{Error, Result};
use serde::Deserialize;
use sift_query::{MatchingMethod, ParserConfig};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatcherConfig {
    pub method: MatchingMethod,
    pub case_sensitive: bool,
    pub tokenize: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            method: MatchingMethod::Normal,
            case_sensitive: false,
            tokenize: true,
        }
    }
}

impl ParserConfig for MatcherConfig {
    fn tokenize(&self) -> bool {
        self.tokenize
    }
}

/// On-disk shape, every field optional. `matching` stays a string so an
/// unknown method is reported with our own message instead of serde's.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMatcherConfig {
    matching: Option<String>,
    case_sensitive: Option<bool>,
    tokenize: Option<bool>,
}

impl MatcherConfig {
    pub fn new(method: MatchingMethod, case_sensitive: bool) -> Self {
        Self {
            method,
            case_sensitive,
            ..Self::default()
        }
    }

    pub fn with_tokenize(mut self, tokenize: bool) -> Self {
        self.tokenize = tokenize;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: RawMatcherConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let method = match raw.matching.as_deref() {
            Some(name) => name.parse::<MatchingMethod>()?,
            None => defaults.method,
        };

        Ok(Self {
            method,
            case_sensitive: raw.case_sensitive.unwrap_or(defaults.case_sensitive),
            tokenize: raw.tokenize.unwrap_or(defaults.tokenize),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(?path, ?config, "Loaded matcher config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config = MatcherConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatcherConfig::default());
        assert_eq!(config.method, MatchingMethod::Normal);
        assert!(!config.case_sensitive);
        assert!(config.tokenize);
    }

    #[test]
    fn test_all_fields() {
        let config = MatcherConfig::from_toml_str(
            r#"
matching = "fuzzy"
case_sensitive = true
tokenize = false
"#,
        )
        .unwrap();

        assert_eq!(config.method, MatchingMethod::Fuzzy);
        assert!(config.case_sensitive);
        assert!(!config.tokenize);
    }

    #[test]
    fn test_invalid_matching_method() {
        let err = MatcherConfig::from_toml_str(r#"matching = "phonetic""#).unwrap_err();
        assert!(matches!(err, Error::InvalidMatchingMethod(_)));
        assert!(err.to_string().contains("phonetic"));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let err = MatcherConfig::from_toml_str("case_sensitive = \"yes\"").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sift.toml");
        std::fs::write(&path, "matching = \"glob\"\n").unwrap();

        let config = MatcherConfig::load(&path).unwrap();
        assert_eq!(config.method, MatchingMethod::Glob);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = MatcherConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
