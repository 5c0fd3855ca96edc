//! Configuration for Lexis.
//!
//! Settings are plain serde structs with defaults for every field, so a JSON
//! document only needs to mention what it changes:
//!
//! ```
//! use lexis::config::{LexisConfig, ModePolicy};
//!
//! let config = LexisConfig::from_json(r#"{ "search": { "mode_policy": "strict" } }"#).unwrap();
//! assert_eq!(config.search.mode_policy, ModePolicy::Strict);
//! assert_eq!(config.search.max_results, None);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LexisError, Result};
use crate::lexicon::entry::EntryKind;

/// How the search facade treats a mode string it does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModePolicy {
    /// Log a warning and search by prefix.
    #[default]
    Fallback,
    /// Reject the request with [`LexisError::InvalidArgument`].
    Strict,
}

/// Search facade settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Handling of unrecognized search modes.
    pub mode_policy: ModePolicy,
    /// Index searched by [`SearchFacade::search`](crate::search::SearchFacade::search).
    pub default_target: EntryKind,
    /// Upper bound on returned hits; `None` returns everything.
    pub max_results: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            mode_policy: ModePolicy::Fallback,
            default_target: EntryKind::Word,
            max_results: None,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexisConfig {
    pub search: SearchConfig,
}

impl LexisConfig {
    pub fn builder() -> LexisConfigBuilder {
        LexisConfigBuilder::default()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LexisConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == Some(0) {
            return Err(LexisError::invalid_config(
                "search.max_results must be at least 1",
            ));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct LexisConfigBuilder {
    search: SearchConfig,
}

impl LexisConfigBuilder {
    pub fn mode_policy(mut self, policy: ModePolicy) -> Self {
        self.search.mode_policy = policy;
        self
    }

    pub fn default_target(mut self, target: EntryKind) -> Self {
        self.search.default_target = target;
        self
    }

    pub fn max_results(mut self, limit: usize) -> Self {
        self.search.max_results = Some(limit);
        self
    }

    pub fn build(self) -> Result<LexisConfig> {
        let config = LexisConfig {
            search: self.search,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LexisConfig::default();
        assert_eq!(config.search.mode_policy, ModePolicy::Fallback);
        assert_eq!(config.search.default_target, EntryKind::Word);
        assert_eq!(config.search.max_results, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            LexisConfig::from_json(r#"{"search": {"default_target": "phrase", "max_results": 5}}"#)
                .unwrap();
        assert_eq!(config.search.default_target, EntryKind::Phrase);
        assert_eq!(config.search.max_results, Some(5));
        assert_eq!(config.search.mode_policy, ModePolicy::Fallback);

        assert_eq!(LexisConfig::from_json("{}").unwrap(), LexisConfig::default());
    }

    #[test]
    fn test_rejects_zero_limit() {
        let err = LexisConfig::from_json(r#"{"search": {"max_results": 0}}"#).unwrap_err();
        assert!(matches!(err, LexisError::InvalidConfig(_)));
        assert!(LexisConfig::builder().max_results(0).build().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = LexisConfig::from_json(r#"{"search": {"mode_policy": "loose"}}"#).unwrap_err();
        assert!(matches!(err, LexisError::Json(_)));
    }

    #[test]
    fn test_builder_roundtrips_through_json() {
        let config = LexisConfig::builder()
            .mode_policy(ModePolicy::Strict)
            .default_target(EntryKind::Phrase)
            .max_results(20)
            .build()
            .unwrap();
        let parsed = LexisConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
