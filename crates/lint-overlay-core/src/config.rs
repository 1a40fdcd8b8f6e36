//! Configuration types for lint-overlay.
//!
//! The same TOML file holds the overlay chain (`ignores`, `[[overlay]]`)
//! and these settings; each side ignores the other's keys.

use crate::resolver::{ResolverOptions, UnknownRulePolicy};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for lint-overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset chain placed in front of the file's overlays
    /// (e.g., "recommended", "typescript").
    #[serde(default)]
    pub preset: Option<String>,

    /// Resolver configuration.
    #[serde(default)]
    pub resolver: ResolverConfig,
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
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Resolver-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Fail resolution when any diagnostic is produced.
    #[serde(default)]
    pub strict: bool,

    /// Handling of rule keys the registry does not know.
    #[serde(default)]
    pub unknown_rules: UnknownRulePolicy,
}

impl ResolverConfig {
    /// Builds resolver options, matching absolute paths relative to `base_dir`.
    #[must_use]
    pub fn to_options(&self, base_dir: Option<PathBuf>) -> ResolverOptions {
        ResolverOptions {
            unknown_rules: self.unknown_rules,
            strict: self.strict,
            base_dir,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(lint_overlay::config_io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(code(lint_overlay::config_parse))]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.preset.is_none());
        assert!(!config.resolver.strict);
        assert_eq!(config.resolver.unknown_rules, UnknownRulePolicy::Drop);
    }

    #[test]
    fn test_parse_config_next_to_overlays() {
        let toml = r#"
preset = "typescript"
ignores = ["dist"]

[resolver]
strict = true
unknown_rules = "keep"

[[overlay]]
name = "base"
[overlay.rules]
semi = "error"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.preset.as_deref(), Some("typescript"));
        assert!(config.resolver.strict);
        assert_eq!(config.resolver.unknown_rules, UnknownRulePolicy::Keep);

        let options = config.resolver.to_options(Some(PathBuf::from("/repo")));
        assert!(options.strict);
        assert_eq!(options.base_dir, Some(PathBuf::from("/repo")));
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result = Config::parse("[resolver]\nunknown_rules = \"ignore\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
