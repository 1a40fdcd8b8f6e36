//! Core types for rule keys, severities and rule settings.

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Severity level of a configured rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Findings are reported but do not fail the run.
    Warn,
    /// Findings fail the run.
    Error,
}

impl Severity {
    /// Returns true unless the severity is [`Severity::Off`].
    #[must_use]
    pub fn is_enabled(self) -> bool {
        self != Self::Off
    }

    /// Parses a severity from a configuration value.
    ///
    /// Accepts the strings `off`, `warn`, `error` and the integers `0`, `1`, `2`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverity`] for any other value.
    pub fn from_value(value: &toml::Value) -> Result<Self, InvalidSeverity> {
        match value {
            toml::Value::String(text) => text.parse(),
            toml::Value::Integer(0) => Ok(Self::Off),
            toml::Value::Integer(1) => Ok(Self::Warn),
            toml::Value::Integer(2) => Ok(Self::Error),
            other => Err(InvalidSeverity::new(other.to_string())),
        }
    }
}

impl FromStr for Severity {
    type Err = InvalidSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" | "0" => Ok(Self::Off),
            "warn" | "1" => Ok(Self::Warn),
            "error" | "2" => Ok(Self::Error),
            other => Err(InvalidSeverity::new(other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A severity value outside `{off, warn, error}`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
#[error("invalid severity `{value}`, expected: off, warn, error (or 0, 1, 2)")]
#[diagnostic(code(lint_overlay::invalid_severity))]
pub struct InvalidSeverity {
    /// The rejected value as written.
    pub value: String,
}

impl InvalidSeverity {
    fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Identifier of a lint rule, e.g. `no-console` or `@typescript-eslint/no-explicit-any`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleKey(String);

impl RuleKey {
    /// Creates a new rule key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the plugin namespace, i.e. everything before the last `/`.
    ///
    /// ```
    /// use lint_overlay_core::RuleKey;
    ///
    /// assert_eq!(RuleKey::new("react/jsx-key").namespace(), Some("react"));
    /// assert_eq!(
    ///     RuleKey::new("@typescript-eslint/no-explicit-any").namespace(),
    ///     Some("@typescript-eslint")
    /// );
    /// assert_eq!(RuleKey::new("no-console").namespace(), None);
    /// ```
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(ns, _)| ns)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for RuleKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Rule-specific options, kept exactly as written after the severity.
///
/// The resolver never looks inside; a later setting replaces the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleOptions(Vec<toml::Value>);

impl RuleOptions {
    /// Wraps a positional option list.
    #[must_use]
    pub fn new(values: Vec<toml::Value>) -> Self {
        Self(values)
    }

    /// Returns the option values.
    #[must_use]
    pub fn values(&self) -> &[toml::Value] {
        &self.0
    }

    /// Number of positional options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no options are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Configured severity plus optional options payload for one rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleSetting {
    /// Configured severity.
    pub severity: Severity,
    /// Options payload, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RuleOptions>,
}

impl RuleSetting {
    /// Creates a setting without options.
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: None,
        }
    }

    /// Shorthand for `RuleSetting::new(Severity::Off)`.
    #[must_use]
    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    /// Shorthand for `RuleSetting::new(Severity::Warn)`.
    #[must_use]
    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    /// Shorthand for `RuleSetting::new(Severity::Error)`.
    #[must_use]
    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Attaches an options payload.
    #[must_use]
    pub fn with_options(mut self, options: RuleOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Parses a setting from a configuration value.
    ///
    /// The value is either a bare severity (`"warn"`, `2`) or an array whose
    /// first element is the severity and whose remaining elements are options.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSeverity`] if the severity part is not recognized.
    pub fn from_value(value: &toml::Value) -> Result<Self, InvalidSeverity> {
        match value {
            toml::Value::Array(items) => {
                let (first, rest) = items
                    .split_first()
                    .ok_or_else(|| InvalidSeverity::new("[]"))?;
                let severity = Severity::from_value(first)?;
                let options = (!rest.is_empty()).then(|| RuleOptions::new(rest.to_vec()));
                Ok(Self { severity, options })
            }
            other => Severity::from_value(other).map(Self::new),
        }
    }
}

impl fmt::Display for RuleSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(options) = &self.options {
            for value in options.values() {
                write!(f, " {value}")?;
            }
        }
        Ok(())
    }
}
