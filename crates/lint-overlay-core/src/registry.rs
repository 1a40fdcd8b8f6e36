//! Rule registry seam.
//!
//! The resolver only asks a registry whether a key exists and whether an
//! options payload is acceptable. It never runs rules.

use crate::types::{RuleKey, RuleOptions, Severity};
use std::collections::BTreeMap;

/// Per-rule metadata and options check exposed by a registry.
pub trait RuleValidator: Send + Sync {
    /// Returns a brief description of the rule.
    fn description(&self) -> &str {
        ""
    }

    /// Severity the rule-execution engine uses when none is configured.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks an options payload.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason if the payload is unacceptable.
    fn validate_options(&self, _options: &RuleOptions) -> Result<(), String> {
        Ok(())
    }
}

/// Lookup of known rules by key.
pub trait RuleRegistry: Send + Sync {
    /// Returns the validator for a key, or `None` if the rule is unknown.
    fn lookup(&self, key: &RuleKey) -> Option<&dyn RuleValidator>;

    /// Returns true if the key is known.
    fn contains(&self, key: &RuleKey) -> bool {
        self.lookup(key).is_some()
    }
}

/// Metadata-only rule description, usable as a [`RuleValidator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleInfo {
    description: String,
    default_severity: Severity,
    max_options: Option<usize>,
}

impl RuleInfo {
    /// Creates rule metadata with `error` as default severity and no limit
    /// on positional options.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            default_severity: Severity::Error,
            max_options: None,
        }
    }

    /// Overrides the default severity.
    #[must_use]
    pub fn with_default_severity(mut self, severity: Severity) -> Self {
        self.default_severity = severity;
        self
    }

    /// Limits how many positional options the rule accepts.
    #[must_use]
    pub fn with_max_options(mut self, max: usize) -> Self {
        self.max_options = Some(max);
        self
    }
}

impl RuleValidator for RuleInfo {
    fn description(&self) -> &str {
        &self.description
    }

    fn default_severity(&self) -> Severity {
        self.default_severity
    }

    fn validate_options(&self, options: &RuleOptions) -> Result<(), String> {
        match self.max_options {
            Some(max) if options.len() > max => Err(format!(
                "expected at most {max} option(s), got {}",
                options.len()
            )),
            _ => Ok(()),
        }
    }
}

/// Map-backed registry.
#[derive(Default)]
pub struct StaticRegistry {
    rules: BTreeMap<RuleKey, Box<dyn RuleValidator>>,
}

impl std::fmt::Debug for StaticRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl StaticRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule described by metadata only.
    #[must_use]
    pub fn with_rule(mut self, key: impl Into<RuleKey>, info: RuleInfo) -> Self {
        self.register(key, Box::new(info));
        self
    }

    /// Adds a rule with a custom validator, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<RuleKey>, validator: Box<dyn RuleValidator>) {
        self.rules.insert(key.into(), validator);
    }

    /// Iterates over registered rules in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &dyn RuleValidator)> {
        self.rules.iter().map(|(k, v)| (k, &**v))
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl RuleRegistry for StaticRegistry {
    fn lookup(&self, key: &RuleKey) -> Option<&dyn RuleValidator> {
        self.rules.get(key).map(|v| &**v)
    }
}
