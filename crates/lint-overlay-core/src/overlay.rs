//! Overlay definitions: one scoped unit of rule settings.

use crate::types::{RuleKey, RuleSetting};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Parser/type-checker context an overlay is bound to.
///
/// When `extensions` is non-empty the scope doubles as a predicate: the
/// owning overlay only applies to paths with one of those extensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageScope {
    /// Parser identifier (e.g. `typescript-eslint`).
    pub parser: String,
    /// File extensions without the leading dot.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extensions: Vec<String>,
    /// Parser options, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<toml::Value>,
}

impl LanguageScope {
    /// Creates a scope for the given parser with no extension filter.
    #[must_use]
    pub fn new(parser: impl Into<String>) -> Self {
        Self {
            parser: parser.into(),
            extensions: Vec::new(),
            parser_options: None,
        }
    }

    /// Restricts the scope to the given extensions (`"ts"` or `".ts"`).
    #[must_use]
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_string())
            .collect();
        self
    }

    /// Sets the parser options payload.
    #[must_use]
    pub fn with_parser_options(mut self, options: toml::Value) -> Self {
        self.parser_options = Some(options);
        self
    }

    /// Returns true if the path passes the extension filter.
    #[must_use]
    pub fn accepts(&self, path: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// An unvalidated overlay: raw patterns plus typed rule settings.
///
/// Built with chained setters, then compiled as part of an
/// [`OverlayChain`](crate::OverlayChain).
///
/// ```
/// use lint_overlay_core::{Overlay, RuleSetting};
///
/// let tests = Overlay::named("tests")
///     .files(["**/*.test.ts"])
///     .rule("no-console", RuleSetting::off());
/// assert_eq!(tests.rules().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub(crate) name: Option<String>,
    pub(crate) files: Vec<String>,
    pub(crate) ignores: Vec<String>,
    pub(crate) rules: BTreeMap<RuleKey, RuleSetting>,
    pub(crate) language: Option<LanguageScope>,
    pub(crate) plugins: BTreeMap<String, String>,
}

impl Overlay {
    /// Creates an empty, global overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty overlay with a display name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Adds include patterns.
    #[must_use]
    pub fn files<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds exclude patterns.
    #[must_use]
    pub fn ignores<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets a rule. A later call for the same key replaces the earlier one.
    #[must_use]
    pub fn rule(mut self, key: impl Into<RuleKey>, setting: RuleSetting) -> Self {
        self.rules.insert(key.into(), setting);
        self
    }

    /// Binds the overlay to a language scope.
    #[must_use]
    pub fn language(mut self, scope: LanguageScope) -> Self {
        self.language = Some(scope);
        self
    }

    /// Binds a plugin namespace to a plugin identifier.
    #[must_use]
    pub fn plugin(mut self, namespace: impl Into<String>, plugin: impl Into<String>) -> Self {
        self.plugins.insert(namespace.into(), plugin.into());
        self
    }

    /// Display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Rule settings of this overlay.
    #[must_use]
    pub fn rules(&self) -> &BTreeMap<RuleKey, RuleSetting> {
        &self.rules
    }
}

/// Where an overlay sits in its chain; attached to errors and diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlayPosition {
    /// Zero-based index in the chain.
    pub index: usize,
    /// Display name, if the overlay has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl fmt::Display for OverlayPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "overlay[{}] \"{name}\"", self.index),
            None => write!(f, "overlay[{}]", self.index),
        }
    }
}
