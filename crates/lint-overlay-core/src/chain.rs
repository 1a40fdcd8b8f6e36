//! Ordered overlay chains and their compiled, shareable form.
//!
//! ```text
//! OverlayChain (unvalidated: raw patterns)
//!   ↓ compile()
//! CompiledChain (ready: matchers compiled, immutable, Send + Sync)
//! ```
//!
//! A [`CompiledChain`] only exists once every matcher compiled, so a chain
//! shared behind an `Arc` is never observed half-built.

use crate::diagnostic::Diagnostic;
use crate::matcher::{FileMatcher, MatcherSyntaxError};
use crate::overlay::{LanguageScope, Overlay, OverlayPosition};
use crate::registry::RuleRegistry;
use crate::resolver::check_setting;
use crate::types::{RuleKey, RuleSetting};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use miette::Diagnostic as MietteDiagnostic;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Errors that abort chain compilation.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
pub enum ChainError {
    /// An overlay's `files` or `ignores` pattern is malformed.
    #[error("{position}: {source}")]
    #[diagnostic(code(lint_overlay::matcher_syntax))]
    Matcher {
        /// Offending overlay.
        position: OverlayPosition,
        /// The underlying pattern error.
        source: MatcherSyntaxError,
    },

    /// A chain-level ignore pattern is malformed.
    #[error("global ignores: {0}")]
    #[diagnostic(code(lint_overlay::matcher_syntax))]
    GlobalIgnore(MatcherSyntaxError),
}

/// An ordered, not yet compiled list of overlays.
///
/// Order is the only source of precedence: for any rule key, the last
/// overlay that matches a path and sets the key decides its value.
#[derive(Debug, Clone, Default)]
pub struct OverlayChain {
    overlays: Vec<Overlay>,
    ignores: Vec<String>,
}

impl OverlayChain {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an overlay (highest precedence so far).
    #[must_use]
    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.overlays.push(overlay);
        self
    }

    /// Appends an overlay in place.
    pub fn push(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }

    /// Adds chain-level ignore patterns (gitignore syntax).
    #[must_use]
    pub fn ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Puts `base` in front of this chain, so this chain's overlays win.
    ///
    /// Ignore patterns of both chains are kept.
    #[must_use]
    pub fn layered_on(self, base: OverlayChain) -> Self {
        let mut overlays = base.overlays;
        overlays.extend(self.overlays);
        let mut ignores = base.ignores;
        ignores.extend(self.ignores);
        Self { overlays, ignores }
    }

    /// Overlays in precedence order.
    #[must_use]
    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    /// Number of overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// Returns true if the chain has neither overlays nor ignores.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty() && self.ignores.is_empty()
    }

    /// Compiles every matcher and freezes the chain.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError`] for the first malformed pattern. No partially
    /// compiled chain is ever returned.
    pub fn compile(self) -> Result<CompiledChain, ChainError> {
        let overlays = self
            .overlays
            .into_iter()
            .enumerate()
            .map(|(index, overlay)| CompiledOverlay::compile(index, overlay))
            .collect::<Result<Vec<_>, _>>()?;

        let ignores = build_ignores(&self.ignores)?;

        debug!(
            "Compiled overlay chain: {} overlays, {} global ignore patterns",
            overlays.len(),
            self.ignores.len()
        );

        Ok(CompiledChain {
            overlays,
            ignore_patterns: self.ignores,
            ignores,
        })
    }
}

fn build_ignores(patterns: &[String]) -> Result<Option<Gitignore>, ChainError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GitignoreBuilder::new(".");
    for pattern in patterns {
        if pattern.trim().is_empty() {
            return Err(ChainError::GlobalIgnore(MatcherSyntaxError::new(
                pattern,
                "pattern is empty",
            )));
        }
        builder.add_line(None, pattern).map_err(|e| {
            ChainError::GlobalIgnore(MatcherSyntaxError::new(pattern, e.to_string()))
        })?;
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| ChainError::GlobalIgnore(MatcherSyntaxError::new(&patterns.join(", "), e.to_string())))
}

/// One overlay with its matcher compiled.
#[derive(Debug, Clone)]
pub struct CompiledOverlay {
    position: OverlayPosition,
    matcher: FileMatcher,
    rules: BTreeMap<RuleKey, RuleSetting>,
    language: Option<LanguageScope>,
    plugins: BTreeMap<String, String>,
}

impl CompiledOverlay {
    fn compile(index: usize, overlay: Overlay) -> Result<Self, ChainError> {
        let position = OverlayPosition {
            index,
            name: overlay.name,
        };
        let matcher = FileMatcher::new(overlay.files, overlay.ignores).map_err(|source| {
            ChainError::Matcher {
                position: position.clone(),
                source,
            }
        })?;
        Ok(Self {
            position,
            matcher,
            rules: overlay.rules,
            language: overlay.language,
            plugins: overlay.plugins,
        })
    }

    /// Position of this overlay in its chain.
    #[must_use]
    pub fn position(&self) -> &OverlayPosition {
        &self.position
    }

    /// The compiled file predicate.
    #[must_use]
    pub fn matcher(&self) -> &FileMatcher {
        &self.matcher
    }

    /// Rule settings.
    #[must_use]
    pub fn rules(&self) -> &BTreeMap<RuleKey, RuleSetting> {
        &self.rules
    }

    /// Language scope, if bound.
    #[must_use]
    pub fn language(&self) -> Option<&LanguageScope> {
        self.language.as_ref()
    }

    /// Plugin bindings.
    #[must_use]
    pub fn plugins(&self) -> &BTreeMap<String, String> {
        &self.plugins
    }

    /// Returns true if both the file matcher and the language scope accept
    /// the normalized path.
    #[must_use]
    pub fn applies_to(&self, path: &str) -> bool {
        self.matcher.matches(path) && self.language.as_ref().map_or(true, |l| l.accepts(path))
    }
}

/// A validated, immutable overlay chain. Safe to share across threads.
#[derive(Debug, Clone)]
pub struct CompiledChain {
    overlays: Vec<CompiledOverlay>,
    ignore_patterns: Vec<String>,
    ignores: Option<Gitignore>,
}

impl CompiledChain {
    /// Compiled overlays in precedence order.
    #[must_use]
    pub fn overlays(&self) -> &[CompiledOverlay] {
        &self.overlays
    }

    /// Chain-level ignore patterns as written.
    #[must_use]
    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore_patterns
    }

    /// Returns true if a global ignore pattern covers the normalized path
    /// or one of its parent directories.
    ///
    /// Rooted paths are checked the same way, ancestor by ancestor.
    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        let Some(ignores) = &self.ignores else {
            return false;
        };
        if !path.starts_with('/') {
            return ignores.matched_path_or_any_parents(path, false).is_ignore();
        }
        let path = Path::new(path);
        let parent_ignored = path
            .ancestors()
            .skip(1)
            .filter(|dir| dir.parent().is_some())
            .any(|dir| ignores.matched(dir, true).is_ignore());
        parent_ignored || ignores.matched(path, false).is_ignore()
    }

    /// Checks every overlay's settings against a registry, whether or not
    /// the overlay would match any particular path.
    #[must_use]
    pub fn validate(&self, registry: &dyn RuleRegistry) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for overlay in &self.overlays {
            for (key, setting) in &overlay.rules {
                check_setting(registry, &overlay.position, key, setting, &mut diagnostics);
            }
        }
        diagnostics
    }
}
