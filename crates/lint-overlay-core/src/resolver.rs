//! Per-file resolution of an overlay chain.
//!
//! Overlays are applied in chain order; each one that matches the path
//! overwrites the whole setting of every key it names. Resolution reads the
//! chain and never mutates it, so one [`Resolver`] can serve many threads.

use crate::chain::CompiledChain;
use crate::diagnostic::Diagnostic;
use crate::matcher::normalize_path;
use crate::overlay::{LanguageScope, OverlayPosition};
use crate::registry::RuleRegistry;
use crate::types::{RuleKey, RuleSetting, Severity};

use miette::Diagnostic as MietteDiagnostic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// What to do with settings for rules the registry does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownRulePolicy {
    /// Report and leave the key out of the result.
    #[default]
    Drop,
    /// Report and keep the key in the result.
    Keep,
}

/// Resolver behaviour knobs.
#[derive(Debug, Clone, Default)]
pub struct ResolverOptions {
    /// Handling of unknown rule keys.
    pub unknown_rules: UnknownRulePolicy,
    /// Turn any diagnostic into a [`ResolveError::Strict`].
    pub strict: bool,
    /// Absolute paths below this directory are matched relative to it.
    pub base_dir: Option<PathBuf>,
}

/// Effective configuration for one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    path: String,
    rules: BTreeMap<RuleKey, RuleSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<LanguageScope>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    plugins: BTreeMap<String, String>,
    applied_overlays: Vec<usize>,
    ignored: bool,
}

impl ResolvedConfig {
    fn empty(path: String) -> Self {
        Self {
            path,
            rules: BTreeMap::new(),
            language: None,
            plugins: BTreeMap::new(),
            applied_overlays: Vec::new(),
            ignored: false,
        }
    }

    /// The normalized path this configuration was resolved for.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Setting for a rule, if any applicable overlay set it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RuleSetting> {
        self.rules.get(key)
    }

    /// Returns true if an applicable overlay set the rule (even to `off`).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.rules.contains_key(key)
    }

    /// All resolved settings in key order.
    #[must_use]
    pub fn rules(&self) -> &BTreeMap<RuleKey, RuleSetting> {
        &self.rules
    }

    /// Settings whose severity is not `off`.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&RuleKey, &RuleSetting)> {
        self.rules.iter().filter(|(_, s)| s.severity.is_enabled())
    }

    /// Language scope of the last applicable overlay that declared one.
    #[must_use]
    pub fn language(&self) -> Option<&LanguageScope> {
        self.language.as_ref()
    }

    /// Plugin bindings merged from all applicable overlays.
    #[must_use]
    pub fn plugins(&self) -> &BTreeMap<String, String> {
        &self.plugins
    }

    /// Chain indices of the overlays that applied, in order.
    #[must_use]
    pub fn applied_overlays(&self) -> &[usize] {
        &self.applied_overlays
    }

    /// Returns true if a global ignore pattern excluded the path.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Number of resolved settings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rule is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Highest configured severity, `off` when nothing is set.
    #[must_use]
    pub fn max_severity(&self) -> Severity {
        self.rules
            .values()
            .map(|s| s.severity)
            .max()
            .unwrap_or(Severity::Off)
    }
}

/// A resolved configuration plus the diagnostics collected on the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The effective configuration.
    pub config: ResolvedConfig,
    /// Warning-level findings, in chain order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// Returns true if any diagnostic was produced.
    #[must_use]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Errors from a strict resolver.
#[derive(Debug, thiserror::Error, MietteDiagnostic)]
pub enum ResolveError {
    /// Strict mode turned diagnostics into a failure.
    #[error("{path}: {} configuration problem(s):\n{}", .diagnostics.len(), format_diagnostics(.diagnostics))]
    #[diagnostic(
        code(lint_overlay::strict),
        help("fix the configuration or disable strict mode")
    )]
    Strict {
        /// The path being resolved.
        path: String,
        /// Everything that was reported.
        diagnostics: Vec<Diagnostic>,
    },
}

fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("  - {d}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolves a path against a chain without registry checks.
///
/// ```
/// use lint_overlay_core::{resolve, Overlay, OverlayChain, RuleSetting};
/// use std::path::Path;
///
/// let chain = OverlayChain::new()
///     .overlay(Overlay::new().rule("no-console", RuleSetting::warn()))
///     .overlay(Overlay::new().files(["**/*.test.ts"]).rule("no-console", RuleSetting::off()))
///     .compile()?;
///
/// let page = resolve(&chain, Path::new("src/app/page.ts"));
/// assert_eq!(page.get("no-console"), Some(&RuleSetting::warn()));
///
/// let test = resolve(&chain, Path::new("src/app/page.test.ts"));
/// assert_eq!(test.get("no-console"), Some(&RuleSetting::off()));
/// # Ok::<(), lint_overlay_core::ChainError>(())
/// ```
#[must_use]
pub fn resolve(chain: &CompiledChain, path: &Path) -> ResolvedConfig {
    let path = normalize_path(path);
    let mut diagnostics = Vec::new();
    apply_chain(chain, path, None, UnknownRulePolicy::Keep, &mut diagnostics)
}

/// Resolves paths against a shared chain, checking keys against a registry.
#[derive(Clone)]
pub struct Resolver {
    chain: Arc<CompiledChain>,
    registry: Option<Arc<dyn RuleRegistry>>,
    options: ResolverOptions,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("overlays", &self.chain.overlays().len())
            .field("has_registry", &self.registry.is_some())
            .field("options", &self.options)
            .finish()
    }
}

impl Resolver {
    /// Creates a resolver without registry and with default options.
    #[must_use]
    pub fn new(chain: impl Into<Arc<CompiledChain>>) -> Self {
        Self {
            chain: chain.into(),
            registry: None,
            options: ResolverOptions::default(),
        }
    }

    /// Validates rule keys and options against a registry.
    #[must_use]
    pub fn with_registry(mut self, registry: Arc<dyn RuleRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Replaces the options.
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// The chain being resolved.
    #[must_use]
    pub fn chain(&self) -> &CompiledChain {
        &self.chain
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolves one path.
    ///
    /// # Errors
    ///
    /// Only in strict mode: returns [`ResolveError::Strict`] if any
    /// diagnostic was produced. Otherwise diagnostics travel in the
    /// returned [`Resolution`].
    pub fn resolve(&self, path: &Path) -> Result<Resolution, ResolveError> {
        let relative = match &self.options.base_dir {
            Some(base) => path.strip_prefix(base).unwrap_or(path),
            None => path,
        };
        let normalized = normalize_path(relative);

        let mut diagnostics = Vec::new();
        let config = apply_chain(
            &self.chain,
            normalized,
            self.registry.as_deref(),
            self.options.unknown_rules,
            &mut diagnostics,
        );

        if self.options.strict && !diagnostics.is_empty() {
            return Err(ResolveError::Strict {
                path: config.path,
                diagnostics,
            });
        }

        Ok(Resolution {
            config,
            diagnostics,
        })
    }

    /// Checks every overlay of the chain against the registry, regardless
    /// of which paths they match.
    ///
    /// Returns an empty list when no registry is configured.
    #[must_use]
    pub fn validate(&self) -> Vec<Diagnostic> {
        self.registry
            .as_deref()
            .map(|registry| self.chain.validate(registry))
            .unwrap_or_default()
    }
}

/// Returns false if the key is unknown to the registry.
pub(crate) fn check_setting(
    registry: &dyn RuleRegistry,
    position: &OverlayPosition,
    key: &RuleKey,
    setting: &RuleSetting,
    diagnostics: &mut Vec<Diagnostic>,
) -> bool {
    let Some(validator) = registry.lookup(key) else {
        diagnostics.push(Diagnostic::unknown_rule(position.clone(), key.clone()));
        return false;
    };
    if let Some(options) = &setting.options {
        if let Err(reason) = validator.validate_options(options) {
            diagnostics.push(Diagnostic::invalid_options(
                position.clone(),
                key.clone(),
                &reason,
            ));
        }
    }
    true
}

fn apply_chain(
    chain: &CompiledChain,
    path: String,
    registry: Option<&dyn RuleRegistry>,
    unknown_rules: UnknownRulePolicy,
    diagnostics: &mut Vec<Diagnostic>,
) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::empty(path);

    if chain.is_ignored(&resolved.path) {
        debug!("{} is globally ignored", resolved.path);
        resolved.ignored = true;
        return resolved;
    }

    for overlay in chain.overlays() {
        if !overlay.applies_to(&resolved.path) {
            continue;
        }
        trace!("{} applies to {}", overlay.position(), resolved.path);
        resolved.applied_overlays.push(overlay.position().index);

        for (key, setting) in overlay.rules() {
            if let Some(registry) = registry {
                let known = check_setting(registry, overlay.position(), key, setting, diagnostics);
                if !known && unknown_rules == UnknownRulePolicy::Drop {
                    continue;
                }
            }
            resolved.rules.insert(key.clone(), setting.clone());
        }

        if let Some(language) = overlay.language() {
            resolved.language = Some(language.clone());
        }
        resolved.plugins.extend(
            overlay
                .plugins()
                .iter()
                .map(|(ns, plugin)| (ns.clone(), plugin.clone())),
        );
    }

    debug!(
        "Resolved {}: {} rule(s) from {} overlay(s)",
        resolved.path,
        resolved.rules.len(),
        resolved.applied_overlays.len()
    );
    resolved
}
