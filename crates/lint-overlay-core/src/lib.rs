//! # lint-overlay-core
//!
//! Layered configuration resolution for linters.
//!
//! A configuration is an ordered chain of overlays. Each overlay scopes a
//! set of rule settings to files through include/exclude globs and an
//! optional language scope. Resolving a path applies every matching
//! overlay in order; the last one that sets a rule decides its value.
//!
//! This crate provides:
//!
//! - [`Overlay`] and [`OverlayChain`] for building chains
//! - [`CompiledChain`], the validated, shareable form of a chain
//! - [`Resolver`] for per-file resolution with registry checks
//! - [`declarative`] for loading chains from TOML
//!
//! ## Example
//!
//! ```
//! use lint_overlay_core::{Overlay, OverlayChain, Resolver, RuleSetting};
//! use std::path::Path;
//!
//! let chain = OverlayChain::new()
//!     .overlay(Overlay::named("base").rule("no-console", RuleSetting::warn()))
//!     .overlay(
//!         Overlay::named("tests")
//!             .files(["**/*.test.ts"])
//!             .rule("no-console", RuleSetting::off()),
//!     )
//!     .compile()?;
//!
//! let resolver = Resolver::new(chain);
//! let resolution = resolver.resolve(Path::new("src/util.test.ts"))?;
//! assert_eq!(resolution.config.get("no-console"), Some(&RuleSetting::off()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod config;
mod diagnostic;
mod matcher;
mod overlay;
mod registry;
mod resolver;
mod types;

/// TOML-driven chain loading.
pub mod declarative;

pub use chain::{ChainError, CompiledChain, CompiledOverlay, OverlayChain};
pub use config::{Config, ConfigError, ResolverConfig};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use matcher::{normalize_path, FileMatcher, MatcherSyntaxError};
pub use overlay::{LanguageScope, Overlay, OverlayPosition};
pub use registry::{RuleInfo, RuleRegistry, RuleValidator, StaticRegistry};
pub use resolver::{
    resolve, ResolveError, Resolution, ResolvedConfig, Resolver, ResolverOptions,
    UnknownRulePolicy,
};
pub use types::{InvalidSeverity, RuleKey, RuleOptions, RuleSetting, Severity};
