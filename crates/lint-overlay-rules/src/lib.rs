//! # lint-overlay-rules
//!
//! Built-in rule catalog and overlay presets for lint-overlay.
//!
//! The catalog is a [`StaticRegistry`] describing well-known JavaScript and
//! TypeScript lint rules, so resolvers can flag misspelled keys and
//! oversized option payloads. Presets are ready-made overlay chains that a
//! project config places underneath its own overlays.
//!
//! ## Catalog namespaces
//!
//! | Namespace | Covers |
//! |-----------|--------|
//! | *(none)* | Core language rules (`no-console`, `semi`, …) |
//! | `react` | React components and JSX |
//! | `react-hooks` | Hook call rules |
//! | `import` | Module import hygiene |
//! | `jsx-a11y` | Accessibility in JSX |
//! | `@typescript-eslint` | TypeScript rules, including type-aware ones |
//! | `security` | Node.js security pitfalls |
//! | `check-file` | File and folder naming conventions |
//!
//! ## Usage
//!
//! ```
//! use lint_overlay_core::{Resolver, RuleSetting};
//! use lint_overlay_rules::{known_rules, Preset};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let chain = Preset::Recommended.chain()?.compile()?;
//! let resolver = Resolver::new(chain).with_registry(Arc::new(known_rules()));
//!
//! let resolution = resolver.resolve(Path::new("src/app/page.test.tsx"))?;
//! assert_eq!(resolution.config.get("no-console"), Some(&RuleSetting::off()));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod presets;

pub use catalog::known_rules;
pub use presets::{preset_chain, Preset};

/// Re-export core types for convenience.
pub use lint_overlay_core::{RuleInfo, Severity, StaticRegistry};
