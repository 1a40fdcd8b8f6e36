//! Subcommand implementations and the shared config loading they use.

pub mod init;
pub mod list_rules;
pub mod output;
pub mod resolve;
pub mod validate;

use anyhow::{Context, Result};
use lint_overlay_core::declarative;
use lint_overlay_core::{CompiledChain, Config, OverlayChain, Resolver};
use lint_overlay_rules::{known_rules, preset_chain};
use std::path::Path;
use std::sync::Arc;

use crate::lookup;

/// Flags that adjust how the resolver is built.
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Force strict mode on top of the config setting.
    pub strict: bool,
    /// Check keys against the built-in catalog.
    pub registry: bool,
}

/// Loads a config file and its compiled chain, preset overlays first.
///
/// Without a file the config is the default and the chain is empty.
pub fn load_chain(path: Option<&Path>) -> Result<(Config, CompiledChain)> {
    let (config, chain) = match path {
        None => {
            tracing::info!("No configuration found, using an empty chain");
            (Config::default(), OverlayChain::new())
        }
        Some(p) => {
            tracing::info!("Using config: {}", p.display());
            let config = Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?;
            let chain = declarative::parse_chain_file(p)
                .with_context(|| format!("Failed to load overlays: {}", p.display()))?;
            (config, chain)
        }
    };

    let chain = match config.preset.as_deref() {
        Some(name) => match preset_chain(name)
            .with_context(|| format!("Failed to load preset `{name}`"))?
        {
            Some(preset) => chain.layered_on(preset),
            None => chain,
        },
        None => chain,
    };

    let chain = chain.compile().context("Invalid overlay chain")?;
    Ok((config, chain))
}

/// Builds a resolver for the project directory.
///
/// `explicit` is the `--config` path, if any.
pub fn load_resolver(
    project_dir: &Path,
    explicit: Option<&Path>,
    options: LoadOptions,
) -> Result<Resolver> {
    let path = lookup::locate(project_dir, explicit)?;
    let (config, chain) = load_chain(path.as_deref())?;

    let mut resolver_options = config.resolver.to_options(Some(project_dir.to_path_buf()));
    resolver_options.strict |= options.strict;

    let mut resolver = Resolver::new(chain).with_options(resolver_options);
    if options.registry {
        resolver = resolver.with_registry(Arc::new(known_rules()));
    }

    tracing::debug!("Built resolver: {:?}", resolver);
    Ok(resolver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_overlay_core::{RuleSetting, UnknownRulePolicy};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PROJECT_CONFIG: &str = r#"
preset = "recommended"

[resolver]
unknown_rules = "keep"

[[overlay]]
name = "project"
files = ["src/**"]
[overlay.rules]
no-console = "error"
"#;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("lint-overlay.toml");
        fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn no_config_gives_empty_chain() {
        let (config, chain) = load_chain(None).unwrap();
        assert!(config.preset.is_none());
        assert!(chain.overlays().is_empty());
    }

    #[test]
    fn preset_overlays_come_first() {
        let (_tmp, path) = write_config(PROJECT_CONFIG);
        let (config, chain) = load_chain(Some(&path)).unwrap();

        assert_eq!(config.resolver.unknown_rules, UnknownRulePolicy::Keep);
        let last = chain.overlays().last().unwrap();
        assert_eq!(last.position().name.as_deref(), Some("project"));
        assert!(chain.overlays().len() > 1);
    }

    #[test]
    fn project_overlay_overrides_preset() {
        let (tmp, _path) = write_config(PROJECT_CONFIG);
        let options = LoadOptions {
            strict: false,
            registry: true,
        };
        let resolver = load_resolver(tmp.path(), None, options).unwrap();

        let absolute = tmp.path().join("src/main.js");
        let resolution = resolver.resolve(&absolute).unwrap();
        assert_eq!(resolution.config.path(), "src/main.js");
        assert_eq!(resolution.config.get("no-console"), Some(&RuleSetting::error()));
        assert!(resolution.diagnostics.is_empty());
    }

    #[test]
    fn strict_flag_is_added_to_config() {
        let (tmp, path) = write_config("[[overlay]]\nrules = { no-consle = \"warn\" }\n");
        let options = LoadOptions {
            strict: true,
            registry: true,
        };
        let resolver = load_resolver(tmp.path(), Some(&path), options).unwrap();
        assert!(resolver.options().strict);
        assert!(resolver.resolve(Path::new("index.js")).is_err());
    }

    #[test]
    fn broken_glob_fails_to_load() {
        let (_tmp, path) = write_config("[[overlay]]\nfiles = [\"src/{a,b\"]\n");
        let err = load_chain(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("src/{a,b"));
    }

    #[test]
    fn missing_explicit_config_fails_before_loading() {
        let tmp = TempDir::new().unwrap();
        let options = LoadOptions {
            strict: false,
            registry: false,
        };
        let missing = Path::new("/nonexistent/lint-overlay.toml");
        let err = load_resolver(tmp.path(), Some(missing), options).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }
}
