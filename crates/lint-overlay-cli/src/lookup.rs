//! Locating the configuration file.
//!
//! An explicit `--config` path must exist. Without one, the first existing
//! file among `lint-overlay.toml`, `.lint-overlay.toml` (both in the project
//! directory) and the user-level `config.toml` is taken. Finding nothing is
//! not an error: the chain is then empty.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Project-level config file names, in lookup order.
const PROJECT_CONFIG_NAMES: &[&str] = &["lint-overlay.toml", ".lint-overlay.toml"];

/// Overrides the user-level config directory (`~/.lint-overlay`).
const USER_DIR_ENV: &str = "LINT_OVERLAY_CONFIG_DIR";

/// Returns the config file to load, or `None` if there is none.
///
/// # Errors
///
/// Fails if `explicit` is given but is not a file.
pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    locate_with(project_dir, explicit, user_config_dir())
}

fn locate_with(
    project_dir: &Path,
    explicit: Option<&Path>,
    user_dir: Option<PathBuf>,
) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            bail!("Config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    let found = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .chain(user_dir.map(|dir| dir.join("config.toml")))
        .find(|candidate| candidate.is_file());

    match &found {
        Some(path) => tracing::debug!("Located config: {}", path.display()),
        None => tracing::debug!("No config under {}", project_dir.display()),
    }
    Ok(found)
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os(USER_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".lint-overlay")))
}
