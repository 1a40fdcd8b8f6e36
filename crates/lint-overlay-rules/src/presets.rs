//! Built-in overlay presets.
//!
//! Presets are TOML chains embedded in the binary. They go through the same
//! loader as project files, so a preset is just a chain placed underneath
//! the project's own overlays.

use lint_overlay_core::declarative::{self, LoadChainError};
use lint_overlay_core::OverlayChain;
use std::fmt;
use tracing::{debug, warn};

/// Built-in presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// General JavaScript/TypeScript defaults: core, React, import,
    /// accessibility and security rules, relaxed for tests and config files.
    Recommended,
    /// Everything in `Recommended` plus a type-aware TypeScript overlay.
    Typescript,
}

impl Preset {
    /// All presets, in listing order.
    pub const ALL: [Self; 2] = [Self::Recommended, Self::Typescript];

    /// Looks a preset up by its config name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// Name used in `preset = "..."`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Typescript => "typescript",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::Recommended => include_str!("presets/recommended.toml"),
            Self::Typescript => include_str!("presets/typescript.toml"),
        }
    }

    /// Returns the preset's overlays as an unvalidated chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded TOML fails to load.
    pub fn chain(self) -> Result<OverlayChain, LoadChainError> {
        let own = declarative::parse_chain(self.source())?;
        let chain = match self {
            Self::Recommended => own,
            Self::Typescript => own.layered_on(Self::Recommended.chain()?),
        };
        debug!("Loaded preset {}: {} overlays", self.name(), chain.len());
        Ok(chain)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the chain for a preset name, or `None` if no such preset exists.
///
/// # Errors
///
/// Returns an error if the embedded TOML fails to load.
pub fn preset_chain(name: &str) -> Result<Option<OverlayChain>, LoadChainError> {
    let Some(preset) = Preset::from_name(name) else {
        warn!("Unknown preset `{name}`, continuing without it");
        return Ok(None);
    };
    preset.chain().map(Some)
}
