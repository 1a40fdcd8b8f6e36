//! Overlay chains driven by TOML configuration.
//!
//! # Architecture
//!
//! ```text
//! TOML text
//!   ↓ serde (DTO layer)
//! config_dto types
//!   ↓ loader: severities validated
//! OverlayChain (unvalidated)
//!   ↓ compile(): matchers validated
//! CompiledChain
//! ```

pub mod config_dto;
pub mod loader;

use crate::chain::{ChainError, CompiledChain, OverlayChain};
use miette::Diagnostic;
use std::path::{Path, PathBuf};

/// Errors from parsing TOML and building a chain.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadChainError {
    /// Reading the file failed.
    #[error("failed to read {path}: {source}")]
    #[diagnostic(code(lint_overlay::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// TOML deserialization failed.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(lint_overlay::toml))]
    Toml(#[from] toml::de::Error),

    /// DTO validation failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Load(#[from] loader::LoadError),

    /// Matcher compilation failed.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Chain(#[from] ChainError),
}

/// Parses TOML content into an unvalidated chain.
///
/// Returns an empty chain if no `ignores` or `[[overlay]]` are present.
///
/// # Errors
///
/// Returns an error if TOML parsing or severity validation fails.
pub fn parse_chain(content: &str) -> Result<OverlayChain, LoadChainError> {
    let dto: config_dto::ChainDto = toml::from_str(content)?;
    Ok(loader::load(dto)?)
}

/// Parses TOML content and compiles the resulting chain.
///
/// # Errors
///
/// Returns an error if parsing, validation or matcher compilation fails.
pub fn load_chain_from_toml(content: &str) -> Result<CompiledChain, LoadChainError> {
    Ok(parse_chain(content)?.compile()?)
}

/// Reads a TOML file into an unvalidated chain.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn parse_chain_file(path: &Path) -> Result<OverlayChain, LoadChainError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadChainError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_chain(&content)
}
