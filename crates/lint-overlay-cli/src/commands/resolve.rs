//! Resolve command implementation.

use anyhow::Result;
use lint_overlay_core::{Diagnostic, ResolveError, Resolution, ResolvedConfig, Resolver};
use serde::Serialize;
use std::path::PathBuf;

use crate::OutputFormat;

/// Result of resolving one path, flattened for output.
#[derive(Debug, Serialize)]
pub struct Outcome {
    /// Normalized path.
    pub path: String,
    /// Effective configuration; `None` when strict mode rejected the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ResolvedConfig>,
    /// Diagnostics collected for the path.
    pub diagnostics: Vec<Diagnostic>,
}

impl Outcome {
    /// Returns true if strict mode rejected the path.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.config.is_none()
    }
}

impl From<Result<Resolution, ResolveError>> for Outcome {
    fn from(result: Result<Resolution, ResolveError>) -> Self {
        match result {
            Ok(resolution) => Self {
                path: resolution.config.path().to_string(),
                config: Some(resolution.config),
                diagnostics: resolution.diagnostics,
            },
            Err(ResolveError::Strict { path, diagnostics }) => Self {
                path,
                config: None,
                diagnostics,
            },
        }
    }
}

/// Runs the resolve command.
pub fn run(resolver: &Resolver, paths: &[PathBuf], format: OutputFormat) -> Result<()> {
    let outcomes: Vec<Outcome> = paths
        .iter()
        .map(|p| Outcome::from(resolver.resolve(p)))
        .collect();

    tracing::debug!("Resolved {} path(s)", outcomes.len());

    super::output::print(&outcomes, format)?;

    if outcomes.iter().any(Outcome::failed) {
        std::process::exit(1);
    }

    Ok(())
}
