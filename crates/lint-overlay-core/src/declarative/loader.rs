//! DTO → overlay chain conversion with validation.

use crate::chain::OverlayChain;
use crate::overlay::{LanguageScope, Overlay};
use crate::types::{InvalidSeverity, RuleSetting};

use super::config_dto::{ChainDto, LanguageDto, OverlayDto};
use miette::Diagnostic;

/// Errors during DTO → chain conversion.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum LoadError {
    /// A rule setting has a severity outside `{off, warn, error}`.
    #[error("{context}: {source}")]
    #[diagnostic(code(lint_overlay::invalid_severity))]
    InvalidSeverity {
        /// Where the error occurred (e.g., `overlay[0].rules.no-console`).
        context: String,
        /// The underlying severity error.
        source: InvalidSeverity,
    },

    /// A language scope has an empty parser name.
    #[error("{context}: parser must not be empty")]
    #[diagnostic(code(lint_overlay::empty_parser))]
    EmptyParser {
        /// Where the error occurred.
        context: String,
    },
}

/// Converts a [`ChainDto`] to an unvalidated [`OverlayChain`].
///
/// Patterns are kept raw; they are checked when the chain is compiled.
///
/// # Errors
///
/// Returns the first error encountered during conversion.
pub fn load(dto: ChainDto) -> Result<OverlayChain, LoadError> {
    let overlays = dto
        .overlays
        .into_iter()
        .enumerate()
        .map(|(i, o)| convert_overlay(o, i))
        .collect::<Result<Vec<_>, _>>()?;

    let mut chain = OverlayChain::new().ignore(dto.ignores);
    for overlay in overlays {
        chain.push(overlay);
    }
    Ok(chain)
}

fn convert_overlay(dto: OverlayDto, index: usize) -> Result<Overlay, LoadError> {
    let ctx = match &dto.name {
        Some(name) => format!("overlay[{index}] \"{name}\""),
        None => format!("overlay[{index}]"),
    };

    let mut overlay = match dto.name {
        Some(name) => Overlay::named(name),
        None => Overlay::new(),
    }
    .files(dto.files)
    .ignores(dto.ignores);

    for (key, value) in &dto.rules {
        let setting = RuleSetting::from_value(value).map_err(|source| LoadError::InvalidSeverity {
            context: format!("{ctx}.rules.{key}"),
            source,
        })?;
        overlay = overlay.rule(key.as_str(), setting);
    }

    if let Some(language) = dto.language {
        overlay = overlay.language(convert_language(language, &ctx)?);
    }

    for (namespace, plugin) in dto.plugins {
        overlay = overlay.plugin(namespace, plugin);
    }

    Ok(overlay)
}

fn convert_language(dto: LanguageDto, ctx: &str) -> Result<LanguageScope, LoadError> {
    if dto.parser.trim().is_empty() {
        return Err(LoadError::EmptyParser {
            context: format!("{ctx}.language"),
        });
    }
    let mut scope = LanguageScope::new(dto.parser).with_extensions(dto.extensions);
    if let Some(options) = dto.options {
        scope = scope.with_parser_options(options);
    }
    Ok(scope)
}
