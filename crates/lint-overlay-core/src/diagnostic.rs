//! Non-fatal findings collected while resolving a path.

use crate::overlay::OverlayPosition;
use crate::types::RuleKey;
use serde::Serialize;
use std::fmt;

/// Kind of a resolution diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// A setting names a rule the registry does not know.
    UnknownRuleKey,
    /// The registry rejected a setting's options payload.
    InvalidRuleOptions,
}

impl DiagnosticKind {
    /// Stable diagnostic code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::UnknownRuleKey => "lint_overlay::unknown_rule_key",
            Self::InvalidRuleOptions => "lint_overlay::invalid_rule_options",
        }
    }
}

/// A warning-level finding tied to the overlay that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,
    /// The overlay whose setting triggered the diagnostic.
    pub overlay: OverlayPosition,
    /// The rule key involved.
    pub rule: RuleKey,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Creates an `UnknownRuleKey` diagnostic.
    #[must_use]
    pub fn unknown_rule(overlay: OverlayPosition, rule: RuleKey) -> Self {
        let message = format!("unknown rule `{rule}`");
        Self {
            kind: DiagnosticKind::UnknownRuleKey,
            overlay,
            rule,
            message,
        }
    }

    /// Creates an `InvalidRuleOptions` diagnostic.
    #[must_use]
    pub fn invalid_options(overlay: OverlayPosition, rule: RuleKey, reason: &str) -> Self {
        let message = format!("invalid options for `{rule}`: {reason}");
        Self {
            kind: DiagnosticKind::InvalidRuleOptions,
            overlay,
            rule,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "warning[{}] {}: {}", self.kind.code(), self.overlay, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_position() {
        let d = Diagnostic::unknown_rule(
            OverlayPosition {
                index: 3,
                name: Some("typescript".to_string()),
            },
            RuleKey::new("typescript-eslint/no-explicit-any"),
        );
        assert_eq!(
            d.to_string(),
            "warning[lint_overlay::unknown_rule_key] overlay[3] \"typescript\": \
             unknown rule `typescript-eslint/no-explicit-any`"
        );
    }

    #[test]
    fn serializes_kind_in_kebab_case() {
        let d = Diagnostic::invalid_options(
            OverlayPosition {
                index: 0,
                name: None,
            },
            RuleKey::new("max-depth"),
            "expected at most 1 option(s), got 2",
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["kind"], "invalid-rule-options");
        assert_eq!(json["overlay"]["index"], 0);
        assert!(json["overlay"].get("name").is_none());
    }
}
