//! TOML deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization.
//! They are converted to an [`OverlayChain`](crate::OverlayChain) by the loader.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw TOML representation of an overlay chain.
///
/// Other top-level keys (`preset`, `[resolver]`) belong to
/// [`Config`](crate::Config) and are ignored here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainDto {
    /// Chain-level ignore patterns (gitignore syntax).
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Overlays in precedence order.
    #[serde(rename = "overlay", default)]
    pub overlays: Vec<OverlayDto>,
}

/// TOML representation of one `[[overlay]]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayDto {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Include patterns; empty means every file.
    #[serde(default)]
    pub files: Vec<String>,
    /// Exclude patterns.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Rule settings: a severity or `[severity, options...]`.
    #[serde(default)]
    pub rules: BTreeMap<String, toml::Value>,
    /// Language scope.
    #[serde(default)]
    pub language: Option<LanguageDto>,
    /// Plugin namespace → plugin identifier.
    #[serde(default)]
    pub plugins: BTreeMap<String, String>,
}

/// TOML representation of `[overlay.language]`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageDto {
    /// Parser identifier.
    pub parser: String,
    /// Extensions the parser handles.
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Parser options, passed through.
    #[serde(default)]
    pub options: Option<toml::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty() {
        let dto: ChainDto = toml::from_str("").unwrap();
        assert!(dto.ignores.is_empty());
        assert!(dto.overlays.is_empty());
    }

    #[test]
    fn deserialize_full_chain() {
        let toml_str = r#"
preset = "recommended"
ignores = ["node_modules", "dist"]

[[overlay]]
name = "base"
[overlay.rules]
"no-console" = ["warn", { allow = ["warn", "info"] }]
prefer-const = "error"

[[overlay]]
name = "typescript"
files = ["**/*.{ts,tsx}"]
ignores = ["**/*.d.ts"]
[overlay.language]
parser = "typescript-eslint"
extensions = ["ts", "tsx"]
[overlay.language.options]
project = "./tsconfig.json"
[overlay.plugins]
"@typescript-eslint" = "typescript-eslint"
"#;
        let dto: ChainDto = toml::from_str(toml_str).unwrap();
        assert_eq!(dto.ignores.len(), 2);
        assert_eq!(dto.overlays.len(), 2);
        assert_eq!(dto.overlays[0].rules.len(), 2);
        let language = dto.overlays[1].language.as_ref().unwrap();
        assert_eq!(language.parser, "typescript-eslint");
        assert!(language.options.is_some());
        assert_eq!(dto.overlays[1].plugins.len(), 1);
    }

    #[test]
    fn rejects_unknown_overlay_field() {
        let result: Result<ChainDto, _> = toml::from_str(
            r#"
[[overlay]]
file = ["src/**"]
"#,
        );
        assert!(result.is_err());
    }
}
