//! Shared output formatting for resolution results.

use anyhow::Result;
use lint_overlay_core::{ResolvedConfig, Severity};

use super::resolve::Outcome;
use crate::OutputFormat;

/// Print resolution results in the specified format.
pub fn print(outcomes: &[Outcome], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(outcomes),
        OutputFormat::Json => return print_json(outcomes),
        OutputFormat::Compact => {
            for line in compact_lines(outcomes) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "\x1b[31merror\x1b[0m",
        Severity::Warn => "\x1b[33mwarn \x1b[0m",
        Severity::Off => "\x1b[2moff  \x1b[0m",
    }
}

fn print_text(outcomes: &[Outcome]) {
    for outcome in outcomes {
        println!("\x1b[1m{}\x1b[0m", outcome.path);
        match &outcome.config {
            None => println!("  \x1b[31mrejected\x1b[0m: strict mode"),
            Some(config) if config.is_ignored() => println!("  ignored by global ignores"),
            Some(config) => print_config(config),
        }
        for diagnostic in &outcome.diagnostics {
            println!("  \x1b[33m{diagnostic}\x1b[0m");
        }
        println!();
    }

    let failed = outcomes.iter().filter(|o| o.failed()).count();
    let diagnostics: usize = outcomes.iter().map(|o| o.diagnostics.len()).sum();
    let summary_color = if failed > 0 {
        "\x1b[31m"
    } else if diagnostics > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    println!(
        "{}Resolved {} path(s): {} rejected, {} diagnostic(s)\x1b[0m",
        summary_color,
        outcomes.len(),
        failed,
        diagnostics
    );
}

fn print_config(config: &ResolvedConfig) {
    let overlays: Vec<String> = config
        .applied_overlays()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  overlays: {}", overlays.join(", "));

    if let Some(language) = config.language() {
        if language.extensions.is_empty() {
            println!("  language: {}", language.parser);
        } else {
            println!(
                "  language: {} ({})",
                language.parser,
                language.extensions.join(", ")
            );
        }
    }
    for (namespace, plugin) in config.plugins() {
        println!("  plugin:   {namespace} = {plugin}");
    }

    let width = config.rules().keys().map(|k| k.as_str().len()).max().unwrap_or(0);
    for (key, setting) in config.rules() {
        let options: Vec<String> = setting
            .options
            .iter()
            .flat_map(|o| o.values())
            .map(ToString::to_string)
            .collect();
        println!(
            "    {} {:<width$} {}",
            severity_indicator(setting.severity),
            key.as_str(),
            options.join(" ")
        );
    }
}

fn print_json(outcomes: &[Outcome]) -> Result<()> {
    let json = serde_json::to_string_pretty(outcomes)?;
    println!("{json}");
    Ok(())
}

/// One line per enabled rule, ignored path or diagnostic.
fn compact_lines(outcomes: &[Outcome]) -> Vec<String> {
    let mut lines = Vec::new();
    for outcome in outcomes {
        match &outcome.config {
            None => lines.push(format!("{}: rejected", outcome.path)),
            Some(config) if config.is_ignored() => {
                lines.push(format!("{}: ignored", outcome.path));
            }
            Some(config) => {
                for (key, setting) in config.enabled_rules() {
                    lines.push(format!("{}: {} {}", outcome.path, key, setting));
                }
            }
        }
        for diagnostic in &outcome.diagnostics {
            lines.push(format!("{}: {}", outcome.path, diagnostic));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use lint_overlay_core::{Overlay, OverlayChain, Resolver, RuleOptions, RuleSetting};
    use std::path::Path;

    fn outcomes() -> Vec<Outcome> {
        let chain = OverlayChain::new()
            .ignore(["dist"])
            .overlay(
                Overlay::new()
                    .rule("no-console", RuleSetting::warn())
                    .rule(
                        "max-depth",
                        RuleSetting::warn().with_options(RuleOptions::new(vec![
                            toml::Value::Integer(4),
                        ])),
                    )
                    .rule("react/prop-types", RuleSetting::off()),
            )
            .compile()
            .unwrap();
        let resolver = Resolver::new(chain);
        ["src/a.js", "dist/a.js"]
            .into_iter()
            .map(|p| Outcome::from(resolver.resolve(Path::new(p))))
            .collect()
    }

    #[test]
    fn compact_skips_disabled_rules() {
        let lines = compact_lines(&outcomes());
        assert_eq!(
            lines,
            vec![
                "src/a.js: max-depth warn 4",
                "src/a.js: no-console warn",
                "dist/a.js: ignored",
            ]
        );
    }

    #[test]
    fn json_lists_every_path() {
        let json = serde_json::to_value(outcomes()).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
        assert_eq!(json[0]["config"]["rules"]["max-depth"]["severity"], "warn");
        assert_eq!(json[1]["config"]["ignored"], true);
    }
}
