//! List rules command implementation.

use anyhow::{Context, Result};
use lint_overlay_rules::{known_rules, Preset};

/// Runs the list-rules command.
///
/// # Errors
///
/// Fails if an embedded preset does not parse.
pub fn run() -> Result<()> {
    let registry = known_rules();
    let width = registry
        .iter()
        .map(|(key, _)| key.as_str().len())
        .max()
        .unwrap_or(0);

    println!("Known rules ({}):\n", registry.len());
    println!("{:<width$} {:<8} Description", "Rule", "Default");
    println!("{}", "-".repeat(width + 60));

    for (key, rule) in registry.iter() {
        println!(
            "{:<width$} {:<8} {}",
            key.as_str(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        let overlays = preset
            .chain()
            .with_context(|| format!("Failed to load preset `{}`", preset.name()))?
            .len();
        println!("  {:<12} - {} overlay(s)", preset.name(), overlays);
    }

    println!("\nSelect a preset in lint-overlay.toml, e.g.:");
    println!("  preset = \"typescript\"");

    Ok(())
}
