//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# lint-overlay configuration
#
# Overlays apply in order. For each rule, the last overlay that matches a
# file and sets the rule decides its severity and options.

# Built-in overlays placed underneath the ones below ("recommended", "typescript")
preset = "recommended"

# Paths that are never linted (gitignore syntax)
ignores = ["node_modules", "dist", "coverage"]

[resolver]
# Fail when a rule key is unknown or its options are rejected
strict = false
# What to do with unknown rule keys: "drop" or "keep"
unknown_rules = "drop"

[[overlay]]
name = "project"
[overlay.rules]
no-console = ["warn", { allow = ["warn", "error"] }]
max-params = ["warn", 4]

[[overlay]]
name = "scripts"
files = ["scripts/**"]
[overlay.rules]
no-console = "off"

# [[overlay]]
# name = "generated"
# files = ["src/**"]
# ignores = ["src/**/*.gen.ts"]
# [overlay.rules]
# complexity = "off"
"#;

/// Runs the init command.
pub fn run(project_dir: &Path, force: bool) -> Result<()> {
    let config_path = project_dir.join("lint-overlay.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Created lint-overlay.toml");
    println!("\nNext steps:");
    println!("  1. Edit lint-overlay.toml to add overlays");
    println!("  2. Run: lint-overlay validate");
    println!("  3. Run: lint-overlay resolve src/index.ts");

    Ok(())
}
