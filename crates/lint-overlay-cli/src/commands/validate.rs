//! Validate command implementation.

use anyhow::Result;
use lint_overlay_core::{Diagnostic, Resolver};

/// Runs the validate command.
pub fn run(resolver: &Resolver) -> Result<()> {
    let diagnostics = resolver.validate();
    let chain = resolver.chain();

    for diagnostic in &diagnostics {
        println!("\x1b[33m{diagnostic}\x1b[0m");
    }
    println!("{}", summary(chain.overlays().len(), &diagnostics));

    if resolver.options().strict && !diagnostics.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn summary(overlays: usize, diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        format!("\x1b[32mChecked {overlays} overlay(s): no problems found\x1b[0m")
    } else {
        format!(
            "\x1b[33mChecked {overlays} overlay(s): {} problem(s) found\x1b[0m",
            diagnostics.len()
        )
    }
}
