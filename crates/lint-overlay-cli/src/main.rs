//! lint-overlay CLI tool.
//!
//! Usage:
//! ```bash
//! lint-overlay resolve [OPTIONS] <PATH>...
//! lint-overlay validate
//! lint-overlay list-rules
//! lint-overlay init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod lookup;

/// Inspect layered lint configuration: which rules apply to which file
#[derive(Parser)]
#[command(name = "lint-overlay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the effective configuration of one or more files
    Resolve {
        /// Files to resolve (they do not need to exist)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Fail if any configuration problem is found
        #[arg(long)]
        strict: bool,

        /// Skip checking rule keys against the built-in catalog
        #[arg(long)]
        no_registry: bool,
    },

    /// Check every overlay against the built-in rule catalog
    Validate {
        /// Treat diagnostics as errors
        #[arg(long)]
        strict: bool,
    },

    /// List built-in rules and presets
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for resolution results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-rule compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_dir = std::env::current_dir()?;
    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Resolve {
            paths,
            format,
            strict,
            no_registry,
        } => {
            let options = commands::LoadOptions {
                strict,
                registry: !no_registry,
            };
            let resolver = commands::load_resolver(&project_dir, explicit, options)?;
            commands::resolve::run(&resolver, &paths, format)
        }
        Commands::Validate { strict } => {
            let options = commands::LoadOptions {
                strict,
                registry: true,
            };
            let resolver = commands::load_resolver(&project_dir, explicit, options)?;
            commands::validate::run(&resolver)
        }
        Commands::ListRules => commands::list_rules::run(),
        Commands::Init { force } => commands::init::run(&project_dir, force),
    }
}
