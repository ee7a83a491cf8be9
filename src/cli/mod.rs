use std::path::PathBuf;

use clap::{Parser, ValueEnum};

mod validate;

#[derive(Parser)]
#[command(
    name = "marketplace-check",
    version,
    about = "Validate a Claude plugin marketplace manifest and the paths it references"
)]
pub struct Cli {
    /// Path to marketplace.json (usually .claude-plugin/marketplace.json)
    manifest: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Resolve plugin paths against this directory instead of the
    /// manifest's grandparent
    #[arg(long, value_name = "DIR")]
    repo_root: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable report (default)
    #[default]
    Text,
    /// JSON object with errors and warnings
    Json,
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    // Dropping the handle stops logging.
    let _logger = match marketplace_check::logging::init_logging(
        marketplace_check::logging::level_for(cli.verbose),
    ) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("marketplace-check: {e}");
            std::process::exit(1);
        }
    };

    match cli.manifest {
        Some(manifest) => validate::run(manifest, cli.repo_root, cli.format),
        None => {
            eprintln!("Usage: marketplace-check <path-to-marketplace.json>");
            eprintln!("Run `marketplace-check --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "marketplace-check: Claude Plugin Marketplace Validator\n\
         ├─ version:    {}\n\
         ├─ author:     {}\n\
         ├─ source:     {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
