//! APHELION CLI - bundles the hub into a single HTML file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod project;

#[derive(Parser)]
#[command(name = "aphelion")]
#[command(about = "Bundle the APHELION hub into a single HTML file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root directory
    #[arg(short, long, default_value = ".", global = true)]
    root: PathBuf,

    /// Path to the aphelion.toml project file, relative to the root
    #[arg(short, long, default_value = project::PROJECT_FILE, global = true)]
    project: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build dist/index.html (the default)
    Build {
        /// Output directory (defaults to project file or "dist")
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate all inputs without writing anything
    Check,

    /// Scaffold a new project under the root
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for command output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match command_or_default(cli.command) {
        Commands::Build { out_dir } => {
            commands::build::run(&cli.root, &cli.project, out_dir)?;
        }
        Commands::Check => {
            commands::check::run(&cli.root, &cli.project)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.root, yes)?;
        }
    }

    Ok(())
}

/// No subcommand means a plain build.
fn command_or_default(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Build { out_dir: None })
}
