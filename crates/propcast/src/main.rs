//! propcast CLI - generate PropTypes descriptors from TypeScript component types.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(name = "propcast")]
#[command(about = "Generate runtime PropTypes descriptors from TypeScript component types")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to propcast.toml config file
    #[arg(short, long, default_value = "propcast.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config and an example graph
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert components into PropTypes views
    Convert {
        /// Graph document or directory of graph documents
        input: PathBuf,

        /// Output directory (defaults to config, or stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (defaults to config or json)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Report properties that cannot be converted
    Check {
        /// Graph document or directory of graph documents
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
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
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes)?;
        }
        Commands::Convert {
            input,
            output,
            format,
        } => {
            commands::convert::run(&cli.config, input, output, format)?;
        }
        Commands::Check { input } => {
            commands::check::run(&cli.config, input)?;
        }
    }

    Ok(())
}
