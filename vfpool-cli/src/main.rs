use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "vfpool")]
#[command(about = "PCI resource-pool selector tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a device snapshot through a selector configuration
    Filter {
        /// Device snapshot (JSON array of device records)
        #[arg(short, long)]
        devices: PathBuf,

        /// Selector configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Print matched PCI addresses only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Validate a selector configuration without applying it
    Check {
        /// Selector configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Filter { devices, config, quiet } => commands::filter::run(&devices, &config, quiet),
        Commands::Check { config } => commands::check::run(&config),
    }
}
