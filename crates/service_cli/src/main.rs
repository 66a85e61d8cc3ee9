//! Newton CLI - Command Line Front End for the Root Finder
//!
//! This is the operational entry point for the solver_core library.
//!
//! # Commands
//!
//! - `newton solve [--guess <x>]` - Find a root of `x^3 - x - 1`
//! - `newton check` - Show the effective solver configuration
//!
//! # Architecture
//!
//! As the service layer, this crate owns everything the engine does not:
//! reading input, layering configuration, logging and rendering reports.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod prompt;
mod report;

pub use error::{CliError, Result};

use crate::config::CliConfig;

/// Newton-Raphson Root Finder CLI
#[derive(Parser)]
#[command(name = "newton")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "newton.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a real root of f(x) = x^3 - x - 1
    Solve {
        /// Starting point; prompted for on stdin when omitted
        #[arg(short, long, allow_negative_numbers = true)]
        guess: Option<f64>,

        /// Convergence tolerance on |f(x)|
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Maximum number of Newton steps
        #[arg(short, long)]
        max_iterations: Option<usize>,
    },

    /// Check the effective solver configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing on stderr so reports on stdout stay clean
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let config = CliConfig::load(&cli.config)?;
    debug!(?config, path = %cli.config, "Loaded configuration");

    match cli.command {
        Commands::Solve {
            guess,
            tolerance,
            max_iterations,
        } => commands::solve::run(
            config.solver.with_overrides(tolerance, max_iterations),
            guess,
        ),
        Commands::Check => commands::check::run(config.solver, &cli.config),
    }
}
