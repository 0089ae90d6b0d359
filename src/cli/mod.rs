//! Command-line interface for parbench
//!
//! Running `parbench` with no subcommand runs the benchmark with the
//! configured dataset size.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// parbench - compare sequential and parallel filter-map strategies
#[derive(Parser)]
#[command(name = "parbench", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging, spinners and decorations; the report is still printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark (default)
    Run(commands::run::RunArgs),
    /// Show the effective configuration
    Config,
    /// Show version information
    Version,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let output = Output::new(self.quiet);
        let config_path = self.config.as_deref();

        match self.command {
            Some(Commands::Run(args)) => commands::run::execute(args, config_path, &output),
            Some(Commands::Config) => commands::config::execute(config_path, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => commands::run::execute(commands::run::RunArgs::default(), config_path, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stderr keeps log lines out of the report on stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
