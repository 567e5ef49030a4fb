//! comptour CLI Binary
//!
//! Prints a tour of compile-time evaluation, lazy range pipelines, and
//! type-conditional formatting, one labeled line per demonstration.
//!
//! # Usage
//!
//! ```bash
//! # Print the full showcase
//! ct
//!
//! # Same, with debug logging
//! ct run --verbose
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use ct_cli::{
    cli::CliConfig,
    commands::{self, run::RunArgs},
    Result,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "ct",
    version = env!("CARGO_PKG_VERSION"),
    about = "comptour: a tour of compile-time evaluation and lazy pipelines"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, global = true, value_enum)]
    log: Option<LogLevel>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full showcase (the default when no command is given)
    Run(RunArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging
    setup_logging(cli.verbose, cli.quiet, cli.log)?;

    // Load configuration
    let config = CliConfig::load(cli.config.as_deref())?;

    // Execute command
    let result = match cli.command {
        Some(Commands::Run(args)) => commands::run_command(args, &config),
        None => commands::run_command(RunArgs::default(), &config),
    };

    match result {
        Ok(_) => {
            if cli.verbose > 0 {
                info!("Command completed successfully");
            }
            Ok(())
        }
        Err(e) => {
            use tracing::error;
            error!("{}", e);
            if cli.verbose > 0 {
                error!(?e, "detailed error context");
            }
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool, log_level: Option<LogLevel>) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();

    Ok(())
}
