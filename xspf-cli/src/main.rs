use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

pub mod commands;

use commands::OutputFormat;

/// XSPF playlist tool
///
/// Inspects, validates and converts XSPF ("spiff") playlists.
#[derive(Parser, Debug)]
#[command(name = "xspf")]
#[command(about = "Inspect, validate and convert XSPF playlists")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Treat a playlist that does not re-serialize identically as invalid
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print a summary of a playlist
    Inspect {
        /// Playlist file to read
        file: PathBuf,

        /// Dump the whole playlist as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Check that a playlist parses
    Validate {
        /// Playlist file to read
        file: PathBuf,
    },

    /// Write a playlist in another format
    Convert {
        /// Playlist file to read
        file: PathBuf,

        /// Output format (defaults to XSPF_OUTPUT_FORMAT, then xspf)
        #[arg(long, value_enum)]
        to: Option<OutputFormat>,

        /// File to write
        #[arg(short, long)]
        output: PathBuf,
    },
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => {
                return Err(anyhow::anyhow!(
                    "Invalid log level '{}'. Valid levels: error, warn, info, debug, trace",
                    self.log_level
                ));
            }
        }

        if let Command::Convert { file, output, .. } = &self.command {
            if file == output {
                return Err(anyhow::anyhow!(
                    "Refusing to overwrite the input file '{}'",
                    file.display()
                ));
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub log_level: String,
    pub strict: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            command: args.command,
            log_level: args.log_level,
            strict: args.strict,
        }
    }
}

impl Config {
    /// Create configuration from command line arguments and environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_args(Args::parse(), |key| std::env::var(key).ok())
    }

    /// Apply environment overrides to parsed arguments.
    ///
    /// `lookup` resolves an environment variable by name.
    pub fn from_args(mut args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(log_level) = lookup("XSPF_LOG_LEVEL") {
            args.log_level = log_level;
        }

        if let Some(strict) = lookup("XSPF_STRICT") {
            args.strict = parse_flag(&strict)
                .with_context(|| format!("Invalid XSPF_STRICT environment variable '{}'", strict))?;
        }

        // An explicit --to wins over the environment
        if let Command::Convert { to, .. } = &mut args.command {
            match lookup("XSPF_OUTPUT_FORMAT") {
                Some(format) if to.is_none() => {
                    *to = Some(
                        format
                            .parse()
                            .context("Invalid XSPF_OUTPUT_FORMAT environment variable")?,
                    );
                }
                _ => {}
            }
        }

        args.validate()?;

        Ok(Config::from(args))
    }

    /// Log configuration summary
    pub fn print_summary(&self) {
        debug!("Configuration:");
        debug!("  Command: {:?}", self.command);
        debug!("  Strict: {}", self.strict);
        debug!("  Log level: {}", self.log_level);
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(anyhow::anyhow!("expected a boolean")),
    }
}

/// Initialize tracing/logging with the specified log level
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = match log_level.to_lowercase().as_str() {
        "error" => "error",
        "info" => "info",
        "debug" => "debug",
        "trace" => "trace",
        _ => "warn",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to parse configuration")?;

    init_tracing(&config.log_level).context("Failed to initialize logging")?;
    config.print_summary();

    match commands::run(&config) {
        Ok(()) => {
            info!("Done");
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
