//! Token Authorizer - local harness
//!
//! Evaluates a token or a gateway authorizer event and prints the result.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;
use token_authorizer::{
    config::Config, logging, metrics, AuthRequest, Authorizer, AuthorizerError,
    SentinelAuthorizer, TokenAuthorizerEvent,
};
use tracing::{info, warn};

/// Exit code for an `Unauthorized` decision
const EXIT_UNAUTHORIZED: u8 = 3;
/// Exit code for an `InvalidToken` decision
const EXIT_INVALID_TOKEN: u8 = 4;

/// Token Authorizer - evaluate bearer tokens into execute-api policies
#[derive(Parser, Debug)]
#[command(name = "token-authorizer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overrides the config file
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Write Prometheus metrics to stderr after the decision
    #[arg(long, global = true)]
    print_metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate a token against a resource identifier
    Evaluate {
        /// Bearer token
        #[arg(short, long)]
        token: String,

        /// Resource identifier (method ARN)
        #[arg(short, long, default_value = "")]
        resource: String,
    },
    /// Evaluate a token authorizer event read from a file or stdin
    Event {
        /// Event JSON file; stdin when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path))?,
        None => Config::default(),
    };
    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
        config.validate()?;
    }

    logging::init_subscriber(&config.logging)?;
    info!("Starting token-authorizer v{}", token_authorizer::VERSION);

    let request = match args.command {
        Command::Evaluate { token, resource } => AuthRequest::new(token, resource),
        Command::Event { file } => {
            let event = match file {
                Some(path) => {
                    let reader = File::open(&path)
                        .with_context(|| format!("Failed to open event file {:?}", path))?;
                    TokenAuthorizerEvent::from_reader(BufReader::new(reader))?
                }
                None => TokenAuthorizerEvent::from_reader(io::stdin().lock())?,
            };
            AuthRequest::from(event)
        }
    };

    let outcome = SentinelAuthorizer.authorize(&request);
    if config.metrics.enabled {
        metrics::record_decision(&outcome);
    }
    info!(
        outcome = outcome.label(),
        status = outcome.status_code(),
        "Decision made"
    );

    if args.print_metrics {
        if config.metrics.enabled {
            eprint!("{}", metrics::gather_text()?);
        } else {
            warn!("--print-metrics ignored: metrics are disabled in configuration");
        }
    }

    let code = match outcome.into_result() {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            match err {
                AuthorizerError::Unauthorized => ExitCode::from(EXIT_UNAUTHORIZED),
                AuthorizerError::InvalidToken => ExitCode::from(EXIT_INVALID_TOKEN),
            }
        }
    };

    Ok(code)
}
