//! Amur: scaffolding generator for Koa + Mongoose + GraphQL applications.
//!
//! This is the main entry point for the `amur` CLI. It sets up logging,
//! parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

use amur::cli::Cli;
use amur::{commands, exit_codes};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (e.g. `AMUR_LOG=debug`).
const LOG_ENV: &str = "AMUR_LOG";

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Logs go to stderr so stdout stays a clean listing of generated files.
fn init_logging() {
    let filter =
        tracing_subscriber::EnvFilter::new(std::env::var(LOG_ENV).unwrap_or_else(|_| "warn".into()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
