//! Herald CLI entrypoint for publishing CI status comments.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use herald::{ActionConfig, CiContext, GitHubContext, NotifyError};
use tracing_subscriber::EnvFilter;

/// Publishes a status message as the single preview comment on the pull
/// request that triggered this workflow run.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Message body to publish; the identity marker is appended
    /// automatically.
    message: String,
}

fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), NotifyError> {
    let config = ActionConfig::from_env();
    let context = GitHubContext::from_config(&config)?;
    context.notify(&args.message)?;
    tracing::info!("published status comment on {}", context.source_url());
    Ok(())
}

/// Logs to stderr so workflow step output stays clean; `RUST_LOG` overrides
/// the `info` default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
