//! Achievement unlock poller entry point.
//!
//! Takes no arguments. Polls the configured endpoint twice and prints the
//! newly unlocked achievements per entity as pretty JSON on stdout. Logs go
//! to stderr. Exits non-zero if any step fails.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use unlocks_poller::{PollerConfig, PollerError};

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// runs a single poll-and-compare cycle and prints the result.
#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "unlocks-poller failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), PollerError> {
    let config = PollerConfig::from_env()?;
    info!(
        source_url = config.source_url,
        poll_interval_ms = config.poll_interval.as_millis(),
        fetch_timeout_ms = config.fetch_timeout.map(|t| t.as_millis()),
        "configuration loaded"
    );

    let delta = unlocks_poller::run(&config).await?;
    println!("{}", serde_json::to_string_pretty(&delta)?);
    Ok(())
}
