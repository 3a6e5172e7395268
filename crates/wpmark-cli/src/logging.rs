//! Logging setup.

use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Install the global subscriber.
///
/// Messages go to stderr at INFO (DEBUG when `verbose`, or whatever
/// `RUST_LOG` asks for). With a log file, everything down to DEBUG is also
/// written there with timestamps.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let console_level = if verbose { "debug" } else { "info" };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_level(verbose)
        .with_filter(console_filter);

    let file = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CliError::Logging(format!("cannot open '{}': {}", path.display(), e))
            })?;
            Some(
                fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(LevelFilter::DEBUG),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
