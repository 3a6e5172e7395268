//! Configuration layering for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use std::path::Path;
use tracing::debug;
use wpmark_writer::WriterConfig;

/// Load the writer configuration from a TOML file, or defaults without one.
pub fn load(path: Option<&Path>) -> Result<WriterConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file '{}' does not exist",
                    path.display()
                )));
            }
            debug!("Loading configuration from '{}'", path.display());
            Ok(WriterConfig::from_file(path)?)
        }
        None => Ok(WriterConfig::default()),
    }
}

/// Build the effective configuration: defaults, then the file, then flags.
pub fn resolve(cli: &Cli) -> Result<WriterConfig> {
    let mut config = load(cli.config.as_deref())?;
    cli.apply_to(&mut config);
    config.validate().map_err(CliError::Config)?;
    Ok(config)
}
