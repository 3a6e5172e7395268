//! wpmark CLI library.
//!
//! Argument parsing, configuration layering, logging setup and the
//! [`convert`] run driver behind the `wpmark` binary.

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;
pub mod logging;
pub mod output;

pub use cli::{Cli, CliFormat};
pub use convert::convert;
pub use error::{CliError, Result};
pub use output::Formatter;
