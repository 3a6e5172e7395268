//! Run driver: one export in, a tree of markdown files out.

use crate::error::{CliError, Result};
use chrono::Local;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use wpmark_extractor::extract_file;
use wpmark_writer::{resolve_root, MarkdownWriter, RunStats, WriterConfig};

/// Convert `source` with the given configuration
///
/// Per-record write failures are counted in the returned statistics. Only an
/// invalid configuration or an unreadable or malformed export is an error.
pub fn convert(source: &Path, config: WriterConfig) -> Result<RunStats> {
    let started = Instant::now();
    config.validate().map_err(CliError::Config)?;

    let root = resolve_root(&config, source, Local::now().naive_local())?;
    let writer = MarkdownWriter::new(config, root)?;

    info!("Parsing '{}'...", source.display());
    let writer = extract_file(source, writer)?;

    let mut stats = writer.into_stats();
    stats.elapsed_ms = started.elapsed().as_millis() as u64;

    info!("{}", stats.summary());
    info!("Elapsed time: {:.3} s", stats.elapsed_secs());
    Ok(stats)
}
