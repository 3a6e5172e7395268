//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use wpmark_writer::{WriterConfig, DEFAULT_MAX_NAME_LEN, MAX_NAME_LEN_LIMIT};

/// wpmark - Convert a WordPress XML export into markdown files.
///
/// Flags override values from the configuration file, which in turn override
/// the built-in defaults.
#[derive(Debug, Parser)]
#[command(name = "wpmark")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Source XML dump exported from WordPress
    pub source: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Log to file
    #[arg(short, long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE", env = "WPMARK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Destination path for generated files ({date}, {source})
    #[arg(short, long, value_name = "PATH")]
    pub dump_path: Option<String>,

    /// <pubDate> parsing format
    #[arg(short = 'u', long, value_name = "FMT")]
    pub pub_date_format: Option<String>,

    /// Date/time format of <wp:post_date> fields and of exported data
    #[arg(short = 'f', long, value_name = "FMT")]
    pub date_format: Option<String>,

    /// Date prefix format for the destination path
    #[arg(short = 'p', long, value_name = "FMT")]
    pub file_date_format: Option<String>,

    /// Preprocess content with Markdown (helpful for markdown input)
    #[arg(short = 'm', long)]
    pub markdown_input: bool,

    /// Post name (slug) length limit for file naming
    #[arg(short = 'n', long, value_name = "LEN")]
    pub max_name_len: Option<usize>,

    /// Generate reference links instead of inline
    #[arg(short, long)]
    pub ref_links: bool,

    /// Post files path ({year}, {month}, {day}, {date}, {name})
    #[arg(long, value_name = "PATH")]
    pub post_path: Option<String>,

    /// Page files path
    #[arg(long, value_name = "PATH")]
    pub page_path: Option<String>,

    /// Draft files path
    #[arg(long, value_name = "PATH")]
    pub draft_path: Option<String>,

    /// Keep absolute URLs in hrefs and image sources
    #[arg(long)]
    pub keep_urls: bool,

    /// Base URL to subtract from hrefs (default is the site root)
    #[arg(short, long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable summary (default)
    Text,
    /// JSON statistics
    Json,
}

impl Cli {
    /// Override configuration values with the flags that were given
    pub fn apply_to(&self, config: &mut WriterConfig) {
        if let Some(path) = &self.dump_path {
            config.dump_path = path.clone();
        }
        if let Some(fmt) = &self.pub_date_format {
            config.pub_date_format = fmt.clone();
        }
        if let Some(fmt) = &self.date_format {
            config.date_format = fmt.clone();
        }
        if let Some(fmt) = &self.file_date_format {
            config.file_date_format = fmt.clone();
        }
        if let Some(path) = &self.post_path {
            config.post_path = path.clone();
        }
        if let Some(path) = &self.page_path {
            config.page_path = path.clone();
        }
        if let Some(path) = &self.draft_path {
            config.draft_path = path.clone();
        }
        if let Some(len) = self.max_name_len {
            if len > MAX_NAME_LEN_LIMIT {
                warn!(
                    "Name length limit should be between 0 and {} (got {}); using {}",
                    MAX_NAME_LEN_LIMIT, len, DEFAULT_MAX_NAME_LEN
                );
                config.max_name_len = DEFAULT_MAX_NAME_LEN;
            } else {
                config.max_name_len = len;
            }
        }
        if let Some(url) = &self.base_url {
            config.base_url = Some(url.clone());
        }
        if self.markdown_input {
            config.md_input = true;
        }
        if self.ref_links {
            config.ref_links = true;
        }
        if self.keep_urls {
            config.fix_urls = false;
        }
    }
}
