//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use wpmark_writer::RunStats;

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the statistics of a finished run.
    pub fn format_stats(&self, stats: &RunStats) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            CliFormat::Text => Ok(self.format_stats_text(stats)),
        }
    }

    fn format_stats_text(&self, stats: &RunStats) -> String {
        let mut lines = vec![self.success(&format!(
            "Converted {} item(s) into {}",
            stats.total_written(),
            stats.output_root.display()
        ))];
        lines.push(format!(
            "  posts: {}  pages: {}  drafts: {}  comments: {}",
            stats.posts, stats.pages, stats.drafts, stats.comments
        ));
        if stats.skipped > 0 {
            lines.push(self.info(&format!("Skipped {} item(s) of other kinds", stats.skipped)));
        }
        if stats.failures > 0 {
            lines.push(self.warning(&format!(
                "{} record(s) could not be written, see the log for details",
                stats.failures
            )));
        }
        if !stats.index_written {
            lines.push(self.warning("No index was written"));
        }
        lines.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stats() -> RunStats {
        RunStats {
            posts: 2,
            pages: 1,
            comments: 4,
            skipped: 1,
            index_written: true,
            output_root: PathBuf::from("/tmp/out"),
            ..RunStats::default()
        }
    }

    #[test]
    fn test_text_format() {
        let formatter = Formatter::new(CliFormat::Text, false);
        let output = formatter.format_stats(&stats()).unwrap();
        assert!(output.starts_with("✓ Converted 3 item(s) into /tmp/out"));
        assert!(output.contains("posts: 2  pages: 1  drafts: 0  comments: 4"));
        assert!(output.contains("Skipped 1 item(s)"));
        assert!(!output.contains("could not be written"));
    }

    #[test]
    fn test_failures_are_reported() {
        let formatter = Formatter::new(CliFormat::Text, false);
        let mut stats = stats();
        stats.failures = 2;
        stats.index_written = false;
        let output = formatter.format_stats(&stats).unwrap();
        assert!(output.contains("2 record(s) could not be written"));
        assert!(output.contains("No index was written"));
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(CliFormat::Json, false);
        let output = formatter.format_stats(&stats()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["posts"], 2);
        assert_eq!(value["index_written"], true);
        assert_eq!(value["output_root"], "/tmp/out");
    }

    #[test]
    fn test_plain_messages_without_color() {
        let formatter = Formatter::new(CliFormat::Text, false);
        assert_eq!(formatter.warning("careful"), "⚠ careful");
    }
}
