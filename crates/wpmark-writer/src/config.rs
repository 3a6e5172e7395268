//! Configuration for the writer

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::dates::try_format_date;
use crate::error::WriterError;

/// Default slug length limit for file naming
pub const DEFAULT_MAX_NAME_LEN: usize = 50;

/// Upper bound accepted for `max_name_len`
pub const MAX_NAME_LEN_LIMIT: usize = 100;

/// Link style of the generated markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStyle {
    /// `[text](url)`
    #[default]
    Inline,
    /// `[text][1]` with the targets listed after the text
    Reference,
}

/// Configuration for the writer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Destination root template (`{date}`, `{source}`)
    pub dump_path: String,

    /// Post file path template (`{year}`, `{month}`, `{day}`, `{date}`, `{name}`)
    pub post_path: String,

    /// Page file path template
    pub page_path: String,

    /// Draft file path template
    pub draft_path: String,

    /// Parse pattern of the channel `pubDate`
    pub pub_date_format: String,

    /// Parse pattern of item dates and output format of every date
    pub date_format: String,

    /// Format of `{date}` in the destination root
    pub file_date_format: String,

    /// Slug length limit for file naming (0 disables truncation)
    pub max_name_len: usize,

    /// Generate reference links instead of inline ones
    pub ref_links: bool,

    /// Strip the base URL from link and image targets
    pub fix_urls: bool,

    /// Base URL to strip (defaults to the channel's site URL)
    pub base_url: Option<String>,

    /// Convert raw content from Markdown to HTML before conversion
    pub md_input: bool,
}

impl WriterConfig {
    /// Link style implied by `ref_links`
    pub fn link_style(&self) -> LinkStyle {
        if self.ref_links {
            LinkStyle::Reference
        } else {
            LinkStyle::Inline
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_name_len > MAX_NAME_LEN_LIMIT {
            return Err(format!(
                "max_name_len must be between 0 and {} (got {})",
                MAX_NAME_LEN_LIMIT, self.max_name_len
            ));
        }
        for (name, template) in [
            ("dump_path", &self.dump_path),
            ("post_path", &self.post_path),
            ("page_path", &self.page_path),
            ("draft_path", &self.draft_path),
        ] {
            if template.trim().is_empty() {
                return Err(format!("{} must not be empty", name));
            }
        }
        for (name, pattern) in [
            ("pub_date_format", &self.pub_date_format),
            ("date_format", &self.date_format),
            ("file_date_format", &self.file_date_format),
        ] {
            if !is_valid_strftime(pattern) {
                return Err(format!("{} is not a valid date pattern: '{}'", name, pattern));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WriterError> {
        let contents = std::fs::read_to_string(path)?;
        let config: WriterConfig = toml::from_str(&contents)?;
        Ok(config)
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            dump_path: "{date}_{source}".to_string(),
            post_path: "{year}/{name}.md".to_string(),
            page_path: "{name}.md".to_string(),
            draft_path: "drafts/{name}.md".to_string(),
            pub_date_format: "%a, %d %b %Y %H:%M:%S +0000".to_string(),
            date_format: "%Y-%m-%d %H:%M:%S".to_string(),
            file_date_format: "%Y%m%d".to_string(),
            max_name_len: DEFAULT_MAX_NAME_LEN,
            ref_links: false,
            fix_urls: true,
            base_url: None,
            md_input: false,
        }
    }
}

/// A pattern is usable when it renders a naive date (no offsets or zone names)
fn is_valid_strftime(pattern: &str) -> bool {
    NaiveDate::from_ymd_opt(2000, 1, 2)
        .and_then(|d| d.and_hms_opt(3, 4, 5))
        .and_then(|sample| try_format_date(&sample, pattern))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WriterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.link_style(), LinkStyle::Inline);
    }

    #[test]
    fn test_name_length_limit() {
        let mut config = WriterConfig::default();
        config.max_name_len = 100;
        assert!(config.validate().is_ok());
        config.max_name_len = 101;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_date_pattern() {
        let mut config = WriterConfig::default();
        config.date_format = "%Y-%Q".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zone_date_patterns_are_rejected() {
        let mut config = WriterConfig::default();
        config.file_date_format = "%Y%m%d%Z".to_string();
        assert!(config.validate().is_err());

        let mut config = WriterConfig::default();
        config.date_format = "%Y-%m-%d %H:%M:%S %z".to_string();
        assert!(config.validate().is_err());

        let mut config = WriterConfig::default();
        config.pub_date_format = "%a, %d %b %Y %H:%M:%S %:z".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_template() {
        let mut config = WriterConfig::default();
        config.post_path = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = WriterConfig::from_toml("ref_links = true\npost_path = \"posts/{name}.md\"").unwrap();
        assert_eq!(config.link_style(), LinkStyle::Reference);
        assert_eq!(config.post_path, "posts/{name}.md");
        assert_eq!(config.page_path, "{name}.md");
        assert!(config.fix_urls);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = WriterConfig::default();
        config.base_url = Some("http://example.com".to_string());
        let toml_str = config.to_toml().unwrap();
        let parsed = WriterConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }
}
