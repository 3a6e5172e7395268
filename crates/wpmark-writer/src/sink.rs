//! Markdown file sink

use chrono::{Local, NaiveDateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use wpmark_domain::{ChannelRecord, FieldBag, FieldName, ItemKind, ItemRecord, RecordSink};

use crate::config::WriterConfig;
use crate::dates::{format_date, parse_date, parse_date_or};
use crate::document::{render_comments, render_index, with_title, Document, CHANNEL_HEADER, ITEM_HEADER};
use crate::error::WriterError;
use crate::markdown::{MarkdownConverter, UrlFixer};
use crate::paths::{OutputTarget, PathResolver};
use crate::stats::RunStats;

/// File name of the channel index
pub const INDEX_FILE: &str = "index.md";

/// Writes posts, pages and drafts as markdown files plus an index
///
/// Per-record failures are logged and counted; they never stop the run.
pub struct MarkdownWriter {
    config: WriterConfig,
    paths: PathResolver,
    converter: MarkdownConverter,
    url_fixer: Option<UrlFixer>,
    stats: RunStats,
}

impl MarkdownWriter {
    /// Create a writer below `root`
    pub fn new(config: WriterConfig, root: impl Into<PathBuf>) -> Result<Self, WriterError> {
        config.validate().map_err(WriterError::Config)?;
        let root = root.into();
        let converter = MarkdownConverter::new(config.link_style(), config.md_input)?;
        let paths = PathResolver::new(root.clone(), &config);
        let url_fixer = match (config.fix_urls, config.base_url.as_deref()) {
            (true, Some(base)) => UrlFixer::new(base)?,
            _ => None,
        };

        Ok(Self {
            config,
            paths,
            converter,
            url_fixer,
            stats: RunStats {
                output_root: root,
                ..RunStats::default()
            },
        })
    }

    /// Destination root
    pub fn root(&self) -> &Path {
        self.paths.root()
    }

    /// Statistics so far
    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Finish and take the statistics
    pub fn into_stats(self) -> RunStats {
        self.stats
    }

    /// Fall back to the channel's site URL once it is known
    fn ensure_url_fixer(&mut self, channel: &FieldBag) {
        if !self.config.fix_urls || self.url_fixer.is_some() {
            return;
        }
        let Some(base) = channel.get(&FieldName::BaseSiteUrl) else {
            return;
        };
        match UrlFixer::new(base) {
            Ok(fixer) => self.url_fixer = fixer,
            Err(e) => warn!("Ignoring base URL '{}': {}", base, e),
        }
    }

    fn write_item(&self, kind: &ItemKind, item: &ItemRecord) -> Result<PathBuf, WriterError> {
        let date_format = &self.config.date_format;
        let post_date = item
            .get(&FieldName::PostDate)
            .and_then(|v| parse_date(v, date_format));
        let post_date_gmt = item
            .get(&FieldName::PostDateGmt)
            .and_then(|v| parse_date(v, date_format));
        let path_date = post_date
            .or(post_date_gmt)
            .unwrap_or_else(|| Local::now().naive_local());

        let path = self
            .paths
            .resolve(&OutputTarget::item(kind, &item.fields, path_date))?;
        info!("Dumping {} to '{}'", kind, path.display());

        let document = self.item_document(item, post_date, post_date_gmt);
        write_file(&path, &document.render())?;
        Ok(path)
    }

    fn item_document(
        &self,
        item: &ItemRecord,
        post_date: Option<NaiveDateTime>,
        post_date_gmt: Option<NaiveDateTime>,
    ) -> Document {
        let date_format = &self.config.date_format;
        let mut document = Document::default();

        for field in ITEM_HEADER {
            let value = match field {
                FieldName::PostDate => post_date
                    .map(|d| format_date(&d, date_format))
                    .unwrap_or_default(),
                FieldName::PostDateGmt => post_date_gmt
                    .map(|d| format_date(&d, date_format))
                    .unwrap_or_default(),
                ref other => item.fields.get_or_empty(other).to_string(),
            };
            document.push_header(field.as_str(), value);
        }

        document.excerpt = item.fields.get_or_empty(&FieldName::Excerpt).to_string();

        let content = self.converter.convert_content(
            item.fields.get_or_empty(&FieldName::Content),
            self.url_fixer.as_ref(),
        );
        document.body = with_title(item.fields.get_or_empty(&FieldName::Title), &content);
        document.comments = render_comments(&item.comments, |html| self.converter.convert(html));
        document
    }

    fn write_index(&self, channel: &ChannelRecord) -> Result<PathBuf, WriterError> {
        let path = self.paths.resolve(&OutputTarget::named(INDEX_FILE))?;
        info!("Dumping index to '{}'", path.display());

        let mut document = Document::default();
        for field in CHANNEL_HEADER {
            let value = channel.fields.get_or_empty(&field).to_string();
            document.push_header(field.as_str(), value);
        }

        let export_date = parse_date_or(
            channel.get(&FieldName::PubDate),
            &self.config.pub_date_format,
            Utc::now().naive_utc(),
        );
        document.push_header("export_date", format_date(&export_date, &self.config.date_format));

        let index = render_index(channel.fields.get_or_empty(&FieldName::Description), &channel.items);
        document.body = with_title(channel.fields.get_or_empty(&FieldName::Title), &index);

        write_file(&path, &document.render())?;
        Ok(path)
    }
}

impl RecordSink for MarkdownWriter {
    type Error = WriterError;

    fn on_item(&mut self, item: ItemRecord, channel: &FieldBag) -> Result<(), Self::Error> {
        let Some(kind) = item.kind() else {
            error!("Malformed item: item type is not specified.");
            self.stats.record_skipped();
            return Ok(());
        };

        if matches!(kind, ItemKind::Other(_)) {
            debug!("Skipping {} item {:?}", kind, item.get(&FieldName::PostId));
            self.stats.record_skipped();
            return Ok(());
        }

        self.ensure_url_fixer(channel);

        match self.write_item(&kind, &item) {
            Ok(_) => self.stats.record_written(&kind, item.comments.len()),
            Err(e) => {
                error!(
                    "Error saving {} '{}'",
                    kind,
                    item.fields.get_or_empty(&FieldName::Title)
                );
                debug!("{}", e);
                self.stats.record_failure();
            }
        }
        Ok(())
    }

    fn on_channel(&mut self, channel: ChannelRecord) -> Result<(), Self::Error> {
        match self.write_index(&channel) {
            Ok(_) => self.stats.index_written = true,
            Err(e) => {
                error!("Error saving index");
                debug!("{}", e);
                self.stats.record_failure();
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), WriterError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
