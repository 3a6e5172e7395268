//! Destination path generation

use chrono::{Datelike, NaiveDateTime};
use std::path::{Path, PathBuf};

use crate::config::WriterConfig;
use crate::dates::format_date;
use crate::error::WriterError;
use wpmark_domain::{FieldBag, FieldName, ItemKind};

/// Name used when an item has neither a slug nor an identifier
pub const UNTITLED: &str = "untitled";

/// Where a record should be written
///
/// Either an explicit file name relative to the destination root, or a path
/// derived from item data through the configured templates.
#[derive(Debug, Clone)]
pub enum OutputTarget<'a> {
    /// Explicit relative file name
    Named(&'a str),

    /// Path derived from an item
    Item {
        /// Kind of the item
        kind: &'a ItemKind,
        /// Item fields (slug, identifier, status)
        fields: &'a FieldBag,
        /// Date used for `{year}`, `{month}` and `{day}`
        date: NaiveDateTime,
    },
}

impl<'a> OutputTarget<'a> {
    /// Target an explicit file name
    pub fn named(file_name: &'a str) -> Self {
        OutputTarget::Named(file_name)
    }

    /// Target the templated path of an item
    pub fn item(kind: &'a ItemKind, fields: &'a FieldBag, date: NaiveDateTime) -> Self {
        OutputTarget::Item { kind, fields, date }
    }
}

/// Resolves output targets below a destination root
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    post_path: String,
    page_path: String,
    draft_path: String,
    max_name_len: usize,
}

impl PathResolver {
    /// Create a resolver writing below `root`
    pub fn new(root: impl Into<PathBuf>, config: &WriterConfig) -> Self {
        Self {
            root: root.into(),
            post_path: config.post_path.clone(),
            page_path: config.page_path.clone(),
            draft_path: config.draft_path.clone(),
            max_name_len: config.max_name_len,
        }
    }

    /// Destination root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for a target, made unique among existing files
    pub fn resolve(&self, target: &OutputTarget<'_>) -> Result<PathBuf, WriterError> {
        let relative = match target {
            OutputTarget::Named(name) => (*name).to_string(),
            OutputTarget::Item { kind, fields, date } => {
                let template = self.template_for(kind, fields);
                let name = item_name(fields, self.max_name_len);
                let year = date.year().to_string();
                let month = date.month().to_string();
                let day = date.day().to_string();
                render_template(
                    template,
                    &[
                        ("year", year.as_str()),
                        ("month", month.as_str()),
                        ("day", day.as_str()),
                        ("date", day.as_str()),
                        ("name", name.as_str()),
                    ],
                )?
            }
        };

        Ok(uniquify(&self.root.join(relative)))
    }

    fn template_for(&self, kind: &ItemKind, fields: &FieldBag) -> &str {
        let status = fields.get_or_empty(&FieldName::Status);
        if status.trim().eq_ignore_ascii_case("draft") || *kind == ItemKind::Draft {
            &self.draft_path
        } else if *kind == ItemKind::Post {
            &self.post_path
        } else {
            &self.page_path
        }
    }
}

/// File name stem for an item: slug, else identifier, else `untitled`
///
/// Path separators are replaced and the result is cut to `max_len`
/// characters (0 means no limit).
pub fn item_name(fields: &FieldBag, max_len: usize) -> String {
    let slug = fields.get_or_empty(&FieldName::PostName).trim();
    let id = fields.get_or_empty(&FieldName::PostId).trim();
    let name = if !slug.is_empty() {
        slug
    } else if !id.is_empty() {
        id
    } else {
        UNTITLED
    };

    let name: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '-' } else { c })
        .collect();

    if max_len > 0 && name.chars().count() > max_len {
        name.chars().take(max_len).collect()
    } else {
        name
    }
}

/// Substitute `{variable}` placeholders in a path template
pub fn render_template(template: &str, vars: &[(&str, &str)]) -> Result<String, WriterError> {
    let error = |message: String| WriterError::Template {
        template: template.to_string(),
        message,
    };

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| error("unclosed '{'".to_string()))?;
        let key = &after[..end];
        let value = vars
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
            .ok_or_else(|| error(format!("unknown variable '{}'", key)))?;
        out.push_str(value);
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Resolve the destination root for a run
///
/// `{date}` is the run date in `file_date_format`, `{source}` the source
/// file name. Relative results are anchored at the working directory.
pub fn resolve_root(
    config: &WriterConfig,
    source: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, WriterError> {
    let date = format_date(&now, &config.file_date_format);
    let source_name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let root = PathBuf::from(render_template(
        &config.dump_path,
        &[("date", date.as_str()), ("source", source_name.as_str())],
    )?);

    if root.is_absolute() {
        Ok(root)
    } else {
        Ok(std::env::current_dir()?.join(root))
    }
}

/// Append `-1`, `-2`, ... to the file stem until the path is free
pub fn uniquify(path: &Path) -> PathBuf {
    let mut suffix = 0;
    let mut candidate = path.to_path_buf();
    while candidate.exists() {
        suffix += 1;
        candidate = insert_suffix(path, suffix);
    }
    candidate
}

/// Insert a numeric suffix before the extension (`a/b.md` → `a/b-2.md`)
///
/// A zero suffix leaves the path unchanged.
pub fn insert_suffix(path: &Path, suffix: usize) -> PathBuf {
    if suffix == 0 {
        return path.to_path_buf();
    }
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = match path.extension() {
        Some(ext) => format!("{}-{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}-{}", stem, suffix),
    };
    path.with_file_name(file_name)
}
