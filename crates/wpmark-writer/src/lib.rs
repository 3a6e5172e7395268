//! wpmark Writer
//!
//! Receives records from the extractor and writes them as markdown files:
//! one file per post, page or draft plus an `index.md` for the channel.
//!
//! # Output layout
//!
//! Every file starts with `name: value` header lines, followed by a blank
//! line, an optional `<!--excerpt-->`, the converted body under a `# title`
//! heading and, for items, the approved reader comments.
//!
//! Destination paths come from templates in [`WriterConfig`]; an existing
//! file is never overwritten, a `-1`, `-2`, ... suffix is added instead.

#![warn(missing_docs)]

mod config;
mod dates;
mod document;
mod error;
mod markdown;
mod paths;
mod sink;
mod stats;

pub use config::{LinkStyle, WriterConfig, DEFAULT_MAX_NAME_LEN, MAX_NAME_LEN_LIMIT};
pub use dates::{format_date, parse_date, parse_date_or, try_format_date};
pub use document::{render_comments, render_index, with_title, Document, CHANNEL_HEADER, ITEM_HEADER};
pub use error::WriterError;
pub use markdown::{preprocess_markdown, MarkdownConverter, UrlFixer};
pub use paths::{insert_suffix, item_name, render_template, resolve_root, uniquify, OutputTarget, PathResolver, UNTITLED};
pub use sink::{MarkdownWriter, INDEX_FILE};
pub use stats::RunStats;
