//! wpmark Extractor
//!
//! Turns a WordPress export (WXR) into channel, item and comment records in a
//! single forward pass.
//!
//! # Overview
//!
//! The export is a flat stream of element starts, text and element ends. The
//! [`Extractor`] keeps a small stack of open sections (channel, item,
//! comment), accumulates field text into whichever record is open, and hands
//! each record to a [`RecordSink`](wpmark_domain::RecordSink) as soon as its
//! closing tag is seen.
//!
//! # Architecture
//!
//! ```text
//! XML file → quick-xml NsReader → Extractor → RecordSink
//! ```
//!
//! # Example Usage
//!
//! ```
//! use wpmark_extractor::{extract_str, RecordCollector};
//!
//! let xml = r#"<rss><channel>
//!     <title>My Blog</title>
//!     <item><title>Hello</title><post_type>post</post_type></item>
//! </channel></rss>"#;
//!
//! let records = extract_str(xml, RecordCollector::new()).unwrap();
//! assert_eq!(records.items.len(), 1);
//! assert_eq!(records.channels[0].items.len(), 1);
//! ```

#![warn(missing_docs)]

mod collector;
mod error;
mod extractor;
mod reader;


pub use collector::RecordCollector;
pub use error::ExtractorError;
pub use extractor::Extractor;
pub use reader::{extract_file, extract_from_reader, extract_str};
