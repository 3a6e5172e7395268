//! wpmark Domain Layer
//!
//! This crate contains the record model shared by the extractor and the
//! writer. It has no runtime dependencies and defines the value types,
//! the tag name normalizer, and the sink trait that the other layers plug into.
//!
//! ## Key Concepts
//!
//! - **Channel**: the single top-level weblog metadata section of an export
//! - **Item**: one post, page or other entry nested under the channel
//! - **Comment**: one reader comment nested under an item
//! - **Section marker**: the three tag names that open and close sections
//! - **Sink**: the consumer of completed records
//!
//! ## Architecture
//!
//! ```text
//! XML events → Extractor → RecordSink (writer) → files
//! ```
//!
//! Only the record shapes and the `RecordSink` boundary live here. Parsing
//! and rendering live in `wpmark-extractor` and `wpmark-writer`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod section;
pub mod tag;
pub mod traits;

// Re-exports for convenience
pub use field::FieldName;
pub use record::{ChannelRecord, CommentRecord, FieldBag, ItemKind, ItemRecord, ItemSummary};
pub use section::{SectionKind, SectionStack};
pub use tag::normalize;
pub use traits::RecordSink;
