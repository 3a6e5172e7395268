//! Trait definitions for record consumers
//!
//! The extractor produces records; everything that happens to them afterwards
//! (date parsing, path generation, file writes) lives behind this boundary.

use crate::record::{ChannelRecord, FieldBag, ItemRecord};

/// Receiver of completed records
///
/// Implemented by the writer layer (wpmark-writer) and by test collectors.
pub trait RecordSink {
    /// Error type for sink operations
    type Error;

    /// Receive an item once its closing tag has been seen
    ///
    /// `channel` holds the channel fields parsed so far.
    fn on_item(&mut self, item: ItemRecord, channel: &FieldBag) -> Result<(), Self::Error>;

    /// Receive the channel and the index of posts and pages at document end
    fn on_channel(&mut self, channel: ChannelRecord) -> Result<(), Self::Error>;
}

impl<S: RecordSink + ?Sized> RecordSink for &mut S {
    type Error = S::Error;

    fn on_item(&mut self, item: ItemRecord, channel: &FieldBag) -> Result<(), Self::Error> {
        (**self).on_item(item, channel)
    }

    fn on_channel(&mut self, channel: ChannelRecord) -> Result<(), Self::Error> {
        (**self).on_channel(channel)
    }
}
