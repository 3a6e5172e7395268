//! In-memory sink

use std::convert::Infallible;

use wpmark_domain::{ChannelRecord, FieldBag, ItemRecord, RecordSink};

/// Sink that keeps every record it receives
#[derive(Debug, Default)]
pub struct RecordCollector {
    /// Items in the order they were completed
    pub items: Vec<ItemRecord>,

    /// Channel records (one per well-formed document)
    pub channels: Vec<ChannelRecord>,
}

impl RecordCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of comments across collected items
    pub fn comment_count(&self) -> usize {
        self.items.iter().map(|item| item.comments.len()).sum()
    }
}

impl RecordSink for RecordCollector {
    type Error = Infallible;

    fn on_item(&mut self, item: ItemRecord, _channel: &FieldBag) -> Result<(), Self::Error> {
        self.items.push(item);
        Ok(())
    }

    fn on_channel(&mut self, channel: ChannelRecord) -> Result<(), Self::Error> {
        self.channels.push(channel);
        Ok(())
    }
}
