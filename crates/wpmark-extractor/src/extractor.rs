//! Core Extractor implementation

use std::mem;

use tracing::debug;
use wpmark_domain::{
    normalize, ChannelRecord, CommentRecord, FieldBag, FieldName, ItemRecord, ItemSummary,
    RecordSink, SectionKind, SectionStack,
};

/// The Extractor turns open/text/close events into completed records
///
/// Events must be fed in document order. Each completed item is handed to
/// the sink on its closing tag; the channel is handed over on the channel
/// closing tag together with the index of every post and page.
///
/// Structural anomalies (unmatched closes, stray text) are ignored.
pub struct Extractor<S>
where
    S: RecordSink,
{
    sink: S,
    sections: SectionStack,
    channel: FieldBag,
    summaries: Vec<ItemSummary>,
    item: Option<ItemRecord>,
    comment: Option<FieldBag>,
    pending: Option<FieldName>,
}

impl<S> Extractor<S>
where
    S: RecordSink,
{
    /// Create a new Extractor feeding the given sink
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            sections: SectionStack::new(),
            channel: FieldBag::new(),
            summaries: Vec::new(),
            item: None,
            comment: None,
            pending: None,
        }
    }

    /// Handle an element start
    pub fn on_open(&mut self, raw_tag: &str) {
        let tag = normalize(raw_tag);

        match SectionKind::from_marker(tag) {
            Some(SectionKind::Channel) => {
                self.channel = FieldBag::new();
                self.summaries.clear();
                self.sections.push(SectionKind::Channel);
            }
            Some(SectionKind::Item) => {
                self.item = Some(ItemRecord::new());
                self.sections.push(SectionKind::Item);
            }
            // A comment only opens a section inside an item; elsewhere it is a field
            Some(SectionKind::Comment) if self.item.is_some() => {
                self.comment = Some(FieldBag::new());
                self.sections.push(SectionKind::Comment);
            }
            _ if !self.sections.is_empty() => {
                self.pending = Some(FieldName::from_tag(tag));
            }
            _ => {
                self.pending = None;
            }
        }
    }

    /// Handle character data
    ///
    /// Only the first text event after a field opens is kept.
    pub fn on_text(&mut self, text: &str) {
        let Some(field) = self.pending.take() else {
            return;
        };

        let bag = match self.sections.current() {
            Some(SectionKind::Comment) => self.comment.as_mut(),
            Some(SectionKind::Item) => self.item.as_mut().map(|item| &mut item.fields),
            Some(SectionKind::Channel) => Some(&mut self.channel),
            None => None,
        };

        match bag {
            Some(bag) => bag.insert(field, text),
            None => debug!("Dropping text for '{}' outside any record", field),
        }
    }

    /// Handle an element end, dispatching completed records to the sink
    pub fn on_close(&mut self, raw_tag: &str) -> Result<(), S::Error> {
        let tag = normalize(raw_tag);
        let current = self.sections.current();

        match SectionKind::from_marker(tag) {
            Some(SectionKind::Comment) if current == Some(SectionKind::Comment) => {
                self.sections.pop();
                if let (Some(fields), Some(item)) = (self.comment.take(), self.item.as_mut()) {
                    item.comments.push(CommentRecord::new(fields));
                }
            }
            Some(SectionKind::Item) if current == Some(SectionKind::Item) => {
                self.sections.pop();
                if let Some(item) = self.item.take() {
                    let summary = ItemSummary::from_item(&item);
                    self.sink.on_item(item, &self.channel)?;
                    self.summaries.extend(summary);
                }
            }
            Some(SectionKind::Channel) => {
                self.sections.pop();
                let record = ChannelRecord {
                    fields: mem::take(&mut self.channel),
                    items: mem::take(&mut self.summaries),
                };
                self.sink.on_channel(record)?;
            }
            _ if !self.sections.is_empty() => {
                self.pending = None;
            }
            _ => {}
        }

        Ok(())
    }

    /// Number of open sections (0 outside the channel, 3 inside a comment)
    pub fn depth(&self) -> usize {
        self.sections.depth()
    }

    /// Innermost open section
    pub fn current_section(&self) -> Option<SectionKind> {
        self.sections.current()
    }

    /// Channel fields collected so far
    pub fn channel(&self) -> &FieldBag {
        &self.channel
    }

    /// Borrow the sink
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Finish and take the sink back
    pub fn into_sink(self) -> S {
        self.sink
    }
}
