//! Section module - the open channel/item/comment sections during a parse

/// Kind of record a section populates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// The blog metadata section, open for the whole document
    Channel,

    /// One post, page or other entry
    Item,

    /// One comment of the enclosing item
    Comment,
}

impl SectionKind {
    /// Get the section marker tag name
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::Channel => "channel",
            SectionKind::Item => "item",
            SectionKind::Comment => "comment",
        }
    }

    /// Recognize a normalized tag name as a section marker
    pub fn from_marker(tag: &str) -> Option<Self> {
        match tag {
            "channel" => Some(SectionKind::Channel),
            "item" => Some(SectionKind::Item),
            "comment" => Some(SectionKind::Comment),
            _ => None,
        }
    }
}

/// Currently open sections, innermost last
///
/// Well-formed exports never nest deeper than channel > item > comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionStack {
    sections: Vec<SectionKind>,
}

impl SectionStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a section
    pub fn push(&mut self, kind: SectionKind) {
        self.sections.push(kind);
    }

    /// Close the innermost section; popping an empty stack does nothing
    pub fn pop(&mut self) -> Option<SectionKind> {
        self.sections.pop()
    }

    /// Innermost open section
    pub fn current(&self) -> Option<SectionKind> {
        self.sections.last().copied()
    }

    /// Number of open sections
    pub fn depth(&self) -> usize {
        self.sections.len()
    }

    /// Check whether no section is open
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
