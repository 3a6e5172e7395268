//! Record module - completed channel, item and comment records

use crate::field::FieldName;
use std::collections::HashMap;
use std::fmt;

/// Field values of one open or completed record
///
/// A repeated field keeps only the most recent value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBag {
    values: HashMap<FieldName, String>,
}

impl FieldBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, replacing any previous value for the same field
    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Get the value of a field
    pub fn get(&self, field: &FieldName) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Get the value of a field, or an empty string when absent
    pub fn get_or_empty(&self, field: &FieldName) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Check whether a field has been recorded
    pub fn contains(&self, field: &FieldName) -> bool {
        self.values.contains_key(field)
    }

    /// Number of recorded fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no field has been recorded
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over recorded fields in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &str)> {
        self.values.iter().map(|(k, v)| (k, v.as_str()))
    }
}

impl<S: Into<String>> FromIterator<(FieldName, S)> for FieldBag {
    fn from_iter<I: IntoIterator<Item = (FieldName, S)>>(iter: I) -> Self {
        let mut bag = FieldBag::new();
        for (field, value) in iter {
            bag.insert(field, value);
        }
        bag
    }
}

/// Kind of an item as given by its `post_type` field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Blog post
    Post,
    /// Static page
    Page,
    /// Draft entry
    Draft,
    /// Attachments, menu items and anything else
    Other(String),
}

impl ItemKind {
    /// Parse an item kind; names are matched exactly as exported
    pub fn parse(s: &str) -> Self {
        match s {
            "post" => ItemKind::Post,
            "page" => ItemKind::Page,
            "draft" => ItemKind::Draft,
            other => ItemKind::Other(other.to_string()),
        }
    }

    /// Get the kind name as a string
    pub fn as_str(&self) -> &str {
        match self {
            ItemKind::Post => "post",
            ItemKind::Page => "page",
            ItemKind::Draft => "draft",
            ItemKind::Other(name) => name,
        }
    }

    /// Posts and pages are the kinds listed in the channel index
    pub fn is_indexed(&self) -> bool {
        matches!(self, ItemKind::Post | ItemKind::Page)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed comment, owned by its parent item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRecord {
    /// Comment fields
    pub fields: FieldBag,
}

impl CommentRecord {
    /// Wrap a completed comment bag
    pub fn new(fields: FieldBag) -> Self {
        Self { fields }
    }

    /// Get a comment field
    pub fn get(&self, field: &FieldName) -> Option<&str> {
        self.fields.get(field)
    }

    /// Moderation approved the comment
    pub fn is_approved(&self) -> bool {
        self.get(&FieldName::CommentApproved) == Some("1")
    }

    /// Pingbacks and trackbacks are not reader comments
    pub fn is_ping(&self) -> bool {
        match self.get(&FieldName::CommentType) {
            Some(kind) => {
                let kind = kind.trim().to_lowercase();
                kind == "pingback" || kind == "trackback"
            }
            None => false,
        }
    }
}

/// A completed item together with its comments in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    /// Item fields
    pub fields: FieldBag,

    /// Comments in document order
    pub comments: Vec<CommentRecord>,
}

impl ItemRecord {
    /// Create an empty item
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item from already collected fields, without comments
    pub fn with_fields(fields: FieldBag) -> Self {
        Self {
            fields,
            comments: Vec::new(),
        }
    }

    /// Get an item field
    pub fn get(&self, field: &FieldName) -> Option<&str> {
        self.fields.get(field)
    }

    /// Item kind, if the item carries a `post_type`
    pub fn kind(&self) -> Option<ItemKind> {
        self.get(&FieldName::PostType).map(ItemKind::parse)
    }
}

/// Index entry kept for every post and page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSummary {
    /// Item title
    pub title: Option<String>,

    /// Permalink
    pub link: Option<String>,

    /// Item identifier
    pub post_id: Option<String>,

    /// Raw publication timestamp
    pub post_date: Option<String>,

    /// Raw item kind
    pub post_type: Option<String>,
}

impl ItemSummary {
    /// Derive the index entry for an item
    ///
    /// Returns `None` for kinds that are not listed in the index.
    pub fn from_item(item: &ItemRecord) -> Option<Self> {
        if !item.kind()?.is_indexed() {
            return None;
        }
        let owned = |field: FieldName| item.get(&field).map(str::to_string);
        Some(Self {
            title: owned(FieldName::Title),
            link: owned(FieldName::Link),
            post_id: owned(FieldName::PostId),
            post_date: owned(FieldName::PostDate),
            post_type: owned(FieldName::PostType),
        })
    }
}

/// The channel metadata with the index of every post and page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelRecord {
    /// Channel fields
    pub fields: FieldBag,

    /// Index entries in document order
    pub items: Vec<ItemSummary>,
}

impl ChannelRecord {
    /// Get a channel field
    pub fn get(&self, field: &FieldName) -> Option<&str> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_of(kind: &str) -> ItemRecord {
        let mut item = ItemRecord::new();
        item.fields.insert(FieldName::PostType, kind);
        item.fields.insert(FieldName::Title, "Hello");
        item.fields.insert(FieldName::PostId, "7");
        item
    }

    #[test]
    fn test_last_write_wins() {
        let mut bag = FieldBag::new();
        bag.insert(FieldName::Title, "first");
        bag.insert(FieldName::Title, "second");
        assert_eq!(bag.get(&FieldName::Title), Some("second"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_item_kind_parsing() {
        assert_eq!(ItemKind::parse("post"), ItemKind::Post);
        assert_eq!(ItemKind::parse("page"), ItemKind::Page);
        assert_eq!(ItemKind::parse("PAGE"), ItemKind::Other("PAGE".to_string()));
        assert_eq!(ItemKind::parse(" post"), ItemKind::Other(" post".to_string()));
        assert_eq!(ItemKind::parse("attachment"), ItemKind::Other("attachment".to_string()));
        assert!(!ItemKind::Draft.is_indexed());
    }

    #[test]
    fn test_summary_only_for_posts_and_pages() {
        let summary = ItemSummary::from_item(&item_of("post")).unwrap();
        assert_eq!(summary.title.as_deref(), Some("Hello"));
        assert_eq!(summary.post_id.as_deref(), Some("7"));
        assert!(summary.link.is_none());

        assert!(ItemSummary::from_item(&item_of("Page")).is_some());
        assert!(ItemSummary::from_item(&item_of("attachment")).is_none());
        assert!(ItemSummary::from_item(&ItemRecord::new()).is_none());
    }

    #[test]
    fn test_comment_flags() {
        let comment = CommentRecord::new(
            [
                (FieldName::CommentApproved, "1"),
                (FieldName::CommentType, "Pingback"),
            ]
            .into_iter()
            .collect(),
        );
        assert!(comment.is_approved());
        assert!(comment.is_ping());

        let plain = CommentRecord::new([(FieldName::CommentApproved, "0")].into_iter().collect());
        assert!(!plain.is_approved());
        assert!(!plain.is_ping());
    }
}
