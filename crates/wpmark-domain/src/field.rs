//! Field module - the closed set of recognized record fields

use std::fmt;

/// Logical name of a field carried by a channel, item or comment record
///
/// Recognized names map to dedicated variants. Anything else is kept as
/// `Other` with its normalized tag name, so unknown fields are still stored.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    /// Title of the blog or of an item
    Title,
    /// Permalink
    Link,
    /// Item author login (`dc:creator`)
    Creator,
    /// Blog tagline or item description
    Description,
    /// Numeric item identifier
    PostId,
    /// Local publication timestamp
    PostDate,
    /// GMT publication timestamp
    PostDateGmt,
    /// Whether the item accepts comments
    CommentStatus,
    /// Item slug
    PostName,
    /// Publication status (`publish`, `draft`, ...)
    Status,
    /// Item kind (`post`, `page`, ...)
    PostType,
    /// Rendered item body
    Content,
    /// Rendered item excerpt
    Excerpt,
    /// Channel export timestamp
    PubDate,
    /// Blog author display name
    AuthorDisplayName,
    /// Blog author login
    AuthorLogin,
    /// Blog author email
    AuthorEmail,
    /// Site base URL
    BaseSiteUrl,
    /// Blog base URL
    BaseBlogUrl,
    /// Comment identifier
    CommentId,
    /// Comment author name
    CommentAuthor,
    /// Comment author email
    CommentAuthorEmail,
    /// Comment author URL
    CommentAuthorUrl,
    /// Comment author IP address
    CommentAuthorIp,
    /// Local comment timestamp
    CommentDate,
    /// GMT comment timestamp
    CommentDateGmt,
    /// Comment body
    CommentContent,
    /// Moderation flag (`1` when approved)
    CommentApproved,
    /// Comment kind (empty, `pingback`, `trackback`)
    CommentType,
    /// Any field without a dedicated variant
    Other(String),
}

impl FieldName {
    /// Map a normalized tag name to a field name
    ///
    /// # Examples
    ///
    /// ```
    /// use wpmark_domain::FieldName;
    ///
    /// assert_eq!(FieldName::from_tag("post_type"), FieldName::PostType);
    /// assert_eq!(FieldName::from_tag("menu_order"), FieldName::Other("menu_order".to_string()));
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "title" => FieldName::Title,
            "link" => FieldName::Link,
            "creator" => FieldName::Creator,
            "description" => FieldName::Description,
            "post_id" => FieldName::PostId,
            "post_date" => FieldName::PostDate,
            "post_date_gmt" => FieldName::PostDateGmt,
            "comment_status" => FieldName::CommentStatus,
            "post_name" => FieldName::PostName,
            "status" => FieldName::Status,
            "post_type" => FieldName::PostType,
            "content" => FieldName::Content,
            "excerpt" => FieldName::Excerpt,
            "pubDate" => FieldName::PubDate,
            "author_display_name" => FieldName::AuthorDisplayName,
            "author_login" => FieldName::AuthorLogin,
            "author_email" => FieldName::AuthorEmail,
            "base_site_url" => FieldName::BaseSiteUrl,
            "base_blog_url" => FieldName::BaseBlogUrl,
            "comment_id" => FieldName::CommentId,
            "comment_author" => FieldName::CommentAuthor,
            "comment_author_email" => FieldName::CommentAuthorEmail,
            "comment_author_url" => FieldName::CommentAuthorUrl,
            "comment_author_IP" => FieldName::CommentAuthorIp,
            "comment_date" => FieldName::CommentDate,
            "comment_date_gmt" => FieldName::CommentDateGmt,
            "comment_content" => FieldName::CommentContent,
            "comment_approved" => FieldName::CommentApproved,
            "comment_type" => FieldName::CommentType,
            other => FieldName::Other(other.to_string()),
        }
    }

    /// Get the field name as it appears in the export (and in output headers)
    pub fn as_str(&self) -> &str {
        match self {
            FieldName::Title => "title",
            FieldName::Link => "link",
            FieldName::Creator => "creator",
            FieldName::Description => "description",
            FieldName::PostId => "post_id",
            FieldName::PostDate => "post_date",
            FieldName::PostDateGmt => "post_date_gmt",
            FieldName::CommentStatus => "comment_status",
            FieldName::PostName => "post_name",
            FieldName::Status => "status",
            FieldName::PostType => "post_type",
            FieldName::Content => "content",
            FieldName::Excerpt => "excerpt",
            FieldName::PubDate => "pubDate",
            FieldName::AuthorDisplayName => "author_display_name",
            FieldName::AuthorLogin => "author_login",
            FieldName::AuthorEmail => "author_email",
            FieldName::BaseSiteUrl => "base_site_url",
            FieldName::BaseBlogUrl => "base_blog_url",
            FieldName::CommentId => "comment_id",
            FieldName::CommentAuthor => "comment_author",
            FieldName::CommentAuthorEmail => "comment_author_email",
            FieldName::CommentAuthorUrl => "comment_author_url",
            FieldName::CommentAuthorIp => "comment_author_IP",
            FieldName::CommentDate => "comment_date",
            FieldName::CommentDateGmt => "comment_date_gmt",
            FieldName::CommentContent => "comment_content",
            FieldName::CommentApproved => "comment_approved",
            FieldName::CommentType => "comment_type",
            FieldName::Other(name) => name,
        }
    }

    /// Check whether this is one of the recognized fields
    pub fn is_recognized(&self) -> bool {
        !matches!(self, FieldName::Other(_))
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
