//! Output document layout: header fields followed by markdown sections

use tracing::debug;
use wpmark_domain::{CommentRecord, FieldName, ItemSummary};

/// Header fields written for every item, in order
pub const ITEM_HEADER: [FieldName; 11] = [
    FieldName::Title,
    FieldName::Link,
    FieldName::Creator,
    FieldName::Description,
    FieldName::PostId,
    FieldName::PostDate,
    FieldName::PostDateGmt,
    FieldName::CommentStatus,
    FieldName::PostName,
    FieldName::Status,
    FieldName::PostType,
];

/// Header fields written for the channel index, in order (`export_date` follows)
pub const CHANNEL_HEADER: [FieldName; 7] = [
    FieldName::Title,
    FieldName::Description,
    FieldName::AuthorDisplayName,
    FieldName::AuthorLogin,
    FieldName::AuthorEmail,
    FieldName::BaseSiteUrl,
    FieldName::BaseBlogUrl,
];

/// A rendered output file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// `name: value` lines in order
    pub header: Vec<(String, String)>,

    /// Raw excerpt, kept as an HTML comment
    pub excerpt: String,

    /// Markdown body including its `# title` heading
    pub body: String,

    /// Rendered comments section
    pub comments: String,
}

impl Document {
    /// Append a header line
    pub fn push_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.header.push((name.into(), value.into()));
    }

    /// Render the file contents
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.header {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }

        let excerpt = if self.excerpt.is_empty() {
            String::new()
        } else {
            format!("<!--{}-->", self.excerpt)
        };
        let sections: Vec<&str> = [excerpt.as_str(), self.body.as_str(), self.comments.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();

        if !sections.is_empty() {
            out.push('\n');
            out.push_str(&sections.join("\n\n"));
            out.push('\n');
        }
        out
    }
}

/// Prefix a body with its title heading (nothing for an empty title)
pub fn with_title(title: &str, body: &str) -> String {
    let title = title.trim();
    match (title.is_empty(), body.is_empty()) {
        (true, _) => body.to_string(),
        (false, true) => format!("# {}", title),
        (false, false) => format!("# {}\n\n{}", title, body),
    }
}

/// Render approved reader comments as a markdown section
///
/// Pingbacks, trackbacks, unapproved comments and comments missing an id,
/// author, date or body are left out.
pub fn render_comments<F>(comments: &[CommentRecord], convert: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::new();
    for comment in comments {
        if !comment.is_approved() || comment.is_ping() {
            continue;
        }
        let fields = (
            comment.get(&FieldName::CommentId),
            comment.get(&FieldName::CommentAuthor),
            comment.get(&FieldName::CommentDate),
            comment.get(&FieldName::CommentContent),
        );
        let (Some(id), Some(author), Some(date), Some(content)) = fields else {
            debug!("Skipping malformed comment {:?}", comment.get(&FieldName::CommentId));
            continue;
        };
        out.push_str(&format!(
            "**[{}](#{} \"{}\"):** {}\n\n",
            author,
            id,
            date,
            convert(content)
        ));
    }

    if out.is_empty() {
        out
    } else {
        format!("## Comments\n\n{}", out.trim_end())
    }
}

/// Render the channel index: description, then one line per post or page
pub fn render_index(description: &str, items: &[ItemSummary]) -> String {
    let mut out = String::new();
    if !description.trim().is_empty() {
        out.push_str(description.trim());
        out.push_str("\n\n");
    }
    for item in items {
        out.push_str(&format!(
            "* {}: [{}]({})\n",
            item.post_date.as_deref().unwrap_or(""),
            item.title.as_deref().unwrap_or(""),
            item.link.as_deref().unwrap_or(""),
        ));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wpmark_domain::FieldBag;

    fn comment(pairs: &[(FieldName, &str)]) -> CommentRecord {
        CommentRecord::new(pairs.iter().cloned().collect::<FieldBag>())
    }

    fn full_comment(id: &str, approved: &str, kind: &str) -> CommentRecord {
        comment(&[
            (FieldName::CommentId, id),
            (FieldName::CommentAuthor, "Reader"),
            (FieldName::CommentDate, "2012-05-07 10:00:00"),
            (FieldName::CommentContent, "<p>Nice</p>"),
            (FieldName::CommentApproved, approved),
            (FieldName::CommentType, kind),
        ])
    }

    #[test]
    fn test_render_header_only() {
        let mut doc = Document::default();
        doc.push_header("title", "Hello");
        doc.push_header("post_id", "5");
        assert_eq!(doc.render(), "title: Hello\npost_id: 5\n");
    }

    #[test]
    fn test_render_sections() {
        let doc = Document {
            header: vec![("title".to_string(), "Hello".to_string())],
            excerpt: "Teaser".to_string(),
            body: "# Hello\n\nBody".to_string(),
            comments: String::new(),
        };
        assert_eq!(doc.render(), "title: Hello\n\n<!--Teaser-->\n\n# Hello\n\nBody\n");
    }

    #[test]
    fn test_with_title() {
        assert_eq!(with_title("Hi", "Body"), "# Hi\n\nBody");
        assert_eq!(with_title("Hi", ""), "# Hi");
        assert_eq!(with_title(" ", "Body"), "Body");
    }

    #[test]
    fn test_render_comments_filters() {
        let comments = vec![
            full_comment("1", "1", ""),
            full_comment("2", "0", ""),
            full_comment("3", "1", "pingback"),
            full_comment("4", "1", "trackback"),
            comment(&[(FieldName::CommentId, "5"), (FieldName::CommentApproved, "1")]),
        ];
        let out = render_comments(&comments, |html| html.replace("<p>", "").replace("</p>", ""));
        assert_eq!(
            out,
            "## Comments\n\n**[Reader](#1 \"2012-05-07 10:00:00\"):** Nice"
        );
    }

    #[test]
    fn test_render_comments_empty() {
        let comments = vec![full_comment("2", "0", "")];
        assert_eq!(render_comments(&comments, str::to_string), "");
    }

    #[test]
    fn test_render_index() {
        let items = vec![ItemSummary {
            title: Some("Hello".to_string()),
            link: Some("http://blog/hello".to_string()),
            post_id: Some("5".to_string()),
            post_date: Some("2012-05-06 07:08:09".to_string()),
            post_type: Some("post".to_string()),
        }];
        assert_eq!(
            render_index("About me", &items),
            "About me\n\n* 2012-05-06 07:08:09: [Hello](http://blog/hello)"
        );
        assert_eq!(render_index("", &[]), "");
    }
}
