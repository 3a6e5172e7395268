//! HTML to Markdown conversion and markdown post-processing

use pulldown_cmark::{html, Options, Parser};
use regex::{Captures, Regex};

use crate::config::LinkStyle;
use crate::error::WriterError;

/// Converts exported HTML bodies into markdown
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    link_style: LinkStyle,
    md_input: bool,
    inline_link: Regex,
}

impl MarkdownConverter {
    /// Create a converter
    ///
    /// With `md_input` set, content is treated as Markdown and rendered to
    /// HTML first, so mixed Markdown/HTML bodies come out uniformly.
    pub fn new(link_style: LinkStyle, md_input: bool) -> Result<Self, WriterError> {
        Ok(Self {
            link_style,
            md_input,
            inline_link: Regex::new(r"\[([^\]\[]*)\]\(([^)\s][^)]*)\)")?,
        })
    }

    /// Convert an HTML fragment into markdown
    pub fn convert(&self, html: &str) -> String {
        html2md::rewrite_html(html, false).trim().to_string()
    }

    /// Full content pipeline: optional preprocessing, conversion, URL fixing, link style
    pub fn convert_content(&self, raw: &str, urls: Option<&UrlFixer>) -> String {
        let html = if self.md_input {
            preprocess_markdown(raw)
        } else {
            raw.to_string()
        };

        let mut text = self.convert(&html);
        if let Some(fixer) = urls {
            text = fixer.apply(&text);
        }
        self.finish(text)
    }

    /// Apply the configured link style to converted markdown
    pub fn finish(&self, text: String) -> String {
        match self.link_style {
            LinkStyle::Inline => text,
            LinkStyle::Reference => self.to_reference_links(&text),
        }
    }

    /// Rewrite inline links as numbered reference links
    pub fn to_reference_links(&self, text: &str) -> String {
        let mut targets: Vec<String> = Vec::new();
        let body = self.inline_link.replace_all(text, |caps: &Captures| {
            targets.push(caps[2].trim().to_string());
            format!("[{}][{}]", &caps[1], targets.len())
        });

        if targets.is_empty() {
            return body.into_owned();
        }

        let mut out = body.trim_end().to_string();
        out.push_str("\n\n");
        for (idx, target) in targets.iter().enumerate() {
            out.push_str(&format!("   [{}]: {}\n", idx + 1, target));
        }
        out.trim_end().to_string()
    }
}

/// Render Markdown to HTML
pub fn preprocess_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::empty());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Strips a base URL from markdown link and image targets
#[derive(Debug, Clone)]
pub struct UrlFixer {
    pattern: Regex,
}

impl UrlFixer {
    /// Build a fixer for `base_url`; an empty base URL yields `None`
    pub fn new(base_url: &str) -> Result<Option<Self>, WriterError> {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Ok(None);
        }
        let pattern = Regex::new(&format!(r"\]\({}([^)]*)\)", regex::escape(base_url)))?;
        Ok(Some(Self { pattern }))
    }

    /// Rewrite `](base/path)` targets to `](/path)`
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, "](${1})").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_paragraphs() {
        let converter = MarkdownConverter::new(LinkStyle::Inline, false).unwrap();
        let md = converter.convert("<p>Hello <strong>world</strong></p>");
        assert!(md.contains("Hello"));
        assert!(md.contains("**world**"));
        assert!(!md.contains("<p>"));
    }

    #[test]
    fn test_url_fixer() {
        let fixer = UrlFixer::new("http://example.com").unwrap().unwrap();
        let text = "See [post](http://example.com/2012/hello/) and ![img](http://example.com/a.png) \
                    but not [ext](http://other.org/x)";
        let fixed = fixer.apply(text);
        assert!(fixed.contains("[post](/2012/hello/)"));
        assert!(fixed.contains("![img](/a.png)"));
        assert!(fixed.contains("[ext](http://other.org/x)"));
    }

    #[test]
    fn test_url_fixer_escapes_base() {
        let fixer = UrlFixer::new("http://a.b").unwrap().unwrap();
        assert_eq!(fixer.apply("[x](http://aXb/y)"), "[x](http://aXb/y)");
    }

    #[test]
    fn test_empty_base_url_disables_fixing() {
        assert!(UrlFixer::new("  ").unwrap().is_none());
    }

    #[test]
    fn test_reference_links() {
        let converter = MarkdownConverter::new(LinkStyle::Reference, false).unwrap();
        let out = converter.to_reference_links("Read [one](http://a/1) and [two](http://a/2).");
        assert!(out.starts_with("Read [one][1] and [two][2]."));
        assert!(out.contains("[1]: http://a/1"));
        assert!(out.contains("[2]: http://a/2"));
    }

    #[test]
    fn test_reference_links_without_links() {
        let converter = MarkdownConverter::new(LinkStyle::Reference, false).unwrap();
        assert_eq!(converter.to_reference_links("plain text"), "plain text");
    }

    #[test]
    fn test_inline_style_is_untouched() {
        let converter = MarkdownConverter::new(LinkStyle::Inline, false).unwrap();
        let text = "[one](http://a/1)".to_string();
        assert_eq!(converter.finish(text.clone()), text);
    }

    #[test]
    fn test_preprocess_markdown() {
        let html = preprocess_markdown("Some *emphasis*");
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_markdown_input_pipeline() {
        let converter = MarkdownConverter::new(LinkStyle::Inline, true).unwrap();
        let out = converter.convert_content("A [link](http://example.com/x)", None);
        assert!(out.contains("link"));
        assert!(out.contains("http://example.com/x"));
    }
}
