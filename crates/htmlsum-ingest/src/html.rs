//! Parsed HTML document and tag scans over it.
//!
//! Markup is parsed once into a DOM. Every scan walks it again from the
//! top, so several independent lookups can share one parse.

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use htmlsum_core::{Error, Result};

/// Build a CSS selector, reporting failure as a parse error.
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Parse(format!("invalid selector {css:?}: {e:?}")))
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse `text`. Fails when the input looks like binary data.
    pub fn parse(text: &str) -> Result<Self> {
        if let Some(offset) = text.find('\0') {
            return Err(Error::Parse(format!(
                "document looks binary (NUL byte at offset {offset})"
            )));
        }

        let html = Html::parse_document(text);
        debug!(parse_errors = html.errors.len(), "parsed document");
        Ok(Self { html })
    }

    /// All elements matching `css`, in document order.
    pub fn select<'a>(&'a self, css: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(css)
    }

    /// Trimmed text immediately following the first `<tag>`, up to the
    /// next tag.
    ///
    /// `Ok(None)` when the tag never occurs and `Ok(Some(""))` when it
    /// occurs but is directly followed by another tag or only whitespace.
    pub fn first_tag_text(&self, tag: &str) -> Result<Option<String>> {
        let sel = selector(tag)?;
        let Some(element) = self.html.select(&sel).next() else {
            return Ok(None);
        };
        Ok(Some(squash_whitespace(&leading_text(&element))))
    }
}

/// Text children of `element` that come before its first child element.
fn leading_text(element: &ElementRef) -> String {
    let mut out = String::new();
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => break,
            _ => {}
        }
    }
    out
}

/// Strip edge whitespace and collapse internal runs to a single space.
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(html: &str, tag: &str) -> Option<String> {
        Document::parse(html).unwrap().first_tag_text(tag).unwrap()
    }

    #[test]
    fn test_comments_and_doctype_skipped() {
        let html = "<!DOCTYPE html><!-- <h1>no</h1> --><h1>yes</h1>";
        assert_eq!(first(html, "h1").as_deref(), Some("yes"));
    }

    #[test]
    fn test_script_body_is_raw() {
        let html = "<script>if (a < b) { x = '<p>' }</script><p>real</p>";
        assert_eq!(first(html, "p").as_deref(), Some("real"));
    }

    #[test]
    fn test_stray_angle_bracket_is_text() {
        assert_eq!(first("<p>1 < 2</p>", "p").as_deref(), Some("1 < 2"));
    }

    #[test]
    fn test_first_tag_text_trims_and_squashes() {
        let html = "<p>  Hello \n\t  world  </p>";
        assert_eq!(first(html, "p").as_deref(), Some("Hello world"));
    }

    #[test]
    fn test_first_tag_text_stops_at_next_tag() {
        let html = "<h1>Big <em>news</em> today</h1>";
        assert_eq!(first(html, "h1").as_deref(), Some("Big"));
    }

    #[test]
    fn test_first_tag_text_skips_comments() {
        let html = "<h1>Big <!-- note --> news</h1>";
        assert_eq!(first(html, "H1").as_deref(), Some("Big news"));
    }

    #[test]
    fn test_first_tag_text_present_but_empty() {
        let html = "<h1><img src=x.png></h1>";
        assert_eq!(first(html, "h1").as_deref(), Some(""));
        assert_eq!(first(html, "h2"), None);
    }

    #[test]
    fn test_scans_restart_from_beginning() {
        let doc = Document::parse("<p>one</p><h2>two</h2><h1>three</h1><p>four</p>").unwrap();
        assert_eq!(doc.first_tag_text("h1").unwrap().as_deref(), Some("three"));
        assert_eq!(doc.first_tag_text("h2").unwrap().as_deref(), Some("two"));
        assert_eq!(doc.first_tag_text("p").unwrap().as_deref(), Some("one"));
        assert_eq!(doc.first_tag_text("p").unwrap().as_deref(), Some("one"));
    }

    #[test]
    fn test_character_references_decoded() {
        let html = "<h1>Fish &amp chips</h1><p>na&iuml;ve &euro;5 &#65;&#x42;</p>";
        assert_eq!(first(html, "h1").as_deref(), Some("Fish & chips"));
        assert_eq!(first(html, "p").as_deref(), Some("na\u{ef}ve \u{20ac}5 AB"));
    }

    #[test]
    fn test_non_breaking_space_trimmed() {
        assert_eq!(first("<p>&nbsp;Hi&nbsp;</p>", "p").as_deref(), Some("Hi"));
    }

    #[test]
    fn test_binary_input_is_parse_error() {
        let err = Document::parse("<p>abc\0def</p>").err().unwrap();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_bad_tag_name_is_parse_error() {
        let doc = Document::parse("<p>x</p>").unwrap();
        assert!(matches!(doc.first_tag_text("p["), Err(Error::Parse(_))));
    }
}
