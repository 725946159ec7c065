//! Head-region metadata: the document title and `<meta>` declarations.
//!
//! `<meta http-equiv="X" content="V">` becomes header `X`, and
//! `<meta name="X" content="V">` becomes header `X-Meta-X`. Header names
//! compare case-insensitively and the first declaration of a name wins.

use scraper::ElementRef;
use tracing::debug;

use htmlsum_core::Result;

use crate::html::{selector, squash_whitespace, Document};

/// Prefix for headers derived from `<meta name=...>`.
pub const META_PREFIX: &str = "X-Meta-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadMetadata {
    title: Option<String>,
    headers: Vec<(String, String)>,
}

impl HeadMetadata {
    /// Collect the title and meta declarations that sit in the document head.
    pub fn parse(doc: &Document) -> Result<Self> {
        let title_sel = selector("head title")?;
        let meta_sel = selector("head meta")?;

        let mut head = Self {
            title: doc
                .select(&title_sel)
                .next()
                .map(|t| squash_whitespace(&t.text().collect::<String>())),
            headers: Vec::new(),
        };
        for meta in doc.select(&meta_sel) {
            head.record_meta(&meta);
        }

        debug!(
            headers = head.headers.len(),
            has_title = head.title.is_some(),
            "parsed head metadata"
        );
        Ok(head)
    }

    fn record_meta(&mut self, meta: &ElementRef) {
        let el = meta.value();
        let Some(content) = el.attr("content") else {
            return;
        };
        if let Some(equiv) = el.attr("http-equiv") {
            self.push_header(equiv.trim().to_string(), content);
        } else if let Some(name) = el.attr("name") {
            self.push_header(format!("{META_PREFIX}{}", name.trim()), content);
        }
    }

    fn push_header(&mut self, key: String, value: &str) {
        if key.is_empty() || self.header(&key).is_some() {
            return;
        }
        self.headers.push((key, value.trim().to_string()));
    }

    /// Text of the first `<title>` element, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of `<meta name="...">`, case-insensitively.
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.header(&format!("{META_PREFIX}{name}"))
    }

    /// The declared last-modified date: `http-equiv` form first, then `name` form.
    pub fn last_modified(&self) -> Option<&str> {
        self.header("Last-Modified")
            .or_else(|| self.meta("last-modified"))
    }

    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
