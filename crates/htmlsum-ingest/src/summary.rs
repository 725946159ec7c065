//! Summary assembly: headline, first paragraph, head metadata and file times.

use std::collections::BTreeMap;
use std::path::Path;

use htmlsum_core::{validate_placeholder, Field, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::file::load_document;
use crate::head::HeadMetadata;
use crate::html::Document;
use crate::stat::FileTimes;

/// Field name to value. Every fixed field is always present, as is every
/// requested extra field; unresolved values hold the placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryRecord(BTreeMap<String, String>);

impl SummaryRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn field(&self, field: Field) -> Option<&str> {
        self.get(field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }

    fn set(&mut self, name: impl Into<String>, value: String) {
        self.0.insert(name.into(), value);
    }
}

impl std::fmt::Display for SummaryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, value) in &self.0 {
            writeln!(f, "{}: {}", name, value)?;
        }
        Ok(())
    }
}

/// Summarize already-loaded HTML `text`. `path` is only used to stat the
/// file; a failed stat degrades the file timestamps to `placeholder`.
pub fn summarize(
    text: &str,
    path: &Path,
    placeholder: &str,
    extra_fields: &[String],
) -> Result<SummaryRecord> {
    validate_placeholder(placeholder)?;
    let doc = Document::parse(text)?;
    let or_placeholder = |value: Option<&str>| match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    };

    // h1 wins when present, even if it carries no text.
    let headline = match doc.first_tag_text("h1")? {
        Some(text) => Some(text),
        None => doc.first_tag_text("h2")?,
    };
    let first_para = doc.first_tag_text("p")?;
    debug!(
        has_headline = headline.is_some(),
        has_first_para = first_para.is_some(),
        "scanned body"
    );

    let head = HeadMetadata::parse(&doc)?;
    let times = FileTimes::stat(path);
    let modified_file = times.modified_display();
    let created_file = times.changed_display();

    let mut record = SummaryRecord::default();
    record.set(Field::Headline.as_str(), or_placeholder(headline.as_deref()));
    record.set(Field::FirstPara.as_str(), or_placeholder(first_para.as_deref()));
    record.set(Field::Title.as_str(), or_placeholder(head.title()));
    record.set(Field::Author.as_str(), or_placeholder(head.meta("author")));
    record.set(
        Field::Description.as_str(),
        or_placeholder(head.meta("description")),
    );
    record.set(
        Field::LastModifiedFile.as_str(),
        or_placeholder(modified_file.as_deref()),
    );
    record.set(
        Field::CreatedFile.as_str(),
        or_placeholder(created_file.as_deref()),
    );

    // Both meta dates read the declared last-modified value.
    let declared = head.last_modified().filter(|v| !v.trim().is_empty());
    record.set(
        Field::LastModifiedMeta.as_str(),
        or_placeholder(declared.or(modified_file.as_deref())),
    );
    record.set(
        Field::CreatedMeta.as_str(),
        or_placeholder(declared.or(created_file.as_deref())),
    );

    for name in extra_fields {
        if record.get(name).is_some_and(|v| v != placeholder) {
            debug!(field = %name, "extra field already resolved, skipping");
            continue;
        }
        record.set(name.as_str(), or_placeholder(head.meta(name)));
    }

    info!(
        path = %path.display(),
        fields = record.len(),
        "summarized document"
    );
    Ok(record)
}

/// Load the file at `path` and summarize it.
pub fn summarize_file(
    path: &Path,
    placeholder: &str,
    extra_fields: &[String],
) -> Result<SummaryRecord> {
    let text = load_document(path)?;
    summarize(&text, path, placeholder, extra_fields)
}
