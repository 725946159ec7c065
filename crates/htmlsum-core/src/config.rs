//! Summarizer configuration and the shared placeholder default.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Placeholder used for any field that cannot be resolved.
pub const DEFAULT_PLACEHOLDER: &str = "[Not available]";

/// Reject a placeholder that would leave record fields blank.
pub fn validate_placeholder(placeholder: &str) -> Result<()> {
    if placeholder.trim().is_empty() {
        return Err(Error::Config("NOT_AVAILABLE must not be empty".to_string()));
    }
    Ok(())
}

static GLOBAL_DEFAULTS: Lazy<SummaryDefaults> = Lazy::new(SummaryDefaults::new);

/// Shared default settings consulted by every summarizer that was not
/// given its own placeholder.
///
/// Clones share state: an override made through one handle is seen by all
/// of them. [`SummaryDefaults::global`] is the process-wide instance.
#[derive(Debug, Clone)]
pub struct SummaryDefaults {
    placeholder: Arc<RwLock<String>>,
}

impl SummaryDefaults {
    /// Create an isolated set of defaults, starting at [`DEFAULT_PLACEHOLDER`].
    pub fn new() -> Self {
        Self {
            placeholder: Arc::new(RwLock::new(DEFAULT_PLACEHOLDER.to_string())),
        }
    }

    /// The process-wide defaults.
    pub fn global() -> Self {
        GLOBAL_DEFAULTS.clone()
    }

    pub fn placeholder(&self) -> String {
        self.placeholder.read().clone()
    }

    /// Override the placeholder for all later summaries. Last write wins.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        debug!(placeholder = %placeholder, "placeholder default overridden");
        *self.placeholder.write() = placeholder;
    }

    /// Restore [`DEFAULT_PLACEHOLDER`].
    pub fn reset(&self) {
        self.set_placeholder(DEFAULT_PLACEHOLDER);
    }
}

impl Default for SummaryDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// Options bundle accepted when constructing a summarizer.
///
/// Serialized keys are `PATH`, `NOT_AVAILABLE` and `FIELDS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerOptions {
    /// Document to summarize. Required.
    #[serde(rename = "PATH", default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Overrides the shared placeholder default when set.
    #[serde(rename = "NOT_AVAILABLE", default, skip_serializing_if = "Option::is_none")]
    pub not_available: Option<String>,
    /// Extra meta fields to resolve.
    #[serde(rename = "FIELDS", default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl SummarizerOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn with_not_available(mut self, placeholder: impl Into<String>) -> Self {
        self.not_available = Some(placeholder.into());
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Decode an options bundle from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configured path, or a configuration error if it is missing or empty.
    pub fn require_path(&self) -> Result<&Path> {
        match self.path.as_deref() {
            Some(p) if !p.as_os_str().is_empty() => Ok(p),
            _ => Err(Error::Config("PATH is required".to_string())),
        }
    }

    /// The placeholder override, if one was given and it is usable.
    pub fn placeholder_override(&self) -> Result<Option<&str>> {
        match self.not_available.as_deref() {
            Some(p) => validate_placeholder(p).map(|()| Some(p)),
            None => Ok(None),
        }
    }

    /// Extra field names with empties dropped and duplicates collapsed,
    /// in first-seen order.
    pub fn extra_fields(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::with_capacity(self.fields.len());
        for name in &self.fields {
            let name = name.trim();
            if name.is_empty() {
                debug!("ignoring empty extra field name");
                continue;
            }
            if !out.iter().any(|n| n == name) {
                out.push(name.to_string());
            }
        }
        out
    }
}
