//! Stateful summarizer bound to one document path.

use std::path::{Path, PathBuf};

use htmlsum_core::{Result, SummarizerOptions, SummaryDefaults};
use tracing::{debug, warn};

use crate::file::load_document;
use crate::summary::{summarize, SummaryRecord};

/// Summarizes the document at a stored path.
///
/// Construction summarizes eagerly. Failures from [`Summarizer::get_summary`]
/// and [`Summarizer::load_file`] are returned and also kept in
/// [`Summarizer::error`]; a failed summary never leaves a record behind.
#[derive(Debug)]
pub struct Summarizer {
    path: PathBuf,
    fields: Vec<String>,
    defaults: SummaryDefaults,
    summary: Option<SummaryRecord>,
    error: Option<String>,
}

impl Summarizer {
    /// Build against the process-wide defaults.
    ///
    /// `NOT_AVAILABLE`, when given, replaces the process-wide placeholder.
    pub fn new(options: SummarizerOptions) -> Result<Self> {
        Self::with_defaults(options, SummaryDefaults::global())
    }

    /// Build against an explicit defaults object.
    pub fn with_defaults(options: SummarizerOptions, defaults: SummaryDefaults) -> Result<Self> {
        let path = options.require_path()?.to_path_buf();
        if let Some(placeholder) = options.placeholder_override()? {
            defaults.set_placeholder(placeholder);
        }

        let mut summarizer = Self {
            path,
            fields: options.extra_fields(),
            defaults,
            summary: None,
            error: None,
        };
        if let Err(e) = summarizer.get_summary(None) {
            debug!("Initial summary failed: {}", e);
        }
        Ok(summarizer)
    }

    /// Summarize the stored document, or `path` if given (which then
    /// replaces the stored path).
    pub fn get_summary(&mut self, path: Option<&Path>) -> Result<&SummaryRecord> {
        if let Some(p) = path {
            self.path = p.to_path_buf();
        }
        self.summary = None;
        self.error = None;

        let placeholder = self.defaults.placeholder();
        let outcome = load_document(&self.path)
            .and_then(|text| summarize(&text, &self.path, &placeholder, &self.fields));

        match outcome {
            Ok(record) => Ok(&*self.summary.insert(record)),
            Err(e) => {
                warn!("Failed to summarize {}: {}", self.path.display(), e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Read the stored document, or `path` if given (which then replaces
    /// the stored path). The current summary is left as is.
    pub fn load_file(&mut self, path: Option<&Path>) -> Result<String> {
        if let Some(p) = path {
            self.path = p.to_path_buf();
        }
        self.error = None;

        load_document(&self.path).map_err(|e| {
            self.error = Some(e.to_string());
            e
        })
    }

    /// Record from the last successful summary.
    pub fn summary(&self) -> Option<&SummaryRecord> {
        self.summary.as_ref()
    }

    /// Message from the last failed operation.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Placeholder the next summary will use.
    pub fn placeholder(&self) -> String {
        self.defaults.placeholder()
    }
}
