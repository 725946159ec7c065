//! File-system timestamps for a summarized document.

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::warn;

use crate::html::squash_whitespace;

/// Modification and change/creation times of a file. Either may be
/// unavailable on a given platform or file system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileTimes {
    pub modified: Option<DateTime<Local>>,
    pub changed: Option<DateTime<Local>>,
}

impl FileTimes {
    /// Stat `path`. Failure is not an error: it yields empty times.
    pub fn stat(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) => Self {
                modified: meta.modified().ok().map(DateTime::<Local>::from),
                changed: change_time(&meta),
            },
            Err(e) => {
                warn!("Failed to stat {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn modified_display(&self) -> Option<String> {
        self.modified.as_ref().map(format_timestamp)
    }

    pub fn changed_display(&self) -> Option<String> {
        self.changed.as_ref().map(format_timestamp)
    }
}

#[cfg(unix)]
fn change_time(meta: &Metadata) -> Option<DateTime<Local>> {
    use chrono::TimeZone;
    use std::os::unix::fs::MetadataExt;

    let nanos = u32::try_from(meta.ctime_nsec()).unwrap_or(0);
    Local.timestamp_opt(meta.ctime(), nanos).single()
}

#[cfg(not(unix))]
fn change_time(meta: &Metadata) -> Option<DateTime<Local>> {
    meta.created().ok().map(DateTime::<Local>::from)
}

/// Render a timestamp like `Thu Oct 1 09:05:00 2026`, local time, with
/// whitespace runs collapsed.
pub fn format_timestamp(ts: &DateTime<Local>) -> String {
    squash_whitespace(&ts.format("%a %b %e %H:%M:%S %Y").to_string())
}
