//! Whole-file document loading.

use std::path::Path;

use htmlsum_core::{Error, Result};
use tracing::{debug, warn};

/// Read the entire file at `path` into memory.
///
/// Bytes are taken as-is; invalid UTF-8 sequences are replaced rather than
/// rejected. The file handle is released before returning on every path.
pub fn load_document(path: &Path) -> Result<String> {
    if path.as_os_str().is_empty() {
        return Err(Error::Config("empty document path".to_string()));
    }

    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    debug!("Loaded {} bytes from {}", bytes.len(), path.display());

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
