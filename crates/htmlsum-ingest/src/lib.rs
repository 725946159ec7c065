//! htmlsum ingest — document loading, tag scanning, head metadata and summary assembly.

pub mod file;
pub mod head;
pub mod html;
pub mod stat;
pub mod summarizer;
pub mod summary;

pub use file::load_document;
pub use head::HeadMetadata;
pub use html::Document;
pub use summarizer::Summarizer;
pub use summary::{summarize, summarize_file, SummaryRecord};
