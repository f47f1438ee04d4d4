pub mod document;
pub mod metadata;
pub mod version;

pub use crate::types::identifiers::DocId;
pub use document::{DisplayStatus, DocumentError, DocumentRecord, DocumentStatus};
pub use metadata::{parse_keywords, DocumentMetadata};
pub use version::VersionRecord;
