use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One uploaded revision of a document. Never modified once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub version: u32,
    pub file_name: String,
    pub raw_path: String,
    pub processed_path: String,
    /// Calendar date only. Absent in some manifests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<NaiveDate>,
    pub uploaded_by: String,
    pub description: String,
    pub ai_processed: bool,
    pub chunk_count: u32,
}
