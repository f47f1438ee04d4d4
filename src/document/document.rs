use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::metadata::DocumentMetadata;
use super::version::VersionRecord;
use crate::types::identifiers::DocId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Active,
    Draft,
}

impl DocumentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(DocumentStatus::Active),
            "draft" => Some(DocumentStatus::Draft),
            _ => None,
        }
    }
}

/// Status shown for a document, derived from its latest version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStatus {
    Processed,
    Draft,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Blank doc_id")]
    BlankDocId,
    #[error("Document {0} has a blank department")]
    BlankDepartment(DocId),
    #[error("Document {0} has no versions")]
    NoVersions(DocId),
    #[error("Document {doc_id} has an invalid version number at position {position}")]
    InvalidVersionNumber { doc_id: DocId, position: usize },
    #[error("Document {doc_id} has current_version {current} but last version {latest}")]
    CurrentVersionMismatch {
        doc_id: DocId,
        current: u32,
        latest: u32,
    },
}

/// A document identity plus its version history.
///
/// `versions` is never empty and `current_version` always equals the number
/// of the last element. `Registry::add` checks this through `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub doc_id: DocId,
    pub title: String,
    pub department: String,
    pub category: String,
    pub sub_category: String,
    pub current_version: u32,
    pub status: DocumentStatus,
    pub versions: Vec<VersionRecord>,
    pub metadata: DocumentMetadata,
}

impl DocumentRecord {
    /// Check the invariants every registry member must hold.
    pub fn validate(&self) -> Result<(), DocumentError> {
        if self.doc_id.is_blank() {
            return Err(DocumentError::BlankDocId);
        }
        if self.department.trim().is_empty() {
            return Err(DocumentError::BlankDepartment(self.doc_id.clone()));
        }

        let latest = self
            .latest_version()
            .ok_or_else(|| DocumentError::NoVersions(self.doc_id.clone()))?;

        if let Some(position) = self.versions.iter().position(|v| v.version == 0) {
            return Err(DocumentError::InvalidVersionNumber {
                doc_id: self.doc_id.clone(),
                position,
            });
        }

        if self.current_version != latest.version {
            return Err(DocumentError::CurrentVersionMismatch {
                doc_id: self.doc_id.clone(),
                current: self.current_version,
                latest: latest.version,
            });
        }
        Ok(())
    }

    /// The final element of `versions`, never a lookup by number.
    pub fn latest_version(&self) -> Option<&VersionRecord> {
        self.versions.last()
    }

    pub fn version(&self, number: u32) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.version == number)
    }

    pub fn is_processed(&self) -> bool {
        self.latest_version().map_or(false, |v| v.ai_processed)
    }

    pub fn chunk_count(&self) -> u32 {
        self.latest_version().map_or(0, |v| v.chunk_count)
    }

    pub fn display_status(&self) -> DisplayStatus {
        if self.is_processed() {
            DisplayStatus::Processed
        } else if self.status == DocumentStatus::Draft {
            DisplayStatus::Draft
        } else {
            DisplayStatus::Pending
        }
    }
}
