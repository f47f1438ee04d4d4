use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{DocumentMetadata, DocumentRecord, DocumentStatus, VersionRecord};
use crate::types::identifiers::DocId;
use crate::types::view::UNCLASSIFIED;
use crate::upload::config::UploadConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("doc_id required")]
    MissingDocId,
    #[error("title required")]
    MissingTitle,
}

/// User-entered upload form fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadFields {
    pub doc_id: String,
    pub title: String,
    pub department: String,
    pub category: String,
    /// Comma-separated keyword list.
    pub keywords_raw: String,
}

/// Builds a new document with a single seed version. Pure constructor:
/// the caller passes the result to `Registry::add`.
#[derive(Debug, Clone, Default)]
pub struct UploadBuilder {
    config: UploadConfig,
}

impl UploadBuilder {
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Build with today's (UTC) date as the upload date.
    pub fn build(
        &self,
        fields: &UploadFields,
        selected_file_name: Option<&str>,
    ) -> Result<DocumentRecord, ValidationError> {
        self.build_on(fields, selected_file_name, Utc::now().date_naive())
    }

    pub fn build_on(
        &self,
        fields: &UploadFields,
        selected_file_name: Option<&str>,
        uploaded_at: NaiveDate,
    ) -> Result<DocumentRecord, ValidationError> {
        let doc_id = fields.doc_id.trim();
        if doc_id.is_empty() {
            return Err(ValidationError::MissingDocId);
        }

        let selected_file_name = selected_file_name.filter(|name| !name.trim().is_empty());

        // A selected file can supply the title before it is required.
        let title = match fields.title.trim() {
            "" => selected_file_name.map(strip_extension).unwrap_or(""),
            given => given,
        };
        if title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }

        let department = match fields.department.trim() {
            "" => UNCLASSIFIED,
            d => d,
        };
        let category = fields.category.trim();

        let file_name = match selected_file_name {
            Some(name) => name.to_string(),
            None => format!("{doc_id}.{}", self.config.fallback_extension),
        };

        let seed = VersionRecord {
            version: 1,
            raw_path: format!("{}/{}", self.config.raw_dir, file_name),
            processed_path: format!("{}/{}_chunks.json", self.config.processed_dir, doc_id),
            file_name,
            uploaded_at: Some(uploaded_at),
            uploaded_by: self.config.uploaded_by.clone(),
            description: self.config.initial_description.clone(),
            ai_processed: false,
            chunk_count: 0,
        };

        Ok(DocumentRecord {
            doc_id: DocId::new(doc_id),
            title: title.trim().to_string(),
            department: department.to_string(),
            category: category.to_string(),
            sub_category: category.to_string(),
            current_version: seed.version,
            status: DocumentStatus::Active,
            versions: vec![seed],
            metadata: DocumentMetadata::from_keywords_raw(&fields.keywords_raw),
        })
    }
}

/// Drop the text after the final `.`, when that text is a non-empty extension.
/// `report.final.pdf` becomes `report.final`; `README` is returned as is.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => {
            let ext = &file_name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..idx]
            }
        }
        None => file_name,
    }
}
