use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::document::{DocumentMetadata, DocumentRecord, DocumentStatus, VersionRecord};
use crate::registry::Registry;
use crate::types::identifiers::DocId;
use crate::types::view::UNCLASSIFIED;

/// Raised only when the manifest text itself is unreadable.
/// Problems with individual entries are reported through `LoadReport`.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestEntryError {
    #[error("Unexpected entry shape: {0}")]
    Shape(String),
    #[error("Missing doc_id")]
    MissingDocId,
    #[error("Document {0} has no versions")]
    NoVersions(DocId),
    #[error("Document {doc_id} has an invalid version number at position {position}")]
    InvalidVersionNumber { doc_id: DocId, position: usize },
    #[error("Document {doc_id} has unknown status {status:?}")]
    UnknownStatus { doc_id: DocId, status: String },
    #[error("Duplicate document ID: {0}")]
    DuplicateDocId(DocId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// Position in the manifest's document list.
    pub index: usize,
    pub reason: ManifestEntryError,
}

/// Outcome of a load: the usable registry plus everything left out of it.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub registry: Registry,
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_registry(self) -> Registry {
        self.registry
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    doc_id: Option<String>,
    title: Option<String>,
    department: Option<String>,
    category: Option<String>,
    sub_category: Option<String>,
    status: Option<String>,
    versions: Option<Vec<RawVersion>>,
    metadata: Option<RawMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVersion {
    version: Option<i64>,
    file_name: Option<String>,
    raw_path: Option<String>,
    processed_path: Option<String>,
    uploaded_at: Option<String>,
    uploaded_by: Option<String>,
    description: Option<String>,
    ai_processed: Option<bool>,
    chunk_count: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawMetadata {
    keywords: Option<Vec<String>>,
}

/// Decode a list of raw document objects.
pub fn load<I>(raw_documents: I) -> LoadReport
where
    I: IntoIterator<Item = Value>,
{
    let mut documents = Vec::new();
    let mut skipped = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for (index, value) in raw_documents.into_iter().enumerate() {
        let decoded = serde_json::from_value::<RawDocument>(value)
            .map_err(|e| ManifestEntryError::Shape(e.to_string()))
            .and_then(coerce_document)
            .and_then(|doc| {
                if seen_ids.insert(doc.doc_id.clone()) {
                    Ok(doc)
                } else {
                    Err(ManifestEntryError::DuplicateDocId(doc.doc_id))
                }
            });

        match decoded {
            Ok(doc) => documents.push(doc),
            Err(reason) => {
                tracing::warn!(index, reason = %reason, "skipping malformed manifest entry");
                skipped.push(SkippedEntry { index, reason });
            }
        }
    }

    tracing::debug!(
        loaded = documents.len(),
        skipped = skipped.len(),
        "manifest loaded"
    );

    LoadReport {
        registry: Registry::from_documents(documents),
        skipped,
    }
}

/// Decode a whole manifest object. A missing or non-array `documents` key
/// yields an empty registry.
pub fn load_manifest(manifest: Value) -> LoadReport {
    let documents = match manifest {
        Value::Object(mut map) => match map.remove("documents") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                tracing::warn!(found = %json_kind(&other), "manifest `documents` is not an array");
                Vec::new()
            }
            None => Vec::new(),
        },
        other => {
            tracing::warn!(found = %json_kind(&other), "manifest is not an object");
            Vec::new()
        }
    };
    load(documents)
}

pub fn load_manifest_str(text: &str) -> Result<LoadReport, ManifestError> {
    let value: Value = serde_json::from_str(text)?;
    Ok(load_manifest(value))
}

pub fn load_manifest_reader<R: Read>(reader: R) -> Result<LoadReport, ManifestError> {
    let value: Value = serde_json::from_reader(reader)?;
    Ok(load_manifest(value))
}

pub fn load_manifest_path(path: &Path) -> Result<LoadReport, ManifestError> {
    let f = std::fs::File::open(path)?;
    load_manifest_reader(std::io::BufReader::new(f))
}

fn coerce_document(raw: RawDocument) -> Result<DocumentRecord, ManifestEntryError> {
    let doc_id = match raw.doc_id {
        Some(id) if !id.trim().is_empty() => DocId::new(id),
        _ => return Err(ManifestEntryError::MissingDocId),
    };

    let status = match raw.status.as_deref() {
        None => DocumentStatus::default(),
        Some(s) => DocumentStatus::parse(s).ok_or_else(|| ManifestEntryError::UnknownStatus {
            doc_id: doc_id.clone(),
            status: s.to_string(),
        })?,
    };

    let raw_versions = raw.versions.unwrap_or_default();
    if raw_versions.is_empty() {
        return Err(ManifestEntryError::NoVersions(doc_id));
    }

    let mut versions = Vec::with_capacity(raw_versions.len());
    for (position, v) in raw_versions.into_iter().enumerate() {
        let number = v
            .version
            .filter(|n| *n > 0)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| ManifestEntryError::InvalidVersionNumber {
                doc_id: doc_id.clone(),
                position,
            })?;

        versions.push(VersionRecord {
            version: number,
            file_name: v.file_name.unwrap_or_default(),
            raw_path: v.raw_path.unwrap_or_default(),
            processed_path: v.processed_path.unwrap_or_default(),
            uploaded_at: v.uploaded_at.as_deref().and_then(parse_date),
            uploaded_by: v.uploaded_by.unwrap_or_default(),
            description: v.description.unwrap_or_default(),
            ai_processed: v.ai_processed.unwrap_or(false),
            chunk_count: v.chunk_count.unwrap_or(0),
        });
    }

    // Derived, whatever the manifest claims.
    let current_version = versions.last().map_or(1, |v| v.version);

    let department = match raw.department {
        Some(d) if !d.trim().is_empty() => d,
        _ => UNCLASSIFIED.to_string(),
    };

    Ok(DocumentRecord {
        doc_id,
        title: raw.title.unwrap_or_default(),
        department,
        category: raw.category.unwrap_or_default(),
        sub_category: raw.sub_category.unwrap_or_default(),
        current_version,
        status,
        versions,
        metadata: DocumentMetadata {
            keywords: raw.metadata.and_then(|m| m.keywords).unwrap_or_default(),
        },
    })
}

/// Accepts `YYYY-MM-DD`, or a timestamp starting with one.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().or_else(|| {
        let day = s.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
