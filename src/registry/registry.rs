// Snapshots are immutable:
// every mutation returns a new Registry
// the previous snapshot is never aliased or modified

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::{DocumentError, DocumentRecord};
use crate::registry::manifest::{self, LoadReport};
use crate::types::identifiers::{DocId, RegistryRevision};
use crate::types::view::UNCLASSIFIED;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate document ID: {doc_id}")]
pub struct DuplicateIdError {
    pub doc_id: DocId,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error(transparent)]
    Duplicate(#[from] DuplicateIdError),
    #[error("Invalid document: {0}")]
    Invalid(#[from] DocumentError),
}

/// Document count per department. Blank departments count under `UNCLASSIFIED`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DerivedStats {
    counts: BTreeMap<String, usize>,
}

impl DerivedStats {
    pub fn get(&self, department: &str) -> usize {
        self.counts.get(department).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &usize)> {
        self.counts.iter()
    }
}

/// The in-session collection of documents, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    documents: Arc<Vec<DocumentRecord>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a manifest loader's raw document list. Malformed entries are
    /// skipped and reported, never fatal.
    pub fn load<I>(raw_documents: I) -> LoadReport
    where
        I: IntoIterator<Item = serde_json::Value>,
    {
        manifest::load(raw_documents)
    }

    /// Caller guarantees unique ids.
    pub(crate) fn from_documents(documents: Vec<DocumentRecord>) -> Self {
        debug_assert!({
            let mut ids: Vec<&DocId> = documents.iter().map(|d| &d.doc_id).collect();
            ids.sort();
            ids.windows(2).all(|w| w[0] != w[1])
        });
        debug_assert!(documents.iter().all(|d| d.validate().is_ok()));
        Self {
            documents: Arc::new(documents),
        }
    }

    /// Returns a new registry with `doc` appended. `self` is left untouched.
    ///
    /// Records that break the document invariants are rejected, so every
    /// member survives an export and reload unchanged.
    pub fn add(&self, doc: DocumentRecord) -> Result<Registry, AddError> {
        doc.validate()?;
        if self.contains(&doc.doc_id) {
            return Err(DuplicateIdError { doc_id: doc.doc_id }.into());
        }

        let mut documents = Vec::with_capacity(self.documents.len() + 1);
        documents.extend(self.documents.iter().cloned());
        tracing::debug!(doc_id = %doc.doc_id, "document added to registry");
        documents.push(doc);

        Ok(Registry {
            documents: Arc::new(documents),
        })
    }

    pub fn contains(&self, doc_id: &DocId) -> bool {
        self.documents.iter().any(|d| &d.doc_id == doc_id)
    }

    pub fn get(&self, doc_id: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.doc_id.as_str() == doc_id)
    }

    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentRecord> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Single pass over the documents.
    pub fn stats(&self) -> DerivedStats {
        let mut counts = BTreeMap::new();
        for doc in self.documents.iter() {
            let department = if doc.department.trim().is_empty() {
                UNCLASSIFIED
            } else {
                doc.department.as_str()
            };
            *counts.entry(department.to_string()).or_insert(0) += 1;
        }
        DerivedStats { counts }
    }

    /// True when both handles point at the same snapshot.
    pub fn ptr_eq(&self, other: &Registry) -> bool {
        Arc::ptr_eq(&self.documents, &other.documents)
    }

    /// Content hash of the snapshot. Equal contents give equal revisions.
    pub fn revision(&self) -> Result<RegistryRevision, serde_json::Error> {
        let bytes = serde_json::to_vec(self.documents.as_slice())?;
        Ok(RegistryRevision::from_content(&bytes))
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a DocumentRecord;
    type IntoIter = std::slice::Iter<'a, DocumentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
