use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::document::{DocId, DocumentRecord};
use crate::query;
use crate::registry::{self, AddError, DerivedStats, ExportError, LoadReport, Registry};
use crate::types::view::{RegistryView, ViewQuery};
use crate::upload::{UploadBuilder, UploadFields, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Rejected(#[from] AddError),
}

/// One user session: the current registry snapshot and the active view.
///
/// Session is single-writer. Each successful upload rebinds `registry` to a
/// new snapshot; a failed one leaves it untouched.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: Registry,
    builder: UploadBuilder,
    view: ViewQuery,
}

impl Session {
    pub fn new(builder: UploadBuilder) -> Self {
        Self {
            registry: Registry::new(),
            builder,
            view: ViewQuery::default(),
        }
    }

    /// Replace the registry with a freshly loaded one. Returns the number of
    /// skipped manifest entries.
    pub fn load(&mut self, report: LoadReport) -> usize {
        let skipped = report.skipped_count();
        self.registry = report.into_registry();
        skipped
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The active view parameters.
    pub fn view_query(&self) -> &ViewQuery {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewQuery {
        &mut self.view
    }

    pub fn set_view(&mut self, view: ViewQuery) {
        self.view = view;
    }

    /// Derive the current view from the snapshot and the active parameters.
    pub fn view(&self) -> RegistryView<'_> {
        query::apply(&self.registry, &self.view)
    }

    pub fn stats(&self) -> DerivedStats {
        self.registry.stats()
    }

    pub fn upload(
        &mut self,
        fields: &UploadFields,
        selected_file_name: Option<&str>,
    ) -> Result<DocId, UploadError> {
        let doc = self.builder.build(fields, selected_file_name)?;
        let doc_id = doc.doc_id.clone();
        self.registry = self.registry.add(doc)?;
        Ok(doc_id)
    }

    pub fn document(&self, doc_id: &str) -> Option<&DocumentRecord> {
        self.registry.get(doc_id)
    }

    pub fn export_to<W: Write>(&self, writer: W) -> Result<(), ExportError> {
        registry::write_export(&self.registry, writer)
    }

    pub fn export_to_path(&self, path: &Path) -> Result<(), ExportError> {
        registry::export_to_path(&self.registry, path)
    }
}
