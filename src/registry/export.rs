use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::document::DocumentRecord;
use crate::registry::Registry;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Export shape. Same `documents` key the manifest loader reads,
/// so an export loads back unchanged.
#[derive(Debug, Serialize)]
pub struct ExportManifest<'a> {
    pub documents: &'a [DocumentRecord],
}

impl<'a> From<&'a Registry> for ExportManifest<'a> {
    fn from(registry: &'a Registry) -> Self {
        ExportManifest {
            documents: registry.documents(),
        }
    }
}

pub fn to_json_string(registry: &Registry) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&ExportManifest::from(registry))?)
}

pub fn write_export<W: Write>(registry: &Registry, mut writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, &ExportManifest::from(registry))?;
    writer.flush()?;
    Ok(())
}

/// Write the export next to `path` under a revision-derived temp name,
/// sync, then rename over `path`.
pub fn export_to_path(registry: &Registry, path: &Path) -> Result<(), ExportError> {
    let revision = registry.revision()?;
    let temp_path = path.with_extension(format!("tmp.{}", revision.short()));

    if temp_path.exists() {
        fs::remove_file(&temp_path)?;
    }

    let f = fs::File::create(&temp_path)?;
    write_export(registry, &f)?;
    f.sync_all()?;

    fs::rename(&temp_path, path)?;

    tracing::debug!(
        path = %path.display(),
        documents = registry.len(),
        revision = revision.as_str(),
        "registry exported"
    );
    Ok(())
}
