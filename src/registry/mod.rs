pub mod export;
pub mod manifest;
pub mod registry;

pub use export::{export_to_path, to_json_string, write_export, ExportError, ExportManifest};
pub use manifest::{
    load, load_manifest, load_manifest_path, load_manifest_reader, load_manifest_str, LoadReport,
    ManifestEntryError, ManifestError, SkippedEntry,
};
pub use registry::{AddError, DerivedStats, DuplicateIdError, Registry};
