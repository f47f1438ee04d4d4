// Upload defaults are plain data:
// serializable, comparable, with explicit v0 values
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UploadConfig {
    pub uploaded_by: String,
    pub initial_description: String,
    pub raw_dir: String,
    pub processed_dir: String,
    /// Extension of the placeholder file name used when no file is selected.
    pub fallback_extension: String,
}

impl UploadConfig {
    pub fn v0() -> Self {
        Self {
            uploaded_by: "admin".into(),
            initial_description: "initial version".into(),
            raw_dir: "raw".into(),
            processed_dir: "processed".into(),
            fallback_extension: "json".into(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self::v0()
    }
}
