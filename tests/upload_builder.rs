use chrono::NaiveDate;
use doc_registry::document::DocumentStatus;
use doc_registry::types::UNCLASSIFIED;
use doc_registry::upload::{
    strip_extension, UploadBuilder, UploadConfig, UploadFields, ValidationError,
};

fn fields(doc_id: &str, title: &str) -> UploadFields {
    UploadFields {
        doc_id: doc_id.to_string(),
        title: title.to_string(),
        department: "HR".to_string(),
        category: "Policy".to_string(),
        keywords_raw: String::new(),
    }
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

#[test]
fn invariant_doc_id_required() {
    let builder = UploadBuilder::default();
    let result = builder.build_on(&fields("", "x"), None, day());
    assert_eq!(result.unwrap_err(), ValidationError::MissingDocId);

    let result = builder.build_on(&fields("   ", "x"), Some("a.pdf"), day());
    assert_eq!(result.unwrap_err(), ValidationError::MissingDocId);
    assert_eq!(ValidationError::MissingDocId.to_string(), "doc_id required");
}

#[test]
fn invariant_title_required_without_file() {
    let builder = UploadBuilder::default();
    let result = builder.build_on(&fields("HR-9", ""), None, day());
    assert_eq!(result.unwrap_err(), ValidationError::MissingTitle);
    assert_eq!(ValidationError::MissingTitle.to_string(), "title required");
}

#[test]
fn invariant_title_defaults_from_file_name() {
    let builder = UploadBuilder::default();
    let doc = builder
        .build_on(&fields("HR-9", ""), Some("Policy.pdf"), day())
        .unwrap();
    assert_eq!(doc.title, "Policy");
    assert_eq!(doc.versions[0].file_name, "Policy.pdf");
    assert_eq!(doc.versions[0].raw_path, "raw/Policy.pdf");
}

#[test]
fn invariant_given_title_wins_over_file_name() {
    let doc = UploadBuilder::default()
        .build_on(&fields("HR-9", "Leave rules"), Some("Policy.pdf"), day())
        .unwrap();
    assert_eq!(doc.title, "Leave rules");
}

#[test]
fn invariant_dotfile_cannot_supply_title() {
    let result = UploadBuilder::default().build_on(&fields("HR-9", ""), Some(".pdf"), day());
    assert_eq!(result.unwrap_err(), ValidationError::MissingTitle);
}

#[test]
fn invariant_seed_version_shape() {
    let mut f = fields("HR-9", "Leave rules");
    f.keywords_raw = " a, b ,, a".to_string();

    let doc = UploadBuilder::default().build_on(&f, None, day()).unwrap();

    assert_eq!(doc.doc_id.as_str(), "HR-9");
    assert_eq!(doc.current_version, 1);
    assert_eq!(doc.status, DocumentStatus::Active);
    assert_eq!(doc.sub_category, "Policy");
    assert_eq!(doc.metadata.keywords, vec!["a", "b", "a"]);
    assert_eq!(doc.versions.len(), 1);

    let v = &doc.versions[0];
    assert_eq!(v.version, 1);
    assert_eq!(v.file_name, "HR-9.json");
    assert_eq!(v.raw_path, "raw/HR-9.json");
    assert_eq!(v.processed_path, "processed/HR-9_chunks.json");
    assert_eq!(v.uploaded_at, Some(day()));
    assert_eq!(v.uploaded_by, "admin");
    assert_eq!(v.description, "initial version");
    assert!(!v.ai_processed);
    assert_eq!(v.chunk_count, 0);
}

#[test]
fn invariant_blank_department_is_unclassified() {
    let mut f = fields("X-1", "Loose");
    f.department = String::new();
    let doc = UploadBuilder::default().build_on(&f, None, day()).unwrap();
    assert_eq!(doc.department, UNCLASSIFIED);
}

#[test]
fn invariant_config_drives_paths_and_uploader() {
    let config = UploadConfig {
        uploaded_by: "clerk".to_string(),
        initial_description: "first".to_string(),
        raw_dir: "incoming".to_string(),
        processed_dir: "chunks".to_string(),
        fallback_extension: "txt".to_string(),
    };
    let builder = UploadBuilder::new(config.clone());
    assert_eq!(builder.config(), &config);
    let doc = builder
        .build_on(&fields("LAW-1", "Labor act"), None, day())
        .unwrap();

    let v = &doc.versions[0];
    assert_eq!(v.file_name, "LAW-1.txt");
    assert_eq!(v.raw_path, "incoming/LAW-1.txt");
    assert_eq!(v.processed_path, "chunks/LAW-1_chunks.json");
    assert_eq!(v.uploaded_by, "clerk");
    assert_eq!(v.description, "first");
}

#[test]
fn invariant_build_uses_today() {
    let doc = UploadBuilder::default()
        .build(&fields("HR-9", "Leave rules"), None)
        .unwrap();
    assert!(doc.versions[0].uploaded_at.is_some());
}

#[test]
fn invariant_strip_extension() {
    assert_eq!(strip_extension("Policy.pdf"), "Policy");
    assert_eq!(strip_extension("report.final.docx"), "report.final");
    assert_eq!(strip_extension("README"), "README");
    assert_eq!(strip_extension("trailing."), "trailing.");
    assert_eq!(strip_extension(".pdf"), "");
}

#[test]
fn invariant_config_v0_is_default() {
    assert_eq!(UploadConfig::v0(), UploadConfig::default());
    let json = serde_json::to_string(&UploadConfig::v0()).unwrap();
    let back: UploadConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, UploadConfig::v0());
}
