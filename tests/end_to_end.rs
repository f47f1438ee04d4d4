use doc_registry::query::{self, filter_by_status};
use doc_registry::registry::{load_manifest_str, AddError};
use doc_registry::session::{Session, UploadError};
use doc_registry::types::{SortField, SortOrder, StatusFilter, ViewQuery};
use doc_registry::upload::{UploadFields, ValidationError};

const MANIFEST: &str = r#"{
  "documents": [
    {"doc_id": "HR-1", "department": "HR", "versions": [{"version": 1, "ai_processed": true}]},
    {"doc_id": "HR-2", "department": "HR", "versions": [{"version": 1, "ai_processed": false}]}
  ]
}"#;

fn upload_fields(doc_id: &str, title: &str, department: &str) -> UploadFields {
    UploadFields {
        doc_id: doc_id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        category: "SOP".to_string(),
        keywords_raw: String::new(),
    }
}

#[test]
fn scenario_load_filter_and_stats() {
    let report = load_manifest_str(MANIFEST).unwrap();
    assert_eq!(report.skipped_count(), 0);
    let registry = report.registry;

    let processed = filter_by_status(&registry, StatusFilter::Processed);
    let ids: Vec<&str> = processed.iter().map(|d| d.doc_id.as_str()).collect();
    assert_eq!(ids, vec!["HR-1"]);

    let stats = query::stats(&registry);
    assert_eq!(stats.get("HR"), 2);
    assert_eq!(stats.len(), 1);
}

#[test]
fn scenario_session_upload_then_rederive_view() {
    let mut session = Session::default();
    let skipped = session.load(load_manifest_str(MANIFEST).unwrap());
    assert_eq!(skipped, 0);

    let before = session.registry().clone();
    let doc_id = session
        .upload(&upload_fields("IT-1", "", "IT"), Some("vpn-setup.docx"))
        .unwrap();
    assert_eq!(doc_id.as_str(), "IT-1");
    assert!(!before.ptr_eq(session.registry()));
    assert_eq!(before.len(), 2);

    let doc = session.document("IT-1").unwrap();
    assert_eq!(doc.title, "vpn-setup");

    let stats = session.stats();
    assert_eq!(stats.get("HR"), 2);
    assert_eq!(stats.get("IT"), 1);

    session.set_view(
        ViewQuery::new()
            .with_status(StatusFilter::Pending)
            .with_sort(SortField::DocId, SortOrder::Desc),
    );
    assert_eq!(session.view().doc_ids(), vec!["IT-1", "HR-2"]);

    session.view_mut().toggle_sort(SortField::DocId);
    assert_eq!(session.view_query().sort_order, SortOrder::Asc);
    assert_eq!(session.view().doc_ids(), vec!["HR-2", "IT-1"]);
}

#[test]
fn scenario_failed_uploads_leave_session_intact() {
    let mut session = Session::default();
    session.load(load_manifest_str(MANIFEST).unwrap());
    let before = session.registry().clone();

    let err = session
        .upload(&upload_fields("", "Title", "HR"), None)
        .unwrap_err();
    assert_eq!(err, UploadError::Validation(ValidationError::MissingDocId));
    assert!(before.ptr_eq(session.registry()));

    let err = session
        .upload(&upload_fields("HR-1", "Clash", "HR"), None)
        .unwrap_err();
    assert!(matches!(err, UploadError::Rejected(AddError::Duplicate(_))));
    assert_eq!(err.to_string(), "Duplicate document ID: HR-1");
    assert!(before.ptr_eq(session.registry()));
}

#[test]
fn scenario_session_export_round_trip() {
    let mut session = Session::default();
    session.load(load_manifest_str(MANIFEST).unwrap());
    session
        .upload(&upload_fields("FIN-1", "Budget", "Finance"), Some("budget.xlsx"))
        .unwrap();

    let mut buf = Vec::new();
    session.export_to(&mut buf).unwrap();

    let reloaded = load_manifest_str(std::str::from_utf8(&buf).unwrap()).unwrap();
    assert!(reloaded.is_clean());
    assert_eq!(reloaded.registry.documents(), session.registry().documents());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("documents.json");
    session.export_to_path(&path).unwrap();
    assert!(path.exists());
}
