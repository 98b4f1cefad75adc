//! End-to-end persistence: records written through the service survive a
//! process-style restart (drop the store, reopen from the same file).

use std::sync::Arc;

use wattbook_core::sources::{StaticIdentity, SystemClock, UuidSource};
use wattbook_core::{AssessmentError, AssessmentService, NewAssessment, SqliteRecordStore};

fn open_service(path: &std::path::Path) -> AssessmentService<SqliteRecordStore> {
    let store = SqliteRecordStore::open(path).unwrap();
    AssessmentService::new(
        Arc::new(store),
        Box::new(UuidSource),
        Box::new(SystemClock::default()),
        Box::new(StaticIdentity("inspector-7".into())),
    )
}

#[test]
fn records_and_history_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.db");

    let id = {
        let service = open_service(&path);
        let created = service
            .create_assessment(NewAssessment {
                address: "1 Main St".into(),
                efficiency_rating: 7.5,
                recommendations: Some("seal windows".into()),
                cost_savings: 220.0,
            })
            .unwrap();
        service.append_usage(&created.id, 100, 30.0).unwrap();
        service.append_usage(&created.id, 200, 10.0).unwrap();
        created.id
    };

    let service = open_service(&path);

    let loaded = service.get_assessment(&id).unwrap();
    assert_eq!(loaded.address, "1 Main St");
    assert_eq!(loaded.owner, "inspector-7");
    assert_eq!(loaded.usage_history.len(), 2);

    assert_eq!(service.total_consumption(&id).unwrap(), 40.0);
    assert_eq!(service.list_assessments().unwrap().len(), 1);
}

#[test]
fn deleted_records_stay_deleted_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.db");

    let id = {
        let service = open_service(&path);
        let created = service
            .create_assessment(NewAssessment {
                address: "2 Main St".into(),
                efficiency_rating: 5.0,
                recommendations: None,
                cost_savings: 100.0,
            })
            .unwrap();
        service.delete_assessment(&created.id).unwrap();
        created.id
    };

    let service = open_service(&path);
    let result = service.get_assessment(&id);
    assert!(matches!(result, Err(AssessmentError::NotFound(_))));
}
