mod common;

use axum::http::StatusCode;
use campus_portal::domain::entities::DepartmentResponse;
use campus_portal::domain::repositories::CatalogRepository;
use serde_json::json;

#[tokio::test]
async fn test_bare_and_enveloped_lists() {
    let catalog = common::catalog().spawn().await;
    let repo = catalog.repository();

    let categories = repo.get_categories().await.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, "c1");

    let departments = repo.get_departments().await.unwrap();
    assert_eq!(departments[1].name, "Physics");
}

#[tokio::test]
async fn test_malformed_records_are_skipped() {
    let catalog = common::FakeCatalog::new()
        .with(
            "faculty",
            json!([
                {"_id": "f1", "name": "Dr. Rao"},
                {"name": "No identifier"},
                {"id": 7, "name": "Dr. Numeric"}
            ]),
        )
        .spawn()
        .await;

    let faculty = catalog.repository().get_faculty().await.unwrap();

    let ids: Vec<&str> = faculty.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "7"]);
}

#[tokio::test]
async fn test_non_list_body_is_an_error() {
    let catalog = common::FakeCatalog::new()
        .with("categories", json!({"success": true, "message": "ok"}))
        .spawn()
        .await;

    let err = catalog.repository().get_categories().await.unwrap_err();
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_course_by_id() {
    let catalog = common::catalog().spawn().await;
    let repo = catalog.repository();

    let course = repo.get_course_by_id("k1").await.unwrap().unwrap();
    assert_eq!(course.name, "Data Structures");
    assert_eq!(course.category_key().id.as_deref(), Some("c1"));

    assert!(repo.get_course_by_id("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_transport_failure() {
    let catalog = common::FakeCatalog::new().failing("courses").spawn().await;

    let err = catalog.repository().get_courses().await.unwrap_err();

    assert!(!err.is_not_found());
    assert_eq!(
        axum::response::IntoResponse::into_response(err).status(),
        StatusCode::BAD_GATEWAY
    );
}

#[tokio::test]
async fn test_department_name_is_percent_encoded() {
    let catalog = common::FakeCatalog::new()
        .with(
            "departments/name/Arts%20&%20Design%2FMedia",
            json!({"_id": "d9", "name": "Arts & Design/Media"}),
        )
        .spawn()
        .await;

    let response = catalog
        .repository()
        .get_department_by_name("Arts & Design/Media")
        .await
        .unwrap();

    match response {
        DepartmentResponse::Legacy(department) => assert_eq!(department.id, "d9"),
        other => panic!("expected legacy record, got {:?}", other),
    }
    assert!(catalog.was_requested("departments/name/Arts%20&%20Design%2FMedia"));
}

#[tokio::test]
async fn test_missing_department_is_not_found() {
    let catalog = common::FakeCatalog::new().spawn().await;

    let err = catalog
        .repository()
        .get_department_by_name("Physics")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_unreachable_catalog() {
    let state = common::unreachable_state().await;

    let err = state.resolver.list_categories().await.unwrap_err();

    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_unsuccessful_course_envelope_is_absent() {
    let catalog = common::FakeCatalog::new()
        .with(
            "courses/missing",
            json!({"success": false, "message": "Course not found"}),
        )
        .spawn()
        .await;

    let course = catalog
        .repository()
        .get_course_by_id("missing")
        .await
        .unwrap();

    assert!(course.is_none());
}

#[tokio::test]
async fn test_course_list_tolerates_display_field_types() {
    let catalog = common::FakeCatalog::new()
        .with(
            "courses",
            json!([
                {"_id": "k1", "name": "Thermodynamics", "duration": 4},
                {"_id": "k2", "name": "Statics", "feeStructure": {"registrationFee": "500"}},
                {"_id": "k3", "name": "Dynamics"}
            ]),
        )
        .spawn()
        .await;

    let courses = catalog.repository().get_courses().await.unwrap();

    assert_eq!(courses.len(), 3);
    assert_eq!(courses[0].duration.as_deref(), Some("4"));
    assert_eq!(
        courses[1].fee_structure.as_ref().and_then(|f| f.registration_fee),
        Some(500.0)
    );
}
