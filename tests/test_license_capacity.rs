// Integration tests for software license seat accounting
use assetdesk::api::middleware::error::ApiError;
use assetdesk::models::{AssetType, CreateAssignmentRequest, ValidateAssignmentRequest};

mod helpers;
use helpers::*;

fn create_request(employee_id: &str, asset_id: &str) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        employee_id: employee_id.to_string(),
        asset_id: asset_id.to_string(),
        asset_type: AssetType::Software,
        status: None,
        notes: None,
    }
}

fn validate_request(employee_id: &str, asset_id: &str) -> ValidateAssignmentRequest {
    ValidateAssignmentRequest {
        employee_id: employee_id.to_string(),
        asset_id: asset_id.to_string(),
        asset_type: AssetType::Software,
        max_employee_assignments: None,
        exclude_assignment_id: None,
    }
}

#[tokio::test]
async fn test_seats_exhaust_at_capacity() {
    let db = setup_test_db().await;
    let service = assignment_service(&db, 5);

    let first = create_test_employee(&db, "kim@example.com", "Kim Minjun").await;
    let second = create_test_employee(&db, "lee@example.com", "Lee Seoyeon").await;
    let third = create_test_employee(&db, "choi@example.com", "Choi Junho").await;
    let ide = create_test_software(&db, "IntelliJ IDEA", 2, None).await;

    service
        .create_assignment(create_request(&first.id, &ide.id))
        .await
        .expect("Seat 1 should succeed");
    service
        .create_assignment(create_request(&second.id, &ide.id))
        .await
        .expect("Seat 2 should succeed");

    let result = service
        .create_assignment(create_request(&third.id, &ide.id))
        .await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_max_licenses_caps_below_total() {
    let db = setup_test_db().await;
    let service = assignment_service(&db, 5);

    let first = create_test_employee(&db, "kim@example.com", "Kim Minjun").await;
    let second = create_test_employee(&db, "lee@example.com", "Lee Seoyeon").await;
    // Ten purchased, but only one seat may be handed out
    let cad = create_test_software(&db, "AutoCAD", 10, Some(1)).await;

    service
        .create_assignment(create_request(&first.id, &cad.id))
        .await
        .expect("Seat 1 should succeed");

    let result = service
        .create_assignment(create_request(&second.id, &cad.id))
        .await;
    assert!(matches!(result, Err(ApiError::Conflict(_))));
}

#[tokio::test]
async fn test_validate_warns_near_capacity() {
    let db = setup_test_db().await;
    let service = assignment_service(&db, 10);

    let office = create_test_software(&db, "Office Suite", 5, None).await;
    for i in 0..4 {
        let employee = create_test_employee(
            &db,
            &format!("user{}@example.com", i),
            &format!("User {}", i),
        )
        .await;
        service
            .create_assignment(create_request(&employee.id, &office.id))
            .await
            .expect("Seat should succeed");
    }

    let candidate = create_test_employee(&db, "new@example.com", "New User").await;
    let result = service
        .validate_candidate(&validate_request(&candidate.id, &office.id))
        .await
        .expect("Validation should not fail");

    // 4 of 5 seats in use: still eligible, but the 80% warning fires
    assert!(result.is_eligible);
    assert!(result.issues.is_empty());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("80%"));
}

#[tokio::test]
async fn test_validate_reports_exhausted_seats() {
    let db = setup_test_db().await;
    let service = assignment_service(&db, 5);

    let first = create_test_employee(&db, "kim@example.com", "Kim Minjun").await;
    let ide = create_test_software(&db, "IntelliJ IDEA", 1, None).await;

    service
        .create_assignment(create_request(&first.id, &ide.id))
        .await
        .expect("Seat 1 should succeed");

    let candidate = create_test_employee(&db, "new@example.com", "New User").await;
    let result = service
        .validate_candidate(&validate_request(&candidate.id, &ide.id))
        .await
        .expect("Validation should not fail");

    assert!(!result.is_eligible);
    assert!(result
        .issues
        .iter()
        .any(|i| i.kind == assetdesk::services::IssueKind::SoftwareLicense));
    assert!(!result.recommendations.is_empty());
}

#[tokio::test]
async fn test_returned_seat_is_reusable() {
    let db = setup_test_db().await;
    let service = assignment_service(&db, 5);

    let first = create_test_employee(&db, "kim@example.com", "Kim Minjun").await;
    let second = create_test_employee(&db, "lee@example.com", "Lee Seoyeon").await;
    let ide = create_test_software(&db, "IntelliJ IDEA", 1, None).await;

    let assignment = service
        .create_assignment(create_request(&first.id, &ide.id))
        .await
        .expect("Seat 1 should succeed");

    service
        .return_assignment(
            &assignment.id,
            assetdesk::models::ReturnAssignmentRequest {
                return_date: None,
                notes: None,
            },
        )
        .await
        .expect("Failed to return assignment");

    service
        .create_assignment(create_request(&second.id, &ide.id))
        .await
        .expect("Freed seat should be assignable");
}
