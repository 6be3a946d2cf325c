use assetdesk::database::Database;
use assetdesk::events::EventBus;
use assetdesk::models::{Employee, HardwareAsset, SoftwareAsset};
use assetdesk::services::AssignmentService;

pub fn assignment_service(db: &Database, max_employee_assignments: usize) -> AssignmentService {
    AssignmentService::new(db.clone(), EventBus::default(), max_employee_assignments)
}

pub async fn create_test_employee(db: &Database, email: &str, name: &str) -> Employee {
    let employee = Employee::new(
        name.to_string(),
        email.to_string(),
        "Engineering".to_string(),
        "Developer".to_string(),
        None,
        None,
    );
    db.create_employee(&employee)
        .await
        .expect("Failed to create employee");
    employee
}

pub async fn create_test_hardware(db: &Database, asset_tag: &str, serial: &str) -> HardwareAsset {
    let asset = HardwareAsset::new(
        asset_tag.to_string(),
        "Dell".to_string(),
        "Latitude 5440".to_string(),
        serial.to_string(),
        None,
        None,
    );
    db.create_hardware_asset(&asset)
        .await
        .expect("Failed to create hardware asset");
    asset
}

pub async fn create_test_software(
    db: &Database,
    name: &str,
    total_licenses: i64,
    max_licenses: Option<i64>,
) -> SoftwareAsset {
    let asset = SoftwareAsset::new(
        name.to_string(),
        "2026.1".to_string(),
        total_licenses,
        max_licenses,
        None,
        None,
    );
    db.create_software_asset(&asset)
        .await
        .expect("Failed to create software asset");
    asset
}
