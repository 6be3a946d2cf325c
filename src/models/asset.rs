use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareAsset {
    pub id: String,
    pub asset_tag: String,
    pub manufacturer: String,
    pub model_name: String,
    pub serial_number: String,
    pub purchase_date: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl HardwareAsset {
    pub fn new(
        asset_tag: String,
        manufacturer: String,
        model_name: String,
        serial_number: String,
        purchase_date: Option<String>,
        notes: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            asset_tag,
            manufacturer,
            model_name,
            serial_number,
            purchase_date,
            notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareAsset {
    pub id: String,
    pub name: String,
    pub version: String,
    pub total_licenses: i64,
    pub max_licenses: Option<i64>,
    pub concurrent_users: Option<i64>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl SoftwareAsset {
    pub fn new(
        name: String,
        version: String,
        total_licenses: i64,
        max_licenses: Option<i64>,
        concurrent_users: Option<i64>,
        notes: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            version,
            total_licenses,
            max_licenses,
            concurrent_users,
            notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// License figures handed to the eligibility validator for software assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareLicenseInfo {
    pub total_licenses: Option<i64>,
    pub max_licenses: Option<i64>,
    pub concurrent_users: Option<i64>,
}

impl From<&SoftwareAsset> for SoftwareLicenseInfo {
    fn from(asset: &SoftwareAsset) -> Self {
        Self {
            total_licenses: Some(asset.total_licenses),
            max_licenses: asset.max_licenses,
            concurrent_users: asset.concurrent_users,
        }
    }
}

// API Request models
#[derive(Debug, Deserialize)]
pub struct CreateHardwareAssetRequest {
    pub asset_tag: String,
    pub manufacturer: String,
    pub model_name: String,
    pub serial_number: String,
    pub purchase_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateHardwareAssetRequest {
    pub asset_tag: Option<String>,
    pub manufacturer: Option<String>,
    pub model_name: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSoftwareAssetRequest {
    pub name: String,
    pub version: String,
    pub total_licenses: i64,
    pub max_licenses: Option<i64>,
    pub concurrent_users: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSoftwareAssetRequest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub total_licenses: Option<i64>,
    pub max_licenses: Option<i64>,
    pub concurrent_users: Option<i64>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareAssetListResponse {
    pub assets: Vec<HardwareAsset>,
    pub pagination: crate::models::PaginationMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftwareAssetListResponse {
    pub assets: Vec<SoftwareAsset>,
    pub pagination: crate::models::PaginationMetadata,
}
