use crate::{
    api::middleware::error::{ApiError, ApiResult},
    database::Database,
    models::{
        CreateHardwareAssetRequest, CreateSoftwareAssetRequest, HardwareAsset, SoftwareAsset,
        UpdateHardwareAssetRequest, UpdateSoftwareAssetRequest,
    },
};

#[derive(Clone)]
pub struct AssetService {
    db: Database,
}

impl AssetService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    // ========== Hardware ==========

    pub async fn create_hardware_asset(
        &self,
        request: CreateHardwareAssetRequest,
    ) -> ApiResult<HardwareAsset> {
        // 1. Validate fields
        if request.asset_tag.trim().is_empty() {
            return Err(ApiError::BadRequest("Asset tag cannot be empty".to_string()));
        }
        if request.serial_number.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Serial number cannot be empty".to_string(),
            ));
        }

        // 2. Check for duplicate serial
        if self
            .db
            .get_hardware_asset_by_serial(&request.serial_number)
            .await?
            .is_some()
        {
            return Err(ApiError::Conflict(format!(
                "Hardware asset with serial '{}' already exists",
                request.serial_number
            )));
        }

        // 3. Create and save
        let asset = HardwareAsset::new(
            request.asset_tag,
            request.manufacturer,
            request.model_name,
            request.serial_number,
            request.purchase_date,
            request.notes,
        );
        self.db.create_hardware_asset(&asset).await?;

        tracing::info!("Hardware asset created: id={}, tag={}", asset.id, asset.asset_tag);
        Ok(asset)
    }

    pub async fn get_hardware_asset(&self, id: &str) -> ApiResult<HardwareAsset> {
        self.db
            .get_hardware_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Hardware asset {} not found", id)))
    }

    pub async fn update_hardware_asset(
        &self,
        id: &str,
        request: UpdateHardwareAssetRequest,
    ) -> ApiResult<HardwareAsset> {
        let mut asset = self
            .db
            .get_hardware_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Hardware asset {} not found", id)))?;

        if let Some(asset_tag) = request.asset_tag {
            asset.asset_tag = asset_tag;
        }
        if let Some(manufacturer) = request.manufacturer {
            asset.manufacturer = manufacturer;
        }
        if let Some(model_name) = request.model_name {
            asset.model_name = model_name;
        }
        if let Some(serial_number) = request.serial_number {
            if serial_number != asset.serial_number {
                if self
                    .db
                    .get_hardware_asset_by_serial(&serial_number)
                    .await?
                    .is_some()
                {
                    return Err(ApiError::Conflict(format!(
                        "Hardware asset with serial '{}' already exists",
                        serial_number
                    )));
                }
                asset.serial_number = serial_number;
            }
        }
        if request.purchase_date.is_some() {
            asset.purchase_date = request.purchase_date;
        }
        if request.notes.is_some() {
            asset.notes = request.notes;
        }
        asset.updated_at = chrono::Utc::now().to_rfc3339();

        self.db.update_hardware_asset(&asset).await?;
        Ok(asset)
    }

    pub async fn delete_hardware_asset(&self, id: &str) -> ApiResult<()> {
        self.db
            .get_hardware_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Hardware asset {} not found", id)))?;

        // An asset still in someone's hands cannot be removed
        if self.db.asset_has_occupying_assignments(id).await? {
            return Err(ApiError::Conflict(
                "Asset is still assigned to an employee".to_string(),
            ));
        }

        self.db.delete_hardware_asset(id).await?;
        tracing::info!("Hardware asset {} deleted", id);
        Ok(())
    }

    pub async fn list_hardware_assets(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<HardwareAsset>, i64)> {
        self.db.list_hardware_assets(limit, offset).await
    }

    // ========== Software ==========

    pub async fn create_software_asset(
        &self,
        request: CreateSoftwareAssetRequest,
    ) -> ApiResult<SoftwareAsset> {
        // 1. Validate fields
        if request.name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Software name cannot be empty".to_string(),
            ));
        }
        if request.total_licenses < 1 {
            return Err(ApiError::BadRequest(
                "Software must have at least one license".to_string(),
            ));
        }
        if let Some(max) = request.max_licenses {
            if max < 1 {
                return Err(ApiError::BadRequest(
                    "max_licenses must be at least one".to_string(),
                ));
            }
        }

        // 2. Create and save
        let asset = SoftwareAsset::new(
            request.name,
            request.version,
            request.total_licenses,
            request.max_licenses,
            request.concurrent_users,
            request.notes,
        );
        self.db.create_software_asset(&asset).await?;

        tracing::info!("Software asset created: id={}, name={}", asset.id, asset.name);
        Ok(asset)
    }

    pub async fn get_software_asset(&self, id: &str) -> ApiResult<SoftwareAsset> {
        self.db
            .get_software_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Software asset {} not found", id)))
    }

    pub async fn update_software_asset(
        &self,
        id: &str,
        request: UpdateSoftwareAssetRequest,
    ) -> ApiResult<SoftwareAsset> {
        let mut asset = self
            .db
            .get_software_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Software asset {} not found", id)))?;

        if let Some(name) = request.name {
            asset.name = name;
        }
        if let Some(version) = request.version {
            asset.version = version;
        }
        if let Some(total_licenses) = request.total_licenses {
            if total_licenses < 1 {
                return Err(ApiError::BadRequest(
                    "Software must have at least one license".to_string(),
                ));
            }
            asset.total_licenses = total_licenses;
        }
        if request.max_licenses.is_some() {
            asset.max_licenses = request.max_licenses;
        }
        if request.concurrent_users.is_some() {
            asset.concurrent_users = request.concurrent_users;
        }
        if request.notes.is_some() {
            asset.notes = request.notes;
        }
        asset.updated_at = chrono::Utc::now().to_rfc3339();

        self.db.update_software_asset(&asset).await?;
        Ok(asset)
    }

    pub async fn delete_software_asset(&self, id: &str) -> ApiResult<()> {
        self.db
            .get_software_asset_by_id(id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Software asset {} not found", id)))?;

        if self.db.asset_has_occupying_assignments(id).await? {
            return Err(ApiError::Conflict(
                "Asset is still assigned to an employee".to_string(),
            ));
        }

        self.db.delete_software_asset(id).await?;
        tracing::info!("Software asset {} deleted", id);
        Ok(())
    }

    pub async fn list_software_assets(
        &self,
        limit: i64,
        offset: i64,
    ) -> ApiResult<(Vec<SoftwareAsset>, i64)> {
        self.db.list_software_assets(limit, offset).await
    }
}
