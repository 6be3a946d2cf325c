use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    models::*,
    services::AssetService,
};

#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> i64 {
    1
}

fn default_per_page() -> i64 {
    20
}

fn pagination(page: i64, per_page: i64, total: i64) -> PaginationMetadata {
    PaginationMetadata {
        page,
        per_page,
        total_count: total,
        total_pages: (total + per_page - 1) / per_page,
    }
}

// ========== Hardware ==========

/// POST /api/assets/hardware - Register a hardware asset
pub async fn create_hardware_asset(
    State(state): State<AppState>,
    Json(req): Json<CreateHardwareAssetRequest>,
) -> ApiResult<(StatusCode, Json<HardwareAsset>)> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.create_hardware_asset(req).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/assets/hardware - List hardware assets
pub async fn list_hardware_assets(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<HardwareAssetListResponse>> {
    let asset_service = AssetService::new(state.db.clone());

    let offset = (params.page - 1) * params.per_page;
    let (assets, total) = asset_service
        .list_hardware_assets(params.per_page, offset)
        .await?;

    Ok(Json(HardwareAssetListResponse {
        assets,
        pagination: pagination(params.page, params.per_page, total),
    }))
}

/// GET /api/assets/hardware/:id - Get hardware asset by ID
pub async fn get_hardware_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<HardwareAsset>> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.get_hardware_asset(&asset_id).await?;
    Ok(Json(asset))
}

/// PATCH /api/assets/hardware/:id - Update hardware asset
pub async fn update_hardware_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Json(req): Json<UpdateHardwareAssetRequest>,
) -> ApiResult<Json<HardwareAsset>> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.update_hardware_asset(&asset_id, req).await?;
    Ok(Json(asset))
}

/// DELETE /api/assets/hardware/:id - Delete hardware asset
pub async fn delete_hardware_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> ApiResult<StatusCode> {
    let asset_service = AssetService::new(state.db.clone());
    asset_service.delete_hardware_asset(&asset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ========== Software ==========

/// POST /api/assets/software - Register a software asset
pub async fn create_software_asset(
    State(state): State<AppState>,
    Json(req): Json<CreateSoftwareAssetRequest>,
) -> ApiResult<(StatusCode, Json<SoftwareAsset>)> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.create_software_asset(req).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/assets/software - List software assets
pub async fn list_software_assets(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<SoftwareAssetListResponse>> {
    let asset_service = AssetService::new(state.db.clone());

    let offset = (params.page - 1) * params.per_page;
    let (assets, total) = asset_service
        .list_software_assets(params.per_page, offset)
        .await?;

    Ok(Json(SoftwareAssetListResponse {
        assets,
        pagination: pagination(params.page, params.per_page, total),
    }))
}

/// GET /api/assets/software/:id - Get software asset by ID
pub async fn get_software_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<SoftwareAsset>> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.get_software_asset(&asset_id).await?;
    Ok(Json(asset))
}

/// PATCH /api/assets/software/:id - Update software asset
pub async fn update_software_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Json(req): Json<UpdateSoftwareAssetRequest>,
) -> ApiResult<Json<SoftwareAsset>> {
    let asset_service = AssetService::new(state.db.clone());
    let asset = asset_service.update_software_asset(&asset_id, req).await?;
    Ok(Json(asset))
}

/// DELETE /api/assets/software/:id - Delete software asset
pub async fn delete_software_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> ApiResult<StatusCode> {
    let asset_service = AssetService::new(state.db.clone());
    asset_service.delete_software_asset(&asset_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
