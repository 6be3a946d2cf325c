use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::middleware::{ApiResult, AppState};

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_employees: i64,
    pub total_hardware_assets: i64,
    pub total_software_assets: i64,
    pub active_assignments: i64,
}

/// GET /api/stats - Dashboard counts
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<StatsResponse>> {
    let total_employees = state.db.count_employees().await?;
    let total_hardware_assets = state.db.count_hardware_assets().await?;
    let total_software_assets = state.db.count_software_assets().await?;
    let active_assignments = state.db.count_active_assignments().await?;

    Ok(Json(StatsResponse {
        total_employees,
        total_hardware_assets,
        total_software_assets,
        active_assignments,
    }))
}
