use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    models::*,
    services::{AssignmentService, ValidationResult},
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

fn assignment_service(state: &AppState) -> AssignmentService {
    AssignmentService::new(
        state.db.clone(),
        state.event_bus.clone(),
        state.max_employee_assignments,
    )
}

fn pagination(page: i64, per_page: i64, total: i64) -> PaginationMetadata {
    PaginationMetadata {
        page,
        per_page,
        total_count: total,
        total_pages: (total + per_page - 1) / per_page,
    }
}

/// POST /api/assignments/validate - Check eligibility for a candidate
/// assignment without creating anything. Returns the full validation
/// result for the console's status panel.
pub async fn validate_assignment(
    State(state): State<AppState>,
    Json(req): Json<ValidateAssignmentRequest>,
) -> ApiResult<Json<ValidationResult>> {
    let service = assignment_service(&state);
    let result = service.validate_candidate(&req).await?;
    Ok(Json(result))
}

/// POST /api/assignments - Create a new assignment (eligibility enforced)
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> ApiResult<(StatusCode, Json<Assignment>)> {
    let service = assignment_service(&state);
    let assignment = service.create_assignment(req).await?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// GET /api/assignments - List assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<AssignmentListResponse>> {
    let service = assignment_service(&state);

    let offset = (params.page - 1) * params.per_page;
    let (assignments, total) = service.list_assignments(params.per_page, offset).await?;

    Ok(Json(AssignmentListResponse {
        assignments,
        pagination: pagination(params.page, params.per_page, total),
    }))
}

/// GET /api/assignments/:id - Get assignment by ID
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> ApiResult<Json<Assignment>> {
    let service = assignment_service(&state);
    let assignment = service.get_assignment(&assignment_id).await?;
    Ok(Json(assignment))
}

/// POST /api/assignments/:id/return - Return an assigned asset
pub async fn return_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
    Json(req): Json<ReturnAssignmentRequest>,
) -> ApiResult<Json<Assignment>> {
    let service = assignment_service(&state);
    let assignment = service.return_assignment(&assignment_id, req).await?;
    Ok(Json(assignment))
}

/// PATCH /api/assignments/:id/status - Update assignment status
pub async fn update_assignment_status(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
    Json(req): Json<UpdateAssignmentStatusRequest>,
) -> ApiResult<Json<Assignment>> {
    let service = assignment_service(&state);
    let assignment = service.update_status(&assignment_id, req).await?;
    Ok(Json(assignment))
}

/// DELETE /api/assignments/:id - Delete assignment
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<String>,
) -> ApiResult<StatusCode> {
    let service = assignment_service(&state);
    service.delete_assignment(&assignment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/employees/:id/assignments - Assignments held by an employee
pub async fn get_employee_assignments(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<AssignmentListResponse>> {
    let service = assignment_service(&state);

    let offset = (params.page - 1) * params.per_page;
    let (assignments, total) = service
        .get_employee_assignments(&employee_id, params.per_page, offset)
        .await?;

    Ok(Json(AssignmentListResponse {
        assignments,
        pagination: pagination(params.page, params.per_page, total),
    }))
}

/// GET /api/assets/:id/assignments - Assignment history of an asset
pub async fn get_asset_assignments(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<AssignmentListResponse>> {
    let service = assignment_service(&state);

    let offset = (params.page - 1) * params.per_page;
    let (assignments, total) = service
        .get_asset_assignments(&asset_id, params.per_page, offset)
        .await?;

    Ok(Json(AssignmentListResponse {
        assignments,
        pagination: pagination(params.page, params.per_page, total),
    }))
}
