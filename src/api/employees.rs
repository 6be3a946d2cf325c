use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use crate::{
    api::middleware::{ApiResult, AppState},
    models::*,
    services::EmployeeService,
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

/// POST /api/employees - Create a new employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee_service = EmployeeService::new(state.db.clone());
    let employee = employee_service.create_employee(req).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees - List employees
pub async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<PaginationQuery>,
) -> ApiResult<Json<EmployeeListResponse>> {
    let employee_service = EmployeeService::new(state.db.clone());

    let offset = (params.page - 1) * params.per_page;
    let (employees, total) = employee_service
        .list_employees(params.per_page, offset)
        .await?;

    let total_pages = (total + params.per_page - 1) / params.per_page;

    Ok(Json(EmployeeListResponse {
        employees,
        pagination: PaginationMetadata {
            page: params.page,
            per_page: params.per_page,
            total_count: total,
            total_pages,
        },
    }))
}

/// GET /api/employees/:id - Get employee by ID
pub async fn get_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee_service = EmployeeService::new(state.db.clone());
    let employee = employee_service.get_employee(&employee_id).await?;
    Ok(Json(employee))
}

/// PATCH /api/employees/:id - Update employee
pub async fn update_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<Employee>> {
    let employee_service = EmployeeService::new(state.db.clone());
    let employee = employee_service.update_employee(&employee_id, req).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/:id - Delete employee
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> ApiResult<StatusCode> {
    let employee_service = EmployeeService::new(state.db.clone());
    employee_service.delete_employee(&employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
