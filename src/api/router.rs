use crate::api;
use crate::api::middleware::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

async fn health() -> &'static str {
    "ok"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stats", get(api::stats::get_stats))
        // Employee routes
        .route("/api/employees", post(api::employees::create_employee))
        .route("/api/employees", get(api::employees::list_employees))
        .route("/api/employees/:id", get(api::employees::get_employee))
        .route("/api/employees/:id", patch(api::employees::update_employee))
        .route(
            "/api/employees/:id",
            delete(api::employees::delete_employee),
        )
        .route(
            "/api/employees/:id/assignments",
            get(api::assignments::get_employee_assignments),
        )
        // Hardware asset routes
        .route(
            "/api/assets/hardware",
            post(api::assets::create_hardware_asset),
        )
        .route(
            "/api/assets/hardware",
            get(api::assets::list_hardware_assets),
        )
        .route(
            "/api/assets/hardware/:id",
            get(api::assets::get_hardware_asset),
        )
        .route(
            "/api/assets/hardware/:id",
            patch(api::assets::update_hardware_asset),
        )
        .route(
            "/api/assets/hardware/:id",
            delete(api::assets::delete_hardware_asset),
        )
        // Software asset routes
        .route(
            "/api/assets/software",
            post(api::assets::create_software_asset),
        )
        .route(
            "/api/assets/software",
            get(api::assets::list_software_assets),
        )
        .route(
            "/api/assets/software/:id",
            get(api::assets::get_software_asset),
        )
        .route(
            "/api/assets/software/:id",
            patch(api::assets::update_software_asset),
        )
        .route(
            "/api/assets/software/:id",
            delete(api::assets::delete_software_asset),
        )
        .route(
            "/api/assets/:id/assignments",
            get(api::assignments::get_asset_assignments),
        )
        // Assignment routes
        .route(
            "/api/assignments/validate",
            post(api::assignments::validate_assignment),
        )
        .route(
            "/api/assignments",
            post(api::assignments::create_assignment),
        )
        .route("/api/assignments", get(api::assignments::list_assignments))
        .route(
            "/api/assignments/:id",
            get(api::assignments::get_assignment),
        )
        .route(
            "/api/assignments/:id",
            delete(api::assignments::delete_assignment),
        )
        .route(
            "/api/assignments/:id/return",
            post(api::assignments::return_assignment),
        )
        .route(
            "/api/assignments/:id/status",
            patch(api::assignments::update_assignment_status),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
