use axum::{routing::get, Router};

use crate::shared::state::AppState;
use crate::{handlers, system};

/// Application route table
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route(
            "/api/d100/overview",
            get(handlers::d100_overview::get_overview),
        )
        .route(
            "/api/d101/analytics",
            get(handlers::d101_analytics::get_analytics),
        )
        // ========================================
        // DIRECTORIES
        // ========================================
        .route("/api/a001/wards", get(handlers::a001_ward::list_all))
        .route("/api/a001/wards/:id", get(handlers::a001_ward::get_by_id))
        .route("/api/a002/patients", get(handlers::a002_patient::list))
        .route("/api/a003/staff", get(handlers::a003_staff::list))
        // ========================================
        // SYSTEM
        // ========================================
        .route(
            "/api/system/profile",
            get(system::handlers::profile::get_profile),
        )
        .with_state(state)
}
