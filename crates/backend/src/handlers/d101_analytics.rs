use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d101_analytics::{AnalyticsRequest, AnalyticsResponse};

use crate::dashboards::d101_analytics;
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/d101/analytics?time_range=&metric_type=&department=
pub async fn get_analytics(
    State(state): State<AppState>,
    Query(request): Query<AnalyticsRequest>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    d101_analytics::service::get_analytics(&state.data, &request)
        .map(Json)
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
