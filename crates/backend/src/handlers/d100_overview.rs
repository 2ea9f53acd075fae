use axum::{
    extract::{Query, State},
    Json,
};
use contracts::dashboards::d100_overview::{OverviewRequest, OverviewResponse};

use crate::dashboards::d100_overview;
use crate::shared::state::AppState;

/// GET /api/d100/overview
pub async fn get_overview(
    State(state): State<AppState>,
    Query(request): Query<OverviewRequest>,
) -> Json<OverviewResponse> {
    Json(d100_overview::service::get_overview(
        &state.data,
        request.q.as_deref(),
    ))
}
