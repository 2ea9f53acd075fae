use axum::{
    extract::{Query, State},
    Json,
};
use contracts::domain::a003_staff::StaffRow;
use contracts::shared::roster::RosterResponse;

use crate::domain::a003_staff;
use crate::handlers::a002_patient::SearchQuery;
use crate::shared::state::AppState;

/// GET /api/a003/staff?q=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<RosterResponse<StaffRow>> {
    let q = query.q.unwrap_or_default();
    Json(a003_staff::service::search(&state.data.staff, &q))
}
