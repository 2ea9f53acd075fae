use axum::{
    extract::{Query, State},
    Json,
};
use contracts::domain::a002_patient::PatientRow;
use contracts::shared::roster::RosterResponse;
use serde::Deserialize;

use crate::domain::a002_patient;
use crate::shared::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /api/a002/patients?q=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<RosterResponse<PatientRow>> {
    let q = query.q.unwrap_or_default();
    Json(a002_patient::service::search(&state.data.patients, &q))
}
