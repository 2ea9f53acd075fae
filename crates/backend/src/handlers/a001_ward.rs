use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a001_ward::WardStatusView;

use crate::domain::a001_ward;
use crate::shared::error::AppError;
use crate::shared::state::AppState;

/// GET /api/a001/wards
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<WardStatusView>> {
    Json(a001_ward::service::list_with_status(&state.data.wards))
}

/// GET /api/a001/wards/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<WardStatusView>, AppError> {
    a001_ward::service::get_by_id(&state.data.wards, &id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("ward '{id}' not found")))
}
