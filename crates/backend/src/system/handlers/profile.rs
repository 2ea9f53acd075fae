use axum::{extract::State, Json};
use contracts::system::profile::ProfileSettings;

use crate::shared::state::AppState;

/// GET /api/system/profile
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileSettings> {
    Json(state.data.profile.resolved())
}
