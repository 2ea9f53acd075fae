use std::sync::Arc;

use super::data::seed::HospitalData;

/// Shared state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<HospitalData>,
}

impl AppState {
    pub fn new(data: HospitalData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }
}
