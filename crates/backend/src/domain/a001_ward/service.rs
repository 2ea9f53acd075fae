use contracts::domain::a001_ward::{Ward, WardStatusView};

/// All wards with their computed status, in configured order
pub fn list_with_status(wards: &[Ward]) -> Vec<WardStatusView> {
    wards.iter().map(Ward::to_view).collect()
}

/// Ward by id
pub fn get_by_id(wards: &[Ward], id: &str) -> Option<WardStatusView> {
    wards.iter().find(|w| w.id.as_str() == id).map(Ward::to_view)
}
