use contracts::domain::a003_staff::{StaffMember, StaffRow};
use contracts::shared::roster::{staff_caption, RosterResponse};

/// Staff directory filtered by name, department or role
pub fn search(staff: &[StaffMember], query: &str) -> RosterResponse<StaffRow> {
    RosterResponse::build(staff, query, StaffMember::to_row, staff_caption)
}
