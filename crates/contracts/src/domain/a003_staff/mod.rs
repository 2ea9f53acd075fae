pub mod aggregate;

pub use aggregate::{StaffId, StaffMember, StaffRow, StaffStatus};
