pub mod format;
pub mod metric;
pub mod occupancy;
pub mod roster;
pub mod search;
