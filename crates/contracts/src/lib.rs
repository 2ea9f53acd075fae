//! Shared types for the hospital operations dashboard.
//!
//! Everything here is plain data plus pure functions: the backend computes
//! views with it, and any client can deserialize the same types.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`shared::occupancy`] | Bed occupancy banding into status tiers |
//! | [`shared::search`] | Case-insensitive roster filtering |
//! | [`shared::metric`] | Metric cards, trends, capacity progress |
//! | [`shared::roster`] | Filtered list responses with captions |
//! | [`domain`] | Wards, patients, staff |
//! | [`dashboards`] | Overview and analytics screen payloads |
//! | [`system`] | Profile settings |

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
