use serde::{Deserialize, Serialize};

use crate::shared::occupancy::{self, StatusTier, TierBadge};

// ============================================================================
// ID Type
// ============================================================================

/// Ward slug, e.g. `gw-a`, `icu`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WardId(pub String);

impl WardId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A ward bed pool.
///
/// Counts come straight from configuration and are not validated:
/// `occupied_beds` may exceed `total_beds`, and either may be negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ward {
    pub id: WardId,
    pub name: String,
    pub total_beds: i64,
    pub occupied_beds: i64,
}

impl Ward {
    pub fn new(id: &str, name: &str, total_beds: i64, occupied_beds: i64) -> Self {
        Self {
            id: WardId::new(id),
            name: name.to_string(),
            total_beds,
            occupied_beds,
        }
    }

    pub fn available_beds(&self) -> i64 {
        occupancy::available_beds(self.occupied_beds, self.total_beds)
    }

    pub fn status(&self) -> StatusTier {
        occupancy::classify(self.occupied_beds, self.total_beds)
    }

    pub fn badge(&self) -> TierBadge {
        self.status().badge()
    }

    pub fn to_view(&self) -> WardStatusView {
        WardStatusView {
            id: self.id.clone(),
            name: self.name.clone(),
            total_beds: self.total_beds,
            occupied_beds: self.occupied_beds,
            available_beds: self.available_beds(),
            occupancy_rate: occupancy::occupancy_rate(self.occupied_beds, self.total_beds),
            status: self.badge(),
        }
    }
}

/// One card of the bed availability grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardStatusView {
    pub id: WardId,
    pub name: String,
    pub total_beds: i64,
    pub occupied_beds: i64,
    pub available_beds: i64,
    pub occupancy_rate: Option<f64>,
    pub status: TierBadge,
}
