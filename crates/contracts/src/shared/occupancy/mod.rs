use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Occupancy (in percent) at or above which a unit is `VeryHigh`.
pub const VERY_HIGH_PERCENT: i128 = 90;

/// Occupancy (in percent) at or above which a unit is `High`.
pub const HIGH_PERCENT: i128 = 75;

// ---------------------------------------------------------------------------
// Status tier
// ---------------------------------------------------------------------------

/// Severity band of a bed pool (or any capacity-bound resource).
///
/// Ordered from the worst (`DataError`) to the best (`Good`) state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTier {
    DataError,
    Full,
    VeryHigh,
    High,
    Good,
}

impl StatusTier {
    /// Label shown on the badge.
    pub fn label(&self) -> &'static str {
        match self {
            StatusTier::DataError => "Data Error",
            StatusTier::Full => "Full / Critical",
            StatusTier::VeryHigh => "Very High",
            StatusTier::High => "High",
            StatusTier::Good => "Good",
        }
    }

    /// Severity color token.
    pub fn color(&self) -> &'static str {
        match self {
            StatusTier::DataError => "gray",
            StatusTier::Full => "red",
            StatusTier::VeryHigh => "orange",
            StatusTier::High => "yellow",
            StatusTier::Good => "green",
        }
    }

    /// Icon token (lucide names).
    pub fn icon(&self) -> &'static str {
        match self {
            StatusTier::DataError => "server-crash",
            StatusTier::Full => "x-circle",
            StatusTier::VeryHigh => "alert-triangle",
            StatusTier::High => "alert-circle",
            StatusTier::Good => "check-circle-2",
        }
    }

    /// Occupancy severity rank, `Good` = 0 up to `Full` = 3.
    ///
    /// `DataError` has no rank: it does not describe an occupancy state.
    pub fn severity(&self) -> Option<u8> {
        match self {
            StatusTier::DataError => None,
            StatusTier::Good => Some(0),
            StatusTier::High => Some(1),
            StatusTier::VeryHigh => Some(2),
            StatusTier::Full => Some(3),
        }
    }

    pub fn badge(&self) -> TierBadge {
        TierBadge::from(*self)
    }
}

/// Serializable presentation bundle for a tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierBadge {
    pub tier: StatusTier,
    pub label: String,
    pub color: String,
    pub icon: String,
    /// Sort key for "busiest first" views; absent for `DataError`.
    pub severity: Option<u8>,
}

impl From<StatusTier> for TierBadge {
    fn from(tier: StatusTier) -> Self {
        Self {
            tier,
            label: tier.label().to_string(),
            color: tier.color().to_string(),
            icon: tier.icon().to_string(),
            severity: tier.severity(),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Free capacity, never negative.
pub fn available_beds(occupied: i64, total: i64) -> i64 {
    total.saturating_sub(occupied).max(0)
}

/// `occupied / total`, or `None` when the pool has no capacity configured.
pub fn occupancy_rate(occupied: i64, total: i64) -> Option<f64> {
    if total <= 0 {
        return None;
    }
    Some(occupied as f64 / total as f64)
}

/// Band an `(occupied, total)` pair into a [`StatusTier`].
///
/// Total over every integer pair. Rates are compared in integer percent space
/// so the 90% and 75% bounds are exact (`18/20` is `VeryHigh`, `15/20` is `High`).
pub fn classify(occupied: i64, total: i64) -> StatusTier {
    if total <= 0 {
        return StatusTier::DataError;
    }

    // Over-capacity is reported as Full, same as exact saturation.
    if available_beds(occupied, total) <= 0 {
        return StatusTier::Full;
    }

    let occupied_pct = occupied as i128 * 100;
    let total = total as i128;

    if occupied_pct >= total * VERY_HIGH_PERCENT {
        StatusTier::VeryHigh
    } else if occupied_pct >= total * HIGH_PERCENT {
        StatusTier::High
    } else {
        StatusTier::Good
    }
}
