use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::a001_ward::WardStatusView;
use crate::domain::a003_staff::{StaffId, StaffStatus};
use crate::enums::BadgeVariant;
use crate::shared::metric::MetricCardView;
use crate::shared::occupancy::{self, TierBadge};
use crate::shared::roster::RosterResponse;
use crate::shared::search::Searchable;

// ---------------------------------------------------------------------------
// Charts
// ---------------------------------------------------------------------------

/// One plotted series: data key, legend label and color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesMeta {
    pub key: String,
    pub label: String,
    pub color: String,
}

/// One x-axis point, values keyed by `SeriesMeta::key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    pub label: String,
    pub values: BTreeMap<String, f64>,
}

impl ChartRow {
    pub fn new(label: &str, values: &[(&str, f64)]) -> Self {
        Self {
            label: label.to_string(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub title: String,
    pub description: Option<String>,
    pub series: Vec<SeriesMeta>,
    pub rows: Vec<ChartRow>,
}

// ---------------------------------------------------------------------------
// Department load
// ---------------------------------------------------------------------------

/// Current patient load of a department, as configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentLoad {
    pub department: String,
    pub patients: i64,
    pub capacity: i64,
}

/// Department load banded with the same tiers as wards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentLoadView {
    pub department: String,
    pub patients: i64,
    pub capacity: i64,
    pub status: TierBadge,
}

impl DepartmentLoad {
    pub fn to_view(&self) -> DepartmentLoadView {
        DepartmentLoadView {
            department: self.department.clone(),
            patients: self.patients,
            capacity: self.capacity,
            status: occupancy::classify(self.patients, self.capacity).badge(),
        }
    }
}

// ---------------------------------------------------------------------------
// Bed availability
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedAvailability {
    pub title: String,
    pub wards: Vec<WardStatusView>,
    /// Set when there is nothing to show.
    pub empty_message: Option<String>,
}

pub const BED_AVAILABILITY_EMPTY: &str = "No bed availability data to display at the moment. \
Please check back later or contact support if this issue persists.";

impl BedAvailability {
    pub fn new(title: &str, wards: Vec<WardStatusView>) -> Self {
        let empty_message = wards
            .is_empty()
            .then(|| BED_AVAILABILITY_EMPTY.to_string());
        Self {
            title: title.to_string(),
            wards,
            empty_message,
        }
    }
}

// ---------------------------------------------------------------------------
// Duty roster
// ---------------------------------------------------------------------------

/// Overview roster line; a reduced staff record without contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRosterEntry {
    pub id: StaffId,
    pub name: String,
    pub role: String,
    pub department: String,
    pub status: StaffStatus,
}

impl Searchable for DutyRosterEntry {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.role.as_str(),
            self.department.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyRosterRow {
    #[serde(flatten)]
    pub entry: DutyRosterEntry,
    pub badge: BadgeVariant,
}

impl DutyRosterEntry {
    pub fn to_row(&self) -> DutyRosterRow {
        DutyRosterRow {
            entry: self.clone(),
            badge: self.status.badge_variant(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// Optional query for the overview endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewRequest {
    /// Quick search over the duty roster.
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub metrics: Vec<MetricCardView>,
    pub admissions_trend: ChartData,
    pub department_stats: ChartData,
    pub department_load: Vec<DepartmentLoadView>,
    pub bed_availability: BedAvailability,
    pub duty_roster: RosterResponse<DutyRosterRow>,
}
