use serde::{Deserialize, Serialize};

use crate::enums::BadgeVariant;
use crate::shared::search::Searchable;

/// Staff identifier, e.g. `S001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(pub String);

impl StaffId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Shift status of a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StaffStatus {
    #[serde(rename = "On Duty")]
    OnDuty,
    #[serde(rename = "Off Duty")]
    OffDuty,
    #[serde(rename = "On Call")]
    OnCall,
    #[serde(rename = "On Leave")]
    OnLeave,
    #[serde(rename = "Break")]
    OnBreak,
}

impl StaffStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StaffStatus::OnDuty => "On Duty",
            StaffStatus::OffDuty => "Off Duty",
            StaffStatus::OnCall => "On Call",
            StaffStatus::OnLeave => "On Leave",
            StaffStatus::OnBreak => "Break",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            StaffStatus::OnDuty => BadgeVariant::Default,
            StaffStatus::OnCall => BadgeVariant::Secondary,
            StaffStatus::OffDuty | StaffStatus::OnLeave | StaffStatus::OnBreak => {
                BadgeVariant::Outline
            }
        }
    }
}

/// Staff directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub avatar_fallback: String,
    pub department: String,
    pub role: String,
    pub status: StaffStatus,
    pub email: String,
    pub phone: String,
}

impl Searchable for StaffMember {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.department.as_str(),
            self.role.as_str(),
        ]
    }
}

/// Staff directory table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRow {
    #[serde(flatten)]
    pub member: StaffMember,
    pub badge: BadgeVariant,
}

impl StaffMember {
    pub fn to_row(&self) -> StaffRow {
        StaffRow {
            member: self.clone(),
            badge: self.status.badge_variant(),
        }
    }
}
