use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::BadgeVariant;
use crate::shared::search::Searchable;

/// Patient identifier, e.g. `PID001`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

impl PatientId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Clinical status of an admitted patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    Stable,
    Critical,
    Observation,
    Discharged,
}

impl PatientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PatientStatus::Stable => "Stable",
            PatientStatus::Critical => "Critical",
            PatientStatus::Observation => "Observation",
            PatientStatus::Discharged => "Discharged",
        }
    }

    pub fn badge_variant(&self) -> BadgeVariant {
        match self {
            PatientStatus::Stable => BadgeVariant::Default,
            PatientStatus::Critical => BadgeVariant::Destructive,
            PatientStatus::Observation => BadgeVariant::Secondary,
            PatientStatus::Discharged => BadgeVariant::Outline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(default)]
    pub avatar_src: Option<String>,
    pub avatar_fallback: String,
    pub ward: String,
    pub admission_date: NaiveDate,
    pub condition: String,
    pub status: PatientStatus,
}

impl Patient {
    /// Admission date as the summary table prints it, e.g. `Oct 15, 2023`.
    pub fn admission_date_display(&self) -> String {
        self.admission_date.format("%b %d, %Y").to_string()
    }

    pub fn to_row(&self) -> PatientRow {
        PatientRow {
            admission_date_display: self.admission_date_display(),
            status_label: self.status.label().to_string(),
            badge: self.status.badge_variant(),
            patient: self.clone(),
        }
    }
}

impl Searchable for Patient {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.id.as_str(),
            self.ward.as_str(),
            self.condition.as_str(),
            self.status.label(),
        ]
    }
}

/// Patient summary table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRow {
    #[serde(flatten)]
    pub patient: Patient,
    pub admission_date_display: String,
    pub status_label: String,
    pub badge: BadgeVariant,
}
