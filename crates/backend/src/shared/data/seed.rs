use contracts::dashboards::d100_overview::{ChartData, DepartmentLoad, DutyRosterEntry};
use contracts::dashboards::d101_analytics::AnalyticsMetric;
use contracts::domain::a001_ward::Ward;
use contracts::domain::a002_patient::Patient;
use contracts::domain::a003_staff::StaffMember;
use contracts::shared::metric::MetricCard;
use contracts::system::profile::ProfileSettings;
use serde::Deserialize;

use crate::shared::config::{resolve_path, Config};

/// Seed data embedded in the binary
pub const DEFAULT_SEED: &str = include_str!("../../../seed/hospital.toml");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSeed {
    pub chart: ChartData,
    pub metrics: Vec<AnalyticsMetric>,
}

/// Every collection the dashboard screens are rendered from.
///
/// Loaded once at startup and handed to handlers through router state;
/// never mutated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalData {
    #[serde(default)]
    pub wards: Vec<Ward>,
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub staff: Vec<StaffMember>,
    #[serde(default)]
    pub duty_roster: Vec<DutyRosterEntry>,
    #[serde(default)]
    pub metrics: Vec<MetricCard>,
    pub admissions_trend: ChartData,
    #[serde(default)]
    pub department_load: Vec<DepartmentLoad>,
    pub analytics: AnalyticsSeed,
    pub profile: ProfileSettings,
}

pub fn parse_seed(contents: &str) -> anyhow::Result<HospitalData> {
    let data: HospitalData = toml::from_str(contents)?;
    Ok(data)
}

/// Loads the configured seed file, or the embedded one.
pub fn load(config: &Config) -> anyhow::Result<HospitalData> {
    let data = match config.data.seed_path.as_deref() {
        Some(path) => {
            let path = resolve_path(path);
            tracing::info!("Loading seed data from: {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("cannot read seed {}: {e}", path.display()))?;
            parse_seed(&contents)?
        }
        None => {
            tracing::info!("Using embedded seed data");
            parse_seed(DEFAULT_SEED)?
        }
    };

    tracing::info!(
        wards = data.wards.len(),
        patients = data.patients.len(),
        staff = data.staff.len(),
        "Seed data ready"
    );

    for ward in &data.wards {
        if ward.total_beds <= 0 || ward.occupied_beds > ward.total_beds {
            tracing::warn!(
                "ward {} has inconsistent counts: {} occupied / {} total",
                ward.id.as_str(),
                ward.occupied_beds,
                ward.total_beds
            );
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_patient::PatientStatus;
    use contracts::domain::a003_staff::StaffStatus;
    use contracts::shared::metric::Trend;

    #[test]
    fn test_embedded_seed_parses() {
        let data = parse_seed(DEFAULT_SEED).unwrap();
        assert_eq!(data.wards.len(), 6);
        assert_eq!(data.patients.len(), 7);
        assert_eq!(data.staff.len(), 7);
        assert_eq!(data.duty_roster.len(), 5);
        assert_eq!(data.metrics.len(), 3);
        assert_eq!(data.admissions_trend.rows.len(), 7);
        assert_eq!(data.department_load.len(), 5);
        assert_eq!(data.analytics.metrics.len(), 6);
        assert_eq!(data.analytics.chart.series.len(), 3);
        assert_eq!(data.profile.profile.initials, "OR");
    }

    #[test]
    fn test_seed_enums_and_defaults() {
        let data = parse_seed(DEFAULT_SEED).unwrap();
        assert_eq!(data.patients[3].status, PatientStatus::Critical);
        assert_eq!(data.duty_roster[4].status, StaffStatus::OnBreak);
        assert!(data.staff[2].avatar_url.is_none());

        let icu = &data.metrics[2];
        assert_eq!(icu.trend, Trend::Neutral);
        assert_eq!(icu.capacity_unit, "beds");
        assert_eq!(data.metrics[0].capacity_unit, "items");
    }

    #[test]
    fn test_load_uses_embedded_seed_by_default() {
        let config = crate::shared::config::parse_config("[server]\nhost = \"127.0.0.1\"\nport = 1\n")
            .unwrap();
        let data = load(&config).unwrap();
        assert_eq!(data.wards[0].id.as_str(), "gw-a");
    }

    #[test]
    fn test_missing_seed_file_is_an_error() {
        let config = crate::shared::config::parse_config(
            "[server]\nhost = \"127.0.0.1\"\nport = 1\n[data]\nseed_path = \"/nonexistent/seed.toml\"\n",
        )
        .unwrap();
        assert!(load(&config).is_err());
    }
}
