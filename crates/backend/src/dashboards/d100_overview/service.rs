use contracts::dashboards::d100_overview::{
    BedAvailability, ChartData, ChartRow, DepartmentLoad, DutyRosterEntry, OverviewResponse,
    SeriesMeta,
};
use contracts::shared::roster::{staff_caption, RosterResponse};

use crate::domain::a001_ward;
use crate::shared::data::seed::HospitalData;

pub const BED_GRID_TITLE: &str = "Live Bed Availability Status";

/// Builds the overview dashboard payload
pub fn get_overview(data: &HospitalData, roster_query: Option<&str>) -> OverviewResponse {
    let duty_roster = RosterResponse::build(
        &data.duty_roster,
        roster_query.unwrap_or(""),
        DutyRosterEntry::to_row,
        staff_caption,
    );

    OverviewResponse {
        metrics: data.metrics.iter().map(|m| m.to_view()).collect(),
        admissions_trend: data.admissions_trend.clone(),
        department_stats: department_stats_chart(&data.department_load),
        department_load: data.department_load.iter().map(DepartmentLoad::to_view).collect(),
        bed_availability: BedAvailability::new(
            BED_GRID_TITLE,
            a001_ward::service::list_with_status(&data.wards),
        ),
        duty_roster,
    }
}

/// Chart of current patients vs. capacity per department
fn department_stats_chart(load: &[DepartmentLoad]) -> ChartData {
    ChartData {
        title: "Department Statistics".into(),
        description: Some("Current patient load by department.".into()),
        series: vec![
            SeriesMeta {
                key: "patients".into(),
                label: "Current Patients".into(),
                color: "chart-2".into(),
            },
            SeriesMeta {
                key: "capacity".into(),
                label: "Capacity".into(),
                color: "chart-3".into(),
            },
        ],
        rows: load
            .iter()
            .map(|d| {
                ChartRow::new(
                    &d.department,
                    &[
                        ("patients", d.patients as f64),
                        ("capacity", d.capacity as f64),
                    ],
                )
            })
            .collect(),
    }
}
