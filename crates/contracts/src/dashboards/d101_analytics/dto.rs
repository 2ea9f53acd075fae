use serde::{Deserialize, Serialize};

use crate::dashboards::d100_overview::ChartData;
use crate::shared::format::{format_change_percent, ValueFormat};
use crate::shared::metric::Trend;

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

pub fn time_range_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("7d", "Last 7 Days"),
        SelectOption::new("30d", "Last 30 Days"),
        SelectOption::new("90d", "Last 90 Days"),
        SelectOption::new("ytd", "Year to Date"),
        SelectOption::new("custom", "Custom Range"),
    ]
}

pub fn metric_type_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("admissions", "Admissions Data"),
        SelectOption::new("occupancy", "Occupancy Rates"),
        SelectOption::new("wait_times", "Patient Wait Times"),
        SelectOption::new("resource_util", "Resource Utilization"),
        SelectOption::new("financials", "Financial Performance"),
    ]
}

pub fn department_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("all", "All Departments"),
        SelectOption::new("icu", "Intensive Care Unit (ICU)"),
        SelectOption::new("emergency", "Emergency Department"),
        SelectOption::new("cardiology", "Cardiology"),
        SelectOption::new("surgery", "Surgery"),
        SelectOption::new("pediatrics", "Pediatrics"),
    ]
}

/// Query of the analytics endpoint; missing fields take the page defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    #[serde(default)]
    pub time_range: Option<String>,
    #[serde(default)]
    pub metric_type: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
}

/// Resolved filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSelection {
    pub time_range: String,
    pub metric_type: String,
    pub department: String,
}

impl Default for AnalyticsSelection {
    fn default() -> Self {
        Self {
            time_range: "30d".into(),
            metric_type: "admissions".into(),
            department: "all".into(),
        }
    }
}

/// Which filter rejected a selection, and the value it got.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub filter: &'static str,
    pub value: String,
}

impl std::fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} option '{}'", self.filter, self.value)
    }
}

impl std::error::Error for UnknownOption {}

fn pick(
    filter: &'static str,
    requested: Option<&str>,
    default: String,
    options: &[SelectOption],
) -> Result<String, UnknownOption> {
    match requested {
        None => Ok(default),
        Some(value) if options.iter().any(|o| o.value == value) => Ok(value.to_string()),
        Some(value) => Err(UnknownOption {
            filter,
            value: value.to_string(),
        }),
    }
}

impl AnalyticsRequest {
    /// Resolves the request against the option lists.
    pub fn resolve(&self) -> Result<AnalyticsSelection, UnknownOption> {
        let defaults = AnalyticsSelection::default();
        Ok(AnalyticsSelection {
            time_range: pick(
                "time_range",
                self.time_range.as_deref(),
                defaults.time_range,
                &time_range_options(),
            )?,
            metric_type: pick(
                "metric_type",
                self.metric_type.as_deref(),
                defaults.metric_type,
                &metric_type_options(),
            )?,
            department: pick(
                "department",
                self.department.as_deref(),
                defaults.department,
                &department_options(),
            )?,
        })
    }
}

// ---------------------------------------------------------------------------
// Metrics table
// ---------------------------------------------------------------------------

/// A key metric with its value for the comparison period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsMetric {
    pub id: String,
    pub metric_name: String,
    pub current_value: f64,
    #[serde(default)]
    pub previous_value: Option<f64>,
    pub format: ValueFormat,
}

impl AnalyticsMetric {
    /// Relative change in percent; `None` without a non-zero previous value.
    pub fn change_percent(&self) -> Option<f64> {
        match self.previous_value {
            Some(prev) if prev != 0.0 => Some((self.current_value - prev) / prev * 100.0),
            _ => None,
        }
    }

    pub fn to_row(&self) -> AnalyticsRow {
        let change = self.change_percent();
        AnalyticsRow {
            id: self.id.clone(),
            metric_name: self.metric_name.clone(),
            current_value: self.format.format(self.current_value),
            previous_value: self.previous_value.map(|v| self.format.format(v)),
            change: change.map(format_change_percent),
            change_percent: change,
            trend: Trend::from_change(change),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRow {
    pub id: String,
    pub metric_name: String,
    pub current_value: String,
    pub previous_value: Option<String>,
    pub change: Option<String>,
    pub change_percent: Option<f64>,
    pub trend: Trend,
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub time_range_options: Vec<SelectOption>,
    pub metric_type_options: Vec<SelectOption>,
    pub department_options: Vec<SelectOption>,
    pub selection: AnalyticsSelection,
    pub chart: ChartData,
    pub rows: Vec<AnalyticsRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(current: f64, previous: Option<f64>, format: ValueFormat) -> AnalyticsMetric {
        AnalyticsMetric {
            id: "1".into(),
            metric_name: "Total Patient Admissions (Selected Period)".into(),
            current_value: current,
            previous_value: previous,
            format,
        }
    }

    #[test]
    fn test_change_rows() {
        let row = metric(1250.0, Some(1180.0), ValueFormat::Integer).to_row();
        assert_eq!(row.change.as_deref(), Some("+5.93%"));
        assert_eq!(row.trend, Trend::Up);
        assert_eq!(row.current_value, "1,250");

        let row = metric(22.0, Some(28.0), ValueFormat::Integer).to_row();
        assert_eq!(row.change.as_deref(), Some("-21.43%"));
        assert_eq!(row.trend, Trend::Down);

        let row = metric(4.2, Some(4.5), ValueFormat::Number { decimals: 1 }).to_row();
        assert_eq!(row.change.as_deref(), Some("-6.67%"));
        assert_eq!(row.previous_value.as_deref(), Some("4.5"));
    }

    #[test]
    fn test_no_previous_value() {
        let row = metric(320.0, None, ValueFormat::Integer).to_row();
        assert_eq!(row.change, None);
        assert_eq!(row.trend, Trend::Neutral);

        let row = metric(320.0, Some(0.0), ValueFormat::Integer).to_row();
        assert_eq!(row.change_percent, None);
    }

    #[test]
    fn test_resolve_defaults() {
        let selection = AnalyticsRequest::default().resolve().unwrap();
        assert_eq!(selection, AnalyticsSelection::default());
        assert_eq!(selection.time_range, "30d");
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let req = AnalyticsRequest {
            time_range: Some("7d".into()),
            metric_type: None,
            department: Some("morgue".into()),
        };
        let err = req.resolve().unwrap_err();
        assert_eq!(err.filter, "department");
        assert_eq!(err.to_string(), "unknown department option 'morgue'");
    }
}
