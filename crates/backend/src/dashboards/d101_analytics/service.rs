use contracts::dashboards::d101_analytics::{
    department_options, metric_type_options, time_range_options, AnalyticsMetric,
    AnalyticsRequest, AnalyticsResponse, UnknownOption,
};

use crate::shared::data::seed::HospitalData;

/// Builds the analytics page payload
///
/// The selection is only validated and echoed: the seed carries one data set.
pub fn get_analytics(
    data: &HospitalData,
    request: &AnalyticsRequest,
) -> Result<AnalyticsResponse, UnknownOption> {
    let selection = request.resolve()?;

    Ok(AnalyticsResponse {
        time_range_options: time_range_options(),
        metric_type_options: metric_type_options(),
        department_options: department_options(),
        selection,
        chart: data.analytics.chart.clone(),
        rows: data.analytics.metrics.iter().map(AnalyticsMetric::to_row).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::seed::{parse_seed, DEFAULT_SEED};
    use contracts::shared::metric::Trend;

    #[test]
    fn test_analytics_rows_from_seed() {
        let data = parse_seed(DEFAULT_SEED).unwrap();
        let resp = get_analytics(&data, &AnalyticsRequest::default()).unwrap();

        let changes: Vec<_> = resp.rows.iter().map(|r| r.change.clone().unwrap()).collect();
        assert_eq!(
            changes,
            vec!["+5.93%", "-6.67%", "+8.33%", "-21.43%", "-4.00%", "+14.29%"]
        );
        assert_eq!(resp.rows[2].current_value, "78%");
        assert_eq!(resp.rows[3].trend, Trend::Down);
        assert_eq!(resp.selection.metric_type, "admissions");
        assert_eq!(resp.time_range_options.len(), 5);
    }

    #[test]
    fn test_unknown_option() {
        let data = parse_seed(DEFAULT_SEED).unwrap();
        let req = AnalyticsRequest {
            time_range: Some("1y".into()),
            ..Default::default()
        };
        let err = get_analytics(&data, &req).unwrap_err();
        assert_eq!(err.filter, "time_range");
    }
}
