use serde::{Deserialize, Serialize};

/// Direction of change relative to the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
    #[default]
    None,
}

impl Trend {
    pub fn color(&self) -> &'static str {
        match self {
            Trend::Up => "green",
            Trend::Down => "red",
            Trend::Neutral | Trend::None => "muted",
        }
    }

    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Trend::Up => Some("arrow-up-right"),
            Trend::Down => Some("arrow-down-right"),
            Trend::Neutral => Some("minus"),
            Trend::None => None,
        }
    }

    /// Trend of a signed change; zero (or no change at all) is neutral.
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(c) if c > 0.0 => Trend::Up,
            Some(c) if c < 0.0 => Trend::Down,
            _ => Trend::Neutral,
        }
    }
}

fn default_trend_period() -> String {
    "vs last period".into()
}

fn default_capacity_unit() -> String {
    "items".into()
}

/// A headline metric as configured for the overview screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCard {
    pub title: String,
    /// Pre-formatted value, e.g. "75", "12K", "85".
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub trend: Trend,
    #[serde(default)]
    pub trend_value: Option<String>,
    #[serde(default = "default_trend_period")]
    pub trend_period: String,
    #[serde(default)]
    pub capacity_current: Option<f64>,
    #[serde(default)]
    pub capacity_max: Option<f64>,
    #[serde(default = "default_capacity_unit")]
    pub capacity_unit: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl MetricCard {
    /// The trend line needs both a direction and a value to show.
    pub fn shows_trend(&self) -> bool {
        self.trend != Trend::None && self.trend_value.is_some()
    }

    pub fn capacity(&self) -> Option<CapacityProgress> {
        let current = self.capacity_current?;
        let max = self.capacity_max?;
        Some(CapacityProgress::new(current, max, &self.capacity_unit))
    }

    pub fn to_view(&self) -> MetricCardView {
        let shows_trend = self.shows_trend();
        MetricCardView {
            title: self.title.clone(),
            value: self.value.clone(),
            unit: self.unit.clone(),
            icon: self.icon.clone(),
            trend: shows_trend.then(|| TrendView {
                direction: self.trend,
                value: self.trend_value.clone().unwrap_or_default(),
                period: self.trend_period.clone(),
                color: self.trend.color().to_string(),
                icon: self.trend.icon().map(str::to_string),
            }),
            capacity: self.capacity(),
        }
    }
}

/// `current / max * 100`, or 0 when `max` is absent or zero.
pub fn progress_percent(current: Option<f64>, max: Option<f64>) -> f64 {
    match (current, max) {
        (Some(current), Some(max)) if max != 0.0 => current * 100.0 / max,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityProgress {
    pub current: f64,
    pub max: f64,
    pub unit: String,
    pub percent: f64,
    /// `percent` clamped to the progress bar range.
    pub bar_value: f64,
}

impl CapacityProgress {
    pub fn new(current: f64, max: f64, unit: &str) -> Self {
        let percent = progress_percent(Some(current), Some(max));
        Self {
            current,
            max,
            unit: unit.to_string(),
            percent,
            bar_value: percent.clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendView {
    pub direction: Trend,
    pub value: String,
    pub period: String,
    pub color: String,
    pub icon: Option<String>,
}

/// Render-ready metric card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCardView {
    pub title: String,
    pub value: String,
    pub unit: Option<String>,
    pub icon: Option<String>,
    pub trend: Option<TrendView>,
    pub capacity: Option<CapacityProgress>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        assert!((progress_percent(Some(17.0), Some(20.0)) - 85.0).abs() < 1e-9);
        assert_eq!(progress_percent(Some(17.0), Some(0.0)), 0.0);
        assert_eq!(progress_percent(Some(17.0), None), 0.0);
        assert_eq!(progress_percent(None, Some(20.0)), 0.0);
    }

    fn icu_card() -> MetricCard {
        serde_json::from_str(r#"{"title":"ICU Occupancy","value":"85"}"#).unwrap()
    }

    #[test]
    fn test_bar_value_is_clamped() {
        let over = CapacityProgress::new(25.0, 20.0, "beds");
        assert_eq!(over.percent, 125.0);
        assert_eq!(over.bar_value, 100.0);
    }

    #[test]
    fn test_trend_requires_value() {
        let mut card = icu_card();
        card.trend = Trend::Neutral;
        assert!(!card.shows_trend());
        assert!(card.to_view().trend.is_none());

        card.trend_value = Some("0%".into());
        let view = card.to_view();
        let trend = view.trend.expect("trend shown");
        assert_eq!(trend.icon.as_deref(), Some("minus"));
        assert_eq!(trend.period, "vs last period");
    }

    #[test]
    fn test_capacity_needs_both_bounds() {
        let mut card = icu_card();
        card.capacity_current = Some(17.0);
        assert!(card.capacity().is_none());
        card.capacity_max = Some(20.0);
        let capacity = card.capacity().expect("capacity shown");
        assert!((capacity.percent - 85.0).abs() < 1e-9);
        assert_eq!(capacity.unit, "items");
    }

    #[test]
    fn test_trend_from_change() {
        assert_eq!(Trend::from_change(Some(5.93)), Trend::Up);
        assert_eq!(Trend::from_change(Some(-1.0)), Trend::Down);
        assert_eq!(Trend::from_change(Some(0.0)), Trend::Neutral);
        assert_eq!(Trend::from_change(None), Trend::Neutral);
        assert_eq!(Trend::Down.color(), "red");
    }

    #[test]
    fn test_card_defaults_from_json() {
        let card: MetricCard =
            serde_json::from_str(r#"{"title":"New Admissions","value":"75","trend":"up"}"#)
                .unwrap();
        assert_eq!(card.trend, Trend::Up);
        assert_eq!(card.trend_period, "vs last period");
        assert_eq!(card.capacity_unit, "items");
    }
}
