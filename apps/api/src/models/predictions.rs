use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A scalar analytics value. Upstream producers emit some metrics as JSON numbers
/// and others as preformatted strings (`"135%"`, `"0.52"`), so both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Metric {
    Number(f64),
    Text(String),
}

impl Metric {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Metric::Number(n) => Some(*n),
            Metric::Text(s) => s.trim().trim_end_matches('%').replace(',', "").parse().ok(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            Metric::Number(n) => write!(f, "{n}"),
            Metric::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Metric {
    fn from(value: f64) -> Self {
        Metric::Number(value)
    }
}

impl From<String> for Metric {
    fn from(value: String) -> Self {
        Metric::Text(value)
    }
}

/// Comma-separated area names per category, e.g. `"Marine Drive, Bandra"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestPerformingAreas {
    pub high_traffic: Option<String>,
    pub shopping: Option<String>,
    pub business: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BestPerformingTimes {
    pub weekday_morning: Option<String>,
    pub weekday_evening: Option<String>,
    pub weekend: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiBreakdown {
    pub campaign_cost: Option<Metric>,
    pub estimated_revenue: Option<Metric>,
    pub net_profit: Option<Metric>,
    pub return_on_investment: Option<Metric>,
    pub break_even_days: Option<u32>,
    pub payback_period: Option<String>,
    /// Factor name → share of the ROI estimate, in percent.
    pub contributing_factors: Option<BTreeMap<String, f64>>,
}

/// The preview-analytics / ROI payload. Every field is optional; consumers
/// substitute their own literal defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiPredictions {
    pub roi: Option<Metric>,
    pub total_impressions: Option<Metric>,
    pub impressions_per_day: Option<Metric>,
    pub engagement_rate: Option<Metric>,
    pub conversions: Option<Metric>,
    pub conversion_rate: Option<Metric>,
    pub cost_per_impression: Option<Metric>,
    pub cost_per_engagement: Option<Metric>,
    pub cost_per_conversion: Option<Metric>,
    pub estimated_revenue: Option<Metric>,
    pub confidence_score: Option<u32>,
    pub best_performing_areas: Option<BestPerformingAreas>,
    pub best_performing_times: Option<BestPerformingTimes>,
    pub roi_breakdown: Option<RoiBreakdown>,
}
