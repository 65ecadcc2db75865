use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::form::format_amount;
use crate::models::predictions::AiPredictions;

/// A recommended billboard stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub description: String,
}

impl Location {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A recommended time window, e.g. `"8:00 AM - 10:00 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timing {
    pub time: String,
    pub description: String,
}

impl Timing {
    pub fn new(time: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            description: description.into(),
        }
    }
}

/// Expected visibility for one period of the day. `visibility` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapEntry {
    pub time: String,
    pub visibility: u32,
}

impl HeatmapEntry {
    pub fn new(time: impl Into<String>, visibility: u32) -> Self {
        Self {
            time: time.into(),
            visibility,
        }
    }
}

/// One stop of a route segment. `location` is free text and may embed the clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStep {
    pub time: String,
    pub location: String,
}

impl RouteStep {
    pub fn new(time: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            location: location.into(),
        }
    }
}

/// The fully-populated result handed to the dashboard.
///
/// Built once per results request and never mutated after it is returned.
/// Every field is always present; partial data arrives as a [`RecordPatch`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRecord {
    pub business_name: String,
    pub business_type: String,
    pub target_audience: String,
    pub campaign_type: String,
    pub location: String,
    pub duration: String,
    pub budget: String,
    pub locations: Vec<Location>,
    pub timings: Vec<Timing>,
    pub visibility_heatmap: Vec<HeatmapEntry>,
    #[serde(rename = "routePlanDays13")]
    pub route_days_1_3: Vec<RouteStep>,
    #[serde(rename = "routePlanDays45")]
    pub route_days_4_5: Vec<RouteStep>,
    #[serde(rename = "routePlanDays67")]
    pub route_days_6_7: Vec<RouteStep>,
    pub narrative_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_predictions: Option<AiPredictions>,
    #[serde(default)]
    pub is_preview: bool,
}

/// Optional-field overlay for a [`CampaignRecord`].
///
/// `None` means "absent, keep the base value". Present-but-empty strings and lists are
/// treated the same way, so a patch can never blank out a populated field.
///
/// Deserialization degrades per field: a value of the wrong shape reads as absent
/// instead of rejecting the whole payload. `budget` accepts a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordPatch {
    #[serde(deserialize_with = "lenient")]
    pub business_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub business_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub target_audience: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub campaign_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "budget_text")]
    pub budget: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub locations: Option<Vec<Location>>,
    #[serde(deserialize_with = "lenient")]
    pub timings: Option<Vec<Timing>>,
    #[serde(deserialize_with = "lenient")]
    pub visibility_heatmap: Option<Vec<HeatmapEntry>>,
    #[serde(rename = "routePlanDays13", deserialize_with = "lenient")]
    pub route_days_1_3: Option<Vec<RouteStep>>,
    #[serde(rename = "routePlanDays45", deserialize_with = "lenient")]
    pub route_days_4_5: Option<Vec<RouteStep>>,
    #[serde(rename = "routePlanDays67", deserialize_with = "lenient")]
    pub route_days_6_7: Option<Vec<RouteStep>>,
    #[serde(alias = "routePlan", deserialize_with = "lenient")]
    pub narrative_text: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub ai_predictions: Option<AiPredictions>,
    #[serde(deserialize_with = "lenient")]
    pub is_preview: Option<bool>,
}

/// Reads a field, treating a value of the wrong shape as absent.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Budget as display text from either a JSON string or a number.
fn budget_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(n) => n.as_f64().map(format_amount),
        _ => None,
    })
}

impl CampaignRecord {
    /// Overlays every present, non-empty field of `patch` onto this record.
    pub fn apply_patch(&mut self, patch: RecordPatch) {
        set_text(&mut self.business_name, patch.business_name);
        set_text(&mut self.business_type, patch.business_type);
        set_text(&mut self.target_audience, patch.target_audience);
        set_text(&mut self.campaign_type, patch.campaign_type);
        set_text(&mut self.location, patch.location);
        set_text(&mut self.duration, patch.duration);
        set_text(&mut self.budget, patch.budget);
        set_list(&mut self.locations, patch.locations);
        set_list(&mut self.timings, patch.timings);
        set_list(&mut self.visibility_heatmap, patch.visibility_heatmap);
        set_list(&mut self.route_days_1_3, patch.route_days_1_3);
        set_list(&mut self.route_days_4_5, patch.route_days_4_5);
        set_list(&mut self.route_days_6_7, patch.route_days_6_7);
        set_text(&mut self.narrative_text, patch.narrative_text);
        if let Some(predictions) = patch.ai_predictions {
            self.ai_predictions = Some(predictions);
        }
        if let Some(is_preview) = patch.is_preview {
            self.is_preview = is_preview;
        }
    }

    pub fn patched(mut self, patch: RecordPatch) -> Self {
        self.apply_patch(patch);
        self
    }
}

fn set_text(slot: &mut String, value: Option<String>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        *slot = value;
    }
}

fn set_list<T>(slot: &mut Vec<T>, value: Option<Vec<T>>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        *slot = value;
    }
}
