//! Mock Data Synthesizer: complete campaign records from categorical form input.
//!
//! Deterministic: the same form always yields the same record. Every field has a
//! default, so an empty form still produces a renderable record.

use crate::campaign::lookup::{
    business_type, campaign_type, city_locations, duration_text, IndustryProfile,
};
use crate::campaign::narrative::render_plan_text;
use crate::models::campaign::{CampaignRecord, Location, RouteStep};
use crate::models::form::{or_default, CampaignForm, DEFAULT_BUDGET};

pub const DEFAULT_BUSINESS_NAME: &str = "Your Business";
pub const DEFAULT_TARGET_AUDIENCE: &str = "General audience";
pub const DEFAULT_LOCATION: &str = "Pune";

/// Builds the full record for a submitted form.
pub fn customized_record(form: &CampaignForm) -> CampaignRecord {
    let profile = IndustryProfile::classify(&form.industry);
    let locations = city_locations(&form.location);
    let timings = profile.timings();
    let [route_days_1_3, route_days_4_5, route_days_6_7] = route_segments(&locations, profile);
    let narrative_text = render_plan_text(form, &locations, &timings);

    CampaignRecord {
        business_name: or_default(&form.business_name, DEFAULT_BUSINESS_NAME),
        business_type: business_type(&form.industry),
        target_audience: or_default(&form.target_audience, DEFAULT_TARGET_AUDIENCE),
        campaign_type: campaign_type(&form.objectives),
        location: or_default(&form.location, DEFAULT_LOCATION),
        duration: duration_text(&form.campaign_duration),
        budget: form
            .budget_text()
            .unwrap_or_else(|| DEFAULT_BUDGET.to_string()),
        locations,
        timings,
        visibility_heatmap: profile.heatmap(),
        route_days_1_3,
        route_days_4_5,
        route_days_6_7,
        narrative_text,
        ai_predictions: None,
        is_preview: false,
    }
}

/// The hardcoded demo record used when nothing was handed off.
pub fn mock_record() -> CampaignRecord {
    let demo = CampaignForm {
        business_name: "Coffee House".to_string(),
        industry: "Food & Beverage".to_string(),
        target_audience: "18-40 year olds, coffee enthusiasts, students, professionals"
            .to_string(),
        location: "Pune".to_string(),
        budget: 25000.0,
        ..Default::default()
    };
    let profile = IndustryProfile::General;
    let locations = city_locations(&demo.location);
    let timings = profile.timings();
    let narrative_text = render_plan_text(&demo, &locations, &timings);

    CampaignRecord {
        business_name: demo.business_name,
        business_type: "Food & Beverage".to_string(),
        target_audience: demo.target_audience,
        campaign_type: "Brand Awareness".to_string(),
        location: demo.location,
        duration: "7 days".to_string(),
        budget: "25,000".to_string(),
        locations,
        timings,
        visibility_heatmap: profile.heatmap(),
        route_days_1_3: vec![
            RouteStep::new("8:00 AM", "Start at Koregaon Park"),
            RouteStep::new("9:30 AM", "Move to FC Road"),
            RouteStep::new("12:00 PM", "Lunch break at JM Road"),
            RouteStep::new("1:30 PM", "Continue to Aundh"),
        ],
        route_days_4_5: vec![
            RouteStep::new("12:00 PM", "Start at Hinjewadi IT Park"),
            RouteStep::new("2:30 PM", "Move to University Circle"),
            RouteStep::new("4:00 PM", "Continue to Baner Road"),
            RouteStep::new("6:00 PM", "End at Aundh"),
        ],
        route_days_6_7: vec![
            RouteStep::new("5:00 PM", "Start at Phoenix Mall"),
            RouteStep::new("6:30 PM", "Move to FC Road"),
            RouteStep::new("8:00 PM", "Continue to Koregaon Park"),
            RouteStep::new("10:00 PM", "End route at E-Square"),
        ],
        narrative_text,
        ai_predictions: None,
        is_preview: false,
    }
}

fn stop<'a>(locations: &'a [Location], index: usize, fallback: &'a str) -> &'a str {
    locations
        .get(index)
        .map(|l| l.name.as_str())
        .unwrap_or(fallback)
}

/// Like [`stop`], but tries the first location before the textual fallback.
fn stop_or_first<'a>(locations: &'a [Location], index: usize, fallback: &'a str) -> &'a str {
    locations
        .get(index)
        .or_else(|| locations.first())
        .map(|l| l.name.as_str())
        .unwrap_or(fallback)
}

/// Three four-stop segments (days 1-3, 4-5, 6-7) visiting `locations` by position.
/// Missing positions are filled with generic area names.
pub fn route_segments(locations: &[Location], profile: IndustryProfile) -> [Vec<RouteStep>; 3] {
    let [start_1_3, start_4_5, start_6_7] = profile.segment_start_times();

    let days_1_3 = vec![
        RouteStep::new(start_1_3, format!("Start at {}", stop(locations, 0, "City Center"))),
        RouteStep::new("9:30 AM", format!("Move to {}", stop(locations, 1, "Main Market"))),
        RouteStep::new("12:00 PM", "Lunch break"),
        RouteStep::new(
            "1:30 PM",
            format!("Continue to {}", stop(locations, 2, "Business District")),
        ),
    ];

    let days_4_5 = vec![
        RouteStep::new(
            start_4_5,
            format!("Start at {}", stop(locations, 2, "Business District")),
        ),
        RouteStep::new(
            "2:30 PM",
            format!("Move to {}", stop_or_first(locations, 3, "University Area")),
        ),
        RouteStep::new(
            "4:00 PM",
            format!("Continue to {}", stop(locations, 0, "City Center")),
        ),
        RouteStep::new("6:00 PM", format!("End at {}", stop(locations, 1, "Main Market"))),
    ];

    let days_6_7 = vec![
        RouteStep::new(start_6_7, format!("Start at {}", stop(locations, 1, "Main Market"))),
        RouteStep::new(
            "6:30 PM",
            format!("Move to {}", stop(locations, 2, "Business District")),
        ),
        RouteStep::new(
            "8:00 PM",
            format!("Continue to {}", stop(locations, 0, "City Center")),
        ),
        RouteStep::new(
            "10:00 PM",
            format!(
                "End route at {}",
                stop_or_first(locations, 3, "Entertainment District")
            ),
        ),
    ];

    [days_1_3, days_4_5, days_6_7]
}
