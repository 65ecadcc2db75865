//! Preview variant of the synthesizer.
//!
//! Locations and timings come from the prediction payload's best-performing areas and
//! times when present, otherwise from the regular lookup tables. Heatmap values and the
//! cosmetic figures in the plan text are drawn from the caller's random source, so a
//! seeded source reproduces the same record.

use rand::Rng;

use crate::campaign::lookup::{
    business_type, campaign_type, city_locations, duration_text, IndustryProfile,
};
use crate::campaign::synthesizer::{DEFAULT_BUSINESS_NAME, DEFAULT_TARGET_AUDIENCE};
use crate::models::campaign::{CampaignRecord, HeatmapEntry, Location, RouteStep, Timing};
use crate::models::form::{or_default, CampaignForm, DEFAULT_BUDGET};
use crate::models::predictions::AiPredictions;

/// Preview records default to Mumbai rather than Pune.
pub const PREVIEW_LOCATION: &str = "Mumbai";

/// Maximum absolute jitter applied to each heatmap value, in percentage points.
pub const HEATMAP_JITTER: i32 = 5;

pub fn preview_record<R: Rng + ?Sized>(
    form: &CampaignForm,
    predictions: &AiPredictions,
    rng: &mut R,
) -> CampaignRecord {
    let profile = IndustryProfile::classify(&form.industry);
    let locations = preview_locations(&form.location, predictions);
    let timings = preview_timings(profile, predictions);
    let visibility_heatmap = jittered_heatmap(profile, rng);
    let [route_days_1_3, route_days_4_5, route_days_6_7] = preview_routes(&locations);
    let narrative_text = render_preview_text(
        form,
        predictions,
        &locations,
        &timings,
        [
            route_days_1_3.as_slice(),
            route_days_4_5.as_slice(),
            route_days_6_7.as_slice(),
        ],
        rng,
    );

    CampaignRecord {
        business_name: or_default(&form.business_name, DEFAULT_BUSINESS_NAME),
        business_type: business_type(&form.industry),
        target_audience: or_default(&form.target_audience, DEFAULT_TARGET_AUDIENCE),
        campaign_type: campaign_type(&form.objectives),
        location: or_default(&form.location, PREVIEW_LOCATION),
        duration: duration_text(&form.campaign_duration),
        budget: form
            .budget_text()
            .unwrap_or_else(|| DEFAULT_BUDGET.to_string()),
        locations,
        timings,
        visibility_heatmap,
        route_days_1_3,
        route_days_4_5,
        route_days_6_7,
        narrative_text,
        ai_predictions: Some(predictions.clone()),
        is_preview: true,
    }
}

fn split_areas(areas: Option<&str>) -> impl Iterator<Item = &str> {
    areas
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
}

/// Best-performing areas in category order (high traffic, shopping, business).
pub fn preview_locations(location: &str, predictions: &AiPredictions) -> Vec<Location> {
    let mut locations = Vec::new();
    if let Some(areas) = &predictions.best_performing_areas {
        let categories = [
            (&areas.high_traffic, "High-traffic area with maximum visibility"),
            (
                &areas.shopping,
                "Popular shopping area frequented by your target audience",
            ),
            (
                &areas.business,
                "Business district with high professional traffic",
            ),
        ];
        for (names, description) in categories {
            locations.extend(split_areas(names.as_deref()).map(|n| Location::new(n, description)));
        }
    }

    if locations.is_empty() {
        city_locations(location)
    } else {
        locations
    }
}

pub fn preview_timings(profile: IndustryProfile, predictions: &AiPredictions) -> Vec<Timing> {
    let mut timings = Vec::new();
    if let Some(times) = &predictions.best_performing_times {
        let windows = [
            (
                &times.weekday_morning,
                "Peak morning traffic for maximum visibility",
            ),
            (
                &times.weekday_evening,
                "Evening rush hour with highest audience engagement",
            ),
            (
                &times.weekend,
                "Weekend peak hours for leisure-focused audience",
            ),
        ];
        timings.extend(
            windows
                .into_iter()
                .filter_map(|(time, description)| {
                    time.as_deref()
                        .map(str::trim)
                        .filter(|t| !t.is_empty())
                        .map(|t| Timing::new(t, description))
                }),
        );
    }

    if timings.is_empty() {
        profile.timings()
    } else {
        timings
    }
}

/// The profile's heatmap with every value moved by up to ±[`HEATMAP_JITTER`] points.
pub fn jittered_heatmap<R: Rng + ?Sized>(
    profile: IndustryProfile,
    rng: &mut R,
) -> Vec<HeatmapEntry> {
    profile
        .heatmap()
        .into_iter()
        .map(|mut entry| {
            let delta = rng.gen_range(-HEATMAP_JITTER..=HEATMAP_JITTER);
            entry.visibility = (entry.visibility as i32 + delta).clamp(0, 100) as u32;
            entry
        })
        .collect()
}

fn stop(locations: &[Location], index: usize, fallback: &'static str) -> String {
    locations
        .get(index)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

pub fn preview_routes(locations: &[Location]) -> [Vec<RouteStep>; 3] {
    let main = stop(locations, 0, "Main Area");
    let shopping = stop(locations, 1, "Shopping District");
    let business = stop(locations, 2, "Business District");
    let hub = stop(locations, 3, "Commercial Hub");

    [
        vec![
            RouteStep::new("8:30 AM", format!("Start at {main}")),
            RouteStep::new("10:00 AM", format!("Move to {shopping}")),
            RouteStep::new("12:30 PM", "Lunch break / High visibility positioning"),
            RouteStep::new("2:00 PM", format!("Continue to {business}")),
            RouteStep::new("4:30 PM", format!("End at {hub}")),
        ],
        vec![
            RouteStep::new("11:00 AM", format!("Start at {business}")),
            RouteStep::new("1:30 PM", format!("Move to {main}")),
            RouteStep::new("3:00 PM", format!("Continue to {shopping}")),
            RouteStep::new("5:30 PM", format!("Evening positioning at {hub}")),
        ],
        vec![
            RouteStep::new("10:00 AM", format!("Start at {shopping} (weekend crowd)")),
            RouteStep::new("12:30 PM", format!("Move to {main} (lunch crowd)")),
            RouteStep::new("3:00 PM", format!("Afternoon positioning at {hub}")),
            RouteStep::new("6:00 PM", format!("Evening prime time at {business}")),
        ],
    ]
}

/// `1234567` → `"1,234,567"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn render_preview_text<R: Rng + ?Sized>(
    form: &CampaignForm,
    predictions: &AiPredictions,
    locations: &[Location],
    timings: &[Timing],
    routes: [&[RouteStep]; 3],
    rng: &mut R,
) -> String {
    let business = or_default(&form.business_name, DEFAULT_BUSINESS_NAME);
    let daily = predictions
        .impressions_per_day
        .as_ref()
        .and_then(|m| m.as_f64())
        .map(|d| d.max(0.0) as u64)
        .unwrap_or_else(|| rng.gen_range(5000..8000u64));
    let total = predictions
        .total_impressions
        .as_ref()
        .and_then(|m| m.as_f64())
        .map(|t| t.max(0.0) as u64)
        .unwrap_or(daily * 7);

    let mut lines = vec![
        format!("# Mobile Billboard Campaign Plan for {business}"),
        String::new(),
        "## Campaign Details".to_string(),
        format!("- Business: {business}"),
        format!("- Industry: {}", business_type(&form.industry)),
        format!("- Location: {}", or_default(&form.location, PREVIEW_LOCATION)),
        format!(
            "- Target Audience: {}",
            or_default(&form.target_audience, DEFAULT_TARGET_AUDIENCE)
        ),
        format!(
            "- Budget: ₹{}",
            form.budget_text()
                .unwrap_or_else(|| DEFAULT_BUDGET.to_string())
        ),
        format!("- Expected Reach: {} impressions over 7 days", group_thousands(total)),
        String::new(),
        "### Recommended Locations:".to_string(),
    ];
    lines.extend(
        locations
            .iter()
            .map(|l| format!("- {}: {}", l.name, l.description)),
    );

    lines.push(String::new());
    lines.push("### Optimal Timing:".to_string());
    lines.extend(
        timings
            .iter()
            .map(|t| format!("- {}: {}", t.time, t.description)),
    );

    lines.push(String::new());
    lines.push("### Route Plan:".to_string());
    let headings = [
        "#### Days 1-3: Coverage Focus",
        "#### Days 4-5: Engagement Focus",
        "#### Days 6-7: Weekend Strategy",
    ];
    for (heading, steps) in headings.into_iter().zip(routes) {
        lines.push(heading.to_string());
        lines.extend(
            steps
                .iter()
                .map(|s| format!("- {} ({})", s.location, s.time)),
        );
        lines.push(String::new());
    }

    lines.push("### Estimated Impressions:".to_string());
    lines.push(format!("- Daily Average: {} impressions", group_thousands(daily)));
    lines.push(format!("- Total Campaign: {} impressions", group_thousands(total)));
    if let Some(first) = locations.first() {
        lines.push(format!(
            "- {}: {} impressions per day, {}% match to target demographic",
            first.name,
            group_thousands(daily * 3 / 10),
            rng.gen_range(60..100u32)
        ));
    }
    lines.push(format!(
        "- Weekend amplification factor: {:.1}x",
        rng.gen_range(1.2..1.8f64)
    ));

    let engagement = predictions
        .engagement_rate
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("{:.1}", rng.gen_range(3.0..5.0f64)));
    let conversions = predictions
        .conversions
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| {
            let rate: f64 = rng.gen_range(0.02..0.05);
            group_thousands((total as f64 * rate) as u64)
        });
    let roi = predictions
        .roi
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| rng.gen_range(150..250u32).to_string());

    lines.extend([
        String::new(),
        "### ROI Projection:".to_string(),
        format!("- Engagement rate: {}%", engagement.trim_end_matches('%')),
        format!("- Estimated conversions: {conversions}"),
        format!("- Projected ROI: {}%", roi.trim_end_matches('%')),
        String::new(),
        "### Special Considerations:".to_string(),
        "- Weather contingency plan included for all routes".to_string(),
        "- Special event adjustments programmed for local happenings".to_string(),
        "- Traffic pattern variations accounted for in all timing recommendations".to_string(),
    ]);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
