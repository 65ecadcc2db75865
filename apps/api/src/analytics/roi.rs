//! Prediction Engine: heuristic ROI and reach estimates for a campaign form.
//!
//! Flow: industry metrics (with variance) → daily/total impressions → audience-adjusted
//! conversions → objective-adjusted revenue → location-adjusted ROI → cost metrics,
//! best areas/times and the ROI breakdown.
//!
//! All randomness comes from the caller's `Rng`, so a seeded source gives repeatable
//! predictions.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::AppError;
use crate::models::form::CampaignForm;
use crate::models::predictions::{
    AiPredictions, BestPerformingAreas, BestPerformingTimes, Metric, RoiBreakdown,
};

/// Relative variance applied to each industry metric (±10%).
const METRIC_VARIANCE: f64 = 0.1;
/// Share of impressions counted as engagements.
const ENGAGEMENT_SHARE: f64 = 0.05;
const MIN_IMPRESSIONS: f64 = 1000.0;
const MIN_CONVERSIONS: f64 = 10.0;
const DEFAULT_CAMPAIGN_DAYS: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Industry metrics
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndustryMetrics {
    pub impression_rate: f64,
    pub conversion_rate: f64,
    pub avg_transaction_value: f64,
}

impl IndustryMetrics {
    const DEFAULT: IndustryMetrics = IndustryMetrics {
        impression_rate: 1.0,
        conversion_rate: 0.04,
        avg_transaction_value: 2000.0,
    };

    /// Table values for an exact (case-insensitive) industry name.
    pub fn base(industry: &str) -> Self {
        let (impression_rate, conversion_rate, avg_transaction_value) =
            match industry.trim().to_lowercase().as_str() {
                "retail" => (1.2, 0.045, 1500.0),
                "restaurant" | "food & beverage" => (1.4, 0.055, 800.0),
                "technology" => (0.9, 0.035, 5000.0),
                "healthcare" => (0.8, 0.03, 3500.0),
                "education" => (1.1, 0.04, 2500.0),
                "entertainment" => (1.5, 0.06, 1200.0),
                _ => return Self::DEFAULT,
            };
        Self {
            impression_rate,
            conversion_rate,
            avg_transaction_value,
        }
    }

    /// Table values with ±10% variance on each metric. An empty industry gets the
    /// default metrics unvaried.
    pub fn sample<R: Rng + ?Sized>(industry: &str, rng: &mut R) -> Self {
        if industry.trim().is_empty() {
            return Self::DEFAULT;
        }
        let base = Self::base(industry);
        let mut vary =
            |value: f64| value * (1.0 + rng.gen_range(-METRIC_VARIANCE..METRIC_VARIANCE));
        Self {
            impression_rate: vary(base.impression_rate),
            conversion_rate: vary(base.conversion_rate),
            avg_transaction_value: vary(base.avg_transaction_value),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Multipliers
// ────────────────────────────────────────────────────────────────────────────

pub fn campaign_days(duration: &str) -> u32 {
    match duration.trim().to_lowercase().as_str() {
        "1-day" => 1,
        "1-week" => 7,
        "2-weeks" => 14,
        "1-month" => 30,
        "3-months" => 90,
        _ => DEFAULT_CAMPAIGN_DAYS,
    }
}

pub fn audience_multiplier(target_audience: &str) -> f64 {
    let audience = target_audience.to_lowercase();
    if audience.contains("high income") || audience.contains("affluent") {
        1.5
    } else if audience.contains("middle") && audience.contains("income") {
        1.2
    } else if audience.contains("specific") || audience.contains("niche") {
        1.3
    } else if audience.contains("professional") || audience.contains("business") {
        1.4
    } else if audience.contains("student") || audience.contains("young") {
        1.1
    } else {
        1.0
    }
}

/// Brand campaigns pay back slower; traffic, events and launches faster.
pub fn objective_multiplier(objectives: &[String]) -> f64 {
    let has = |code: &str| objectives.iter().any(|o| o == code);
    let mut multiplier = 1.0;
    if has("brand") {
        multiplier *= 0.9;
    }
    if has("traffic") || has("event") {
        multiplier *= 1.2;
    }
    if has("launch") {
        multiplier *= 1.1;
    }
    multiplier
}

const METRO_CITIES: &[&str] = &["mumbai", "delhi", "bangalore", "kolkata", "chennai", "hyderabad"];
const TIER_TWO_CITIES: &[&str] = &["pune", "ahmedabad", "jaipur", "lucknow", "kochi"];

pub fn location_factor(location: &str) -> f64 {
    let location = location.to_lowercase();
    if METRO_CITIES.iter().any(|c| location.contains(c)) {
        1.3
    } else if TIER_TWO_CITIES.iter().any(|c| location.contains(c)) {
        1.2
    } else {
        1.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Best areas and times
// ────────────────────────────────────────────────────────────────────────────

struct AreaTables {
    prefix: &'static str,
    high_traffic: &'static [&'static str],
    shopping: &'static [&'static str],
    business: &'static [&'static str],
}

fn area_tables(location: &str, industry: &str) -> AreaTables {
    let location = location.to_lowercase();
    let mut tables = if location.contains("mumbai") {
        AreaTables {
            prefix: "Mumbai ",
            high_traffic: &["Marine Drive", "Linking Road", "Juhu Beach", "Andheri Station Area"],
            shopping: &["Phoenix Mall", "Inorbit Mall", "Linking Road", "Colaba Causeway"],
            business: &["BKC", "Lower Parel", "Nariman Point", "Andheri East"],
        }
    } else if location.contains("delhi") {
        AreaTables {
            prefix: "Delhi ",
            high_traffic: &["Connaught Place", "India Gate", "Karol Bagh", "Chandni Chowk"],
            shopping: &["Saket Select Citywalk", "DLF Promenade", "Khan Market", "Lajpat Nagar"],
            business: &["Nehru Place", "Connaught Place", "Gurgaon Cyber City", "Noida Sector 62"],
        }
    } else if location.contains("bangalore") {
        AreaTables {
            prefix: "Bangalore ",
            high_traffic: &["MG Road", "Brigade Road", "Indiranagar", "Koramangala"],
            shopping: &[
                "Phoenix Marketcity",
                "UB City",
                "Commercial Street",
                "Jayanagar 4th Block",
            ],
            business: &["Whitefield", "Electronic City", "Manyata Tech Park", "Outer Ring Road"],
        }
    } else {
        AreaTables {
            prefix: "",
            high_traffic: &["Main Street", "City Center", "Transport Hub", "Market Area"],
            shopping: &["Shopping Mall", "Retail District", "Commercial Zone", "Market Place"],
            business: &["Business District", "Office Park", "Corporate Hub", "Tech Park"],
        }
    };

    let industry = industry.to_lowercase();
    if industry.contains("retail") {
        tables.shopping = &["Premium Mall", "Fashion Street", "Main Market", "Shopping Hub"];
    } else if industry.contains("restaurant") || industry.contains("food") {
        tables.high_traffic = &["Food Street", "Restaurant Row", "Cafe District", "Dining Hub"];
    } else if industry.contains("tech") {
        tables.business = &["Tech Park", "IT Hub", "Innovation Center", "Software Campus"];
    }
    tables
}

/// One randomly chosen area per category, prefixed with the city name when known.
pub fn best_areas<R: Rng + ?Sized>(
    location: &str,
    industry: &str,
    rng: &mut R,
) -> BestPerformingAreas {
    let tables = area_tables(location, industry);
    let mut pick = |candidates: &[&str]| {
        candidates
            .choose(&mut *rng)
            .map(|area| format!("{}{area}", tables.prefix))
    };
    BestPerformingAreas {
        high_traffic: pick(tables.high_traffic),
        shopping: pick(tables.shopping),
        business: pick(tables.business),
    }
}

pub fn best_times(industry: &str) -> BestPerformingTimes {
    let industry = industry.to_lowercase();
    let is_food = industry.contains("restaurant") || industry.contains("food");
    let (morning, evening, weekend) = if is_food {
        ("7 AM - 10 AM", "6 PM - 10 PM", "11 AM - 9 PM")
    } else if industry.contains("retail") {
        ("10 AM - 1 PM", "4 PM - 8 PM", "11 AM - 6 PM")
    } else if industry.contains("entertainment") {
        ("9 AM - 12 PM", "6 PM - 11 PM", "1 PM - 9 PM")
    } else {
        ("8 AM - 11 AM", "5 PM - 8 PM", "10 AM - 4 PM")
    };
    BestPerformingTimes {
        weekday_morning: Some(morning.to_string()),
        weekday_evening: Some(evening.to_string()),
        weekend: Some(weekend.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Payback
// ────────────────────────────────────────────────────────────────────────────

/// Days of campaign revenue needed to cover the cost. A campaign that never
/// recovers its cost reports the full campaign length.
pub fn break_even_days(cost: f64, revenue: f64, days: u32) -> u32 {
    if revenue <= cost {
        return days;
    }
    let daily_revenue = revenue / f64::from(days);
    (cost / daily_revenue).ceil() as u32
}

pub fn payback_period(cost: f64, revenue: f64, days: u32) -> f64 {
    if revenue <= cost {
        return f64::from(days);
    }
    cost / (revenue / f64::from(days))
}

/// Each factor's share of the combined factor weight, rounded to whole percent.
fn contributing_factors(
    location: f64,
    audience: f64,
    objective: f64,
    industry: f64,
) -> BTreeMap<String, f64> {
    let factors = [
        ("location", location * 100.0),
        ("targetAudience", audience * 100.0),
        ("campaignObjectives", objective * 100.0),
        ("industryStandard", industry * 100.0),
    ];
    let total: f64 = factors.iter().map(|(_, v)| v).sum();
    factors
        .into_iter()
        .map(|(name, value)| (name.to_string(), (value / total * 100.0).round()))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

pub fn generate_predictions<R: Rng + ?Sized>(
    form: &CampaignForm,
    rng: &mut R,
) -> Result<AiPredictions, AppError> {
    let budget = form.budget;
    if !budget.is_finite() || budget <= 0.0 {
        return Err(AppError::Validation(
            "budget must be greater than zero".to_string(),
        ));
    }

    let metrics = IndustryMetrics::sample(&form.industry, rng);
    let days = campaign_days(&form.campaign_duration);

    let daily_impressions = budget / f64::from(days) * metrics.impression_rate;
    let mut total_impressions = daily_impressions * f64::from(days);
    if total_impressions <= 0.0 {
        total_impressions = MIN_IMPRESSIONS;
    }

    let audience = audience_multiplier(&form.target_audience);
    let conversion_rate = metrics.conversion_rate * audience;
    let mut conversions = total_impressions * conversion_rate;
    if conversions <= 0.0 {
        conversions = MIN_CONVERSIONS;
    }

    let objective = objective_multiplier(&form.objectives);
    let estimated_revenue = conversions * metrics.avg_transaction_value * objective;

    let location = location_factor(&form.location);
    let roi = (estimated_revenue - budget) / budget * 100.0 * location;

    let cost_per_impression = budget / total_impressions;
    let cost_per_engagement = budget / (total_impressions * ENGAGEMENT_SHARE);
    let cost_per_conversion = budget / conversions;

    let best_performing_areas = best_areas(&form.location, &form.industry, rng);
    let confidence_score = rng.gen_range(85..95u32);

    let roi_text = format!("{roi:.0}%");
    let roi_breakdown = RoiBreakdown {
        campaign_cost: Some(Metric::from(budget.round())),
        estimated_revenue: Some(Metric::from(estimated_revenue.round())),
        net_profit: Some(Metric::from((estimated_revenue - budget).round())),
        return_on_investment: Some(Metric::from(roi_text.clone())),
        break_even_days: Some(break_even_days(budget, estimated_revenue, days)),
        payback_period: Some(format!(
            "{:.1} days",
            payback_period(budget, estimated_revenue, days)
        )),
        contributing_factors: Some(contributing_factors(
            location,
            audience,
            objective,
            metrics.impression_rate,
        )),
    };

    Ok(AiPredictions {
        roi: Some(Metric::from(roi_text)),
        total_impressions: Some(Metric::from(total_impressions.round())),
        impressions_per_day: Some(Metric::from(daily_impressions.round())),
        engagement_rate: None,
        conversions: Some(Metric::from(conversions.round())),
        conversion_rate: Some(Metric::from(format!("{:.1}%", conversion_rate * 100.0))),
        cost_per_impression: Some(Metric::from(format!("{cost_per_impression:.2}"))),
        cost_per_engagement: Some(Metric::from(format!("{cost_per_engagement:.2}"))),
        cost_per_conversion: Some(Metric::from(cost_per_conversion.round())),
        estimated_revenue: Some(Metric::from(estimated_revenue.round())),
        confidence_score: Some(confidence_score),
        best_performing_areas: Some(best_performing_areas),
        best_performing_times: Some(best_times(&form.industry)),
        roi_breakdown: Some(roi_breakdown),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn retail_mumbai() -> CampaignForm {
        CampaignForm {
            industry: "retail".to_string(),
            location: "Mumbai".to_string(),
            campaign_duration: "1-week".to_string(),
            target_audience: "Young professionals".to_string(),
            budget: 30000.0,
            objectives: vec!["traffic".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let form = CampaignForm::default();
        let err = generate_predictions(&form, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_variance_stays_within_ten_percent() {
        let mut rng = StdRng::seed_from_u64(9);
        let base = IndustryMetrics::base("retail");
        for _ in 0..100 {
            let m = IndustryMetrics::sample("Retail", &mut rng);
            assert!((m.impression_rate / base.impression_rate - 1.0).abs() <= METRIC_VARIANCE);
            assert!((m.conversion_rate / base.conversion_rate - 1.0).abs() <= METRIC_VARIANCE);
        }
        assert_eq!(IndustryMetrics::sample("", &mut rng), IndustryMetrics::DEFAULT);
        assert_eq!(IndustryMetrics::base("Food & Beverage").avg_transaction_value, 800.0);
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(campaign_days("2-weeks"), 14);
        assert_eq!(campaign_days("10 days"), 30);
        assert_eq!(audience_multiplier("Affluent families"), 1.5);
        assert_eq!(audience_multiplier("middle income households"), 1.2);
        assert_eq!(audience_multiplier("students"), 1.1);
        assert_eq!(audience_multiplier(""), 1.0);
        assert_eq!(location_factor("New Delhi"), 1.3);
        assert_eq!(location_factor("Pune"), 1.2);
        assert_eq!(location_factor("Nagpur"), 1.0);
        let objectives = vec!["brand".to_string(), "traffic".to_string()];
        assert!((objective_multiplier(&objectives) - 1.08).abs() < 1e-9);
        assert_eq!(objective_multiplier(&[]), 1.0);
    }

    #[test]
    fn test_best_areas_use_city_prefix_and_industry_override() {
        let mut rng = StdRng::seed_from_u64(4);
        let areas = best_areas("Mumbai", "retail", &mut rng);
        let shopping = areas.shopping.unwrap();
        assert!(shopping.starts_with("Mumbai "));
        assert!(
            ["Premium Mall", "Fashion Street", "Main Market", "Shopping Hub"]
                .iter()
                .any(|a| shopping.ends_with(a)),
            "{shopping} should come from the retail table"
        );
        let generic = best_areas("Nagpur", "healthcare", &mut rng);
        assert!(!generic.business.unwrap().starts_with(' '));
    }

    #[test]
    fn test_best_times_per_industry() {
        assert_eq!(best_times("Food & Beverage").weekend.as_deref(), Some("11 AM - 9 PM"));
        assert_eq!(best_times("retail").weekday_evening.as_deref(), Some("4 PM - 8 PM"));
        assert_eq!(best_times("").weekday_morning.as_deref(), Some("8 AM - 11 AM"));
    }

    #[test]
    fn test_break_even_and_payback() {
        assert_eq!(break_even_days(10000.0, 70000.0, 7), 1);
        assert_eq!(break_even_days(30000.0, 40000.0, 7), 6);
        assert_eq!(break_even_days(30000.0, 20000.0, 7), 7);
        assert!((payback_period(30000.0, 40000.0, 7) - 5.25).abs() < 1e-9);
        assert_eq!(payback_period(30000.0, 20000.0, 14), 14.0);
    }

    #[test]
    fn test_contributing_factors_sum_close_to_one_hundred() {
        let factors = contributing_factors(1.3, 1.4, 1.2, 1.2);
        let sum: f64 = factors.values().sum();
        assert!((sum - 100.0).abs() <= 2.0, "sum was {sum}");
        assert_eq!(factors.len(), 4);
    }

    #[test]
    fn test_predictions_are_complete_and_reproducible() {
        let form = retail_mumbai();
        let a = generate_predictions(&form, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = generate_predictions(&form, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a, b);

        let score = a.confidence_score.unwrap();
        assert!((85..=94).contains(&score));
        assert!(a.roi.as_ref().unwrap().to_string().ends_with('%'));
        assert!(a.total_impressions.as_ref().unwrap().as_f64().unwrap() > 0.0);
        let breakdown = a.roi_breakdown.unwrap();
        assert_eq!(breakdown.campaign_cost, Some(Metric::Number(30000.0)));
        assert!(breakdown.payback_period.unwrap().ends_with(" days"));
        assert!(a.best_performing_areas.unwrap().high_traffic.unwrap().starts_with("Mumbai "));
    }
}
