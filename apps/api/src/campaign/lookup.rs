//! Fixed lookup tables that turn categorical form codes into display labels,
//! location sets, timing windows and visibility percentages.
//!
//! All matching is done on the trimmed, lowercased input.

use crate::models::campaign::{HeatmapEntry, Location, Timing};

// ────────────────────────────────────────────────────────────────────────────
// Label mappings
// ────────────────────────────────────────────────────────────────────────────

const BUSINESS_TYPES: &[(&str, &str)] = &[
    ("retail", "Retail"),
    ("restaurant", "Food & Beverage"),
    ("entertainment", "Entertainment"),
    ("healthcare", "Healthcare"),
    ("education", "Education"),
    ("technology", "Technology"),
    ("automotive", "Automotive"),
    ("financial", "Financial Services"),
];

const DURATIONS: &[(&str, &str)] = &[
    ("1-day", "1 day"),
    ("1-week", "7 days"),
    ("2-weeks", "14 days"),
    ("1-month", "30 days"),
    ("3-months", "90 days"),
];

const OBJECTIVES: &[(&str, &str)] = &[
    ("brand", "Brand Awareness"),
    ("traffic", "Store Traffic"),
    ("launch", "Product Launch"),
    ("event", "Event Promotion"),
];

pub const DEFAULT_BUSINESS_TYPE: &str = "Business";
pub const DEFAULT_DURATION: &str = "7 days";
pub const DEFAULT_CAMPAIGN_TYPE: &str = "Brand Awareness";

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    let code = code.trim().to_lowercase();
    table.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
}

/// Industry code → business-type label. Unknown codes are capitalised as-is.
pub fn business_type(industry: &str) -> String {
    let industry = industry.trim();
    if industry.is_empty() {
        return DEFAULT_BUSINESS_TYPE.to_string();
    }
    match lookup(BUSINESS_TYPES, industry) {
        Some(label) => label.to_string(),
        None => capitalize(industry),
    }
}

/// Duration code → duration text. Unknown codes pass through unchanged.
pub fn duration_text(code: &str) -> String {
    if code.trim().is_empty() {
        return DEFAULT_DURATION.to_string();
    }
    lookup(DURATIONS, code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

/// Objective code → readable label. Unknown codes pass through unchanged.
pub fn objective_label(code: &str) -> String {
    lookup(OBJECTIVES, code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

/// The first objective is the campaign's primary type.
pub fn campaign_type(objectives: &[String]) -> String {
    objectives
        .first()
        .map(|o| objective_label(o))
        .unwrap_or_else(|| DEFAULT_CAMPAIGN_TYPE.to_string())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Industry profiles
// ────────────────────────────────────────────────────────────────────────────

/// Industry bucket that selects timing tables, heatmaps and route start times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryProfile {
    Food,
    Retail,
    Entertainment,
    General,
}

impl IndustryProfile {
    pub fn classify(industry: &str) -> Self {
        let industry = industry.to_lowercase();
        if industry.contains("restaurant") || industry.contains("food") {
            IndustryProfile::Food
        } else if industry.contains("retail") {
            IndustryProfile::Retail
        } else if industry.contains("entertainment") {
            IndustryProfile::Entertainment
        } else {
            IndustryProfile::General
        }
    }

    pub fn timings(self) -> Vec<Timing> {
        let table: &[(&str, &str)] = match self {
            IndustryProfile::Food => &[
                ("11:30 AM - 2:00 PM", "Lunch rush hours"),
                ("6:00 PM - 9:00 PM", "Dinner time peak"),
                ("3:00 PM - 5:00 PM", "Afternoon coffee/snack time"),
            ],
            IndustryProfile::Retail => &[
                ("10:00 AM - 1:00 PM", "Morning shopping hours"),
                ("4:00 PM - 7:00 PM", "After-work shopping peak"),
                ("1:00 PM - 3:00 PM", "Lunch break shoppers"),
            ],
            IndustryProfile::Entertainment | IndustryProfile::General => &[
                ("8:00 AM - 10:00 AM", "Morning commute hours"),
                ("12:00 PM - 2:00 PM", "Lunch break period"),
                ("5:00 PM - 8:00 PM", "Evening rush hour and leisure time"),
            ],
        };
        table.iter().map(|(t, d)| Timing::new(*t, *d)).collect()
    }

    /// Fixed visibility percentages per period of the day.
    pub fn heatmap(self) -> Vec<HeatmapEntry> {
        let table: &[(&str, u32)] = match self {
            IndustryProfile::Food => &[
                ("Morning (8-11 AM)", 40),
                ("Lunch (11 AM-2 PM)", 85),
                ("Afternoon (2-5 PM)", 50),
                ("Evening (5-8 PM)", 90),
                ("Night (8-11 PM)", 75),
            ],
            IndustryProfile::Retail => &[
                ("Morning (8-11 AM)", 60),
                ("Midday (11 AM-2 PM)", 75),
                ("Afternoon (2-5 PM)", 70),
                ("Evening (5-8 PM)", 85),
                ("Night (8-11 PM)", 40),
            ],
            IndustryProfile::Entertainment | IndustryProfile::General => &[
                ("Morning (8-11 AM)", 75),
                ("Midday (11 AM-2 PM)", 60),
                ("Afternoon (2-5 PM)", 50),
                ("Evening (5-8 PM)", 85),
                ("Night (8-11 PM)", 70),
            ],
        };
        table.iter().map(|(t, v)| HeatmapEntry::new(*t, *v)).collect()
    }

    /// Start time of each of the three route segments.
    /// Food and entertainment campaigns start later in the day.
    pub fn segment_start_times(self) -> [&'static str; 3] {
        match self {
            IndustryProfile::Food => ["11:00 AM", "1:00 PM", "6:00 PM"],
            IndustryProfile::Entertainment => ["10:00 AM", "2:00 PM", "7:00 PM"],
            IndustryProfile::Retail | IndustryProfile::General => {
                ["8:00 AM", "12:00 PM", "5:00 PM"]
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// City location sets
// ────────────────────────────────────────────────────────────────────────────

const PUNE: [(&str, &str); 4] = [
    ("Koregaon Park", "High-end shopping area with affluent visitors"),
    ("FC Road", "Popular with college students and young professionals"),
    ("Aundh", "Residential area with shopping complexes"),
    ("Hinjewadi IT Park", "Tech hub with young professionals"),
];

const MUMBAI: [(&str, &str); 4] = [
    ("Bandra", "Upscale residential and commercial area"),
    ("Andheri", "Business hub with shopping centers"),
    ("Marine Drive", "Popular tourist destination"),
    ("Powai", "Tech and business center"),
];

const DELHI: [(&str, &str); 4] = [
    ("Connaught Place", "Central business district"),
    ("South Extension", "Popular shopping area"),
    ("Hauz Khas", "Trendy area with restaurants and shops"),
    ("Cyber City", "Business hub in Gurgaon"),
];

const GENERIC: [(&str, &str); 4] = [
    ("Main Market", "Central shopping area"),
    ("Business District", "Commercial hub with offices"),
    ("University Area", "Popular with students"),
    ("Residential Hub", "High-density residential area"),
];

/// Four recommended locations for the city named in `location`.
pub fn city_locations(location: &str) -> Vec<Location> {
    let location = location.to_lowercase();
    let table = if location.contains("pune") {
        &PUNE
    } else if location.contains("mumbai") {
        &MUMBAI
    } else if location.contains("delhi") {
        &DELHI
    } else {
        &GENERIC
    };
    table.iter().map(|(n, d)| Location::new(*n, *d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(locations: &[Location]) -> Vec<&str> {
        locations.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_business_type_known_unknown_and_empty() {
        assert_eq!(business_type("restaurant"), "Food & Beverage");
        assert_eq!(business_type("financial"), "Financial Services");
        assert_eq!(business_type("Retail"), "Retail");
        assert_eq!(business_type("realEstate"), "RealEstate");
        assert_eq!(business_type(""), "Business");
    }

    #[test]
    fn test_duration_text_mapping_and_passthrough() {
        assert_eq!(duration_text("2-weeks"), "14 days");
        assert_eq!(duration_text("3-months"), "90 days");
        assert_eq!(duration_text("10 days"), "10 days");
        assert_eq!(duration_text(""), "7 days");
    }

    #[test]
    fn test_campaign_type_uses_first_objective() {
        let objectives = vec!["launch".to_string(), "brand".to_string()];
        assert_eq!(campaign_type(&objectives), "Product Launch");
        assert_eq!(campaign_type(&[]), "Brand Awareness");
        assert_eq!(campaign_type(&["loyalty".to_string()]), "loyalty");
    }

    #[test]
    fn test_food_and_restaurant_industries_use_food_tables() {
        for industry in ["restaurant", "Fast FOOD", "Food & Beverage", "family restaurants"] {
            let profile = IndustryProfile::classify(industry);
            assert_eq!(profile, IndustryProfile::Food, "{industry} should be food");
            assert_eq!(profile.timings()[0].time, "11:30 AM - 2:00 PM");
            assert_eq!(profile.heatmap()[1].time, "Lunch (11 AM-2 PM)");
            assert_eq!(profile.heatmap()[3].visibility, 90);
        }
    }

    #[test]
    fn test_food_match_wins_over_retail() {
        assert_eq!(
            IndustryProfile::classify("retail food court"),
            IndustryProfile::Food
        );
    }

    #[test]
    fn test_entertainment_shares_general_tables_but_starts_later() {
        let ent = IndustryProfile::classify("entertainment");
        let gen = IndustryProfile::classify("healthcare");
        assert_eq!(ent.timings(), gen.timings());
        assert_eq!(ent.heatmap(), gen.heatmap());
        assert_eq!(ent.segment_start_times(), ["10:00 AM", "2:00 PM", "7:00 PM"]);
        assert_eq!(gen.segment_start_times(), ["8:00 AM", "12:00 PM", "5:00 PM"]);
    }

    #[test]
    fn test_city_locations_by_substring() {
        assert_eq!(names(&city_locations("Pune, Maharashtra"))[0], "Koregaon Park");
        assert_eq!(
            names(&city_locations("MUMBAI")),
            vec!["Bandra", "Andheri", "Marine Drive", "Powai"]
        );
        assert_eq!(names(&city_locations("New Delhi"))[3], "Cyber City");
    }

    #[test]
    fn test_unknown_cities_get_generic_locations_in_order() {
        for city in ["Bangalore", "", "Chennai", "Navi Mumbay"] {
            assert_eq!(
                names(&city_locations(city)),
                vec!["Main Market", "Business District", "University Area", "Residential Hub"],
                "{city:?} should fall back to generic locations"
            );
        }
    }
}
