//! Plain-text campaign plan rendering.
//!
//! The output uses the same headings and bullet shapes the extractor reads, so a
//! rendered plan can be parsed back into the locations and timings it was built from.

use crate::models::campaign::{Location, Timing};
use crate::models::form::{format_amount, or_default, CampaignForm};

const GENERIC_STOPS: [&str; 4] = [
    "Main Market",
    "Business District",
    "University Area",
    "Residential Hub",
];

fn stop(locations: &[Location], index: usize) -> &str {
    locations
        .get(index)
        .map(|l| l.name.as_str())
        .unwrap_or(GENERIC_STOPS[index])
}

/// Renders the mock plan text for `form` with the given location and timing tables.
pub fn render_plan_text(form: &CampaignForm, locations: &[Location], timings: &[Timing]) -> String {
    let budget = if form.budget > 0.0 {
        format_amount(form.budget)
    } else {
        "25,000".to_string()
    };

    let mut lines = vec![
        "# Mobile Billboard Campaign Plan".to_string(),
        String::new(),
        format!("## Business: {}", or_default(&form.business_name, "Your Business")),
        format!("## Industry: {}", or_default(&form.industry, "Retail")),
        format!("## Location: {}", or_default(&form.location, "Pune")),
        format!("## Budget: ₹{budget}"),
        format!(
            "## Target Audience: {}",
            or_default(&form.target_audience, "General audience")
        ),
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

    let at = |i| stop(locations, i);
    lines.extend([
        String::new(),
        "### Route Plan:".to_string(),
        "#### Days 1-3:".to_string(),
        format!("- Start at {} (8:00 AM)", at(0)),
        format!("- Move to {} (10:30 AM)", at(1)),
        "- Lunch break (12:00 PM)".to_string(),
        format!("- Continue to {} (2:00 PM)", at(2)),
        format!("- End at {} (5:00 PM)", at(3)),
        String::new(),
        "#### Days 4-5:".to_string(),
        format!("- Start at {} (12:00 PM)", at(3)),
        format!("- Move to {} (2:30 PM)", at(2)),
        format!("- Continue to {} (4:00 PM)", at(1)),
        format!("- End at {} (6:00 PM)", at(0)),
        String::new(),
        "#### Days 6-7:".to_string(),
        format!("- Start at {} (5:00 PM)", at(1)),
        format!("- Move to {} (6:30 PM)", at(2)),
        format!("- Continue to {} (8:00 PM)", at(0)),
        format!("- End route at {} (10:00 PM)", at(3)),
        String::new(),
        "### Estimated Impressions:".to_string(),
        "- Daily Average: 5,000-7,000 impressions".to_string(),
        "- Total Campaign: 35,000-49,000 impressions".to_string(),
        String::new(),
        "### Special Considerations:".to_string(),
        format!(
            "- Focus on {} during evening hours for maximum visibility",
            at(0)
        ),
        "- Consider weekend special routes around shopping areas".to_string(),
        "- Adjust timing during local events or festivals for increased exposure".to_string(),
    ]);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::extractor::{
        extract_locations, extract_route_segment, extract_timings, RouteSegment,
    };
    use crate::campaign::fields::parse_fields;
    use crate::campaign::lookup::{city_locations, IndustryProfile};

    fn restaurant_in_pune() -> CampaignForm {
        CampaignForm {
            business_name: "Chai Point".to_string(),
            industry: "restaurant".to_string(),
            location: "Pune".to_string(),
            budget: 45000.0,
            target_audience: "Students and commuters".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_recovers_locations_and_timings() {
        let form = restaurant_in_pune();
        let locations = city_locations(&form.location);
        let timings = IndustryProfile::classify(&form.industry).timings();
        let text = render_plan_text(&form, &locations, &timings);

        assert_eq!(extract_locations(&text), Some(locations));
        assert_eq!(extract_timings(&text), Some(timings));
    }

    #[test]
    fn test_round_trip_recovers_header_fields() {
        let text = render_plan_text(&restaurant_in_pune(), &city_locations("Pune"), &[]);
        let fields = parse_fields(&text);
        assert_eq!(fields.business_name.as_deref(), Some("Chai Point"));
        assert_eq!(fields.location.as_deref(), Some("Pune"));
        assert_eq!(fields.budget.as_deref(), Some("45000"));
        assert_eq!(
            fields.target_audience.as_deref(),
            Some("Students and commuters")
        );
    }

    #[test]
    fn test_rendered_routes_have_expected_lengths() {
        let text = render_plan_text(&restaurant_in_pune(), &city_locations("Pune"), &[]);
        let days13 = extract_route_segment(&text, RouteSegment::Days1To3).unwrap();
        let days45 = extract_route_segment(&text, RouteSegment::Days4To5).unwrap();
        let days67 = extract_route_segment(&text, RouteSegment::Days6To7).unwrap();
        assert_eq!((days13.len(), days45.len(), days67.len()), (5, 4, 4));
        assert_eq!(days67[3].location, "End route at Hinjewadi IT Park (10:00 PM)");
    }

    #[test]
    fn test_retail_plan_lists_retail_timings() {
        let timings = IndustryProfile::Retail.timings();
        let text = render_plan_text(&CampaignForm::default(), &[], &timings);
        assert!(text.contains("- 10:00 AM - 1:00 PM: Morning shopping hours"));
    }

    #[test]
    fn test_defaults_fill_header_and_stops() {
        let text = render_plan_text(&CampaignForm::default(), &[], &[]);
        assert!(text.contains("## Business: Your Business"));
        assert!(text.contains("## Industry: Retail"));
        assert!(text.contains("## Budget: ₹25,000"));
        assert!(text.contains("- Start at Main Market (8:00 AM)"));
        assert!(text.contains("- End route at Residential Hub (10:00 PM)"));
    }
}
