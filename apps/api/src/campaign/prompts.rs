// Prompt constants for campaign plan generation.
// The format-pinning system instruction lives in llm_client::prompts.

use crate::campaign::lookup::objective_label;
use crate::models::form::{format_amount, CampaignForm};

/// Plan prompt template. Every `{placeholder}` is replaced before sending.
pub const PLAN_PROMPT_TEMPLATE: &str = "Generate a mobile billboard route plan with these specifications:

Business: {business_name}
Industry: {industry}
Target Audience: {target_audience}
Campaign Objectives: {objectives}
Location: {location}
Duration: {duration}
Budget: ₹{budget}

Provide:
1. Recommended locations with timing windows
2. Optimal routes for maximum visibility
3. Estimated impressions per day
4. Any special considerations
Format the response with clear sections and bullet points.";

pub fn render_plan_prompt(form: &CampaignForm) -> String {
    let objectives = if form.objectives.is_empty() {
        "Brand Awareness".to_string()
    } else {
        form.objectives
            .iter()
            .map(|o| objective_label(o))
            .collect::<Vec<_>>()
            .join(", ")
    };

    PLAN_PROMPT_TEMPLATE
        .replace("{business_name}", &form.business_name)
        .replace("{industry}", &form.industry)
        .replace("{target_audience}", &form.target_audience)
        .replace("{objectives}", &objectives)
        .replace("{location}", &form.location)
        .replace("{duration}", &form.campaign_duration)
        .replace("{budget}", &format_amount(form.budget.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_maps_objectives_and_budget() {
        let form = CampaignForm {
            business_name: "Chai Point".to_string(),
            location: "Pune".to_string(),
            budget: 30000.0,
            objectives: vec!["traffic".to_string(), "event".to_string()],
            ..Default::default()
        };
        let prompt = render_plan_prompt(&form);
        assert!(prompt.contains("Business: Chai Point\n"));
        assert!(prompt.contains("Campaign Objectives: Store Traffic, Event Promotion\n"));
        assert!(prompt.contains("Budget: ₹30000\n"));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_prompt_defaults_for_empty_form() {
        let prompt = render_plan_prompt(&CampaignForm::default());
        assert!(prompt.contains("Campaign Objectives: Brand Awareness\n"));
        assert!(prompt.contains("Budget: ₹0\n"));
    }
}
