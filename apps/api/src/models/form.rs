use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Budget shown when the form carries none.
pub const DEFAULT_BUDGET: &str = "25000";

/// Campaign parameters collected by the multi-step planning form.
///
/// Every field is optional on the wire; missing values fall back to the
/// synthesizer defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignForm {
    pub business_name: String,
    pub industry: String,
    pub target_audience: String,
    pub location: String,
    /// Duration code: `1-day`, `1-week`, `2-weeks`, `1-month`, `3-months`.
    pub campaign_duration: String,
    pub budget: f64,
    pub start_date: Option<NaiveDate>,
    pub additional_info: String,
    /// Objective codes: `brand`, `traffic`, `launch`, `event`.
    pub objectives: Vec<String>,
}

impl CampaignForm {
    /// Budget as display text, or `None` when the form carries no positive budget.
    pub fn budget_text(&self) -> Option<String> {
        (self.budget > 0.0).then(|| format_amount(self.budget))
    }
}

/// Renders an amount without a trailing `.0` for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}

/// Returns `value` when non-blank, else `fallback`.
pub fn or_default(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_deserializes_from_camel_case_with_missing_fields() {
        let form: CampaignForm = serde_json::from_str(
            r#"{"businessName": "Chai Point", "budget": 30000, "objectives": ["traffic"]}"#,
        )
        .unwrap();
        assert_eq!(form.business_name, "Chai Point");
        assert_eq!(form.objectives, vec!["traffic".to_string()]);
        assert!(form.industry.is_empty());
        assert!(form.start_date.is_none());
    }

    #[test]
    fn test_form_accepts_null_start_date() {
        let form: CampaignForm = serde_json::from_str(r#"{"startDate": null}"#).unwrap();
        assert!(form.start_date.is_none());
        let form: CampaignForm = serde_json::from_str(r#"{"startDate": "2024-05-01"}"#).unwrap();
        assert_eq!(form.start_date, NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_budget_text_drops_zero_and_whole_fraction() {
        let mut form = CampaignForm::default();
        assert_eq!(form.budget_text(), None);
        form.budget = 30000.0;
        assert_eq!(form.budget_text().as_deref(), Some("30000"));
        form.budget = 1250.5;
        assert_eq!(form.budget_text().as_deref(), Some("1250.5"));
    }

    #[test]
    fn test_or_default_trims_and_falls_back() {
        assert_eq!(or_default("  Pune ", "Mumbai"), "Pune");
        assert_eq!(or_default("   ", "Mumbai"), "Mumbai");
    }
}
