//! Field Parser: single scalar values from `Label: value` lines of a plan.

/// Scalar fields recognised in plan text. `None` means the label was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub business_name: Option<String>,
    pub location: Option<String>,
    pub budget: Option<String>,
    pub target_audience: Option<String>,
}

/// Currency prefix required before a parsed budget.
pub const CURRENCY_SYMBOL: char = '₹';

/// Returns the trimmed remainder of the first line containing `label:` with a
/// non-empty value. The label match is case-sensitive.
pub fn extract_field(text: &str, label: &str) -> Option<String> {
    let needle = format!("{label}:");
    text.lines().find_map(|line| {
        let value = value_after(line, &needle)?.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Like [`extract_field`], but the value must begin with `symbol`, which is stripped.
pub fn extract_currency_field(text: &str, label: &str, symbol: char) -> Option<String> {
    let needle = format!("{label}:");
    text.lines().find_map(|line| {
        let value = value_after(line, &needle)?
            .trim_start()
            .strip_prefix(symbol)?
            .trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

fn value_after<'a>(line: &'a str, needle: &str) -> Option<&'a str> {
    line.find(needle).map(|i| &line[i + needle.len()..])
}

pub fn parse_fields(text: &str) -> ParsedFields {
    ParsedFields {
        business_name: extract_field(text, "Business"),
        location: extract_field(text, "Location"),
        budget: extract_currency_field(text, "Budget", CURRENCY_SYMBOL),
        target_audience: extract_field(text, "Target Audience"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_strips_currency_symbol() {
        let text = "Plan\nBudget: ₹45,000\n";
        assert_eq!(
            extract_currency_field(text, "Budget", CURRENCY_SYMBOL).as_deref(),
            Some("45,000")
        );
    }

    #[test]
    fn test_budget_without_currency_symbol_is_absent() {
        assert_eq!(
            extract_currency_field("Budget: 45,000", "Budget", CURRENCY_SYMBOL),
            None
        );
    }

    #[test]
    fn test_missing_label_is_absent_not_empty() {
        let fields = parse_fields("nothing labelled here");
        assert_eq!(fields, ParsedFields::default());
        assert_eq!(extract_field("Business:", "Business"), None);
    }

    #[test]
    fn test_label_is_case_sensitive() {
        assert_eq!(extract_field("business: Chai Point", "Business"), None);
    }

    #[test]
    fn test_first_matching_line_wins_and_markdown_prefix_is_ignored() {
        let text = "## Business: Chai Point\n## Business: Other\n";
        assert_eq!(extract_field(text, "Business").as_deref(), Some("Chai Point"));
    }

    #[test]
    fn test_blank_value_falls_through_to_next_line() {
        let text = "Location:   \nLocation: Pune\n";
        assert_eq!(extract_field(text, "Location").as_deref(), Some("Pune"));
    }

    #[test]
    fn test_parse_fields_reads_plan_header() {
        let text = "\
## Business: Chai Point
## Industry: restaurant
## Location: Pune
## Budget: ₹25,000
## Target Audience: Students and commuters
- Business District: Commercial hub
";
        let fields = parse_fields(text);
        assert_eq!(fields.business_name.as_deref(), Some("Chai Point"));
        assert_eq!(fields.location.as_deref(), Some("Pune"));
        assert_eq!(fields.budget.as_deref(), Some("25,000"));
        assert_eq!(
            fields.target_audience.as_deref(),
            Some("Students and commuters")
        );
    }
}
