// Plain-text summary of a calculation
use crate::output::format::FormattedResults;

/// Label / value pairs shown in the summary, in display order
pub fn summary_items(formatted: &FormattedResults) -> Vec<(&'static str, String)> {
    vec![
        ("Total cost of human work", formatted.total_human_cost.clone()),
        ("Cost covered by AI", formatted.ai_covered_cost.clone()),
        ("Remaining human cost", formatted.remaining_human_cost.clone()),
        ("Total cost of API calls", formatted.total_api_cost.clone()),
        ("Savings through AI", formatted.net_savings.clone()),
        ("Time still required", formatted.remaining_time()),
    ]
}

pub fn render_summary(formatted: &FormattedResults) -> String {
    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str("The ROI calculation compares the cost of AI usage with human work. Key figures:\n");
    for (label, value) in summary_items(formatted) {
        output.push_str(&format!("  - {}: {}\n", label, value));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;
    use crate::models::InputSet;
    use crate::output::format::Precision;

    #[test]
    fn test_summary_lists_key_figures() {
        let inputs = InputSet {
            human_processing_time_sec: 7200.0,
            human_cost_value: 30.0,
            ai_automation_percent: 25.0,
            ..Default::default()
        };
        let formatted = FormattedResults::new(&compute(&inputs), Precision::default(), "USD");
        let summary = render_summary(&formatted);

        assert!(summary.contains("Total cost of human work: $60.00"));
        assert!(summary.contains("Cost covered by AI: $15.00"));
        assert!(summary.contains("Remaining human cost: $45.00"));
        assert!(summary.contains("Total cost of API calls: $0.00"));
        assert!(summary.contains("Savings through AI: $15.00"));
        assert!(summary.contains("Time still required: 1.50 hours / 0.19 days"));
    }
}
