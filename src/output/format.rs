use serde::Serialize;

use crate::models::ResultSet;

/// Decimal places used when presenting results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub unit_cost: u8,
    pub cost: u8,
    pub time: u8,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            unit_cost: 5,
            cost: 2,
            time: 2,
        }
    }
}

/// Fixed-point text for a full-precision value. Infinity and NaN are spelled
/// out rather than collapsed to zero, and an exact negative zero prints as 0.
/// Ties round away from zero, the same step the chart values go through.
pub fn format_fixed(value: f64, decimal_places: u8) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return format!("{:.width$}", 0.0, width = decimal_places as usize);
    }
    // Small negatives that round to zero keep their sign: -0.004 -> "-0.00"
    format!("{:.width$}", round_to(value, decimal_places), width = decimal_places as usize)
}

/// Format a currency amount with its symbol
pub fn format_currency(amount: f64, currency: &str, decimal_places: u8) -> String {
    let symbol = match currency {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "¥",
        _ => currency,
    };

    let formatted_amount = format_fixed(amount, decimal_places);

    match currency {
        "USD" | "GBP" => format!("{}{}", symbol, formatted_amount),
        "EUR" | "JPY" | "CNY" => format!("{} {}", formatted_amount, symbol),
        _ => format!("{} {}", formatted_amount, currency),
    }
}

pub fn format_time(value: f64, decimal_places: u8) -> String {
    format_fixed(value, decimal_places)
}

/// Round to a number of decimals, leaving non-finite values untouched
pub fn round_to(value: f64, decimal_places: u8) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

/// Result set rendered to display strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedResults {
    pub cost_per_call: String,
    pub total_api_cost: String,
    pub total_human_cost: String,
    pub ai_covered_cost: String,
    pub remaining_human_cost: String,
    pub net_savings: String,
    pub remaining_hours: String,
    pub remaining_workdays: String,
}

impl FormattedResults {
    pub fn new(results: &ResultSet, precision: Precision, currency: &str) -> Self {
        let money = |value: f64| format_currency(value, currency, precision.cost);
        Self {
            cost_per_call: format_currency(results.cost_per_call, currency, precision.unit_cost),
            total_api_cost: money(results.total_api_cost),
            total_human_cost: money(results.total_human_cost),
            ai_covered_cost: money(results.ai_covered_cost),
            remaining_human_cost: money(results.remaining_human_cost),
            net_savings: money(results.net_savings),
            remaining_hours: format_time(results.remaining_hours, precision.time),
            remaining_workdays: format_time(results.remaining_workdays, precision.time),
        }
    }

    /// "12.50 hours / 1.56 days"
    pub fn remaining_time(&self) -> String {
        format!("{} hours / {} days", self.remaining_hours, self.remaining_workdays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;
    use crate::models::InputSet;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0, "USD", 2), "$0.00");
        assert_eq!(format_currency(1.5, "USD", 2), "$1.50");
        assert_eq!(format_currency(123.456, "USD", 2), "$123.46");
        assert_eq!(format_currency(0.0035, "USD", 5), "$0.00350");
        assert_eq!(format_currency(3.5, "EUR", 2), "3.50 €");
        assert_eq!(format_currency(3.5, "CHF", 2), "3.50 CHF");
        assert_eq!(format_currency(-12.0, "USD", 2), "$-12.00");
    }

    #[test]
    fn test_non_finite_is_never_zero() {
        assert_eq!(format_fixed(f64::INFINITY, 2), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-inf");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
        assert_eq!(format_currency(f64::INFINITY, "USD", 2), "$inf");
    }

    #[test]
    fn test_negative_zero_prints_as_zero() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_currency(0.125, "USD", 2), "$0.13");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(format_fixed(-0.004, 2), "-0.00");
        assert_eq!(format_fixed(0.004, 2), "0.00");
    }

    #[test]
    fn test_huge_values_are_not_mangled() {
        assert_eq!(format_fixed(1e300, 0), format!("{:.0}", 1e300));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 2), 3.14);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert!(round_to(f64::NAN, 2).is_nan());
        assert!(round_to(f64::INFINITY, 2).is_infinite());
    }

    #[test]
    fn test_formatted_results_use_separate_precisions() {
        let inputs = InputSet {
            input_tokens: 1000.0,
            output_tokens: 500.0,
            human_processing_time_sec: 5400.0,
            human_cost_value: 50.0,
            ..Default::default()
        };
        let formatted = FormattedResults::new(&compute(&inputs), Precision::default(), "USD");
        assert_eq!(formatted.cost_per_call, "$0.00350");
        assert_eq!(formatted.total_api_cost, "$3.50");
        assert_eq!(formatted.total_human_cost, "$75.00");
        assert_eq!(formatted.remaining_hours, "1.50");
        assert_eq!(formatted.remaining_workdays, "0.19");
        assert_eq!(formatted.remaining_time(), "1.50 hours / 0.19 days");
    }

    #[test]
    fn test_table_and_chart_agree_on_ties() {
        let inputs = InputSet {
            human_processing_time_sec: 1.0,
            human_cost_value: 450.0,
            ..Default::default()
        };
        let results = compute(&inputs);
        assert_eq!(results.total_human_cost, 0.125);

        let formatted = FormattedResults::new(&results, Precision::default(), "USD");
        assert_eq!(formatted.total_human_cost, "$0.13");
        let points = crate::output::chart::chart_data(&results, 2);
        assert_eq!(points[1].value, 0.13);

        let hours = compute(&InputSet {
            human_processing_time_sec: 450.0,
            ..Default::default()
        });
        assert_eq!(hours.remaining_hours, 0.125);
        let formatted = FormattedResults::new(&hours, Precision::default(), "USD");
        assert_eq!(formatted.remaining_hours, "0.13");
    }
}
