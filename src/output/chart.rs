use serde::Serialize;

use crate::models::ResultSet;
use crate::output::format::{format_fixed, round_to};

/// One bar of the cost comparison chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub category: &'static str,
    pub value: f64,
}

pub const AI_COST: &str = "AI cost";
pub const HUMAN_COST: &str = "Human cost (without AI)";
pub const REMAINING_HUMAN_COST: &str = "Remaining human cost";
pub const SAVINGS: &str = "Savings";

/// Chart series keyed by category, values rounded to the cost precision
pub fn chart_data(results: &ResultSet, decimal_places: u8) -> Vec<ChartPoint> {
    [
        (AI_COST, results.total_api_cost),
        (HUMAN_COST, results.total_human_cost),
        (REMAINING_HUMAN_COST, results.remaining_human_cost),
        (SAVINGS, results.net_savings),
    ]
    .into_iter()
    .map(|(category, value)| ChartPoint {
        category,
        value: round_to(value, decimal_places),
    })
    .collect()
}

/// Horizontal text bars scaled to the largest finite magnitude.
/// Negative values draw with '-', non-finite values draw no bar.
pub fn render_text_chart(points: &[ChartPoint], width: usize, decimal_places: u8) -> String {
    let label_width = points.iter().map(|p| p.category.len()).max().unwrap_or(0);
    let max_magnitude = points
        .iter()
        .filter(|p| p.value.is_finite())
        .map(|p| p.value.abs())
        .fold(0.0_f64, f64::max);

    let mut output = String::new();
    for point in points {
        let bar_len = if point.value.is_finite() && max_magnitude > 0.0 {
            ((point.value.abs() / max_magnitude) * width as f64).round() as usize
        } else {
            0
        };
        let fill = if point.value < 0.0 { "-" } else { "#" };
        output.push_str(&format!(
            "{:<label_width$} | {:<width$} {}\n",
            point.category,
            fill.repeat(bar_len),
            format_fixed(point.value, decimal_places),
            label_width = label_width,
            width = width,
        ));
    }
    output
}
