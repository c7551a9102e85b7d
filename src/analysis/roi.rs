// ROI calculation: AI call cost versus the human labor it replaces
use crate::models::{HumanCostMode, InputSet, ResultSet};

const SECONDS_PER_HOUR: f64 = 3600.0;
const TOKENS_PER_PRICE_UNIT: f64 = 1000.0;

/// Cost of a single AI call from token counts and per-1000-token prices
pub fn cost_per_call(inputs: &InputSet) -> f64 {
    inputs.input_tokens * inputs.input_price_per_k / TOKENS_PER_PRICE_UNIT
        + inputs.output_tokens * inputs.output_price_per_k / TOKENS_PER_PRICE_UNIT
}

/// Human cost per second of work. Yearly salaries are spread over
/// `workdays_per_year * hours_per_workday` hours; a zero divisor yields a
/// non-finite rate.
pub fn human_cost_per_second(inputs: &InputSet) -> f64 {
    match inputs.human_cost_mode {
        HumanCostMode::Hourly => inputs.human_cost_value / SECONDS_PER_HOUR,
        HumanCostMode::Yearly => {
            inputs.human_cost_value
                / (inputs.workdays_per_year * inputs.hours_per_workday * SECONDS_PER_HOUR)
        }
    }
}

/// Recompute every derived value from scratch.
///
/// Total and side-effect free: degenerate divisors produce infinity or NaN,
/// which is returned as-is for the caller to display.
pub fn compute(inputs: &InputSet) -> ResultSet {
    let cost_per_call = cost_per_call(inputs);
    let total_api_cost = cost_per_call * inputs.call_count;

    let human_cost_per_second = human_cost_per_second(inputs);
    let total_human_cost =
        human_cost_per_second * inputs.human_processing_time_sec * inputs.task_count;

    let automation_share = inputs.ai_automation_percent / 100.0;
    let ai_covered_cost = total_human_cost * automation_share;
    let remaining_human_cost = total_human_cost - ai_covered_cost;
    let net_savings = ai_covered_cost - total_api_cost;

    // Time split works on raw seconds, not on the cost baseline.
    let remaining_seconds =
        inputs.human_processing_time_sec * inputs.task_count * (1.0 - automation_share);
    let remaining_hours = remaining_seconds / SECONDS_PER_HOUR;
    let remaining_workdays = remaining_hours / inputs.hours_per_workday;

    ResultSet {
        cost_per_call,
        total_api_cost,
        human_cost_per_second,
        total_human_cost,
        ai_covered_cost,
        remaining_human_cost,
        net_savings,
        remaining_hours,
        remaining_workdays,
    }
}
