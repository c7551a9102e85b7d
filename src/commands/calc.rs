use anyhow::{Context, Result};

use crate::analysis::compute;
use crate::cli::InputArgs;
use crate::config::Config;
use crate::models::InputSet;
use crate::output::{OutputFormat, RoiReport, chart_data, render_summary, render_text_chart};

const CHART_WIDTH: usize = 40;

/// Options for a single calculation, resolved from CLI flags and config
#[derive(Debug, Clone)]
pub struct CalcOptions {
    pub currency: String,
    pub json: bool,
    pub colored: bool,
    pub verbose: bool,
    pub summary: bool,
    pub chart: bool,
}

impl CalcOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency: config.output.currency.clone(),
            json: config.output.format == "json",
            colored: config.output.colored,
            verbose: false,
            summary: false,
            chart: false,
        }
    }
}

/// Apply overrides to the configured defaults and compute once
pub fn build_report(config: &Config, overrides: &InputArgs, currency: &str) -> RoiReport {
    let mut inputs: InputSet = config.defaults.clone();
    overrides.apply(&mut inputs);

    let results = compute(&inputs);
    tracing::debug!(
        total_api_cost = results.total_api_cost,
        total_human_cost = results.total_human_cost,
        net_savings = results.net_savings,
        finite = results.is_finite(),
        "computed roi results"
    );
    let non_finite = results.non_finite_fields();
    if !non_finite.is_empty() {
        tracing::warn!(fields = ?non_finite, "some results are not finite (check hours per workday and workdays per year)");
    }

    RoiReport::new(inputs, results, config.output.precision(), currency)
}

/// Render the command output without printing it
pub fn render_calc_output(report: &RoiReport, options: &CalcOptions) -> Result<String> {
    if options.json {
        return report.to_json().context("Failed to serialize results to JSON");
    }

    let mut output = String::new();
    if options.verbose {
        output.push_str(&report.inputs_table(options.colored));
        output.push('\n');
    }
    output.push_str(&report.to_table_with_style(options.colored));
    output.push('\n');

    if options.summary {
        output.push('\n');
        output.push_str(&render_summary(&report.formatted));
    }
    if options.chart {
        output.push('\n');
        output.push_str("Cost overview\n");
        let decimal_places = report.precision.cost;
        let points = chart_data(&report.results, decimal_places);
        output.push_str(&render_text_chart(&points, CHART_WIDTH, decimal_places));
    }
    Ok(output)
}

pub fn handle_calc_command(config: &Config, overrides: &InputArgs, options: &CalcOptions) -> Result<()> {
    let report = build_report(config, overrides, &options.currency);
    let output = render_calc_output(&report, options)?;
    print!("{}", output);
    Ok(())
}
