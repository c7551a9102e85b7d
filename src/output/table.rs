use serde::Serialize;
use tabled::settings::{Color, Modify, Style, object::Columns};
use tabled::{Table, Tabled};

use crate::models::{InputField, InputSet, ResultSet};
use crate::output::format::{FormattedResults, Precision};

/// Trait for items that can be displayed as tables or JSON
pub trait OutputFormat {
    fn to_table(&self) -> String;
    fn to_json(&self) -> Result<String, serde_json::Error>;
    fn to_table_with_style(&self, colored: bool) -> String;
}

/// Row for the results table
#[derive(Tabled, Serialize, Debug)]
pub struct ResultRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

/// Row for the inputs table shown in verbose mode
#[derive(Tabled, Serialize, Debug)]
pub struct InputRow {
    #[tabled(rename = "Input")]
    pub input: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl ResultRow {
    fn new(metric: &str, value: String) -> Self {
        Self {
            metric: metric.to_string(),
            value,
        }
    }
}

/// One calculation: the inputs, the raw results and their display strings
#[derive(Debug, Serialize)]
pub struct RoiReport {
    pub inputs: InputSet,
    pub results: ResultSet,
    pub formatted: FormattedResults,
    #[serde(skip)]
    pub precision: Precision,
}

impl RoiReport {
    pub fn new(inputs: InputSet, results: ResultSet, precision: Precision, currency: &str) -> Self {
        let formatted = FormattedResults::new(&results, precision, currency);
        Self {
            inputs,
            results,
            formatted,
            precision,
        }
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        let f = &self.formatted;
        vec![
            ResultRow::new("Cost per API call", f.cost_per_call.clone()),
            ResultRow::new("Total API cost", f.total_api_cost.clone()),
            ResultRow::new("Total human cost", f.total_human_cost.clone()),
            ResultRow::new("Cost covered by AI", f.ai_covered_cost.clone()),
            ResultRow::new("Remaining human cost", f.remaining_human_cost.clone()),
            ResultRow::new("Net savings", f.net_savings.clone()),
            ResultRow::new("Remaining time", f.remaining_time()),
        ]
    }

    pub fn input_rows(&self) -> Vec<InputRow> {
        InputField::ALL
            .iter()
            .map(|field| InputRow {
                input: field.label().to_string(),
                value: self.inputs.display_value(*field),
            })
            .collect()
    }

    pub fn inputs_table(&self, colored: bool) -> String {
        let mut table = Table::new(self.input_rows());
        apply_table_style(&mut table, colored);
        table.to_string()
    }
}

impl OutputFormat for RoiReport {
    fn to_table(&self) -> String {
        Table::new(self.result_rows()).to_string()
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn to_table_with_style(&self, colored: bool) -> String {
        let mut table = Table::new(self.result_rows());
        apply_table_style(&mut table, colored);
        table.to_string()
    }
}

/// Plain ASCII by default; rounded borders with a highlighted first column when colored
pub fn apply_table_style(table: &mut Table, colored: bool) {
    if colored {
        table
            .with(Style::rounded())
            .with(Modify::new(Columns::first()).with(Color::FG_CYAN));
    } else {
        table.with(Style::ascii());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::compute;

    fn sample_report() -> RoiReport {
        let inputs = InputSet {
            input_tokens: 1000.0,
            output_tokens: 500.0,
            human_processing_time_sec: 3600.0,
            human_cost_value: 50.0,
            ai_automation_percent: 50.0,
            ..Default::default()
        };
        let results = compute(&inputs);
        RoiReport::new(inputs, results, Precision::default(), "USD")
    }

    #[test]
    fn test_result_rows() {
        let report = sample_report();
        let rows = report.result_rows();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].metric, "Cost per API call");
        assert_eq!(rows[0].value, "$0.00350");
        assert_eq!(rows[1].value, "$3.50");
        assert_eq!(rows[2].value, "$50.00");
        assert_eq!(rows[3].value, "$25.00");
        assert_eq!(rows[4].value, "$25.00");
        assert_eq!(rows[5].value, "$21.50");
        assert_eq!(rows[6].value, "0.50 hours / 0.06 days");
    }

    #[test]
    fn test_table_contains_metrics() {
        let table = sample_report().to_table();
        assert!(table.contains("Metric"));
        assert!(table.contains("Net savings"));
        assert!(table.contains("$21.50"));
    }

    #[test]
    fn test_input_rows_cover_every_field() {
        let report = sample_report();
        let rows = report.input_rows();
        assert_eq!(rows.len(), InputField::ALL.len());
        assert!(rows.iter().any(|r| r.input == "Human cost mode" && r.value == "hourly"));
    }

    #[test]
    fn test_json_output() {
        let json = sample_report().to_json().unwrap();
        assert!(json.contains("\"inputs\""));
        assert!(json.contains("\"formatted\""));
        assert!(json.contains("\"$21.50\""));
        assert!(json.contains("\"human_cost_mode\": \"hourly\""));
    }

    #[test]
    fn test_json_non_finite_is_null_with_text_twin() {
        let inputs = InputSet {
            hours_per_workday: 0.0,
            human_processing_time_sec: 60.0,
            ..Default::default()
        };
        let results = compute(&inputs);
        let report = RoiReport::new(inputs, results, Precision::default(), "USD");
        let json = report.to_json().unwrap();
        assert!(json.contains("\"remaining_workdays\": null"));
        assert!(json.contains("\"remaining_workdays\": \"inf\""));
    }
}
