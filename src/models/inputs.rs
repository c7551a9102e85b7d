use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How `human_cost_value` is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HumanCostMode {
    /// Cost per hour of human work
    #[default]
    Hourly,
    /// Annual salary, spread over workdays and workday hours
    Yearly,
}

impl HumanCostMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HumanCostMode::Hourly => "hourly",
            HumanCostMode::Yearly => "yearly",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            HumanCostMode::Hourly => HumanCostMode::Yearly,
            HumanCostMode::Yearly => HumanCostMode::Hourly,
        }
    }
}

impl fmt::Display for HumanCostMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HumanCostMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(HumanCostMode::Hourly),
            "yearly" => Ok(HumanCostMode::Yearly),
            other => anyhow::bail!("Invalid human cost mode: {}. Must be 'hourly' or 'yearly'", other),
        }
    }
}

/// Everything the calculator reads. All numbers are plain `f64` and are never
/// range-checked; negative or zero values flow straight into the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    pub input_tokens: f64,
    pub output_tokens: f64,
    pub input_price_per_k: f64,
    pub output_price_per_k: f64,
    pub call_count: f64,
    pub ai_processing_time_sec: f64, // informational only
    pub human_processing_time_sec: f64,
    pub human_cost_mode: HumanCostMode,
    pub human_cost_value: f64,
    pub task_count: f64,
    pub ai_automation_percent: f64,
    pub hours_per_workday: f64,
    pub workdays_per_year: f64,
}

impl Default for InputSet {
    fn default() -> Self {
        Self {
            input_tokens: 0.0,
            output_tokens: 0.0,
            input_price_per_k: 0.0015,
            output_price_per_k: 0.005,
            call_count: 1000.0,
            ai_processing_time_sec: 0.0,
            human_processing_time_sec: 0.0,
            human_cost_mode: HumanCostMode::Hourly,
            human_cost_value: 0.0,
            task_count: 1.0,
            ai_automation_percent: 0.0,
            hours_per_workday: 8.0,
            workdays_per_year: 250.0,
        }
    }
}

/// Catalogue of editable fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    InputTokens,
    OutputTokens,
    InputPricePerK,
    OutputPricePerK,
    CallCount,
    AiProcessingTimeSec,
    HumanProcessingTimeSec,
    HumanCostMode,
    HumanCostValue,
    TaskCount,
    AiAutomationPercent,
    HoursPerWorkday,
    WorkdaysPerYear,
}

impl InputField {
    pub const ALL: [InputField; 13] = [
        InputField::InputTokens,
        InputField::OutputTokens,
        InputField::InputPricePerK,
        InputField::OutputPricePerK,
        InputField::CallCount,
        InputField::AiProcessingTimeSec,
        InputField::HumanProcessingTimeSec,
        InputField::HumanCostMode,
        InputField::HumanCostValue,
        InputField::TaskCount,
        InputField::AiAutomationPercent,
        InputField::HoursPerWorkday,
        InputField::WorkdaysPerYear,
    ];

    /// Key used in the config file and by `config set defaults.<key>`
    pub fn key(&self) -> &'static str {
        match self {
            InputField::InputTokens => "input_tokens",
            InputField::OutputTokens => "output_tokens",
            InputField::InputPricePerK => "input_price_per_k",
            InputField::OutputPricePerK => "output_price_per_k",
            InputField::CallCount => "call_count",
            InputField::AiProcessingTimeSec => "ai_processing_time_sec",
            InputField::HumanProcessingTimeSec => "human_processing_time_sec",
            InputField::HumanCostMode => "human_cost_mode",
            InputField::HumanCostValue => "human_cost_value",
            InputField::TaskCount => "task_count",
            InputField::AiAutomationPercent => "ai_automation_percent",
            InputField::HoursPerWorkday => "hours_per_workday",
            InputField::WorkdaysPerYear => "workdays_per_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InputField::InputTokens => "Input tokens",
            InputField::OutputTokens => "Output tokens",
            InputField::InputPricePerK => "Input price ($ per 1000)",
            InputField::OutputPricePerK => "Output price ($ per 1000)",
            InputField::CallCount => "API calls",
            InputField::AiProcessingTimeSec => "AI processing time (s)",
            InputField::HumanProcessingTimeSec => "Human processing time (s)",
            InputField::HumanCostMode => "Human cost mode",
            InputField::HumanCostValue => "Human cost",
            InputField::TaskCount => "Tasks",
            InputField::AiAutomationPercent => "AI automation (%)",
            InputField::HoursPerWorkday => "Hours per workday",
            InputField::WorkdaysPerYear => "Workdays per year",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.key() == key)
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, InputField::HumanCostMode)
    }
}

/// Parse user-typed numeric text the way a form field would: blank or
/// unparsable input counts as zero, and so do `nan` and `inf`.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

impl InputSet {
    fn slot_mut(&mut self, field: InputField) -> Option<&mut f64> {
        match field {
            InputField::InputTokens => Some(&mut self.input_tokens),
            InputField::OutputTokens => Some(&mut self.output_tokens),
            InputField::InputPricePerK => Some(&mut self.input_price_per_k),
            InputField::OutputPricePerK => Some(&mut self.output_price_per_k),
            InputField::CallCount => Some(&mut self.call_count),
            InputField::AiProcessingTimeSec => Some(&mut self.ai_processing_time_sec),
            InputField::HumanProcessingTimeSec => Some(&mut self.human_processing_time_sec),
            InputField::HumanCostMode => None,
            InputField::HumanCostValue => Some(&mut self.human_cost_value),
            InputField::TaskCount => Some(&mut self.task_count),
            InputField::AiAutomationPercent => Some(&mut self.ai_automation_percent),
            InputField::HoursPerWorkday => Some(&mut self.hours_per_workday),
            InputField::WorkdaysPerYear => Some(&mut self.workdays_per_year),
        }
    }

    /// Numeric value of a field; `None` for the cost mode
    pub fn number(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::InputTokens => Some(self.input_tokens),
            InputField::OutputTokens => Some(self.output_tokens),
            InputField::InputPricePerK => Some(self.input_price_per_k),
            InputField::OutputPricePerK => Some(self.output_price_per_k),
            InputField::CallCount => Some(self.call_count),
            InputField::AiProcessingTimeSec => Some(self.ai_processing_time_sec),
            InputField::HumanProcessingTimeSec => Some(self.human_processing_time_sec),
            InputField::HumanCostMode => None,
            InputField::HumanCostValue => Some(self.human_cost_value),
            InputField::TaskCount => Some(self.task_count),
            InputField::AiAutomationPercent => Some(self.ai_automation_percent),
            InputField::HoursPerWorkday => Some(self.hours_per_workday),
            InputField::WorkdaysPerYear => Some(self.workdays_per_year),
        }
    }

    pub fn set_number(&mut self, field: InputField, value: f64) {
        if let Some(slot) = self.slot_mut(field) {
            *slot = value;
        }
    }

    /// Text shown for a field in tables and in the edit buffer
    pub fn display_value(&self, field: InputField) -> String {
        match self.number(field) {
            Some(value) => value.to_string(),
            None => self.human_cost_mode.to_string(),
        }
    }

    /// Form-entry assignment. Never fails: bad numbers become 0 and an
    /// unknown mode leaves the current mode untouched.
    pub fn set_lenient(&mut self, field: InputField, text: &str) {
        if field.is_numeric() {
            self.set_number(field, coerce_number(text));
        } else if let Ok(mode) = text.parse::<HumanCostMode>() {
            self.human_cost_mode = mode;
        } else {
            tracing::debug!(value = text, "ignoring unknown human cost mode");
        }
    }

    /// Config/CLI assignment. Rejects text that is not a number (or a mode).
    pub fn set_strict(&mut self, field: InputField, text: &str) -> Result<()> {
        if field.is_numeric() {
            let value: f64 = text
                .trim()
                .parse()
                .with_context(|| format!("Invalid numeric value for {}: {}", field.key(), text))?;
            self.set_number(field, value);
        } else {
            self.human_cost_mode = text.parse()?;
        }
        Ok(())
    }
}
