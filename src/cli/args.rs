use clap::{Args, Parser, Subcommand};

use crate::models::{HumanCostMode, InputField, InputSet};

#[derive(Parser)]
#[command(name = "roicalc")]
#[command(about = "ROI calculator: AI vs. human labor cost")]
#[command(version)]
pub struct Cli {
    /// Custom config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Override currency label (USD, EUR, GBP, etc.)
    #[arg(long, global = true)]
    pub currency: Option<String>,

    /// Verbose output (debug logging and an inputs table)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON output format
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable colorized table output
    #[arg(long, global = true)]
    pub colored: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Per-field overrides applied on top of the configured defaults
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Tokens sent per AI call
    #[arg(long, allow_negative_numbers = true)]
    pub input_tokens: Option<f64>,

    /// Tokens returned per AI call
    #[arg(long, allow_negative_numbers = true)]
    pub output_tokens: Option<f64>,

    /// Price per 1000 input tokens
    #[arg(long, allow_negative_numbers = true)]
    pub input_price: Option<f64>,

    /// Price per 1000 output tokens
    #[arg(long, allow_negative_numbers = true)]
    pub output_price: Option<f64>,

    /// Number of AI calls
    #[arg(long, allow_negative_numbers = true)]
    pub calls: Option<f64>,

    /// AI processing time per task in seconds (informational)
    #[arg(long, allow_negative_numbers = true)]
    pub ai_time: Option<f64>,

    /// Human processing time per task in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub human_time: Option<f64>,

    /// Whether --human-cost is an hourly rate or a yearly salary
    #[arg(long, value_enum)]
    pub mode: Option<HumanCostMode>,

    /// Human cost for the chosen period
    #[arg(long, allow_negative_numbers = true)]
    pub human_cost: Option<f64>,

    /// Number of tasks
    #[arg(long, allow_negative_numbers = true)]
    pub tasks: Option<f64>,

    /// Share of the work covered by AI, in percent
    #[arg(long, allow_negative_numbers = true)]
    pub ai_percent: Option<f64>,

    /// Work hours per day
    #[arg(long, allow_negative_numbers = true)]
    pub hours_per_day: Option<f64>,

    /// Work days per year
    #[arg(long, allow_negative_numbers = true)]
    pub days_per_year: Option<f64>,
}

impl InputArgs {
    /// Numeric overrides that were given on the command line
    pub fn numeric_overrides(&self) -> Vec<(InputField, f64)> {
        [
            (InputField::InputTokens, self.input_tokens),
            (InputField::OutputTokens, self.output_tokens),
            (InputField::InputPricePerK, self.input_price),
            (InputField::OutputPricePerK, self.output_price),
            (InputField::CallCount, self.calls),
            (InputField::AiProcessingTimeSec, self.ai_time),
            (InputField::HumanProcessingTimeSec, self.human_time),
            (InputField::HumanCostValue, self.human_cost),
            (InputField::TaskCount, self.tasks),
            (InputField::AiAutomationPercent, self.ai_percent),
            (InputField::HoursPerWorkday, self.hours_per_day),
            (InputField::WorkdaysPerYear, self.days_per_year),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    /// Apply each override as a single-field edit
    pub fn apply(&self, inputs: &mut InputSet) {
        for (field, value) in self.numeric_overrides() {
            inputs.set_number(field, value);
        }
        if let Some(mode) = self.mode {
            inputs.human_cost_mode = mode;
        }
    }
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Initialize fresh configuration
    Init,
    /// Set configuration value
    Set {
        /// Configuration key (e.g., defaults.human_cost_value, output.currency)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate once and print the results (default)
    Calc {
        #[command(flatten)]
        inputs: InputArgs,

        /// Also print the summary section
        #[arg(long)]
        summary: bool,

        /// Also print a text bar chart of the costs
        #[arg(long)]
        chart: bool,
    },

    /// Edit inputs in a full-screen form with live results
    Interactive,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}
