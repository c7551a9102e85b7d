use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{InputField, InputSet};
use crate::output::format::Precision;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub defaults: InputSet,
    pub output: OutputConfig,
    pub interactive: InteractiveConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub currency: String,
    pub colored: bool,
    pub format: String, // "table" or "json"
    pub unit_cost_decimal_places: u8,
    pub decimal_places: u8,
    pub time_decimal_places: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractiveConfig {
    pub refresh_rate_ms: u64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        let precision = Precision::default();
        Self {
            currency: "USD".to_string(),
            colored: false,
            format: "table".to_string(),
            unit_cost_decimal_places: precision.unit_cost,
            decimal_places: precision.cost,
            time_decimal_places: precision.time,
        }
    }
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self { refresh_rate_ms: 200 }
    }
}

impl OutputConfig {
    pub fn precision(&self) -> Precision {
        Precision {
            unit_cost: self.unit_cost_decimal_places,
            cost: self.decimal_places,
            time: self.time_decimal_places,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from a specific file, writing a default one first if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "creating default configuration");
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let contents = self.to_commented_toml()?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate TOML configuration with comments explaining each section
    pub fn to_commented_toml(&self) -> Result<String> {
        let mut output = String::new();

        output.push_str("# roicalc Configuration File\n");
        output.push_str("# AI vs. human cost calculator\n");
        output.push_str("#\n");
        output.push_str("# All settings have defaults and most can be overridden via CLI flags.\n");
        output.push_str("\n");

        output.push_str("# =============================================================================\n");
        output.push_str("# DEFAULT INPUTS\n");
        output.push_str("# =============================================================================\n");
        output.push_str("#\n");
        output.push_str("# Starting values for every calculation. Prices are per 1000 tokens.\n");
        output.push_str("# human_cost_mode is \"hourly\" (cost per hour) or \"yearly\" (annual salary,\n");
        output.push_str("# spread over workdays_per_year * hours_per_workday).\n");
        output.push_str("# Values are not range-checked: negative numbers and percentages above 100\n");
        output.push_str("# are used as given.\n");
        output.push_str(&toml::to_string(&DefaultsSection { defaults: &self.defaults })
            .context("Failed to serialize default inputs")?);
        output.push_str("\n");

        output.push_str("# =============================================================================\n");
        output.push_str("# OUTPUT SETTINGS\n");
        output.push_str("# =============================================================================\n");
        output.push_str("\n");
        output.push_str("[output]\n");
        output.push_str("# Currency symbol used when displaying costs (USD, EUR, GBP, JPY, CNY, or any code)\n");
        output.push_str("# Amounts are not converted, only labelled\n");
        output.push_str(&format!("currency = {}\n", toml_string(&self.output.currency)));
        output.push_str("\n");
        output.push_str("# Enable colored table output by default (--colored)\n");
        output.push_str(&format!("colored = {}\n", self.output.colored));
        output.push_str("\n");
        output.push_str("# Default output format: \"table\" or \"json\" (--json)\n");
        output.push_str(&format!("format = {}\n", toml_string(&self.output.format)));
        output.push_str("\n");
        output.push_str("# Decimal places (0-10) for the per-call cost, aggregate costs and hours/days\n");
        output.push_str(&format!("unit_cost_decimal_places = {}\n", self.output.unit_cost_decimal_places));
        output.push_str(&format!("decimal_places = {}\n", self.output.decimal_places));
        output.push_str(&format!("time_decimal_places = {}\n", self.output.time_decimal_places));
        output.push_str("\n");

        output.push_str("# =============================================================================\n");
        output.push_str("# INTERACTIVE MODE\n");
        output.push_str("# =============================================================================\n");
        output.push_str("\n");
        output.push_str("[interactive]\n");
        output.push_str("# How often the form polls for key presses, in milliseconds\n");
        output.push_str(&format!("refresh_rate_ms = {}\n", self.interactive.refresh_rate_ms));
        output.push_str("\n");

        output.push_str("# To reset to defaults: roicalc config init\n");
        output.push_str("# To modify values:     roicalc config set defaults.human_cost_value 55\n");
        output.push_str("# To view current:      roicalc config show\n");

        Ok(output)
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .context("Failed to determine home directory")?;
        Ok(home.join(".config").join("roicalc").join("config.toml"))
    }

    /// Range checks shared by `set_value` and file loading
    pub fn validate(&self) -> Result<()> {
        if !["table", "json"].contains(&self.output.format.as_str()) {
            anyhow::bail!("Invalid output format: {}. Must be 'table' or 'json'", self.output.format);
        }
        for (key, places) in [
            ("output.unit_cost_decimal_places", self.output.unit_cost_decimal_places),
            ("output.decimal_places", self.output.decimal_places),
            ("output.time_decimal_places", self.output.time_decimal_places),
        ] {
            check_decimal_places(places).with_context(|| format!("Invalid {}", key))?;
        }
        check_refresh_rate(self.interactive.refresh_rate_ms)?;
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        if let Some(field_key) = key.strip_prefix("defaults.") {
            let field = InputField::from_key(field_key)
                .with_context(|| format!("Unknown configuration key: {}", key))?;
            return self.defaults.set_strict(field, value);
        }

        match key {
            "output.currency" => self.output.currency = value.to_string(),
            "output.colored" => {
                self.output.colored = value.parse()
                    .with_context(|| format!("Invalid boolean value: {}", value))?;
            }
            "output.format" => {
                if !["table", "json"].contains(&value) {
                    anyhow::bail!("Invalid output format: {}. Must be 'table' or 'json'", value);
                }
                self.output.format = value.to_string();
            }
            "output.unit_cost_decimal_places" => {
                self.output.unit_cost_decimal_places = parse_decimal_places(value)?;
            }
            "output.decimal_places" => {
                self.output.decimal_places = parse_decimal_places(value)?;
            }
            "output.time_decimal_places" => {
                self.output.time_decimal_places = parse_decimal_places(value)?;
            }
            "interactive.refresh_rate_ms" => {
                let rate: u64 = value.parse()
                    .with_context(|| format!("Invalid refresh rate: {}", value))?;
                check_refresh_rate(rate)?;
                self.interactive.refresh_rate_ms = rate;
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct DefaultsSection<'a> {
    defaults: &'a InputSet,
}

/// Quoted and escaped TOML string literal
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

fn check_decimal_places(places: u8) -> Result<()> {
    if places > 10 {
        anyhow::bail!("Decimal places must be between 0 and 10, got {}", places);
    }
    Ok(())
}

fn check_refresh_rate(rate: u64) -> Result<()> {
    if rate == 0 {
        anyhow::bail!("Refresh rate must be greater than 0");
    }
    Ok(())
}

fn parse_decimal_places(value: &str) -> Result<u8> {
    let places: u8 = value.parse()
        .with_context(|| format!("Invalid decimal places value: {}", value))?;
    check_decimal_places(places)?;
    Ok(places)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HumanCostMode;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output.currency, "USD");
        assert_eq!(config.output.precision(), Precision::default());
        assert_eq!(config.interactive.refresh_rate_ms, 200);
        assert_eq!(config.defaults, InputSet::default());
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("defaults.human_cost_mode", "yearly").unwrap();
        config.set_value("defaults.human_cost_value", "85000").unwrap();
        config.set_value("output.currency", "EUR").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded, config);
        assert_eq!(reloaded.defaults.human_cost_mode, HumanCostMode::Yearly);
        assert_eq!(reloaded.defaults.human_cost_value, 85000.0);
    }

    #[test]
    fn test_commented_toml_has_sections() {
        let toml_text = Config::default().to_commented_toml().unwrap();
        assert!(toml_text.contains("[defaults]"));
        assert!(toml_text.contains("[output]"));
        assert!(toml_text.contains("[interactive]"));
        assert!(toml_text.contains("human_cost_mode = \"hourly\""));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[defaults]\ntask_count = 40\n\n[output]\ncurrency = \"GBP\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.defaults.task_count, 40.0);
        assert_eq!(config.defaults.call_count, 1000.0);
        assert_eq!(config.output.currency, "GBP");
        assert_eq!(config.output.decimal_places, 2);
        assert_eq!(config.interactive.refresh_rate_ms, 200);
    }

    #[test]
    fn test_quoted_currency_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set_value("output.currency", "US\"D\\x").unwrap();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.output.currency, "US\"D\\x");
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_load_rejects_out_of_range_values() {
        let dir = TempDir::new().unwrap();

        let path = dir.path().join("precision.toml");
        fs::write(&path, "[output]\ndecimal_places = 200\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("between 0 and 10"), "got: {:#}", err);

        let path = dir.path().join("refresh.toml");
        fs::write(&path, "[interactive]\nrefresh_rate_ms = 0\n").unwrap();
        assert!(Config::load_from(&path).is_err());

        let path = dir.path().join("format.toml");
        fs::write(&path, "[output]\nformat = \"xml\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_set_value_validation() {
        let mut config = Config::default();

        assert!(config.set_value("defaults.call_count", "250").is_ok());
        assert!(config.set_value("defaults.call_count", "many").is_err());
        assert!(config.set_value("defaults.unknown", "1").is_err());
        assert!(config.set_value("output.format", "json").is_ok());
        assert!(config.set_value("output.format", "xml").is_err());
        assert!(config.set_value("output.decimal_places", "4").is_ok());
        assert!(config.set_value("output.decimal_places", "11").is_err());
        assert!(config.set_value("output.colored", "yes").is_err());
        assert!(config.set_value("interactive.refresh_rate_ms", "0").is_err());
        assert!(config.set_value("nope", "1").is_err());

        assert_eq!(config.defaults.call_count, 250.0);
        assert_eq!(config.output.decimal_places, 4);
    }
}
