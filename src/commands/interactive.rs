use std::time::Duration;

use crate::config::Config;
use crate::interactive::{Dashboard, DisplaySettings};

pub fn handle_interactive_command(config: &Config, currency: &str) -> anyhow::Result<()> {
    let settings = DisplaySettings {
        precision: config.output.precision(),
        currency: currency.to_string(),
        refresh_rate: Duration::from_millis(config.interactive.refresh_rate_ms),
    };

    let mut dashboard = Dashboard::new(config.defaults.clone(), settings)?;
    let result = dashboard.run();
    dashboard.cleanup()?;

    let final_inputs = result?;
    tracing::debug!(?final_inputs, "interactive session ended");
    Ok(())
}
