// roicalc: AI vs. human labor cost calculator
use clap::Parser;
use std::path::Path;

use roicalc::cli::{Cli, Commands, InputArgs};
use roicalc::commands::{CalcOptions, handle_calc_command, handle_config_action, handle_interactive_command};
use roicalc::config::Config;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(custom_path: Option<&Path>) -> Config {
    let loaded = match custom_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load configuration: {e:#}");
            std::process::exit(1);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log lines would tear the alternate screen, so the form runs without a subscriber
    if !matches!(cli.command, Some(Commands::Interactive)) {
        init_logging(cli.verbose);
    }

    let config_path = cli.config.as_deref().map(Path::new);

    // Default behavior: calculate with the configured defaults
    let command = cli.command.unwrap_or(Commands::Calc {
        inputs: InputArgs::default(),
        summary: false,
        chart: false,
    });

    match command {
        Commands::Config { action } => {
            handle_config_action(action, cli.json, config_path);
        }
        Commands::Interactive => {
            let config = load_config(config_path);
            let currency = cli.currency.unwrap_or_else(|| config.output.currency.clone());
            handle_interactive_command(&config, &currency)?;
        }
        Commands::Calc { inputs, summary, chart } => {
            let config = load_config(config_path);
            // CLI overrides take precedence over config
            let mut options = CalcOptions::from_config(&config);
            if let Some(currency) = cli.currency {
                options.currency = currency;
            }
            options.json |= cli.json;
            options.colored |= cli.colored;
            options.verbose = cli.verbose;
            options.summary = summary;
            options.chart = chart;
            handle_calc_command(&config, &inputs, &options)?;
        }
    }
    Ok(())
}
