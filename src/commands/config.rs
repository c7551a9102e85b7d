use std::path::{Path, PathBuf};

use crate::cli::ConfigAction;
use crate::config::Config;

fn resolve_path(custom_path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match custom_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path(),
    }
}

fn report_error(json_output: bool, message: &str, e: &anyhow::Error) -> ! {
    if json_output {
        let body = serde_json::json!({
            "status": "error",
            "message": format!("{}: {}", message, e),
        });
        println!("{}", body);
    } else {
        eprintln!("Error: {}: {:#}", message, e);
    }
    std::process::exit(1);
}

fn report_success(json_output: bool, message: &str) {
    if json_output {
        println!("{}", serde_json::json!({ "status": "success", "message": message }));
    } else {
        println!("{}", message);
    }
}

pub fn handle_config_action(action: ConfigAction, json_output: bool, custom_path: Option<&Path>) {
    let path = match resolve_path(custom_path) {
        Ok(path) => path,
        Err(e) => report_error(json_output, "Failed to locate config", &e),
    };

    match action {
        ConfigAction::Init => match Config::default().save_to(&path) {
            Ok(()) => report_success(
                json_output,
                &format!("Configuration initialized at: {}", path.display()),
            ),
            Err(e) => report_error(json_output, "Failed to initialize config", &e),
        },
        ConfigAction::Show => match Config::load_from(&path) {
            Ok(config) => {
                if json_output {
                    match serde_json::to_string_pretty(&config) {
                        Ok(json) => println!("{}", json),
                        Err(e) => report_error(
                            json_output,
                            "Failed to serialize config to JSON",
                            &e.into(),
                        ),
                    }
                } else {
                    match toml::to_string_pretty(&config) {
                        Ok(toml_str) => {
                            println!("Configuration ({})", path.display());
                            println!("{}", toml_str);
                        }
                        Err(e) => report_error(json_output, "Failed to serialize config", &e.into()),
                    }
                }
            }
            Err(e) => report_error(json_output, "Failed to load config", &e),
        },
        ConfigAction::Set { key, value } => match Config::load_from(&path) {
            Ok(mut config) => match config.set_value(&key, &value) {
                Ok(()) => match config.save_to(&path) {
                    Ok(()) => report_success(
                        json_output,
                        &format!("Configuration updated: {} = {}", key, value),
                    ),
                    Err(e) => report_error(json_output, "Failed to save config", &e),
                },
                Err(e) => report_error(json_output, "Invalid configuration", &e),
            },
            Err(e) => report_error(json_output, "Failed to load config", &e),
        },
    }
}
