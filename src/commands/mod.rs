// Command handlers module
pub mod calc;
pub mod config;
pub mod interactive;

// Re-export command handlers for easy access
pub use calc::{CalcOptions, handle_calc_command};
pub use config::handle_config_action;
pub use interactive::handle_interactive_command;
