// roicalc library crate
// Exposes modules for integration testing

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod interactive;
pub mod models;
pub mod output;
