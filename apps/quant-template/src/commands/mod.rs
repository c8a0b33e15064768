mod exports;
mod info;

use quant_template::utils::config::{load_settings, Settings};
use quant_template::utils::logging::init_tracing;
use std::path::Path;

pub enum Command {
    Info,
    Exports,
}

pub fn run(config: Option<&Path>, command: Command, json: bool) -> Result<(), String> {
    let settings = match config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    init_tracing(&settings.logging.level, &settings.logging.format)?;
    tracing::debug!(
        config = ?config,
        level = %settings.logging.level,
        format = %settings.logging.format,
        "settings loaded"
    );

    let package = quant_template::initialize().map_err(|err| err.to_string())?;

    match command {
        Command::Info => info::run_info(package, json),
        Command::Exports => exports::run_exports(json),
    }
}
