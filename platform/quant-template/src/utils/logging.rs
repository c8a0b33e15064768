//! Global `tracing` subscriber setup for binaries built on the package.
//!
//! The library itself only emits events; installing a subscriber is left to
//! whoever owns `main`.

use tracing_subscriber::EnvFilter;

/// Overrides the configured level filter when set.
pub const LOG_ENV: &str = "QUANT_TEMPLATE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Installs a fmt subscriber writing to stderr.
///
/// Fails on an invalid filter or when a global subscriber is already set.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<(), String> {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| log_level.to_string());
    let env_filter =
        EnvFilter::try_new(filter).map_err(|err| format!("invalid log filter: {err}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    let installed = match LogFormat::parse(log_format) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.map_err(|err| format!("failed to install tracing subscriber: {err}"))
}
