//! Shared utilities: errors, logging, configuration.

pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;

use error::SubmoduleResolutionFailure;
use namespace::Namespace;

pub const NAME: &str = "utils";

pub fn init() -> Result<Namespace, SubmoduleResolutionFailure> {
    Ok(Namespace::new(
        NAME,
        "Shared utilities: errors, logging, configuration.",
    ))
}
