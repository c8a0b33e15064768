//! Backtesting and live trading engines.
//!
//! The package binds this module by name only; engines plug in underneath it.

use crate::utils::error::SubmoduleResolutionFailure;
use crate::utils::namespace::Namespace;

pub const NAME: &str = "backtest";

pub fn init() -> Result<Namespace, SubmoduleResolutionFailure> {
    Ok(Namespace::new(NAME, "Backtesting and live trading engines."))
}
