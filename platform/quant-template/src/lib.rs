//! Quantitative Trading Template Package.
//!
//! A production-ready template for building quantitative trading systems.
//! Includes modules for strategies, backtesting, data management, and live
//! trading.

pub mod backtest;
pub mod data;
pub mod strategies;
pub mod utils;

mod loader;

use utils::error::SubmoduleResolutionFailure;
use utils::namespace::Package;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Binds the four submodules into the package namespace.
///
/// Returns the same `&'static Package` on every successful call. The first
/// submodule that fails to resolve aborts the load and its error is returned
/// as-is; nothing is published in that case.
pub fn initialize() -> Result<&'static Package, SubmoduleResolutionFailure> {
    loader::initialize()
}

/// Names republished by the package, in binding order.
pub fn list_exports() -> &'static [&'static str] {
    &loader::EXPORTS
}
