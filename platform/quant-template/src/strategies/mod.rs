//! Trading strategy implementations.

use crate::utils::error::SubmoduleResolutionFailure;
use crate::utils::namespace::Namespace;

pub const NAME: &str = "strategies";

pub fn init() -> Result<Namespace, SubmoduleResolutionFailure> {
    Ok(Namespace::new(NAME, "Trading strategy implementations."))
}
