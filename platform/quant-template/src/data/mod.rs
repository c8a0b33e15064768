//! Market data management.

use crate::utils::error::SubmoduleResolutionFailure;
use crate::utils::namespace::Namespace;

pub const NAME: &str = "data";

pub fn init() -> Result<Namespace, SubmoduleResolutionFailure> {
    Ok(Namespace::new(NAME, "Market data management."))
}
