use thiserror::Error;

/// A submodule could not be located or failed its own initialization.
///
/// `Display` yields the submodule's message untouched so callers see the
/// underlying failure, not a wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SubmoduleResolutionFailure {
    submodule: &'static str,
    message: String,
}

impl SubmoduleResolutionFailure {
    pub fn new(submodule: &'static str, message: impl Into<String>) -> Self {
        Self {
            submodule,
            message: message.into(),
        }
    }

    pub fn submodule(&self) -> &'static str {
        self.submodule
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
