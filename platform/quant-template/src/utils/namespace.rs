use serde::Serialize;

/// Descriptor of a submodule bound into the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Namespace {
    name: &'static str,
    summary: &'static str,
}

impl Namespace {
    pub const fn new(name: &'static str, summary: &'static str) -> Self {
        Self { name, summary }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn summary(&self) -> &'static str {
        self.summary
    }
}

/// Bindings published by [`crate::initialize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    version: &'static str,
    author: &'static str,
    strategies: Namespace,
    data: Namespace,
    backtest: Namespace,
    utils: Namespace,
}

impl Package {
    pub(crate) fn new(
        strategies: Namespace,
        data: Namespace,
        backtest: Namespace,
        utils: Namespace,
    ) -> Self {
        Self {
            version: crate::VERSION,
            author: crate::AUTHOR,
            strategies,
            data,
            backtest,
            utils,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn author(&self) -> &'static str {
        self.author
    }

    pub fn strategies(&self) -> &Namespace {
        &self.strategies
    }

    pub fn data(&self) -> &Namespace {
        &self.data
    }

    pub fn backtest(&self) -> &Namespace {
        &self.backtest
    }

    pub fn utils(&self) -> &Namespace {
        &self.utils
    }

    /// Bound namespaces in export order.
    pub fn namespaces(&self) -> [&Namespace; 4] {
        [&self.strategies, &self.data, &self.backtest, &self.utils]
    }
}
