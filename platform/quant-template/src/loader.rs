use crate::utils::error::SubmoduleResolutionFailure;
use crate::utils::namespace::{Namespace, Package};
use crate::{backtest, data, strategies, utils};
use std::sync::OnceLock;

pub(crate) const EXPORTS: [&str; 4] = [strategies::NAME, data::NAME, backtest::NAME, utils::NAME];

type Resolver = fn() -> Result<Namespace, SubmoduleResolutionFailure>;

/// Entry points used to bind each export.
#[derive(Clone, Copy)]
struct Resolvers {
    strategies: Resolver,
    data: Resolver,
    backtest: Resolver,
    utils: Resolver,
}

impl Resolvers {
    const fn builtin() -> Self {
        Self {
            strategies: strategies::init,
            data: data::init,
            backtest: backtest::init,
            utils: utils::init,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Uninitialized,
    Initialized,
}

static PACKAGE: OnceLock<Package> = OnceLock::new();

pub(crate) fn initialize() -> Result<&'static Package, SubmoduleResolutionFailure> {
    initialize_in(&PACKAGE, &Resolvers::builtin())
}

fn initialize_in<'a>(
    cell: &'a OnceLock<Package>,
    resolvers: &Resolvers,
) -> Result<&'a Package, SubmoduleResolutionFailure> {
    tracing::trace!(state = ?state(cell), "initialize requested");
    if let Some(package) = cell.get() {
        return Ok(package);
    }

    let package = resolve(resolvers)?;
    // Racing first loads resolve independently; only one result is kept.
    Ok(cell.get_or_init(move || {
        tracing::info!(
            version = package.version(),
            author = package.author(),
            exports = ?EXPORTS,
            "package initialized"
        );
        package
    }))
}

fn state(cell: &OnceLock<Package>) -> LoadState {
    match cell.get() {
        Some(_) => LoadState::Initialized,
        None => LoadState::Uninitialized,
    }
}

fn resolve(resolvers: &Resolvers) -> Result<Package, SubmoduleResolutionFailure> {
    let strategies = bind(resolvers.strategies)?;
    let data = bind(resolvers.data)?;
    let backtest = bind(resolvers.backtest)?;
    let utils = bind(resolvers.utils)?;
    Ok(Package::new(strategies, data, backtest, utils))
}

fn bind(resolver: Resolver) -> Result<Namespace, SubmoduleResolutionFailure> {
    let namespace = resolver()?;
    tracing::debug!(namespace = namespace.name(), "submodule bound");
    Ok(namespace)
}
