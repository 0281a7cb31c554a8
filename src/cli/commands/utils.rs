//! Common utilities for command implementations

use miette::Result;

use crate::cli::output;
use crate::cli::{GlobalOpts, RunParams};
use crate::core::{Config, Session};
use crate::entities::catalog::LookupCatalog;

/// Resolved simulation inputs (flag > config > built-in default)
#[derive(Debug, Clone, Copy)]
pub struct Inputs {
    pub mtbf: f64,
    pub simulation_time: f64,
}

impl Inputs {
    pub fn resolve(params: &RunParams, config: &Config) -> Self {
        Self {
            mtbf: params.mtbf.unwrap_or_else(|| config.mtbf()),
            simulation_time: params.time.unwrap_or_else(|| config.simulation_time()),
        }
    }
}

/// Load the lookup catalog named by `--catalog` or the config, else the built-in one
pub fn load_catalog(global: &GlobalOpts, config: &Config) -> Result<LookupCatalog> {
    match global.catalog.as_ref().or(config.catalog.as_ref()) {
        Some(path) => {
            let catalog = LookupCatalog::load(path)?;
            output::verbose(
                global,
                format!("Loaded {} scenario(s) from {}", catalog.len(), path.display()),
            );
            Ok(catalog)
        }
        None => {
            output::verbose(global, "Using built-in gas compression catalog");
            Ok(LookupCatalog::gas_compression())
        }
    }
}

/// Start a session with the configured catalog and random source
pub fn open_session(global: &GlobalOpts, config: &Config) -> Result<Session> {
    let catalog = load_catalog(global, config)?;
    match global.seed.or(config.seed) {
        Some(seed) => {
            output::verbose(global, format!("Random seed: {}", seed));
            Ok(Session::seeded(catalog, seed))
        }
        None => Ok(Session::from_entropy(catalog)),
    }
}
