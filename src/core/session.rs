//! Dashboard session state
//!
//! A session owns everything that outlives a single request: the random
//! source, the append-only simulation history and the most recent FMEA table.
//! Each front-end invocation creates its own session; nothing is global.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::core::error::ReliabilityError;
use crate::core::{export, fmea, maintenance, sensitivity, simulator};
use crate::entities::catalog::LookupCatalog;
use crate::entities::fmea::FmeaTable;
use crate::entities::maintenance::MaintenanceRecommendation;
use crate::entities::sensitivity::SensitivitySweep;
use crate::entities::simulation::{SimulationRequest, SimulationResult};

/// Everything one simulation pass produces
#[derive(Debug, Clone, Serialize)]
pub struct DashboardRun {
    pub request: SimulationRequest,
    pub result: SimulationResult,
    pub fmea: FmeaTable,
    pub maintenance: MaintenanceRecommendation,
}

pub struct Session<R: Rng = StdRng> {
    catalog: LookupCatalog,
    rng: R,
    history: Vec<SimulationResult>,
    last_table: Option<FmeaTable>,
}

impl Session<StdRng> {
    /// Deterministic session for reproducible runs
    pub fn seeded(catalog: LookupCatalog, seed: u64) -> Self {
        Self::new(catalog, StdRng::seed_from_u64(seed))
    }

    /// Session seeded from the thread-local generator
    pub fn from_entropy(catalog: LookupCatalog) -> Self {
        Self::new(catalog, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Session<R> {
    pub fn new(catalog: LookupCatalog, rng: R) -> Self {
        Self {
            catalog,
            rng,
            history: Vec::new(),
            last_table: None,
        }
    }

    pub fn catalog(&self) -> &LookupCatalog {
        &self.catalog
    }

    /// Simulation results in invocation order
    pub fn history(&self) -> &[SimulationResult] {
        &self.history
    }

    pub fn last_table(&self) -> Option<&FmeaTable> {
        self.last_table.as_ref()
    }

    /// Simulate, rebuild the FMEA table and derive maintenance figures
    ///
    /// Inputs are validated first; a rejected request leaves the session
    /// untouched.
    pub fn run(&mut self, mtbf: f64, simulation_time: f64) -> Result<DashboardRun, ReliabilityError> {
        let request = SimulationRequest::new(mtbf, simulation_time)?;
        let failure_count = simulator::simulate_request(&mut self.rng, &request)?;
        if failure_count > fmea::MAX_FMEA_ROWS {
            return Err(ReliabilityError::TableTooLarge {
                count: failure_count,
                max: fmea::MAX_FMEA_ROWS,
            });
        }
        let maintenance = maintenance::recommend(request.mtbf, failure_count)?;

        let result = SimulationResult::new(request.simulation_time, failure_count);
        self.history.push(result.clone());

        let table = fmea::build(&mut self.rng, failure_count, &self.catalog);
        self.last_table = Some(table.clone());

        Ok(DashboardRun {
            request,
            result,
            fmea: table,
            maintenance,
        })
    }

    /// Sweep MTBF by ±`range_percent` around `mtbf`
    pub fn sensitivity(
        &mut self,
        mtbf: f64,
        simulation_time: f64,
        range_percent: f64,
    ) -> Result<SensitivitySweep, ReliabilityError> {
        sensitivity::analyze(&mut self.rng, mtbf, simulation_time, range_percent)
    }

    /// CSV bytes for the most recent FMEA table
    pub fn export(&self) -> Result<Vec<u8>, ReliabilityError> {
        match &self.last_table {
            Some(table) => export::export(table),
            None => Err(ReliabilityError::EmptyExport),
        }
    }
}
