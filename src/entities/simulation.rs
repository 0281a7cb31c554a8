//! Simulation request/result types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::{require_positive, ReliabilityError};

/// Default MTBF in hours
pub const DEFAULT_MTBF_HOURS: f64 = 1000.0;

/// Default simulation (exposure) time in hours
pub const DEFAULT_SIMULATION_HOURS: f64 = 10000.0;

/// Validated simulation inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Mean time between failures (hours)
    pub mtbf: f64,

    /// Exposure time (hours)
    pub simulation_time: f64,
}

impl SimulationRequest {
    /// Create a request, rejecting non-positive inputs
    pub fn new(mtbf: f64, simulation_time: f64) -> Result<Self, ReliabilityError> {
        Ok(Self {
            mtbf: require_positive("mtbf", mtbf)?,
            simulation_time: require_positive("simulation_time", simulation_time)?,
        })
    }

    /// Expected failure count, λ = time / MTBF
    pub fn rate(&self) -> f64 {
        self.simulation_time / self.mtbf
    }
}

impl Default for SimulationRequest {
    fn default() -> Self {
        Self {
            mtbf: DEFAULT_MTBF_HOURS,
            simulation_time: DEFAULT_SIMULATION_HOURS,
        }
    }
}

/// Outcome of one simulation, as kept in the session history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub simulation_time: f64,
    pub failure_count: u64,
    pub recorded_at: DateTime<Utc>,
}

impl SimulationResult {
    pub fn new(simulation_time: f64, failure_count: u64) -> Self {
        Self {
            simulation_time,
            failure_count,
            recorded_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req = SimulationRequest::default();
        assert_eq!(req.mtbf, 1000.0);
        assert_eq!(req.simulation_time, 10000.0);
        assert_eq!(req.rate(), 10.0);
    }

    #[test]
    fn test_request_rejects_non_positive() {
        assert!(SimulationRequest::new(0.0, 100.0).is_err());
        assert!(SimulationRequest::new(100.0, 0.0).is_err());
        assert!(SimulationRequest::new(-1.0, 100.0).is_err());
        assert!(SimulationRequest::new(100.0, 50.0).is_ok());
    }
}
