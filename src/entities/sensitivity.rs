//! MTBF sensitivity sweep results

use serde::{Deserialize, Serialize};

/// Default sweep half-width, in percent
pub const DEFAULT_RANGE_PERCENT: f64 = 10.0;

/// Number of points in every sweep
pub const SWEEP_POINTS: usize = 5;

/// Failure count observed at one MTBF offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityPoint {
    /// Offset applied to the base MTBF, in percent
    pub percent_change: f64,

    /// MTBF used for this draw (hours)
    pub mtbf: f64,

    pub failure_count: u64,
}

/// Five points evenly spaced over [-range, +range]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivitySweep {
    pub base_mtbf: f64,
    pub simulation_time: f64,
    pub range_percent: f64,
    pub points: Vec<SensitivityPoint>,
}

impl SensitivitySweep {
    /// Offsets in sweep order
    pub fn offsets(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.percent_change).collect()
    }

    /// Largest failure count in the sweep (0 when empty)
    pub fn max_failures(&self) -> u64 {
        self.points.iter().map(|p| p.failure_count).max().unwrap_or(0)
    }
}
