//! Maintenance recommendation

use serde::{Deserialize, Serialize};

/// Interval and production-impact figures derived from a simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecommendation {
    /// Preventive maintenance interval (hours)
    pub optimal_interval_hours: f64,

    /// Units of production lost over the simulated period
    pub estimated_production_loss: f64,
}
