//! Maintenance recommendations
//!
//! Both figures are fixed placeholder heuristics, not a calibrated cost model:
//! maintain at half the MTBF, and count a flat number of lost units per
//! failure.

use crate::core::error::{require_positive, ReliabilityError};
use crate::entities::maintenance::MaintenanceRecommendation;

/// Production units lost per failure
pub const UNITS_LOST_PER_FAILURE: f64 = 100.0;

/// Derive the maintenance interval and production impact
pub fn recommend(
    mtbf: f64,
    failure_count: u64,
) -> Result<MaintenanceRecommendation, ReliabilityError> {
    let mtbf = require_positive("mtbf", mtbf)?;
    Ok(MaintenanceRecommendation {
        optimal_interval_hours: mtbf / 2.0,
        estimated_production_loss: failure_count as f64 * UNITS_LOST_PER_FAILURE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommend_exact_values() {
        let rec = recommend(1000.0, 5).unwrap();
        assert_eq!(rec.optimal_interval_hours, 500.0);
        assert_eq!(rec.estimated_production_loss, 500.0);
    }

    #[test]
    fn test_recommend_zero_failures() {
        let rec = recommend(250.0, 0).unwrap();
        assert_eq!(rec.optimal_interval_hours, 125.0);
        assert_eq!(rec.estimated_production_loss, 0.0);
    }

    #[test]
    fn test_recommend_rejects_zero_mtbf() {
        assert!(recommend(0.0, 3).is_err());
    }
}
