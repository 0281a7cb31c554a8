//! One-parameter MTBF sensitivity analysis
//!
//! The base MTBF is perturbed by five evenly spaced percentage offsets over
//! [-range, +range] and a fresh failure count is drawn for each.

use rand::Rng;

use crate::core::error::{require_positive, ReliabilityError};
use crate::core::simulator;
use crate::entities::sensitivity::{SensitivityPoint, SensitivitySweep, SWEEP_POINTS};

/// Largest allowed sweep half-width, in percent
pub const MAX_RANGE_PERCENT: f64 = 100.0;

/// Evenly spaced offsets over the closed interval [-range, +range]
pub fn offsets(range_percent: f64) -> [f64; SWEEP_POINTS] {
    let start = 0.0 - range_percent;
    let step = 2.0 * range_percent / (SWEEP_POINTS - 1) as f64;
    let mut out = [0.0; SWEEP_POINTS];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = start + step * i as f64;
    }
    // Endpoint exactly, without accumulated rounding
    out[SWEEP_POINTS - 1] = range_percent;
    out
}

/// Run the sweep, one independent draw per offset
pub fn analyze<R: Rng + ?Sized>(
    rng: &mut R,
    base_mtbf: f64,
    simulation_time: f64,
    range_percent: f64,
) -> Result<SensitivitySweep, ReliabilityError> {
    let base_mtbf = require_positive("mtbf", base_mtbf)?;
    let simulation_time = require_positive("simulation_time", simulation_time)?;
    if !range_percent.is_finite() || !(0.0..=MAX_RANGE_PERCENT).contains(&range_percent) {
        return Err(ReliabilityError::invalid(
            "sensitivity range",
            range_percent,
            "must be between 0 and 100 percent",
        ));
    }

    let offsets = offsets(range_percent);

    // Every perturbed MTBF must be positive before the first draw
    for &offset in &offsets {
        let mtbf = perturb(base_mtbf, offset);
        if mtbf <= 0.0 {
            return Err(ReliabilityError::invalid(
                "perturbed mtbf",
                mtbf,
                format!("offset {}% leaves no positive MTBF", offset),
            ));
        }
    }

    let mut points = Vec::with_capacity(SWEEP_POINTS);
    for offset in offsets {
        let mtbf = perturb(base_mtbf, offset);
        let failure_count = simulator::simulate(rng, mtbf, simulation_time)?;
        points.push(SensitivityPoint {
            percent_change: offset,
            mtbf,
            failure_count,
        });
    }

    Ok(SensitivitySweep {
        base_mtbf,
        simulation_time,
        range_percent,
        points,
    })
}

fn perturb(base_mtbf: f64, offset_percent: f64) -> f64 {
    base_mtbf * (1.0 + offset_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_offsets_ten_percent() {
        assert_eq!(offsets(10.0), [-10.0, -5.0, 0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_offsets_zero_range() {
        assert_eq!(offsets(0.0), [0.0; 5]);
    }

    #[test]
    fn test_analyze_returns_five_ascending_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let sweep = analyze(&mut rng, 1000.0, 10000.0, 10.0).unwrap();

        assert_eq!(sweep.points.len(), 5);
        assert_eq!(sweep.offsets(), vec![-10.0, -5.0, 0.0, 5.0, 10.0]);
        assert!((sweep.points[0].mtbf - 900.0).abs() < 1e-9);
        assert_eq!(sweep.points[2].mtbf, 1000.0);
        assert!((sweep.points[4].mtbf - 1100.0).abs() < 1e-9);
        assert_eq!(sweep.base_mtbf, 1000.0);
        assert_eq!(sweep.simulation_time, 10000.0);
    }

    #[test]
    fn test_zero_range_still_draws_five_times() {
        let mut rng = StdRng::seed_from_u64(8);
        let sweep = analyze(&mut rng, 100.0, 10000.0, 0.0).unwrap();

        assert_eq!(sweep.points.len(), 5);
        assert!(sweep.points.iter().all(|p| p.percent_change == 0.0));
        assert!(sweep.points.iter().all(|p| p.mtbf == 100.0));
    }

    #[test]
    fn test_rejects_out_of_range_percent() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(analyze(&mut rng, 1000.0, 10000.0, -1.0).is_err());
        assert!(analyze(&mut rng, 1000.0, 10000.0, 100.5).is_err());
        assert!(analyze(&mut rng, 1000.0, 10000.0, f64::NAN).is_err());
    }

    #[test]
    fn test_full_range_rejected_for_zero_mtbf_point() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = analyze(&mut rng, 1000.0, 10000.0, 100.0).unwrap_err();
        assert!(matches!(
            err,
            ReliabilityError::InvalidParameter { name: "perturbed mtbf", .. }
        ));
    }

    #[test]
    fn test_rejects_invalid_base() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(analyze(&mut rng, 0.0, 10000.0, 10.0).is_err());
        assert!(analyze(&mut rng, 1000.0, -1.0, 10.0).is_err());
    }
}
