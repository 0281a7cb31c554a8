//! Poisson failure simulation
//!
//! Failures are modelled as a homogeneous Poisson process: the number of
//! failures in `simulation_time` hours is Poisson-distributed with rate
//! λ = simulation_time / mtbf.

use rand::Rng;
use rand_distr::{Distribution, Poisson};

use crate::core::error::{require_positive, ReliabilityError};
use crate::entities::simulation::SimulationRequest;

/// Draw a failure count for the given MTBF and exposure time
pub fn simulate<R: Rng + ?Sized>(
    rng: &mut R,
    mtbf: f64,
    simulation_time: f64,
) -> Result<u64, ReliabilityError> {
    let mtbf = require_positive("mtbf", mtbf)?;
    let simulation_time = require_positive("simulation_time", simulation_time)?;
    draw(rng, simulation_time / mtbf)
}

/// Draw a failure count for an already validated request
pub fn simulate_request<R: Rng + ?Sized>(
    rng: &mut R,
    request: &SimulationRequest,
) -> Result<u64, ReliabilityError> {
    simulate(rng, request.mtbf, request.simulation_time)
}

fn draw<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64, ReliabilityError> {
    // Rate underflowed from valid inputs
    if lambda == 0.0 {
        return Ok(0);
    }
    let poisson = Poisson::new(lambda).map_err(|e| {
        ReliabilityError::invalid("failure rate", lambda, format!("Poisson rate rejected: {}", e))
    })?;
    let count: f64 = poisson.sample(rng);
    Ok(count as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_non_positive_mtbf() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            simulate(&mut rng, 0.0, 100.0),
            Err(ReliabilityError::InvalidParameter { name: "mtbf", .. })
        ));
        assert!(simulate(&mut rng, -10.0, 100.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_time() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            simulate(&mut rng, 1000.0, 0.0),
            Err(ReliabilityError::InvalidParameter { name: "simulation_time", .. })
        ));
    }

    #[test]
    fn test_rejects_unsupported_rate() {
        let mut rng = StdRng::seed_from_u64(1);
        // λ = 1e300 / 1e-300 overflows to infinity
        assert!(simulate(&mut rng, 1e-300, 1e300).is_err());
    }

    #[test]
    fn test_underflowing_rate_gives_zero_failures() {
        let mut rng = StdRng::seed_from_u64(1);
        // λ = 1e-20 / 1e308 rounds to 0.0
        assert_eq!(simulate(&mut rng, 1e308, 1e-20).unwrap(), 0);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                simulate(&mut a, 1000.0, 10000.0).unwrap(),
                simulate(&mut b, 1000.0, 10000.0).unwrap()
            );
        }
    }

    #[test]
    fn test_mean_converges_to_rate() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000;
        let total: u64 = (0..draws)
            .map(|_| simulate(&mut rng, 1000.0, 10000.0).unwrap())
            .sum();
        let mean = total as f64 / draws as f64;

        // λ = 10, σ of the mean ≈ sqrt(10 / 20000) ≈ 0.022
        assert!((mean - 10.0).abs() < 0.15, "mean was {}", mean);
    }

    #[test]
    fn test_small_rate_mostly_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let zeros = (0..1000)
            .filter(|_| simulate(&mut rng, 1_000_000.0, 1.0).unwrap() == 0)
            .count();
        assert!(zeros > 990);
    }

    #[test]
    fn test_simulate_request() {
        let mut rng = StdRng::seed_from_u64(3);
        let request = SimulationRequest::new(500.0, 1000.0).unwrap();
        assert!(simulate_request(&mut rng, &request).is_ok());
    }
}
