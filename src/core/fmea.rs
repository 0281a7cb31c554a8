//! FMEA table generation
//!
//! Scenario indices are drawn uniformly with replacement, so one scenario can
//! appear several times in a table and `count` may exceed the catalog size.
//! This draw is independent of the Poisson draw that produced `count`.

use rand::Rng;

use crate::entities::catalog::LookupCatalog;
use crate::entities::fmea::{FmeaEntry, FmeaTable};

/// Largest FMEA table a single run may produce
pub const MAX_FMEA_ROWS: u64 = 1_000_000;

/// Build an FMEA table of exactly `count` rows from the catalog
///
/// Callers check `count` against [`MAX_FMEA_ROWS`] first.
pub fn build<R: Rng + ?Sized>(rng: &mut R, count: u64, catalog: &LookupCatalog) -> FmeaTable {
    let scenarios = catalog.scenarios();
    if scenarios.is_empty() {
        return FmeaTable::default();
    }

    let entries = (0..count)
        .map(|_| FmeaEntry::from(&scenarios[rng.random_range(0..scenarios.len())]))
        .collect();

    FmeaTable::new(entries)
}
