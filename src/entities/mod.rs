//! Value types produced and consumed by the reliability engine

pub mod catalog;
pub mod fmea;
pub mod maintenance;
pub mod sensitivity;
pub mod simulation;

pub use catalog::{CatalogColumns, FailureScenario, LookupCatalog};
pub use fmea::{FmeaEntry, FmeaTable};
pub use maintenance::MaintenanceRecommendation;
pub use sensitivity::{SensitivityPoint, SensitivitySweep};
pub use simulation::{SimulationRequest, SimulationResult};
