//! GRT: Gas Reliability Toolkit
//!
//! Reliability assessment for gas compression systems: Poisson failure
//! simulation, automatically populated FMEA tables, maintenance
//! recommendations, MTBF sensitivity analysis and CSV export.

pub mod cli;
pub mod core;
pub mod entities;
