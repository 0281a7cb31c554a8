//! Core module - the reliability engine and session state

pub mod config;
pub mod error;
pub mod export;
pub mod fmea;
pub mod maintenance;
pub mod sensitivity;
pub mod session;
pub mod simulator;

pub use config::Config;
pub use error::ReliabilityError;
pub use session::{DashboardRun, Session};
