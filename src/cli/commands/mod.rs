//! CLI command implementations

pub mod utils;

pub mod catalog;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod export;
pub mod sensitivity;
pub mod simulate;
