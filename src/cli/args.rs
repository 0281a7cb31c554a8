//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    catalog::CatalogArgs, completions::CompletionsArgs, config::ConfigCommands,
    dashboard::DashboardArgs, export::ExportArgs, sensitivity::SensitivityArgs,
    simulate::SimulateArgs,
};

#[derive(Parser)]
#[command(name = "grt")]
#[command(author, version, about = "Gas Reliability Toolkit")]
#[command(long_about = "Reliability assessment for gas compression systems: Poisson failure simulation, automatic FMEA tables, maintenance recommendations and MTBF sensitivity analysis.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Random seed for reproducible results
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// YAML lookup catalog to use instead of the built-in one
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,
}

/// Simulation inputs shared by several commands
#[derive(clap::Args, Clone, Debug, Default)]
pub struct RunParams {
    /// Mean time between failures, in hours (default: 1000)
    #[arg(long, allow_negative_numbers = true)]
    pub mtbf: Option<f64>,

    /// Simulation time, in hours (default: 10000)
    #[arg(long, short = 't', allow_negative_numbers = true)]
    pub time: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Simulate failures, build the FMEA table and recommend maintenance
    Simulate(SimulateArgs),

    /// MTBF sensitivity analysis (five-point sweep)
    Sensitivity(SensitivityArgs),

    /// Export an FMEA table as CSV
    Export(ExportArgs),

    /// Interactive reliability dashboard
    Dashboard(DashboardArgs),

    /// Show the FMEA lookup catalog
    Catalog(CatalogArgs),

    /// View and modify configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (human-readable tables)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Aligned columns (for terminals and piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
}
