//! Error taxonomy for the reliability engine

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by the simulation, FMEA and export components
#[derive(Debug, Error, Diagnostic)]
pub enum ReliabilityError {
    /// A numeric input is out of its allowed domain
    #[error("Invalid {name}: {value} ({reason})")]
    #[diagnostic(
        code(grt::invalid_parameter),
        help("MTBF and simulation time must be positive hours; sensitivity range must be 0-100 %")
    )]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    /// The four lookup columns do not describe the same number of scenarios
    #[error(
        "Inconsistent FMEA catalog: failure_modes={failure_modes}, effects={effects}, causes={causes}, detection_controls={detection_controls}"
    )]
    #[diagnostic(
        code(grt::inconsistent_catalog),
        help("Every lookup list must have the same length; index i of each list describes one scenario")
    )]
    InconsistentCatalog {
        failure_modes: usize,
        effects: usize,
        causes: usize,
        detection_controls: usize,
    },

    /// A catalog with no scenarios cannot feed the FMEA builder
    #[error("FMEA catalog has no scenarios")]
    #[diagnostic(code(grt::empty_catalog))]
    EmptyCatalog,

    /// The simulated failure count is too large to tabulate
    #[error("FMEA table too large: {count} failures simulated, at most {max} rows allowed")]
    #[diagnostic(
        code(grt::table_too_large),
        help("Raise the MTBF or shorten the simulation time")
    )]
    TableTooLarge { count: u64, max: u64 },

    /// Export requested with no FMEA rows available
    #[error("No FMEA results to export")]
    #[diagnostic(
        code(grt::empty_export),
        help("Run a simulation that produces at least one failure before exporting")
    )]
    EmptyExport,

    #[error("Failed to parse catalog '{path}': {message}")]
    #[diagnostic(code(grt::catalog_parse))]
    CatalogParse { path: String, message: String },

    #[error("CSV error: {0}")]
    #[diagnostic(code(grt::csv))]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(grt::io))]
    Io(#[from] std::io::Error),
}

impl ReliabilityError {
    /// Shorthand for an [`ReliabilityError::InvalidParameter`]
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }
}

/// Reject anything that is not a strictly positive, finite number
pub fn require_positive(name: &'static str, value: f64) -> Result<f64, ReliabilityError> {
    if !value.is_finite() {
        return Err(ReliabilityError::invalid(name, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(ReliabilityError::invalid(name, value, "must be greater than zero"));
    }
    Ok(value)
}
