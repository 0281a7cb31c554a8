//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use clap::ValueEnum;

use crate::cli::OutputFormat;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Counts characters rather than bytes so accented catalog text never
/// splits a code point.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an hour/percent quantity without a trailing ".0" for whole numbers
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Pick the output format: explicit flag, then configured default, then fallback
pub fn resolve_format(
    flag: OutputFormat,
    configured: Option<&str>,
    fallback: OutputFormat,
) -> OutputFormat {
    if flag != OutputFormat::Auto {
        return flag;
    }
    configured
        .and_then(|name| OutputFormat::from_str(name, true).ok())
        .filter(|f| *f != OutputFormat::Auto)
        .unwrap_or(fallback)
}
