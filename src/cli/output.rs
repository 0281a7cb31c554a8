//! Status messages for the terminal
//!
//! Data goes to stdout; progress, hints and warnings go to stderr so that
//! `grt export > file.csv` and `-f json | jq` stay clean.

use console::style;

use crate::cli::GlobalOpts;

/// Completed action (suppressed by --quiet)
pub fn success(global: &GlobalOpts, message: impl AsRef<str>) {
    if !global.quiet {
        eprintln!("{} {}", style("✓").green(), message.as_ref());
    }
}

/// Work in progress (suppressed by --quiet)
pub fn working(global: &GlobalOpts, message: impl AsRef<str>) {
    if !global.quiet {
        eprintln!("{} {}", style("⚙").cyan(), message.as_ref());
    }
}

/// Diagnostic detail, only with --verbose
pub fn verbose(global: &GlobalOpts, message: impl AsRef<str>) {
    if global.verbose && !global.quiet {
        eprintln!("{} {}", style("·").dim(), style(message.as_ref()).dim());
    }
}

/// User-visible warning; always shown
pub fn warn(message: impl AsRef<str>) {
    eprintln!("{} {}", style("!").yellow().bold(), style(message.as_ref()).yellow());
}

/// Next-step hint (suppressed by --quiet)
pub fn hint(global: &GlobalOpts, message: impl AsRef<str>) {
    if !global.quiet {
        eprintln!("{} {}", style("→").blue(), message.as_ref());
    }
}
