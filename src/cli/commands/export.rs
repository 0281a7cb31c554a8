//! `grt export` command - simulate once and export the FMEA table as CSV
//!
//! Accented text is transliterated to ASCII. With no `--output` the CSV is
//! written to stdout so it can be redirected.

use console::style;
use miette::{IntoDiagnostic, Result};
use std::io::Write;
use std::path::PathBuf;

use crate::cli::commands::utils::{open_session, Inputs};
use crate::cli::{output, GlobalOpts, RunParams};
use crate::core::{export, Config};

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub params: RunParams,

    /// Output file (default: stdout). Use "-" for stdout explicitly
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Write to resultados_fmea.csv in the current directory
    #[arg(long, conflicts_with = "output")]
    pub default_file: bool,
}

pub fn run(args: ExportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let inputs = Inputs::resolve(&args.params, &config);
    let mut session = open_session(global, &config)?;

    let run = session.run(inputs.mtbf, inputs.simulation_time)?;
    output::verbose(
        global,
        format!("Simulated {} failure(s)", run.result.failure_count),
    );

    // EmptyExport surfaces as a diagnostic; nothing is written
    let bytes = session.export()?;

    let path = if args.default_file {
        Some(PathBuf::from(export::DEFAULT_EXPORT_FILE))
    } else {
        args.output.filter(|p| p.as_os_str() != "-")
    };

    match path {
        Some(path) => {
            std::fs::write(&path, &bytes).into_diagnostic()?;
            output::success(
                global,
                format!(
                    "Exported {} FMEA row(s) to {}",
                    run.fmea.len(),
                    style(path.display()).cyan()
                ),
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&bytes).into_diagnostic()?;
            stdout.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
