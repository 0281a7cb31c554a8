//! `grt simulate` command - failure simulation, FMEA table and maintenance advice

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::{open_session, Inputs};
use crate::cli::helpers::resolve_format;
use crate::cli::{output, render, GlobalOpts, OutputFormat, RunParams};
use crate::core::error::ReliabilityError;
use crate::core::{export, Config, DashboardRun};

/// Most simulation passes a single invocation may run
pub const MAX_RUNS: i64 = 10_000;

#[derive(clap::Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub params: RunParams,

    /// Number of simulation passes to run in this session
    #[arg(long, short = 'n', default_value = "1", value_parser = clap::value_parser!(u32).range(1..=MAX_RUNS))]
    pub runs: u32,

    /// Print the session history after the last run
    #[arg(long)]
    pub history: bool,

    /// Write the last FMEA table as CSV to this path
    #[arg(long, short = 'e')]
    pub export: Option<PathBuf>,
}

pub fn run(args: SimulateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let inputs = Inputs::resolve(&args.params, &config);
    let mut session = open_session(global, &config)?;

    output::verbose(
        global,
        format!(
            "MTBF {} h, simulation time {} h, {} run(s)",
            inputs.mtbf, inputs.simulation_time, args.runs
        ),
    );

    let mut runs: Vec<DashboardRun> = Vec::new();
    for _ in 0..args.runs {
        runs.push(session.run(inputs.mtbf, inputs.simulation_time)?);
    }

    let format = resolve_format(
        global.format,
        config.default_format.as_deref(),
        OutputFormat::Tsv,
    );

    match format {
        OutputFormat::Json => print!("{}", render::to_json(&runs)?),
        OutputFormat::Yaml => print!("{}", render::to_yaml(&runs)?),
        OutputFormat::Csv => {
            if let Some(last) = runs.last() {
                print!("{}", render::fmea_table(&last.fmea, format)?);
            }
        }
        OutputFormat::Md | OutputFormat::Tsv | OutputFormat::Auto => {
            for (i, run) in runs.iter().enumerate() {
                if runs.len() > 1 {
                    println!("{}", style(format!("Run {}", i + 1)).bold().underlined());
                }
                print!("{}", render::run_summary(run));
                println!();
                println!("{}", style("FMEA (Failure Mode and Effects Analysis)").bold());
                print!("{}", render::fmea_table(&run.fmea, format)?);
                println!();
                print!("{}", render::maintenance(run));
                println!();
            }
        }
    }

    if args.history || args.runs > 1 {
        let history_format = match format {
            OutputFormat::Json | OutputFormat::Yaml | OutputFormat::Csv => None,
            f => Some(f),
        };
        match history_format {
            Some(f) => print!("{}", render::history(session.history(), f)?),
            None if args.history => {
                output::warn("--history is only printed for tsv and md output")
            }
            None => {}
        }
    }

    if let Some(path) = args.export {
        match session.last_table().map(|t| export::write_to(t, &path)) {
            Some(Ok(rows)) => output::success(
                global,
                format!("Exported {} FMEA row(s) to {}", rows, style(path.display()).cyan()),
            ),
            Some(Err(ReliabilityError::EmptyExport)) | None => {
                output::warn("No FMEA results to export: the last run simulated zero failures")
            }
            Some(Err(e)) => return Err(e.into()),
        }
    }

    Ok(())
}
