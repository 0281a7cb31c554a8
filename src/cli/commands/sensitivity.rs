//! `grt sensitivity` command - MTBF sensitivity analysis

use miette::Result;

use crate::cli::commands::utils::{open_session, Inputs};
use crate::cli::helpers::{format_number, resolve_format};
use crate::cli::{output, render, GlobalOpts, OutputFormat, RunParams};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct SensitivityArgs {
    #[command(flatten)]
    pub params: RunParams,

    /// Sweep half-width in percent, 0-100 (default: 10)
    #[arg(long, short = 'r', allow_negative_numbers = true)]
    pub range: Option<f64>,

    /// Draw a bar chart of failures per MTBF offset
    #[arg(long)]
    pub chart: bool,
}

pub fn run(args: SensitivityArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let inputs = Inputs::resolve(&args.params, &config);
    let range = args.range.unwrap_or_else(|| config.sensitivity_range());
    let mut session = open_session(global, &config)?;

    output::working(
        global,
        format!(
            "Sweeping MTBF {} h by ±{}% over {} h",
            format_number(inputs.mtbf),
            format_number(range),
            format_number(inputs.simulation_time)
        ),
    );

    let sweep = session.sensitivity(inputs.mtbf, inputs.simulation_time, range)?;

    let format = resolve_format(
        global.format,
        config.default_format.as_deref(),
        OutputFormat::Tsv,
    );
    print!("{}", render::sweep(&sweep, format)?);

    if args.chart {
        match format {
            OutputFormat::Auto | OutputFormat::Tsv | OutputFormat::Md => {
                println!();
                print!("{}", render::sweep_chart(&sweep, render::CHART_WIDTH));
            }
            _ => output::warn("--chart is only drawn for tsv and md output"),
        }
    }

    Ok(())
}
