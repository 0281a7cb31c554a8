//! `grt dashboard` command - interactive reliability dashboard
//!
//! One dashboard is one session: the simulation history and the last FMEA
//! table live until the user quits.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::commands::utils::{open_session, Inputs};
use crate::cli::helpers::resolve_format;
use crate::cli::{output, render, GlobalOpts, OutputFormat, RunParams};
use crate::core::error::ReliabilityError;
use crate::core::{export, Config, Session};

#[derive(clap::Args, Debug)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub params: RunParams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Simulate,
    History,
    Sensitivity,
    Export,
    Catalog,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Simulate,
        Action::History,
        Action::Sensitivity,
        Action::Export,
        Action::Catalog,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::Simulate => "Run failure simulation",
            Action::History => "Show simulation history",
            Action::Sensitivity => "Sensitivity analysis",
            Action::Export => "Export FMEA results as CSV",
            Action::Catalog => "Show FMEA catalog",
            Action::Quit => "Quit",
        }
    }
}

struct Dashboard<'a> {
    global: &'a GlobalOpts,
    theme: ColorfulTheme,
    session: Session,
    format: OutputFormat,
    inputs: Inputs,
    range: f64,
}

pub fn run(args: DashboardArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let session = open_session(global, &config)?;

    let mut dashboard = Dashboard {
        global,
        theme: ColorfulTheme::default(),
        session,
        format: resolve_format(
            global.format,
            config.default_format.as_deref(),
            OutputFormat::Tsv,
        ),
        inputs: Inputs::resolve(&args.params, &config),
        range: config.sensitivity_range().clamp(0.0, 100.0),
    };

    println!();
    println!(
        "{} {}",
        style("◆").cyan(),
        style("Gas Compression Reliability Dashboard").bold()
    );
    println!("{}", style("─".repeat(50)).dim());

    loop {
        println!();
        let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&dashboard.theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()
            .into_diagnostic()?;

        let outcome = match Action::ALL[choice] {
            Action::Simulate => dashboard.simulate(),
            Action::History => dashboard.history(),
            Action::Sensitivity => dashboard.sensitivity(),
            Action::Export => dashboard.export(),
            Action::Catalog => dashboard.catalog(),
            Action::Quit => break,
        };

        // Validation problems ask for new input instead of ending the session
        if let Err(report) = outcome {
            output::warn(report.to_string());
        }
    }

    output::success(
        global,
        format!(
            "Session closed after {} simulation(s)",
            dashboard.session.history().len()
        ),
    );
    Ok(())
}

impl Dashboard<'_> {
    fn prompt_hours(&self, prompt: &str, initial: f64) -> Result<f64> {
        Input::<f64>::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(initial)
            .validate_with(|v: &f64| -> std::result::Result<(), &str> {
                if v.is_finite() && *v >= 1.0 {
                    Ok(())
                } else {
                    Err("Enter a number of hours of at least 1")
                }
            })
            .interact_text()
            .into_diagnostic()
    }

    fn simulate(&mut self) -> Result<()> {
        self.inputs.mtbf = self.prompt_hours("Mean time between failures (hours)", self.inputs.mtbf)?;
        self.inputs.simulation_time =
            self.prompt_hours("Simulation time (hours)", self.inputs.simulation_time)?;

        let run = self
            .session
            .run(self.inputs.mtbf, self.inputs.simulation_time)?;

        println!();
        print!("{}", render::run_summary(&run));
        println!();
        println!("{}", style("FMEA (Failure Mode and Effects Analysis)").bold());
        print!("{}", render::fmea_table(&run.fmea, self.format)?);
        println!();
        print!("{}", render::maintenance(&run));
        Ok(())
    }

    fn history(&self) -> Result<()> {
        println!();
        print!("{}", render::history(self.session.history(), self.format)?);
        Ok(())
    }

    fn sensitivity(&mut self) -> Result<()> {
        let range: f64 = Input::with_theme(&self.theme)
            .with_prompt("Sensitivity range (%)")
            .default(self.range)
            .validate_with(|v: &f64| -> std::result::Result<(), &str> {
                if (0.0..=100.0).contains(v) {
                    Ok(())
                } else {
                    Err("Enter a percentage between 0 and 100")
                }
            })
            .interact_text()
            .into_diagnostic()?;
        self.range = range;

        let sweep = self
            .session
            .sensitivity(self.inputs.mtbf, self.inputs.simulation_time, range)?;

        println!();
        print!("{}", render::sweep(&sweep, self.format)?);
        println!();
        print!("{}", render::sweep_chart(&sweep, render::CHART_WIDTH));
        Ok(())
    }

    fn export(&self) -> Result<()> {
        let bytes = match self.session.export() {
            Ok(bytes) => bytes,
            Err(ReliabilityError::EmptyExport) => {
                output::warn("No FMEA results to export, or the last table is empty.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let path: String = Input::with_theme(&self.theme)
            .with_prompt("Export to file")
            .default(export::DEFAULT_EXPORT_FILE.to_string())
            .interact_text()
            .into_diagnostic()?;
        let path = PathBuf::from(path);

        std::fs::write(&path, &bytes).into_diagnostic()?;
        output::success(
            self.global,
            format!("FMEA results written to {}", style(path.display()).cyan()),
        );
        Ok(())
    }

    fn catalog(&self) -> Result<()> {
        println!();
        print!("{}", render::catalog(self.session.catalog(), self.format)?);
        Ok(())
    }
}
