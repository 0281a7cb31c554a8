//! Rendering of engine results for each output format

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{format_number, truncate_str};
use crate::cli::OutputFormat;
use crate::core::session::DashboardRun;
use crate::entities::catalog::LookupCatalog;
use crate::entities::fmea::{FmeaEntry, FmeaTable};
use crate::entities::sensitivity::SensitivitySweep;
use crate::entities::simulation::SimulationResult;

/// Width of the longest chart bar, in cells
pub const CHART_WIDTH: usize = 40;

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).into_diagnostic()?;
    json.push('\n');
    Ok(json)
}

pub(crate) fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_yml::to_string(value).into_diagnostic()
}

fn csv_records<I, R>(header: &[&str], records: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header).into_diagnostic()?;
    for record in records {
        writer.write_record(record).into_diagnostic()?;
    }
    let bytes = writer.into_inner().map_err(|e| miette::miette!("{}", e))?;
    String::from_utf8(bytes).into_diagnostic()
}

fn markdown(header: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut builder = Builder::default();
    builder.push_record(header.iter().copied());
    for row in rows {
        builder.push_record(row);
    }
    let mut out = builder.build().with(Style::markdown()).to_string();
    out.push('\n');
    out
}

fn entry_rows<'a>(entries: impl Iterator<Item = &'a FmeaEntry>) -> Vec<Vec<String>> {
    entries
        .enumerate()
        .map(|(i, e)| {
            vec![
                (i + 1).to_string(),
                e.failure_mode.clone(),
                e.effect.clone(),
                e.cause.clone(),
                e.detection_control.clone(),
            ]
        })
        .collect()
}

fn padded_entries<'a>(entries: impl Iterator<Item = &'a FmeaEntry>) -> String {
    let mut out = format!(
        "{:<4} {:<34} {:<24} {:<24} {:<26}\n",
        style("#").bold().dim(),
        style("FAILURE MODE").bold(),
        style("EFFECT").bold(),
        style("CAUSE").bold(),
        style("DETECTION CONTROL").bold()
    );
    out.push_str(&"-".repeat(115));
    out.push('\n');

    for (i, e) in entries.enumerate() {
        out.push_str(&format!(
            "{:<4} {:<34} {:<24} {:<24} {:<26}\n",
            style(i + 1).cyan(),
            truncate_str(&e.failure_mode, 33),
            truncate_str(&e.effect, 23),
            truncate_str(&e.cause, 23),
            truncate_str(&e.detection_control, 26)
        ));
    }
    out
}

/// FMEA table in the requested format
pub fn fmea_table(table: &FmeaTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(table),
        OutputFormat::Yaml => to_yaml(table),
        OutputFormat::Csv => csv_records(&FmeaEntry::HEADERS, table.iter().map(|e| e.fields())),
        OutputFormat::Md => Ok(markdown(
            &["#", "Failure Mode", "Effect", "Cause", "Detection Control"],
            entry_rows(table.iter()),
        )),
        OutputFormat::Auto | OutputFormat::Tsv => {
            if table.is_empty() {
                return Ok("No failures simulated; FMEA table is empty.\n".to_string());
            }
            Ok(padded_entries(table.iter()))
        }
    }
}

/// Human summary of one dashboard pass
pub fn run_summary(run: &DashboardRun) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} Expected failures in {} hours: {}\n",
        style("◆").cyan(),
        format_number(run.result.simulation_time),
        style(run.result.failure_count).bold()
    ));
    out.push_str(&format!(
        "   MTBF: {} h (λ = {:.2})\n",
        format_number(run.request.mtbf),
        run.request.rate()
    ));
    out
}

/// Maintenance recommendation block
pub fn maintenance(run: &DashboardRun) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", style("Maintenance Recommendations").bold()));
    out.push_str(&format!(
        "   Optimal maintenance interval: {} hours\n",
        format_number(run.maintenance.optimal_interval_hours)
    ));
    out.push_str(&format!(
        "   Estimated production impact: {} units lost\n",
        format_number(run.maintenance.estimated_production_loss)
    ));
    out
}

/// Session history in the requested format
pub fn history(history: &[SimulationResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(history),
        OutputFormat::Yaml => to_yaml(history),
        OutputFormat::Csv => csv_records(
            &["run", "simulation_time", "failure_count", "recorded_at"],
            history.iter().enumerate().map(|(i, r)| {
                vec![
                    (i + 1).to_string(),
                    r.simulation_time.to_string(),
                    r.failure_count.to_string(),
                    r.recorded_at.to_rfc3339(),
                ]
            }),
        ),
        OutputFormat::Md => Ok(markdown(
            &["Run", "Simulation Time (h)", "Failures"],
            history
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    vec![
                        (i + 1).to_string(),
                        format_number(r.simulation_time),
                        r.failure_count.to_string(),
                    ]
                })
                .collect(),
        )),
        OutputFormat::Auto | OutputFormat::Tsv => {
            if history.is_empty() {
                return Ok("No simulations in this session yet.\n".to_string());
            }
            let mut out = format!("{}\n", style("Simulation History").bold());
            for (i, r) in history.iter().enumerate() {
                out.push_str(&format!(
                    "   {:>3}. Simulation time: {} hours, failures: {}\n",
                    i + 1,
                    format_number(r.simulation_time),
                    r.failure_count
                ));
            }
            Ok(out)
        }
    }
}

/// Sensitivity sweep in the requested format
pub fn sweep(sweep: &SensitivitySweep, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(sweep),
        OutputFormat::Yaml => to_yaml(sweep),
        OutputFormat::Csv => csv_records(
            &["percent_change", "mtbf", "failure_count"],
            sweep.points.iter().map(|p| {
                vec![
                    p.percent_change.to_string(),
                    p.mtbf.to_string(),
                    p.failure_count.to_string(),
                ]
            }),
        ),
        OutputFormat::Md => Ok(markdown(
            &["Change (%)", "MTBF (h)", "Failures"],
            sweep
                .points
                .iter()
                .map(|p| {
                    vec![
                        format_number(p.percent_change),
                        format_number(p.mtbf),
                        p.failure_count.to_string(),
                    ]
                })
                .collect(),
        )),
        OutputFormat::Auto | OutputFormat::Tsv => {
            let mut out = format!(
                "{:<12} {:<12} {:<8}\n",
                style("CHANGE (%)").bold(),
                style("MTBF (h)").bold(),
                style("FAILURES").bold()
            );
            out.push_str(&"-".repeat(34));
            out.push('\n');
            for p in &sweep.points {
                out.push_str(&format!(
                    "{:<12} {:<12} {:<8}\n",
                    format_number(p.percent_change),
                    format_number(p.mtbf),
                    p.failure_count
                ));
            }
            Ok(out)
        }
    }
}

/// Horizontal bar chart of failures per MTBF offset
pub fn sweep_chart(sweep: &SensitivitySweep, width: usize) -> String {
    let max = sweep.max_failures();
    let mut out = format!("{}\n", style("MTBF Sensitivity").bold());

    for p in &sweep.points {
        let len = if max == 0 {
            0
        } else {
            ((p.failure_count as f64 / max as f64) * width as f64).round() as usize
        };
        out.push_str(&format!(
            "{:>8}% │{} {}\n",
            format_number(p.percent_change),
            style("█".repeat(len)).cyan(),
            p.failure_count
        ));
    }
    out
}

/// Lookup catalog in the requested format
///
/// YAML and JSON use the column layout accepted by `--catalog`.
pub fn catalog(catalog: &LookupCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&catalog.to_columns()),
        OutputFormat::Yaml => to_yaml(&catalog.to_columns()),
        OutputFormat::Csv => csv_records(
            &FmeaEntry::HEADERS,
            catalog.scenarios().iter().map(|s| {
                [
                    s.failure_mode.as_str(),
                    s.effect.as_str(),
                    s.cause.as_str(),
                    s.detection_control.as_str(),
                ]
            }),
        ),
        OutputFormat::Md => {
            let entries: Vec<FmeaEntry> = catalog.scenarios().iter().map(FmeaEntry::from).collect();
            Ok(markdown(
                &["#", "Failure Mode", "Effect", "Cause", "Detection Control"],
                entry_rows(entries.iter()),
            ))
        }
        OutputFormat::Auto | OutputFormat::Tsv => {
            let entries: Vec<FmeaEntry> = catalog.scenarios().iter().map(FmeaEntry::from).collect();
            Ok(padded_entries(entries.iter()))
        }
    }
}
