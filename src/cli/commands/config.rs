//! `grt config` command - Configuration management
//!
//! Provides commands to view and modify GRT configuration.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::cli::GlobalOpts;
use crate::core::config::WORKSPACE_DIR;
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration values
    Show(ShowArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset (remove) a configuration value
    Unset(UnsetArgs),

    /// Show paths to configuration files
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Configuration key (e.g., mtbf, seed)
    pub key: String,

    /// Value to set
    pub value: String,

    /// Set in global (user) config instead of workspace config
    #[arg(long, short = 'g')]
    pub global: bool,
}

#[derive(clap::Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key to remove
    pub key: String,

    /// Remove from global (user) config instead of workspace config
    #[arg(long, short = 'g')]
    pub global: bool,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    ("mtbf", "Default mean time between failures, hours"),
    ("simulation_time", "Default simulation time, hours"),
    ("sensitivity_range", "Default sensitivity range, percent (0-100)"),
    ("seed", "Fixed random seed for reproducible runs"),
    ("catalog", "Path to a YAML FMEA lookup catalog"),
    (
        "default_format",
        "Default output format (tsv, md, json, yaml, csv)",
    ),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, _global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args),
        ConfigCommands::Set(args) => run_set(args),
        ConfigCommands::Unset(args) => run_unset(args),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs) -> Result<()> {
    let config = Config::load();

    // If a specific key is requested, show just that value
    if let Some(key) = &args.key {
        ensure_valid_key(key)?;
        return match get_config_value(&config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();
    for (key, _) in VALID_KEYS {
        print_config_value(key, get_config_value(&config, key).as_deref());
    }

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Command-line flags (--mtbf, --time, --range, --seed, --catalog)");
    println!("  2. Environment variables (GRT_MTBF, GRT_SIMULATION_TIME, GRT_SENSITIVITY_RANGE, GRT_SEED, GRT_CATALOG, GRT_FORMAT)");
    println!("  3. Workspace config ({}/config.yaml)", WORKSPACE_DIR);
    println!("  4. Global config (~/.config/grt/config.yaml)");

    Ok(())
}

fn run_set(args: SetArgs) -> Result<()> {
    ensure_valid_key(&args.key)?;
    let config_path = if args.global {
        get_global_config_path()?
    } else {
        get_workspace_config_path()?
    };

    let mut config_map = read_mapping(&config_path)?;

    // Store numbers as numbers so the typed config can read them back
    let value: serde_yml::Value = serde_yml::from_str(&args.value)
        .unwrap_or_else(|_| serde_yml::Value::String(args.value.clone()));
    let value = match (args.key.as_str(), value) {
        ("catalog" | "default_format", v) if !v.is_string() => {
            serde_yml::Value::String(args.value.clone())
        }
        (_, v) => v,
    };
    config_map.insert(serde_yml::Value::String(args.key.clone()), value);

    // Reject values the typed config cannot read
    let check = serde_yml::Value::Mapping(config_map.clone());
    serde_yml::from_value::<Config>(check).map_err(|e| {
        miette::miette!("Invalid value '{}' for {}: {}", args.value, args.key, e)
    })?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent).into_diagnostic()?;
    }
    let yaml = serde_yml::to_string(&config_map).into_diagnostic()?;
    fs::write(&config_path, yaml).into_diagnostic()?;

    let scope = if args.global { "global" } else { "workspace" };
    println!(
        "{} Set {} {} {} in {} config",
        style("✓").green(),
        style(&args.key).cyan(),
        style("→").dim(),
        style(&args.value).yellow(),
        scope
    );

    Ok(())
}

fn run_unset(args: UnsetArgs) -> Result<()> {
    let config_path = if args.global {
        get_global_config_path()?
    } else {
        get_workspace_config_path()?
    };

    if !config_path.exists() {
        return Err(miette::miette!(
            "Config file does not exist: {}",
            config_path.display()
        ));
    }

    let mut config_map = read_mapping(&config_path)?;
    let key = serde_yml::Value::String(args.key.clone());
    if config_map.remove(&key).is_none() {
        return Err(miette::miette!("Key '{}' not found in config", args.key));
    }

    let yaml = serde_yml::to_string(&config_map).into_diagnostic()?;
    fs::write(&config_path, yaml).into_diagnostic()?;

    let scope = if args.global { "global" } else { "workspace" };
    println!(
        "{} Removed {} from {} config",
        style("✓").green(),
        style(&args.key).cyan(),
        scope
    );

    Ok(())
}

fn run_path() -> Result<()> {
    let global_path = get_global_config_path()?;
    let workspace_path = get_workspace_config_path()?;

    println!("{}", style("Configuration file paths:").bold());
    println!();
    for (label, path) in [("Global:", global_path), ("Workspace:", workspace_path)] {
        println!("  {} {}", style(label).cyan(), path.display());
        if path.exists() {
            println!("     {}", style("(exists)").green());
        } else {
            println!("     {}", style("(not created)").dim());
        }
    }

    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();

    for (key, description) in VALID_KEYS {
        println!("  {:<20} {}", style(key).cyan(), style(description).dim());
    }

    println!();
    println!(
        "{}",
        style("Use 'grt config set <key> <value>' to set a value.").dim()
    );

    Ok(())
}

// Helper functions

fn ensure_valid_key(key: &str) -> Result<()> {
    if VALID_KEYS.iter().any(|(k, _)| *k == key) {
        Ok(())
    } else {
        Err(miette::miette!(
            help = "Run 'grt config keys' to list valid keys",
            "Unknown configuration key '{}'",
            key
        ))
    }
}

fn read_mapping(path: &PathBuf) -> Result<serde_yml::Mapping> {
    if !path.exists() {
        return Ok(serde_yml::Mapping::new());
    }
    let content = fs::read_to_string(path).into_diagnostic()?;
    if content.trim().is_empty() {
        return Ok(serde_yml::Mapping::new());
    }
    match serde_yml::from_str::<serde_yml::Value>(&content) {
        Ok(serde_yml::Value::Mapping(map)) => Ok(map),
        // Null document
        Ok(serde_yml::Value::Null) => Ok(serde_yml::Mapping::new()),
        Ok(_) => Err(miette::miette!(
            "Config file is not a mapping: {}",
            path.display()
        )),
        Err(e) => Err(miette::miette!(
            "Config file {} is not valid YAML: {}",
            path.display(),
            e
        )),
    }
}

fn get_global_config_path() -> Result<PathBuf> {
    Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine global config directory"))
}

/// Existing workspace config, or `.grt/config.yaml` in the current directory
fn get_workspace_config_path() -> Result<PathBuf> {
    if let Some(path) = Config::workspace_config_path() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().into_diagnostic()?;
    Ok(cwd.join(WORKSPACE_DIR).join("config.yaml"))
}

fn get_config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "mtbf" => config.mtbf.map(|v| v.to_string()),
        "simulation_time" => config.simulation_time.map(|v| v.to_string()),
        "sensitivity_range" => config.sensitivity_range.map(|v| v.to_string()),
        "seed" => config.seed.map(|v| v.to_string()),
        "catalog" => config.catalog.as_ref().map(|p| p.display().to_string()),
        "default_format" => config.default_format.clone(),
        _ => None,
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
