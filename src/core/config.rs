//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::entities::sensitivity::DEFAULT_RANGE_PERCENT;
use crate::entities::simulation::{DEFAULT_MTBF_HOURS, DEFAULT_SIMULATION_HOURS};

/// Directory holding a workspace configuration
pub const WORKSPACE_DIR: &str = ".grt";

/// GRT configuration with layered hierarchy
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default mean time between failures (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtbf: Option<f64>,

    /// Default simulation time (hours)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_time: Option<f64>,

    /// Default sensitivity range (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensitivity_range: Option<f64>,

    /// Fixed random seed for reproducible runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Path to a YAML lookup catalog replacing the built-in one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (resolved by the accessors)

        // 2. Global user config (~/.config/grt/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Workspace config (.grt/config.yaml)
        if let Some(workspace_path) = Self::workspace_config_path() {
            if let Some(workspace) = Self::read_file(&workspace_path) {
                config.merge(workspace);
            }
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Read one config file; unreadable or malformed files are ignored
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    /// Build the environment layer from a variable lookup
    pub fn from_env(var: impl Fn(&str) -> Option<String>) -> Config {
        let parse_f64 = |key: &str| var(key).and_then(|v| v.trim().parse::<f64>().ok());

        Config {
            mtbf: parse_f64("GRT_MTBF"),
            simulation_time: parse_f64("GRT_SIMULATION_TIME"),
            sensitivity_range: parse_f64("GRT_SENSITIVITY_RANGE"),
            seed: var("GRT_SEED").and_then(|v| v.trim().parse::<u64>().ok()),
            catalog: var("GRT_CATALOG").map(PathBuf::from),
            default_format: var("GRT_FORMAT"),
        }
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "grt")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Find `.grt/config.yaml` by walking up from the current directory
    pub fn workspace_config_path() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_workspace_config(&current)
    }

    /// Find `.grt/config.yaml` by walking up from the given directory
    pub fn find_workspace_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(WORKSPACE_DIR).join("config.yaml");
            if candidate.is_file() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.mtbf.is_some() {
            self.mtbf = other.mtbf;
        }
        if other.simulation_time.is_some() {
            self.simulation_time = other.simulation_time;
        }
        if other.sensitivity_range.is_some() {
            self.sensitivity_range = other.sensitivity_range;
        }
        if other.seed.is_some() {
            self.seed = other.seed;
        }
        if other.catalog.is_some() {
            self.catalog = other.catalog;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    pub fn mtbf(&self) -> f64 {
        self.mtbf.unwrap_or(DEFAULT_MTBF_HOURS)
    }

    pub fn simulation_time(&self) -> f64 {
        self.simulation_time.unwrap_or(DEFAULT_SIMULATION_HOURS)
    }

    pub fn sensitivity_range(&self) -> f64 {
        self.sensitivity_range.unwrap_or(DEFAULT_RANGE_PERCENT)
    }
}
