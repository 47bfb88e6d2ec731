use crate::strat::Composition;
use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Filter out logs
pub const LOG_FILTER: &[&str] = &[];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LevelFilter,
    // Also write to this file if set
    pub file: Option<PathBuf>,
    // Module paths to silence
    pub filter: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            file: None,
            filter: LOG_FILTER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub max_worker_count: usize,
    pub frame_skip: u32,
    // Used instead of `frame_skip` while supply blocked
    pub frame_skip_supply_blocked: u32,
    // In game loops
    pub alert_duration: u32,
    // Army food at which idle units stop waiting at the staging location and go looking
    pub army_wait_supply: i32,
    pub composition: Composition,
    pub seed: u64,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_worker_count: 80,
            frame_skip: 4,
            frame_skip_supply_blocked: 6,
            alert_duration: 400,
            army_wait_supply: 100,
            composition: Composition::Ground,
            seed: 1,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// YAML, or JSON if the file ends in `.json`. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        if path.extension().map_or(false, |ext| ext == "json") {
            serde_json::from_str(&contents)
                .with_context(|| format!("Invalid config {}", path.display()))
        } else {
            Self::from_yaml(&contents).with_context(|| format!("Invalid config {}", path.display()))
        }
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}
