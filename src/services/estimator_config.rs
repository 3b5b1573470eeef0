use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::scenario::ScenarioId;

pub const LOG_ENV_VAR: &str = "VISA_ESTIMATES_LOG";

const MIN_CHART_SIZE: (u32, u32) = (200, 150);
const MAX_CHART_SIDE: u32 = 10_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("chart size must be between 200x150 and 10000x10000, got {width}x{height}")]
    ChartSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub log_level: String,
    pub default_scenario: ScenarioId,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_scenario: ScenarioId::Intermediate,
            chart_width: 1000,
            chart_height: 480,
        }
    }
}

impl EstimatorConfig {
    /// Loads the config file when one is given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Option<EstimatorConfig> = serde_yaml::from_str(input)?;
        let config = config.unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (min_width, min_height) = MIN_CHART_SIZE;
        if self.chart_width < min_width
            || self.chart_height < min_height
            || self.chart_width > MAX_CHART_SIDE
            || self.chart_height > MAX_CHART_SIDE
        {
            return Err(ConfigError::ChartSize {
                width: self.chart_width,
                height: self.chart_height,
            });
        }
        Ok(())
    }
}
