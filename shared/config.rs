//! Run constants for the sampling demo, with optional TOML overrides.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_SEED: u64 = 282629734;
pub const DEFAULT_SAMPLE_SIZE: usize = 1000;
pub const DEFAULT_SAMPLE_DF: f64 = 10.0;
pub const DEFAULT_REPORTED_DF: f64 = 100.0;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read or write config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML config file: {0}")]
    TomlParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config to TOML format: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Parameters of one sampling run. Missing TOML keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub seed: u64,
    pub sample_size: usize,
    /// Degrees of freedom of the sampled distribution.
    pub sample_df: f64,
    /// Degrees of freedom whose theoretical moments are computed.
    pub moment_dfs: Vec<f64>,
    /// Which entry of `moment_dfs` is printed.
    pub reported_df: f64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            sample_size: DEFAULT_SAMPLE_SIZE,
            sample_df: DEFAULT_SAMPLE_DF,
            moment_dfs: vec![DEFAULT_SAMPLE_DF, DEFAULT_REPORTED_DF],
            reported_df: DEFAULT_REPORTED_DF,
        }
    }
}

impl RunConfig {
    /// Loads a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml_string = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&toml_string)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the config in a human-readable TOML format.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut file = BufWriter::new(fs::File::create(path)?);
        file.write_all(toml_string.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::Invalid("sample_size must be at least 1".into()));
        }
        let positive = |df: f64| df.is_finite() && df > 0.0;
        if !positive(self.sample_df) {
            return Err(ConfigError::Invalid(format!(
                "sample_df must be finite and positive, got {}",
                self.sample_df
            )));
        }
        if let Some(&df) = self.moment_dfs.iter().find(|&&df| !positive(df)) {
            return Err(ConfigError::Invalid(format!(
                "moment_dfs entries must be finite and positive, got {df}"
            )));
        }
        if !self.moment_dfs.contains(&self.reported_df) {
            return Err(ConfigError::Invalid(format!(
                "reported_df {} is not listed in moment_dfs {:?}",
                self.reported_df, self.moment_dfs
            )));
        }
        Ok(())
    }
}
