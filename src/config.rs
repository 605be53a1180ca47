use crate::clusterer::{ClusterError, ProximityClusterer, DEFAULT_RADIUS_METERS};
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATABASE_PATH: &str = "spotwatch.db";
pub const DEFAULT_LOG_FILTER: &str = "spotwatch=info";

/// Runtime settings, read from a JSON file. Missing keys take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location of the local document store
    pub database_path: PathBuf,
    pub cluster_radius_meters: f64,
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            cluster_radius_meters: DEFAULT_RADIUS_METERS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cluster_radius_meters.is_finite() && self.cluster_radius_meters > 0.0,
            "cluster_radius_meters must be positive, got {}",
            self.cluster_radius_meters
        );
        ensure!(
            !self.database_path.as_os_str().is_empty(),
            "database_path must not be empty"
        );
        Ok(())
    }

    pub fn clusterer(&self) -> Result<ProximityClusterer, ClusterError> {
        ProximityClusterer::new(self.cluster_radius_meters)
    }
}
