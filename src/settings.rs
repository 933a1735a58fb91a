//! Computation settings with the reference constants as defaults. Settings
//! are handed to the orchestrator per computation; nothing is process-global.
//! A JSON file round-trip is provided for tooling that wants to persist a
//! non-default configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings format error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Knobs of one computation. The defaults are the fixed constants of the
/// reference system: root tolerance 0.001, 10000 quadrature intervals,
/// 1000 coarse-scan steps, no per-segment failure isolation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct QuadSettings {
    pub root_tolerance: f64,
    pub quad_intervals: usize,
    pub scan_steps: usize,
    /// Off by default: a singular point anywhere aborts the whole
    /// computation, like the reference. On, failing segments are recorded
    /// as failed and the remaining segments are still computed.
    pub isolate_segment_failures: bool,
}

impl Default for QuadSettings {
    fn default() -> Self {
        Self {
            root_tolerance: 0.001,
            quad_intervals: 10_000,
            scan_steps: 1000,
            isolate_segment_failures: false,
        }
    }
}

impl QuadSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.root_tolerance > 0.0) {
            return Err(SettingsError::Invalid(
                "root tolerance must be positive".to_string(),
            ));
        }
        if self.quad_intervals == 0 || self.quad_intervals % 2 != 0 {
            return Err(SettingsError::Invalid(
                "quadrature interval count must be positive and even".to_string(),
            ));
        }
        if self.scan_steps == 0 {
            return Err(SettingsError::Invalid(
                "scan step count must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_json_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
