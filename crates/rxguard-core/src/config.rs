//! Engine configuration.
//!
//! The only tunable inputs are the two ROI policy parameters. Both default
//! when absent, so an empty document is a valid configuration:
//!
//! ```toml
//! [roi]
//! prevention_rate = 0.85
//! implementation_cost = 50000.0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use rxguard_contracts::error::{RxGuardError, RxGuardResult};

/// Share of adverse events assumed to be prevented by interaction checking.
pub const DEFAULT_PREVENTION_RATE: f64 = 0.85;

/// Assumed cost of deploying interaction checking, in currency units.
pub const DEFAULT_IMPLEMENTATION_COST: f64 = 50_000.0;

/// Business assumptions behind `estimate_roi`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiConfig {
    pub prevention_rate: f64,
    pub implementation_cost: f64,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self {
            prevention_rate: DEFAULT_PREVENTION_RATE,
            implementation_cost: DEFAULT_IMPLEMENTATION_COST,
        }
    }
}

/// Top-level engine configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub roi: RoiConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML configuration document.
    pub fn from_toml_str(s: &str) -> RxGuardResult<Self> {
        let config: EngineConfig = toml::from_str(s).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to parse engine config TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the configuration file at `path`.
    pub fn from_file(path: &Path) -> RxGuardResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| RxGuardError::ConfigError {
            reason: format!("failed to read engine config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject values that would make the ROI formula meaningless.
    pub fn validate(&self) -> RxGuardResult<()> {
        let roi = &self.roi;
        if !(roi.implementation_cost.is_finite() && roi.implementation_cost > 0.0) {
            return Err(RxGuardError::ConfigError {
                reason: format!(
                    "roi.implementation_cost must be a positive number, got {}",
                    roi.implementation_cost
                ),
            });
        }
        if !(0.0..=1.0).contains(&roi.prevention_rate) {
            return Err(RxGuardError::ConfigError {
                reason: format!(
                    "roi.prevention_rate must be between 0 and 1, got {}",
                    roi.prevention_rate
                ),
            });
        }
        Ok(())
    }
}
