//! Run configuration for muon-fluorine simulations, loaded from TOML.
//!
//! ```toml
//! distance = 1.17e-10
//! partner_weight = 0.125 # optional F-F coupling
//! compare = false
//!
//! [time]
//! start = 0.0
//! stop = 1e-5
//! step = 1e-8
//! ```

use std::path::Path;
use ndarray as nd;
use serde::Deserialize;
use thiserror::Error;
use crate::{
    consts::D_MU_F,
    hamiltonian::HBuilderDipolar,
    polarisation::time_grid,
};

/// Returned when a run configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid TOML or has unknown or mistyped fields.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Sampling times for the polarisation, over `[start, stop)`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeGrid {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for TimeGrid {
    fn default() -> Self { Self { start: 0.0, stop: 1e-5, step: 1e-8 } }
}

impl TimeGrid {
    /// Largest number of samples a configured grid may contain.
    pub const MAX_SAMPLES: f64 = 1e7;

    /// Generate the sampling times.
    pub fn times(&self) -> nd::Array1<f64> {
        time_grid(self.start, self.stop, self.step)
    }
}

/// Parameters for a muon-fluorine run.
///
/// With `compare` set, a second model including the fluorine-fluorine
/// coupling is built alongside the baseline; `partner_weight` then defaults
/// to `1/8`.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Muon-fluorine distance [m].
    pub distance: f64,
    /// Relative weight of the fluorine-fluorine coupling.
    pub partner_weight: Option<f64>,
    /// Also build a model with the fluorine-fluorine coupling.
    pub compare: bool,
    /// Sampling times for the polarisation.
    pub time: TimeGrid,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            distance: D_MU_F,
            partner_weight: None,
            compare: false,
            time: TimeGrid::default(),
        }
    }
}

impl SimConfig {
    /// Weight of the fluorine-fluorine coupling in the comparison model when
    /// `partner_weight` is unset.
    pub const DEFAULT_PARTNER_WEIGHT: f64 = 0.125;

    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn load<P>(path: P) -> Result<Self, ConfigError>
    where P: AsRef<Path>
    {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    /// Check that the distance and weight are positive and finite and that
    /// the time grid is non-empty with at most [`TimeGrid::MAX_SAMPLES`]
    /// samples.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return invalid("distance must be positive and finite");
        }
        if let Some(w) = self.partner_weight {
            if !(w.is_finite() && w > 0.0) {
                return invalid("partner_weight must be positive and finite");
            }
        }
        let TimeGrid { start, stop, step } = self.time;
        if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
            return invalid("time grid must be finite");
        }
        if step <= 0.0 { return invalid("time.step must be positive"); }
        if stop <= start { return invalid("time.stop must exceed time.start"); }
        if !((stop - start) / step <= TimeGrid::MAX_SAMPLES) {
            return invalid("time grid has too many samples");
        }
        Ok(())
    }

    /// Builder for the baseline model. The fluorine-fluorine coupling is
    /// included only if `partner_weight` is set and `compare` is not.
    pub fn baseline_builder(&self) -> HBuilderDipolar {
        let weight = if self.compare { None } else { self.partner_weight };
        HBuilderDipolar::muon_fluorine(self.distance, weight)
    }

    /// Builder for the comparison model, if `compare` is set.
    pub fn comparison_builder(&self) -> Option<HBuilderDipolar> {
        self.compare.then(|| {
            let weight
                = self.partner_weight.unwrap_or(Self::DEFAULT_PARTNER_WEIGHT);
            HBuilderDipolar::muon_fluorine(self.distance, Some(weight))
        })
    }

    /// All builders described by `self`, baseline first.
    pub fn builders(&self) -> Vec<HBuilderDipolar> {
        std::iter::once(self.baseline_builder())
            .chain(self.comparison_builder())
            .collect()
    }
}
