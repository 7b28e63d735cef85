use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// The electron-volt in joules.
pub const ELECTRON_VOLT: f64 = 1.602176487e-19;

/// Planck's constant in joule-seconds.
pub const PLANCK_CONSTANT: f64 = 6.62607004e-34;

/// The speed of light in metres per second.
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8;

/// The Rydberg constant for hydrogen in reciprocal metres.
pub const RYDBERG_CONSTANT_HYDROGEN: f64 = 1.09677583e7;

/// Process-wide physical constants consumed by the transition engine.
///
/// Defaults to the standard values above; individual values can be overridden
/// from a TOML file, in which case any field left out keeps its default.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalConstants {
    /// The electron-volt in joules.
    pub electron_volt: f64,
    /// Planck's constant in joule-seconds.
    pub planck_constant: f64,
    /// The speed of light in metres per second.
    pub speed_of_light: f64,
    /// The Rydberg constant for hydrogen in reciprocal metres.
    pub rydberg_constant: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            electron_volt: ELECTRON_VOLT,
            planck_constant: PLANCK_CONSTANT,
            speed_of_light: SPEED_OF_LIGHT,
            rydberg_constant: RYDBERG_CONSTANT_HYDROGEN,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConstantsLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

impl PhysicalConstants {
    /// Loads constants from a TOML file, filling omitted fields with defaults.
    pub fn load(path: &Path) -> Result<Self, ConstantsLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConstantsLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConstantsLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}
