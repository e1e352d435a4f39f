use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::params::{ParamsError, SimulationParams};
use crate::domain::presets::{PRESET_NAMES, preset_by_name};

#[derive(Error, Debug)]
pub enum ParamsFileError {
    #[error("failed to read parameter file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse parameter file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("unknown preset {0:?} (expected one of: {names})", names = PRESET_NAMES.join(", "))]
    UnknownPreset(String),
    #[error("a preset and a parameter file cannot be combined")]
    PresetWithFile,
    #[error(transparent)]
    Invalid(#[from] ParamsError),
}

/// Individual parameters set on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamsOverrides {
    pub total_systems: Option<u64>,
    pub ship_survival_prob: Option<f64>,
    pub colony_found_prob: Option<f64>,
    pub years_per_round: Option<f64>,
    pub max_rounds: Option<usize>,
    pub n_simulations: Option<usize>,
}

impl ParamsOverrides {
    pub fn apply(&self, mut params: SimulationParams) -> SimulationParams {
        if let Some(value) = self.total_systems {
            params.total_systems = value;
        }
        if let Some(value) = self.ship_survival_prob {
            params.ship_survival_prob = value;
        }
        if let Some(value) = self.colony_found_prob {
            params.colony_found_prob = value;
        }
        if let Some(value) = self.years_per_round {
            params.years_per_round = value;
        }
        if let Some(value) = self.max_rounds {
            params.max_rounds = value;
        }
        if let Some(value) = self.n_simulations {
            params.n_simulations = value;
        }
        params
    }
}

pub fn deserialize_params_from_yaml_str(yaml: &str) -> Result<SimulationParams, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

pub fn serialize_params_to_yaml(params: &SimulationParams) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(params)
}

pub fn load_params_from_yaml_file(path: &Path) -> Result<SimulationParams, ParamsFileError> {
    let yaml = std::fs::read_to_string(path).map_err(|source| ParamsFileError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_params_from_yaml_str(&yaml).map_err(|source| ParamsFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Preset used when neither a preset nor a parameter file is given.
pub const DEFAULT_PRESET: &str = "optimistic";

/// Starts from a preset or a parameter file, applies explicit overrides and
/// validates the result. A preset and a file together are rejected.
pub fn resolve_params(
    preset: Option<&str>,
    params_file: Option<&Path>,
    overrides: &ParamsOverrides,
) -> Result<SimulationParams, ParamsFileError> {
    let base = match (preset, params_file) {
        (Some(_), Some(_)) => return Err(ParamsFileError::PresetWithFile),
        (None, Some(path)) => load_params_from_yaml_file(path)?,
        (preset, None) => {
            let name = preset.unwrap_or(DEFAULT_PRESET);
            preset_by_name(name).ok_or_else(|| ParamsFileError::UnknownPreset(name.to_string()))?
        }
    };
    let params = overrides.apply(base);
    params.validate()?;
    Ok(params)
}

/// Accepts either a preset name or a path to a parameter file.
pub fn resolve_scenario(scenario: &str) -> Result<SimulationParams, ParamsFileError> {
    if let Some(params) = preset_by_name(scenario) {
        return Ok(params);
    }
    let path = Path::new(scenario);
    if path.exists() {
        let params = load_params_from_yaml_file(path)?;
        params.validate()?;
        return Ok(params);
    }
    Err(ParamsFileError::UnknownPreset(scenario.to_string()))
}
