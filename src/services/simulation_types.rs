use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::domain::params::SimulationParams;
use crate::domain::results::AggregateResults;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to serialize report as json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize, Debug, Clone)]
pub struct SimulationReport {
    pub generated_at: String,
    pub seed: Option<u64>,
    pub params: SimulationParams,
    pub results: AggregateResults,
}

impl SimulationReport {
    pub fn new(params: SimulationParams, seed: Option<u64>, results: AggregateResults) -> Self {
        Self {
            generated_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
            seed,
            params,
            results,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

pub fn serialize_report(report: &SimulationReport, format: OutputFormat) -> Result<String, ReportError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}
