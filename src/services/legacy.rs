use crate::domain::params::SimulationParams;
use crate::domain::results::MeanSeriesPoint;
use crate::domain::trial::TrialResult;
use crate::services::aggregation::DEFAULT_STOP_AT_MEAN;
use crate::services::batch::SimulationError;
use crate::services::percentiles::mean;
use crate::services::trial_runner::run_trial;
use crate::services::uniform_source::{RngUniformSource, UniformSource};

/// Mean colonized percentage per round, without percentiles, milestones or
/// samples. Runs synchronously.
#[deprecated(note = "use `services::batch::run_batch`, which also returns percentile bands, milestones and sampled trajectories")]
pub fn run_mean_series(params: &SimulationParams) -> Result<Vec<MeanSeriesPoint>, SimulationError> {
    let mut source = RngUniformSource::from_entropy();
    simulate_mean_series(params, &mut source)
}

#[deprecated(note = "use `services::batch::run_batch_with_source`")]
pub fn run_mean_series_with_source<S: UniformSource + ?Sized>(
    params: &SimulationParams,
    source: &mut S,
) -> Result<Vec<MeanSeriesPoint>, SimulationError> {
    simulate_mean_series(params, source)
}

fn simulate_mean_series<S: UniformSource + ?Sized>(
    params: &SimulationParams,
    source: &mut S,
) -> Result<Vec<MeanSeriesPoint>, SimulationError> {
    params.validate()?;
    let results: Vec<TrialResult> = (0..params.n_simulations)
        .map(|_| run_trial(params, source))
        .collect();
    Ok(mean_series(&results, params.years_per_round))
}

fn mean_series(results: &[TrialResult], years_per_round: f64) -> Vec<MeanSeriesPoint> {
    let max_length = results.iter().map(|r| r.percentages.len()).max().unwrap_or(0);
    let mut series = Vec::with_capacity(max_length);
    for round in 0..max_length {
        let values: Vec<f64> = results.iter().filter_map(|r| r.percent_at(round)).collect();
        let percent_colonized = mean(&values);
        series.push(MeanSeriesPoint {
            year: round as f64 * years_per_round,
            percent_colonized,
        });
        if percent_colonized >= DEFAULT_STOP_AT_MEAN {
            break;
        }
    }
    series
}
