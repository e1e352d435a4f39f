use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Instant;

use thiserror::Error;

use crate::domain::params::{ParamsError, SimulationParams};
use crate::domain::results::AggregateResults;
use crate::domain::trial::TrialResult;
use crate::services::aggregation::{AggregationOptions, build_time_series, milestone_stats};
use crate::services::cancellation::CancellationToken;
use crate::services::sampler::{DEFAULT_SAMPLE_SIZE, sample_trajectories};
use crate::services::trial_runner::run_trial;
use crate::services::uniform_source::{RngUniformSource, UniformSource};

pub const DEFAULT_BATCH_SIZE: usize = 50;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("invalid simulation parameters: {0}")]
    InvalidParams(#[from] ParamsError),
    #[error("batch size must be greater than zero")]
    InvalidBatchSize,
    #[error("simulation cancelled after {completed} trials")]
    Cancelled { completed: usize },
}

/// Receives the completed share of trials, in percent.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(f64);

#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub batch_size: usize,
    pub sample_size: usize,
    pub aggregation: AggregationOptions,
    pub cancel: Option<CancellationToken>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            sample_size: DEFAULT_SAMPLE_SIZE,
            aggregation: AggregationOptions::default(),
            cancel: None,
        }
    }
}

/// Runs every trial of `params` with entropy-seeded randomness and returns
/// the aggregated view.
pub async fn run_batch(
    params: &SimulationParams,
    on_progress: Option<ProgressCallback<'_>>,
) -> Result<AggregateResults, SimulationError> {
    let mut source = RngUniformSource::from_entropy();
    run_batch_with_source(params, &mut source, &BatchOptions::default(), on_progress).await
}

/// Runs trials in chunks of `options.batch_size`, reporting progress and
/// yielding to the runtime after each chunk.
pub async fn run_batch_with_source<S: UniformSource + ?Sized>(
    params: &SimulationParams,
    source: &mut S,
    options: &BatchOptions,
    mut on_progress: Option<ProgressCallback<'_>>,
) -> Result<AggregateResults, SimulationError> {
    params.validate()?;
    if options.batch_size == 0 {
        return Err(SimulationError::InvalidBatchSize);
    }

    let started = Instant::now();
    let total = params.n_simulations;
    tracing::info!(
        trials = total,
        total_systems = params.total_systems,
        success_prob = params.success_prob(),
        max_rounds = params.max_rounds,
        "Starting colonization batch"
    );

    let mut results: Vec<TrialResult> = Vec::with_capacity(total);
    while results.len() < total {
        if options.cancel.as_ref().is_some_and(|token| token.is_cancelled()) {
            tracing::warn!(completed = results.len(), "Colonization batch cancelled");
            return Err(SimulationError::Cancelled {
                completed: results.len(),
            });
        }

        let chunk_end = (results.len() + options.batch_size).min(total);
        while results.len() < chunk_end {
            results.push(run_trial(params, source));
        }

        let percent = chunk_end as f64 / total as f64 * 100.0;
        tracing::debug!(completed = chunk_end, percent, "Batch finished");
        if let Some(callback) = on_progress.as_deref_mut() {
            report_progress(callback, percent);
        }

        tokio::task::yield_now().await;
    }

    let aggregate = aggregate_results(&results, params.years_per_round, options, source);
    tracing::info!(
        trials = total,
        time_series_points = aggregate.time_series.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Colonization batch finished"
    );
    Ok(aggregate)
}

/// Derives both output views from one set of trial results.
pub fn aggregate_results<S: UniformSource + ?Sized>(
    results: &[TrialResult],
    years_per_round: f64,
    options: &BatchOptions,
    source: &mut S,
) -> AggregateResults {
    AggregateResults {
        time_series: build_time_series(results, years_per_round, &options.aggregation),
        sampled_trajectories: sample_trajectories(
            results,
            years_per_round,
            options.sample_size,
            source,
        ),
        stats: milestone_stats(results),
    }
}

fn report_progress(callback: &mut dyn FnMut(f64), percent: f64) {
    if catch_unwind(AssertUnwindSafe(|| callback(percent))).is_err() {
        tracing::warn!(percent, "Progress callback panicked; continuing batch");
    }
}
