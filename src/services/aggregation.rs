use crate::domain::results::{MeanStdDev, MilestoneStats, TimeSeriesPoint};
use crate::domain::trial::TrialResult;
use crate::services::percentiles::{mean, mean_and_std_dev, value_unsorted};

/// Mean colonized percentage at which the time series stops growing.
pub const DEFAULT_STOP_AT_MEAN: f64 = 99.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationOptions {
    /// The series ends with the first point whose mean reaches this value.
    pub stop_at_mean: f64,
}

impl Default for AggregationOptions {
    fn default() -> Self {
        Self {
            stop_at_mean: DEFAULT_STOP_AT_MEAN,
        }
    }
}

/// Aligns all trials round by round and summarizes each round.
///
/// Trials that finished early hold their last percentage for every later
/// round and contribute zero new colonies.
pub fn build_time_series(
    results: &[TrialResult],
    years_per_round: f64,
    options: &AggregationOptions,
) -> Vec<TimeSeriesPoint> {
    let max_length = results
        .iter()
        .map(|result| result.percentages.len())
        .max()
        .unwrap_or(0);

    let mut series = Vec::with_capacity(max_length);
    let mut percentages = Vec::with_capacity(results.len());
    let mut new_colonies = Vec::with_capacity(results.len());

    for round in 0..max_length {
        percentages.clear();
        new_colonies.clear();
        for result in results {
            if let Some(percent) = result.percent_at(round) {
                percentages.push(percent);
            }
            new_colonies.push(result.new_colonies_at(round) as f64);
        }

        let point = TimeSeriesPoint {
            year: round as f64 * years_per_round,
            mean: mean(&percentages),
            p10: value_unsorted(&mut percentages, 10.0),
            p90: value_unsorted(&mut percentages, 90.0),
            mean_new_colonies: mean(&new_colonies),
        };
        series.push(point);

        if point.mean >= options.stop_at_mean {
            break;
        }
    }

    series
}

/// Milestone statistics over the trials that reached each milestone, and
/// loss statistics over every trial.
pub fn milestone_stats(results: &[TrialResult]) -> MilestoneStats {
    let reached = |pick: fn(&TrialResult) -> Option<f64>| -> MeanStdDev {
        let years: Vec<f64> = results.iter().filter_map(pick).collect();
        mean_and_std_dev(&years)
    };
    let losses: Vec<f64> = results.iter().map(|r| r.losses as f64).collect();

    MilestoneStats {
        time_to_1_pct: reached(|r| r.milestones.pct1_year),
        time_to_50_pct: reached(|r| r.milestones.pct50_year),
        time_to_99_pct: reached(|r| r.milestones.pct99_year),
        total_losses: mean_and_std_dev(&losses),
    }
}
