use std::f64::consts::PI;

use crate::domain::params::SimulationParams;
use crate::domain::trial::TrialResult;
use crate::services::uniform_source::UniformSource;

/// Below this many attempts every attempt is drawn individually; at or
/// above it the binomial is replaced by its normal approximation.
pub const NORMAL_APPROXIMATION_THRESHOLD: u64 = 1000;

/// Runs one trial from a single colonized system until every system is
/// colonized or `max_rounds` rounds have been recorded.
pub fn run_trial<S: UniformSource + ?Sized>(params: &SimulationParams, source: &mut S) -> TrialResult {
    let total = params.total_systems;
    let success_prob = params.success_prob();
    let mut result = TrialResult::default();
    let mut colonized: u64 = 1;

    for round in 0..params.max_rounds {
        let percent = colonized as f64 / total as f64 * 100.0;
        result.percentages.push(percent);
        result.milestones.record(percent, params.year_of_round(round));

        if colonized >= total {
            result.new_colonies_per_round.push(0);
            break;
        }

        let remaining = total - colonized;
        let attempts = colonized.min(remaining);
        let new_colonies = sample_successes(attempts, success_prob, source).min(remaining);

        result.losses += attempts - new_colonies;
        colonized += new_colonies;
        result.new_colonies_per_round.push(new_colonies);

        if percent >= 100.0 {
            break;
        }
    }

    result
}

/// Number of successes out of `attempts` independent tries at
/// `success_prob`, always within `[0, attempts]`.
pub fn sample_successes<S: UniformSource + ?Sized>(
    attempts: u64,
    success_prob: f64,
    source: &mut S,
) -> u64 {
    if attempts < NORMAL_APPROXIMATION_THRESHOLD {
        return (0..attempts)
            .filter(|_| source.next_uniform() < success_prob)
            .count() as u64;
    }

    let n = attempts as f64;
    let mean = n * success_prob;
    let std_dev = (n * success_prob * (1.0 - success_prob)).max(0.0).sqrt();
    let sample = (mean + standard_normal(source) * std_dev).round();
    // `as` saturates, so negative samples land on zero.
    (sample.max(0.0) as u64).min(attempts)
}

/// One standard normal draw via the Box-Muller transform.
pub fn standard_normal<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let u1 = source.next_uniform().max(f64::MIN_POSITIVE);
    let u2 = source.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}
