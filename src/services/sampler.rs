use crate::domain::results::TrajectoryPoint;
use crate::domain::trial::TrialResult;
use crate::services::uniform_source::UniformSource;

pub const DEFAULT_SAMPLE_SIZE: usize = 50;

/// Picks `min(sample_size, results.len())` distinct trials uniformly at
/// random and converts their percentages to `(year, percent)` points.
pub fn sample_trajectories<S: UniformSource + ?Sized>(
    results: &[TrialResult],
    years_per_round: f64,
    sample_size: usize,
    source: &mut S,
) -> Vec<Vec<TrajectoryPoint>> {
    sample_indices(results.len(), sample_size, source)
        .into_iter()
        .map(|index| to_trajectory(&results[index], years_per_round))
        .collect()
}

/// Partial Fisher-Yates shuffle over `0..population`.
pub fn sample_indices<S: UniformSource + ?Sized>(
    population: usize,
    sample_size: usize,
    source: &mut S,
) -> Vec<usize> {
    let amount = sample_size.min(population);
    let mut indices: Vec<usize> = (0..population).collect();
    for slot in 0..amount {
        let span = population - slot;
        let offset = ((source.next_uniform() * span as f64) as usize).min(span - 1);
        indices.swap(slot, slot + offset);
    }
    indices.truncate(amount);
    indices
}

pub fn to_trajectory(result: &TrialResult, years_per_round: f64) -> Vec<TrajectoryPoint> {
    result
        .percentages
        .iter()
        .enumerate()
        .map(|(round, percent)| TrajectoryPoint {
            year: round as f64 * years_per_round,
            percent_colonized: *percent,
        })
        .collect()
}
