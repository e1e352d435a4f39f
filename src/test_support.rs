use crate::domain::params::SimulationParams;
use crate::domain::trial::{Milestones, TrialResult};
use crate::services::uniform_source::UniformSource;

// A UniformSource that always returns the same value
pub struct ConstantSource(pub f64);

impl UniformSource for ConstantSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

// A UniformSource that cycles through a fixed list of values
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
        }
    }
}

impl UniformSource for SequenceSource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

pub fn build_params(total_systems: u64, success_prob: f64, n_simulations: usize) -> SimulationParams {
    SimulationParams {
        total_systems,
        ship_survival_prob: success_prob,
        colony_found_prob: 1.0,
        years_per_round: 1.0,
        max_rounds: 20,
        n_simulations,
    }
}

pub fn build_trial(percentages: &[f64], new_colonies: &[u64], losses: u64) -> TrialResult {
    TrialResult {
        percentages: percentages.to_vec(),
        new_colonies_per_round: new_colonies.to_vec(),
        milestones: Milestones::default(),
        losses,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
