use crate::domain::params::SimulationParams;

/// Fast ships and high success rates.
pub const OPTIMISTIC: SimulationParams = SimulationParams {
    total_systems: 200_000_000_000,
    ship_survival_prob: 0.5,
    colony_found_prob: 0.5,
    years_per_round: 100.0,
    max_rounds: 10_000,
    n_simulations: 1_000,
};

/// Slow ships and low success rates.
pub const PESSIMISTIC: SimulationParams = SimulationParams {
    total_systems: 200_000_000_000,
    ship_survival_prob: 0.1,
    colony_found_prob: 0.1,
    years_per_round: 1000.0,
    max_rounds: 10_000,
    n_simulations: 1_000,
};

pub const PRESET_NAMES: [&str; 2] = ["optimistic", "pessimistic"];

pub fn preset_by_name(name: &str) -> Option<SimulationParams> {
    match name.to_ascii_lowercase().as_str() {
        "optimistic" | "default" => Some(OPTIMISTIC),
        "pessimistic" => Some(PESSIMISTIC),
        _ => None,
    }
}
