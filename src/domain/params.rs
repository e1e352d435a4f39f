use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("{field} must be a probability in [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },
    #[error("{field} must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("years_per_round must be a finite number, got {0}")]
    NonFiniteYears(f64),
}

/// Inputs of one simulation run. Field names are part of the public
/// contract and serialize exactly as written.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimulationParams {
    pub total_systems: u64,
    pub ship_survival_prob: f64,
    pub colony_found_prob: f64,
    pub years_per_round: f64,
    pub max_rounds: usize,
    pub n_simulations: usize,
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        check_probability("ship_survival_prob", self.ship_survival_prob)?;
        check_probability("colony_found_prob", self.colony_found_prob)?;
        if self.total_systems == 0 {
            return Err(ParamsError::NonPositive {
                field: "total_systems",
            });
        }
        if !self.years_per_round.is_finite() {
            return Err(ParamsError::NonFiniteYears(self.years_per_round));
        }
        if self.years_per_round <= 0.0 {
            return Err(ParamsError::NonPositive {
                field: "years_per_round",
            });
        }
        if self.max_rounds == 0 {
            return Err(ParamsError::NonPositive {
                field: "max_rounds",
            });
        }
        if self.n_simulations == 0 {
            return Err(ParamsError::NonPositive {
                field: "n_simulations",
            });
        }
        Ok(())
    }

    /// Probability that a single expansion attempt founds a new colony.
    pub fn success_prob(&self) -> f64 {
        self.ship_survival_prob * self.colony_found_prob
    }

    pub fn year_of_round(&self, round: usize) -> f64 {
        round as f64 * self.years_per_round
    }
}

fn check_probability(field: &'static str, value: f64) -> Result<(), ParamsError> {
    // NaN fails the range check as well.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParamsError::InvalidProbability { field, value })
    }
}
