use serde::Serialize;

/// Colonized-percentage thresholds tracked by every trial.
pub const MILESTONE_THRESHOLDS: [f64; 3] = [1.0, 50.0, 99.0];

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Milestones {
    pub pct1_year: Option<f64>,
    pub pct50_year: Option<f64>,
    pub pct99_year: Option<f64>,
}

impl Milestones {
    /// Records `year` for every threshold `percent` has reached that is
    /// still unset. Set milestones are never overwritten.
    pub fn record(&mut self, percent: f64, year: f64) {
        let slots = [
            &mut self.pct1_year,
            &mut self.pct50_year,
            &mut self.pct99_year,
        ];
        for (slot, threshold) in slots.into_iter().zip(MILESTONE_THRESHOLDS) {
            if slot.is_none() && percent >= threshold {
                *slot = Some(year);
            }
        }
    }

    pub fn as_array(&self) -> [Option<f64>; 3] {
        [self.pct1_year, self.pct50_year, self.pct99_year]
    }
}

/// Raw outcome of a single trial.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct TrialResult {
    pub percentages: Vec<f64>,
    pub new_colonies_per_round: Vec<u64>,
    pub milestones: Milestones,
    pub losses: u64,
}

impl TrialResult {
    /// Percentage at `round`, holding the final value once the trial ended.
    pub fn percent_at(&self, round: usize) -> Option<f64> {
        self.percentages
            .get(round)
            .or_else(|| self.percentages.last())
            .copied()
    }

    /// New colonies founded in `round`, zero once the trial ended.
    pub fn new_colonies_at(&self, round: usize) -> u64 {
        self.new_colonies_per_round.get(round).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_sets_each_milestone_once() {
        let mut milestones = Milestones::default();
        milestones.record(0.5, 0.0);
        assert_eq!(milestones, Milestones::default());

        milestones.record(60.0, 300.0);
        milestones.record(99.5, 400.0);
        milestones.record(100.0, 500.0);

        assert_eq!(milestones.pct1_year, Some(300.0));
        assert_eq!(milestones.pct50_year, Some(300.0));
        assert_eq!(milestones.pct99_year, Some(400.0));
    }

    #[test]
    fn percent_at_holds_last_value() {
        let result = TrialResult {
            percentages: vec![10.0, 40.0, 100.0],
            new_colonies_per_round: vec![3, 6, 0],
            ..TrialResult::default()
        };
        assert_eq!(result.percent_at(1), Some(40.0));
        assert_eq!(result.percent_at(7), Some(100.0));
        assert_eq!(result.new_colonies_at(1), 6);
        assert_eq!(result.new_colonies_at(7), 0);
    }

    #[test]
    fn percent_at_is_none_for_empty_trajectory() {
        assert_eq!(TrialResult::default().percent_at(0), None);
    }
}
