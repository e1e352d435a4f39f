use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub year: f64,
    pub mean: f64,
    pub p10: f64,
    pub p90: f64,
    pub mean_new_colonies: f64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanStdDev {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct MilestoneStats {
    pub time_to_1_pct: MeanStdDev,
    pub time_to_50_pct: MeanStdDev,
    pub time_to_99_pct: MeanStdDev,
    pub total_losses: MeanStdDev,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    pub year: f64,
    pub percent_colonized: f64,
}

/// Everything a consumer needs to render one simulation run.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct AggregateResults {
    pub time_series: Vec<TimeSeriesPoint>,
    pub sampled_trajectories: Vec<Vec<TrajectoryPoint>>,
    pub stats: MilestoneStats,
}

/// Output of the simplified mean-only entry point.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct MeanSeriesPoint {
    pub year: f64,
    pub percent_colonized: f64,
}
