use colonize::domain::params::SimulationParams;
use colonize::domain::results::{AggregateResults, MeanStdDev, MilestoneStats};
use colonize::services::magnitude::{format_count, format_years};

pub fn format_simulation_report(params: &SimulationParams, results: &AggregateResults) -> String {
    let final_mean = results.time_series.last().map(|p| p.mean).unwrap_or(0.0);

    let mut lines = Vec::new();
    lines.push("Colonization Report".to_string());
    lines.push(format!("Total systems: {}", format_count(params.total_systems as f64)));
    lines.push(format!(
        "Success probability: {:.4} ({} x {})",
        params.success_prob(),
        params.ship_survival_prob,
        params.colony_found_prob
    ));
    lines.push(format!("Years per round: {}", params.years_per_round));
    lines.push(format!("Trials: {}", params.n_simulations));
    lines.push(format!("Final mean colonized: {final_mean:.4}%"));
    lines.push(String::new());
    lines.push("Milestones (mean ± std dev):".to_string());
    lines.push("Statistic | Value".to_string());
    lines.push("----------|------".to_string());
    for row in stat_rows(&results.stats) {
        lines.push(format!("{} | {}", row.label, row.render()));
    }

    lines.join("\n")
}

pub fn format_comparison(
    first_name: &str,
    first: &MilestoneStats,
    second_name: &str,
    second: &MilestoneStats,
) -> String {
    let mut lines = Vec::new();
    lines.push("Scenario Comparison (mean ± std dev)".to_string());
    lines.push(format!("Statistic | {first_name} | {second_name}"));
    lines.push("----------|------|------".to_string());
    for (left, right) in stat_rows(first).into_iter().zip(stat_rows(second)) {
        lines.push(format!("{} | {} | {}", left.label, left.render(), right.render()));
    }
    lines.join("\n")
}

struct StatRow {
    label: &'static str,
    value: MeanStdDev,
    unit: &'static str,
    format: fn(f64) -> String,
}

impl StatRow {
    fn render(&self) -> String {
        let format = self.format;
        format!("{}{} ± {}", format(self.value.mean), self.unit, format(self.value.std_dev))
    }
}

fn stat_rows(stats: &MilestoneStats) -> [StatRow; 4] {
    let years = |label, value| StatRow {
        label,
        value,
        unit: " yrs",
        format: format_years,
    };
    [
        years("Time to 1%", stats.time_to_1_pct),
        years("Time to 50%", stats.time_to_50_pct),
        years("Time to 99%", stats.time_to_99_pct),
        StatRow {
            label: "Ships lost",
            value: stats.total_losses,
            unit: "",
            format: format_count,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use colonize::domain::presets::{OPTIMISTIC, PESSIMISTIC};
    use colonize::domain::results::TimeSeriesPoint;

    fn build_stats() -> MilestoneStats {
        MilestoneStats {
            time_to_1_pct: MeanStdDev {
                mean: 3_200.0,
                std_dev: 150.0,
            },
            time_to_50_pct: MeanStdDev {
                mean: 3_900.0,
                std_dev: 150.0,
            },
            time_to_99_pct: MeanStdDev {
                mean: 4_500.0,
                std_dev: 200.0,
            },
            total_losses: MeanStdDev {
                mean: 6.1e11,
                std_dev: 2.5e6,
            },
        }
    }

    #[test]
    fn format_simulation_report_includes_header_and_table() {
        let results = AggregateResults {
            time_series: vec![TimeSeriesPoint {
                year: 4_000.0,
                mean: 99.995,
                p10: 99.99,
                p90: 100.0,
                mean_new_colonies: 12.0,
            }],
            sampled_trajectories: Vec::new(),
            stats: build_stats(),
        };
        let output = format_simulation_report(&OPTIMISTIC, &results);

        assert!(output.contains("Colonization Report"));
        assert!(output.contains("Total systems: 200.0B"));
        assert!(output.contains("Success probability: 0.2500 (0.5 x 0.5)"));
        assert!(output.contains("Trials: 1000"));
        assert!(output.contains("Final mean colonized: 99.9950%"));
        assert!(output.contains("Time to 1% | 3.2K yrs ± 150"));
        assert!(output.contains("Time to 99% | 4.5K yrs ± 200"));
        assert!(output.contains("Ships lost | 610.0B ± 2.5M"));
    }

    #[test]
    fn format_simulation_report_handles_empty_series() {
        let output = format_simulation_report(&PESSIMISTIC, &AggregateResults::default());
        assert!(output.contains("Final mean colonized: 0.0000%"));
        assert!(output.contains("Time to 50% | 0 yrs ± 0"));
    }

    #[test]
    fn format_comparison_lists_both_scenarios() {
        let output = format_comparison("optimistic", &build_stats(), "pessimistic", &MilestoneStats::default());

        assert!(output.contains("Statistic | optimistic | pessimistic"));
        assert!(output.contains("Time to 50% | 3.9K yrs ± 150 | 0 yrs ± 0"));
        assert!(output.contains("Ships lost | 610.0B ± 2.5M | 0 ± 0"));
    }
}
