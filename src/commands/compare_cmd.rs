use std::process::ExitCode;

use colonize::services::batch::{BatchOptions, run_batch_with_source};
use colonize::services::charts::{ComparisonChartPaths, ScenarioSeries, write_comparison_charts_png};
use colonize::services::params_yaml::resolve_scenario;
use colonize::services::uniform_source::RngUniformSource;

use crate::commands::base_commands::Commands;
use crate::commands::interrupt::InterruptHandler;
use crate::commands::report_format::format_comparison;

pub async fn compare_command(cmd: Commands) -> ExitCode {
    let Commands::Compare {
        first,
        second,
        n_simulations,
        seed,
        charts,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let mut scenarios = Vec::with_capacity(2);
    for name in [first, second] {
        match resolve_scenario(&name) {
            Ok(mut params) => {
                if let Some(n) = n_simulations {
                    params.n_simulations = n;
                }
                scenarios.push((name, params));
            }
            Err(e) => {
                eprintln!("Failed to load scenario {name}: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let interrupt = InterruptHandler::install();
    let options = BatchOptions {
        cancel: Some(interrupt.token()),
        ..BatchOptions::default()
    };
    let mut source = RngUniformSource::from_optional_seed(seed);
    let mut runs = Vec::with_capacity(2);
    for (name, params) in scenarios {
        match run_batch_with_source(&params, &mut source, &options, None).await {
            Ok(results) => runs.push(ScenarioSeries { name, results }),
            Err(e) => {
                eprintln!("Failed to run simulation: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    interrupt.finish_batches();

    let [first_run, second_run] = &runs[..] else {
        return ExitCode::FAILURE;
    };
    println!(
        "{}",
        format_comparison(
            &first_run.name,
            &first_run.results.stats,
            &second_run.name,
            &second_run.results.stats
        )
    );

    if let Some(base) = charts {
        let paths = ComparisonChartPaths::from_base(&base);
        match write_comparison_charts_png(&paths, first_run, second_run).await {
            Ok(()) => {
                println!("Colonization comparison chart written to {}", paths.colonization);
                println!("Trajectory comparison chart written to {}", paths.trajectories);
            }
            Err(e) => {
                eprintln!("Failed to write charts: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
