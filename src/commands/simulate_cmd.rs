use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use colonize::services::batch::{BatchOptions, run_batch_with_source};
use colonize::services::charts::{ChartPaths, write_charts_png};
use colonize::services::params_yaml::resolve_params;
use colonize::services::simulation_types::{SimulationReport, serialize_report};
use colonize::services::uniform_source::RngUniformSource;

use crate::commands::base_commands::Commands;
use crate::commands::interrupt::InterruptHandler;
use crate::commands::report_format::format_simulation_report;

pub async fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        preset,
        config,
        overrides,
        seed,
        output,
        format,
        charts,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let params = match resolve_params(preset.as_deref(), config.as_deref(), &overrides.into()) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("Failed to load simulation parameters: {e}");
            return ExitCode::FAILURE;
        }
    };

    let interrupt = InterruptHandler::install();
    let options = BatchOptions {
        cancel: Some(interrupt.token()),
        ..BatchOptions::default()
    };
    let mut source = RngUniformSource::from_optional_seed(seed);
    let show_progress = std::io::stderr().is_terminal();
    let mut on_progress = |percent: f64| {
        if show_progress {
            eprint!("\rSimulating... {percent:>5.1}%");
            let _ = std::io::stderr().flush();
        }
    };

    let results = run_batch_with_source(&params, &mut source, &options, Some(&mut on_progress)).await;
    interrupt.finish_batches();
    if show_progress {
        eprintln!();
    }
    let results = match results {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Failed to run simulation: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", format_simulation_report(&params, &results));

    if charts {
        let paths = ChartPaths::from_base(&output);
        match write_charts_png(&paths, &results).await {
            Ok(()) => {
                println!("Colonization chart written to {}", paths.colonization);
                println!("Trajectory chart written to {}", paths.trajectories);
                println!("New colonies chart written to {}", paths.new_colonies);
            }
            Err(e) => eprintln!("Failed to write charts: {e}"),
        }
    }

    let report = SimulationReport::new(params, seed, results);
    let contents = match serialize_report(&report, format) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize simulation report: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tokio::fs::write(&output, contents).await {
        eprintln!("Failed to write simulation report: {e}");
        return ExitCode::FAILURE;
    }
    println!("Simulation report written to {output}");
    ExitCode::SUCCESS
}
