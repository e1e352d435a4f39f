use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use colonize::services::params_yaml::ParamsOverrides;
use colonize::services::simulation_types::OutputFormat;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a Monte Carlo colonization simulation and write the report
    Simulate {
        /// Preset used as the starting point (optimistic, pessimistic) [default: optimistic]
        #[arg(short, long, conflicts_with = "config")]
        preset: Option<String>,
        /// Parameter YAML file used instead of a preset
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: ParamArgs,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Output report file
        #[arg(short, long)]
        output: String,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Also render PNG charts next to the report
        #[arg(long)]
        charts: bool,
    },
    /// Run two scenarios and print their statistics side by side
    Compare {
        /// First scenario: preset name or parameter YAML file
        #[arg(short = 'a', long)]
        first: String,
        /// Second scenario: preset name or parameter YAML file
        #[arg(short = 'b', long)]
        second: String,
        /// Number of trials per scenario, overrides both scenarios
        #[arg(short = 'n', long)]
        n_simulations: Option<usize>,
        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Write overlay PNG charts to <BASE>.colonization.png and <BASE>.trajectories.png
        #[arg(long, value_name = "BASE")]
        charts: Option<String>,
    },
    /// Print the built-in parameter presets as YAML
    Presets,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Number of star systems
    #[arg(long)]
    pub total_systems: Option<u64>,
    /// Probability that a ship survives the journey
    #[arg(long)]
    pub ship_survival_prob: Option<f64>,
    /// Probability that a surviving ship founds a colony
    #[arg(long)]
    pub colony_found_prob: Option<f64>,
    /// Years represented by one round
    #[arg(long)]
    pub years_per_round: Option<f64>,
    /// Maximum number of rounds per trial
    #[arg(long)]
    pub max_rounds: Option<usize>,
    /// Number of independent trials
    #[arg(short = 'n', long)]
    pub n_simulations: Option<usize>,
}

impl From<ParamArgs> for ParamsOverrides {
    fn from(args: ParamArgs) -> Self {
        Self {
            total_systems: args.total_systems,
            ship_survival_prob: args.ship_survival_prob,
            colony_found_prob: args.colony_found_prob,
            years_per_round: args.years_per_round,
            max_rounds: args.max_rounds,
            n_simulations: args.n_simulations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_defaults_to_optimistic_yaml() {
        let args = CliArgs::parse_from(["colonize", "simulate", "-o", "report.yaml"]);

        if let Commands::Simulate {
            preset,
            config,
            format,
            charts,
            seed,
            ..
        } = args.command
        {
            assert_eq!(preset, None);
            assert_eq!(config, None);
            assert_eq!(format, OutputFormat::Yaml);
            assert!(!charts);
            assert_eq!(seed, None);
        } else {
            panic!("expected simulate command");
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn simulate_collects_parameter_overrides() {
        let args = CliArgs::parse_from([
            "colonize",
            "simulate",
            "-o",
            "report.json",
            "--format",
            "json",
            "--total-systems",
            "1000",
            "--ship-survival-prob",
            "0.9",
            "-n",
            "12",
            "--log-level",
            "debug",
        ]);

        if let Commands::Simulate {
            overrides, format, ..
        } = args.command
        {
            let overrides = ParamsOverrides::from(overrides);
            assert_eq!(overrides.total_systems, Some(1000));
            assert_eq!(overrides.ship_survival_prob, Some(0.9));
            assert_eq!(overrides.n_simulations, Some(12));
            assert_eq!(overrides.colony_found_prob, None);
            assert_eq!(format, OutputFormat::Json);
        } else {
            panic!("expected simulate command");
        }
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn compare_takes_two_scenarios() {
        let args = CliArgs::parse_from(["colonize", "compare", "-a", "optimistic", "-b", "pessimistic", "-n", "5"]);

        if let Commands::Compare {
            first,
            second,
            n_simulations,
            charts,
            ..
        } = args.command
        {
            assert_eq!(first, "optimistic");
            assert_eq!(second, "pessimistic");
            assert_eq!(n_simulations, Some(5));
            assert_eq!(charts, None);
        } else {
            panic!("expected compare command");
        }
    }

    #[test]
    fn compare_accepts_chart_base() {
        let args = CliArgs::parse_from(["colonize", "compare", "-a", "optimistic", "-b", "pessimistic", "--charts", "out/cmp"]);

        if let Commands::Compare { charts, .. } = args.command {
            assert_eq!(charts.as_deref(), Some("out/cmp"));
        } else {
            panic!("expected compare command");
        }
    }

    #[test]
    fn simulate_rejects_preset_together_with_config() {
        let error = CliArgs::try_parse_from([
            "colonize",
            "simulate",
            "-p",
            "reckless",
            "-c",
            "params.yaml",
            "-o",
            "report.yaml",
        ])
        .err()
        .unwrap();

        assert_eq!(error.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
