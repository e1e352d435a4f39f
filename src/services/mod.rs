pub mod aggregation;
pub mod batch;
pub mod cancellation;
pub mod charts;
pub mod legacy;
pub mod magnitude;
pub mod params_yaml;
pub mod percentiles;
pub mod sampler;
pub mod simulation_types;
pub mod trial_runner;
pub mod uniform_source;
