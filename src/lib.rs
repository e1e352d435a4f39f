//! Monte Carlo model of colonization spreading across a galaxy of star
//! systems.
//!
//! [`services::batch::run_batch`] is the main entry point: it runs many
//! independent trials and returns per-round percentile bands, milestone
//! statistics and a sample of raw trajectories.

pub mod domain;
pub mod logging;
pub mod services;

#[cfg(test)]
mod test_support;
