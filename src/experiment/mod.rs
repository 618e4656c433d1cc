//! Parameter-sweep experiments.
//!
//! Each sweep varies one generator or annealing knob, solves a batch of
//! seeded instances per value, and averages wall time and objective.

mod config;
mod runner;

pub use config::{ExperimentConfig, ExperimentError, Sweep};
pub use runner::{ExperimentReport, ExperimentResult, ExperimentRunner};
