//! Synthetic problem instances for benchmarks and experiments.
//!
//! Instances are a pure function of the configuration and its seed, and
//! always pass [`ProblemInstance::validate`](crate::problem::ProblemInstance::validate).

mod config;
mod runner;

pub use config::{GeneratorConfig, GeneratorError};
pub(crate) use runner::random_point;
pub use runner::{generate, try_generate, ProblemGenerator};
