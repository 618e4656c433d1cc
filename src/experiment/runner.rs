//! Sweep execution.
//!
//! Runs of one sweep value are independent; with the `parallel` feature
//! they fan out over rayon and are collected back in launch order.

use std::fmt;
use std::time::Duration;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, warn};

use super::config::{stagnation_limit, ExperimentConfig, ExperimentError, Sweep};
use crate::generator::ProblemGenerator;
use crate::problem::{ProblemInstance, ValidationError};
use crate::sa::SaConfig;
use crate::solution::Solution;
use crate::solver::{local_search, simulated_annealing};

/// Averages over the successful runs of one sweep value.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentResult {
    /// The swept value.
    pub value: f64,

    /// Successful runs averaged. Failed runs are logged and skipped; with
    /// no successful run both averages are zero.
    pub runs: usize,

    pub average_time: Duration,

    pub average_objective: f64,

    /// Labelled facts about the value, e.g. the point count of the first
    /// generated instance.
    pub annotations: Vec<(&'static str, String)>,
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\tAvg. Time: {:<16}\tAvg. Objective: {:.6}",
            format!("{:?}", self.average_time),
            self.average_objective
        )?;
        for (key, value) in &self.annotations {
            write!(f, "\t{key}: {value}")?;
        }
        Ok(())
    }
}

/// Per-value results of both engines.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub sweep: Sweep,

    /// One entry per sweep value.
    pub annealing: Vec<ExperimentResult>,

    /// One entry per sweep value, when the sweep runs local search.
    pub local_search: Option<Vec<ExperimentResult>>,
}

impl fmt::Display for ExperimentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, annealing) in self.annealing.iter().enumerate() {
            writeln!(f, "ITERATION {i}")?;
            writeln!(f, "{annealing}")?;
            if let Some(local) = self.local_search.as_ref().and_then(|ls| ls.get(i)) {
                writeln!(f, "{local}")?;
            }
        }
        Ok(())
    }
}

struct Run {
    problem: ProblemInstance,
    annealing: SaConfig,
}

/// Executes parameter sweeps.
pub struct ExperimentRunner;

impl ExperimentRunner {
    pub fn run(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
        config.validate()?;

        let sweep = config.sweep;
        let mut annealing = Vec::with_capacity(config.values.len());
        let mut local = sweep
            .runs_local_search()
            .then(|| Vec::with_capacity(config.values.len()));

        for &value in &config.values {
            info!(sweep = sweep.label(), value, launches = config.launches, "sweep value");

            let runs = Self::plan(config, value);
            let annotations = annotate(sweep, value, &runs[0]);

            let solutions = execute(&runs, |run| {
                simulated_annealing(&run.problem, &run.annealing, false)
            });
            annealing.push(summarize(value, &solutions, annotations.clone()));

            if let Some(ref mut results) = local {
                let solutions = execute(&runs, |run| local_search(&run.problem, false));
                results.push(summarize(value, &solutions, annotations));
            }
        }

        Ok(ExperimentReport {
            sweep,
            annealing,
            local_search: local,
        })
    }

    fn plan(config: &ExperimentConfig, value: f64) -> Vec<Run> {
        let mut generator = ProblemGenerator::new(config.sweep.generator_config(value));

        (0..config.launches)
            .map(|i| {
                let seed = config.seed.wrapping_add(i as u64);
                generator.reseed(seed);
                let problem = generator.generate();
                let annealing = config
                    .sweep
                    .annealing_config(&config.annealing, value, &problem)
                    .with_seed(seed);
                Run { problem, annealing }
            })
            .collect()
    }
}

fn annotate(sweep: Sweep, value: f64, first: &Run) -> Vec<(&'static str, String)> {
    let mut annotations = vec![(sweep.label(), value.to_string())];
    match sweep {
        Sweep::Density => annotations.push(("Points", first.problem.points.len().to_string())),
        Sweep::Volume => annotations.push(("Size", first.problem.bounds.to_string())),
        Sweep::Stagnation => annotations.push((
            "I_Stagnation",
            stagnation_limit(value, &first.problem).to_string(),
        )),
        Sweep::Temperature | Sweep::CoolingRate => {}
    }
    annotations
}

/// Solves every run, dropping failures.
fn execute<F>(runs: &[Run], solve: F) -> Vec<Solution>
where
    F: Fn(&Run) -> Result<Solution, ValidationError> + Send + Sync,
{
    let attempt = |(i, run): (usize, &Run)| match solve(run) {
        Ok(solution) => Some(solution),
        Err(error) => {
            warn!(launch = i, %error, "run failed, skipping");
            None
        }
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<Option<Solution>> = runs.par_iter().enumerate().map(attempt).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<Option<Solution>> = runs.iter().enumerate().map(attempt).collect();

    outcomes.into_iter().flatten().collect()
}

fn summarize(
    value: f64,
    solutions: &[Solution],
    annotations: Vec<(&'static str, String)>,
) -> ExperimentResult {
    let runs = solutions.len();
    let (average_time, average_objective) = if runs == 0 {
        (Duration::ZERO, 0.0)
    } else {
        let total_time: Duration = solutions.iter().map(|s| s.elapsed).sum();
        let total_objective: f64 = solutions.iter().map(|s| s.objective).sum();
        (total_time / runs as u32, total_objective / runs as f64)
    };

    ExperimentResult {
        value,
        runs,
        average_time,
        average_objective,
        annotations,
    }
}
