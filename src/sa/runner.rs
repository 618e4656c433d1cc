//! SA execution loop.

use rand::Rng;
use tracing::{debug, trace};

use super::config::SaConfig;
use super::types::SaProblem;
use crate::problem::ValidationError;
use crate::random::create_rng;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best accepted solution.
    pub best: S,

    /// Objective of the best solution.
    pub best_objective: f64,

    /// Iterations actually executed (neighbour evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the stagnation limit ended the run before its budget.
    pub stagnated: bool,

    /// Initial solution followed by every accepted solution, in order.
    /// `None` unless requested.
    pub history: Option<Vec<S>>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ValidationError> {
        Self::run_with_history(problem, config, false)
    }

    /// Runs SA, recording accepted solutions when `save_history` is set.
    pub fn run_with_history<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        save_history: bool,
    ) -> Result<SaResult<P::Solution>, ValidationError> {
        config.validate()?;

        let mut rng = create_rng(config.seed);

        // Initialize
        let mut current = problem.initial_solution(&mut rng);
        let mut current_objective = problem.objective(&current);
        let mut best = current.clone();
        let mut best_objective = current_objective;
        let mut history = save_history.then(|| vec![current.clone()]);

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut stagnation = 0usize;
        let mut stagnated = false;

        while iterations < config.iterations {
            if config.max_stagnation.is_some_and(|limit| stagnation >= limit) {
                stagnated = true;
                debug!(iterations, stagnation, "annealing stagnated");
                break;
            }

            let Some(neighbor) = problem.neighbor(&current, &mut rng) else {
                debug!(iterations, "no neighbour to move to");
                break;
            };
            let neighbor_objective = problem.objective(&neighbor);
            let delta = neighbor_objective - current_objective;

            // Metropolis acceptance criterion
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                rng.random::<f64>() < acceptance_probability(delta, temperature)
            };

            let mut new_best = false;
            if accept {
                current = neighbor;
                current_objective = neighbor_objective;
                accepted_moves += 1;
                trace!(iterations, current_objective, temperature, "accepted move");

                if let Some(ref mut path) = history {
                    path.push(current.clone());
                }

                if current_objective > best_objective {
                    best = current.clone();
                    best_objective = current_objective;
                    new_best = true;
                }
            }

            stagnation = if new_best { 0 } else { stagnation + 1 };

            // Cool down
            temperature *= config.cooling_rate;
            iterations += 1;
        }

        Ok(SaResult {
            best,
            best_objective,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            stagnated,
            history,
        })
    }
}

/// Probability of taking a move with objective change `delta`.
///
/// Non-worsening moves are always taken; worsening moves are never taken
/// once the temperature has decayed to zero.
fn acceptance_probability(delta: f64, temperature: f64) -> f64 {
    if delta >= 0.0 {
        1.0
    } else if temperature > 0.0 {
        (delta / temperature).exp()
    } else {
        0.0
    }
}
