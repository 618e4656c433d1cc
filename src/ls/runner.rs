//! Steepest-ascent execution loop.
//!
//! # Algorithm
//!
//! 1. Start from the problem's initial solution
//! 2. At each iteration:
//!    a. Score every neighbour of the current solution
//!    b. Pick the best one (first in enumeration order on ties)
//!    c. Move there only if it strictly beats the current solution
//! 3. Terminate at the first solution no neighbour improves on
//!
//! The objective strictly increases along the walk, so no solution is
//! visited twice and the climb terminates on any finite neighbourhood
//! graph.

use super::types::LsProblem;

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LsResult<S: Clone> {
    /// The local optimum the climb stopped at.
    pub best: S,

    /// Objective of `best`.
    pub best_objective: f64,

    /// Neighbourhood evaluations, including the final one that found no
    /// improvement.
    pub iterations: usize,

    /// Every visited solution in order, starting with the initial one.
    /// `None` unless requested.
    pub history: Option<Vec<S>>,
}

/// Executes steepest-ascent hill climbing.
pub struct LsRunner;

impl LsRunner {
    /// Climbs to a local optimum.
    pub fn run<P: LsProblem>(problem: &P) -> LsResult<P::Solution> {
        Self::run_with_history(problem, false)
    }

    /// Climbs to a local optimum, recording the path when `save_history`
    /// is set.
    pub fn run_with_history<P: LsProblem>(
        problem: &P,
        save_history: bool,
    ) -> LsResult<P::Solution> {
        let mut current = problem.initial_solution();
        let mut current_objective = problem.objective(&current);
        let mut history = save_history.then(Vec::new);
        let mut iterations = 0usize;

        loop {
            iterations += 1;
            if let Some(ref mut path) = history {
                path.push(current.clone());
            }

            let mut best_neighbor: Option<(P::Solution, f64)> = None;
            for neighbor in problem.neighbors(&current) {
                let objective = problem.objective(&neighbor);
                if best_neighbor
                    .as_ref()
                    .is_none_or(|&(_, best)| objective > best)
                {
                    best_neighbor = Some((neighbor, objective));
                }
            }

            match best_neighbor {
                Some((neighbor, objective)) if objective > current_objective => {
                    current = neighbor;
                    current_objective = objective;
                }
                _ => break,
            }
        }

        LsResult {
            best: current,
            best_objective: current_objective,
            iterations,
            history,
        }
    }
}
