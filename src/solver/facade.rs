//! Runs one algorithm on one instance and keeps the last good answer.

use thiserror::Error;
use tracing::warn;

use super::algorithm::HubAlgorithm;
use crate::problem::{ProblemInstance, ValidationError};
use crate::solution::Solution;

/// A solve that produced no solution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("an error occurred while solving the problem with {algorithm}: {source}")]
    Failed {
        algorithm: &'static str,
        #[source]
        source: ValidationError,
    },
}

/// Pairs an algorithm with the most recent solution it produced.
///
/// # Examples
///
/// ```
/// use drone_hub::geometry::{Bounds, Point};
/// use drone_hub::problem::{DeliveryPoint, ProblemInstance};
/// use drone_hub::solver::{LocalSearch, Solver};
///
/// let problem = ProblemInstance::new(
///     vec![DeliveryPoint::new(Point::new(2, 2), 1)],
///     Bounds::new(Point::new(0, 0), Point::new(4, 4)),
///     10.0,
/// );
///
/// let mut solver = Solver::new(Box::new(LocalSearch));
/// let solution = solver.solve(&problem).unwrap();
/// assert_eq!(solution.hub, Point::new(3, 2));
/// assert!(solver.last_solution().is_some());
/// ```
pub struct Solver {
    algorithm: Box<dyn HubAlgorithm>,
    save_history: bool,
    last_solution: Option<Solution>,
}

impl Solver {
    pub fn new(algorithm: Box<dyn HubAlgorithm>) -> Self {
        Self {
            algorithm,
            save_history: false,
            last_solution: None,
        }
    }

    /// Records the search path in every following solution.
    pub fn with_history(mut self, save_history: bool) -> Self {
        self.save_history = save_history;
        self
    }

    /// Swaps the algorithm. The last solution is kept.
    pub fn set_algorithm(&mut self, algorithm: Box<dyn HubAlgorithm>) {
        self.algorithm = algorithm;
    }

    pub fn algorithm(&self) -> &dyn HubAlgorithm {
        self.algorithm.as_ref()
    }

    /// Runs the algorithm on `problem`.
    ///
    /// On failure the previous solution stays available.
    pub fn solve(&mut self, problem: &ProblemInstance) -> Result<&Solution, SolveError> {
        let algorithm = self.algorithm.name();
        match self.algorithm.solve(problem, self.save_history) {
            Ok(solution) => Ok(&*self.last_solution.insert(solution)),
            Err(source) => {
                warn!(algorithm, error = %source, "solve failed");
                Err(SolveError::Failed { algorithm, source })
            }
        }
    }

    pub fn last_solution(&self) -> Option<&Solution> {
        self.last_solution.as_ref()
    }

    pub fn take_last_solution(&mut self) -> Option<Solution> {
        self.last_solution.take()
    }
}
