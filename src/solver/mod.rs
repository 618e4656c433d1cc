//! Hub placement engines and the facade callers run them through.
//!
//! [`LocalSearch`] and [`SimulatedAnnealing`] adapt the generic
//! [`ls`](crate::ls) and [`sa`](crate::sa) runners to a
//! [`ProblemInstance`](crate::problem::ProblemInstance); [`Solver`] wraps
//! either one and reports failures as [`SolveError`].

mod algorithm;
mod facade;
mod landscape;

pub use algorithm::{
    local_search, simulated_annealing, HubAlgorithm, LocalSearch, SimulatedAnnealing,
};
pub use facade::{SolveError, Solver};
