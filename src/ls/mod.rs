//! Steepest-ascent Local Search (LS).
//!
//! A deterministic hill climber: at every step it moves to the best
//! neighbour if that neighbour is strictly better, and stops at the
//! first local optimum.

mod runner;
mod types;

pub use runner::{LsResult, LsRunner};
pub use types::LsProblem;
