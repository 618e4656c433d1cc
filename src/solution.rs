//! Normalized output of either engine.

use std::fmt;
use std::time::Duration;

use crate::geometry::Point;

/// A hub location found by one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Best hub location found.
    pub hub: Point,

    /// Objective at `hub`.
    pub objective: f64,

    /// Wall time of the search, validation excluded.
    pub elapsed: Duration,

    /// Iterations the engine actually executed.
    pub iterations: usize,

    /// Visited (local search) or accepted (annealing) locations in
    /// order, present only when requested.
    pub history: Option<Vec<Point>>,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution:")?;
        writeln!(f, "  Hub Location:      {}", self.hub)?;
        writeln!(f, "  Objective:         {:.6}", self.objective)?;
        writeln!(f, "  Time took:         {:?}", self.elapsed)?;
        write!(f, "  Iterations took:   {}", self.iterations)
    }
}
