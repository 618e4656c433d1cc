//! Core trait for Simulated Annealing.

use rand::Rng;

/// Defines a Simulated Annealing problem.
///
/// The user implements start-point and neighbour generation plus the
/// objective. The SA framework handles temperature management, the
/// acceptance criterion, cooling, and early stopping.
///
/// All randomness comes from the `rng` the runner passes in, which is
/// seeded from the configuration, so a run is reproducible.
///
/// # Maximization
///
/// SA maximizes the objective. For minimization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct Line { lo: i32, hi: i32 }
///
/// impl SaProblem for Line {
///     type Solution = i32;
///
///     fn initial_solution<R: Rng>(&self, rng: &mut R) -> i32 {
///         rng.random_range(self.lo..=self.hi)
///     }
///
///     fn objective(&self, x: &i32) -> f64 {
///         -f64::from(x * x)
///     }
///
///     fn neighbor<R: Rng>(&self, x: &i32, rng: &mut R) -> Option<i32> {
///         let step = if rng.random() { 1 } else { -1 };
///         Some((x + step).clamp(self.lo, self.hi))
///     }
/// }
/// ```
///
/// # References
///
/// Kirkpatrick et al. (1983), Cerny (1985)
pub trait SaProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// Creates a random initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Scores a solution. Higher is better.
    fn objective(&self, solution: &Self::Solution) -> f64;

    /// Generates a neighbour different from `solution`.
    ///
    /// Returns `None` when `solution` has no neighbour at all; the run
    /// then stops.
    fn neighbor<R: Rng>(&self, solution: &Self::Solution, rng: &mut R)
        -> Option<Self::Solution>;
}
