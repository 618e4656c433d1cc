//! Core trait for steepest-ascent local search.

/// Defines a deterministic hill-climbing problem.
///
/// The user supplies a starting solution, an objective, and the full
/// neighbourhood of a solution. The runner handles move selection and
/// termination.
///
/// # Maximization
///
/// Higher objective values are better.
///
/// # Examples
///
/// ```
/// use drone_hub::ls::LsProblem;
///
/// struct Parabola;
///
/// impl LsProblem for Parabola {
///     type Solution = i32;
///
///     fn initial_solution(&self) -> i32 {
///         -10
///     }
///
///     fn objective(&self, x: &i32) -> f64 {
///         -f64::from((x - 3) * (x - 3))
///     }
///
///     fn neighbors(&self, x: &i32) -> Vec<i32> {
///         vec![x + 1, x - 1]
///     }
/// }
/// ```
pub trait LsProblem: Send + Sync {
    /// The solution representation type.
    type Solution: Clone + Send;

    /// The solution the climb starts from.
    fn initial_solution(&self) -> Self::Solution;

    /// Scores a solution. Higher is better.
    fn objective(&self, solution: &Self::Solution) -> f64;

    /// Every feasible neighbour of `solution`.
    ///
    /// Order matters: among equally scored neighbours the first one wins.
    fn neighbors(&self, solution: &Self::Solution) -> Vec<Self::Solution>;
}
