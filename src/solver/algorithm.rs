//! The two hub placement engines.

use std::time::Instant;

use tracing::debug;

use super::landscape::HubLandscape;
use crate::ls::LsRunner;
use crate::problem::{ProblemInstance, ValidationError};
use crate::sa::{SaConfig, SaRunner};
use crate::solution::Solution;

/// Something that places a hub.
///
/// Implementations validate the instance before any search step and
/// never mutate it.
pub trait HubAlgorithm {
    /// Short name used in logs and error reports.
    fn name(&self) -> &'static str;

    /// Solves `problem`, recording the search path when `save_history`
    /// is set.
    fn solve(
        &self,
        problem: &ProblemInstance,
        save_history: bool,
    ) -> Result<Solution, ValidationError>;
}

/// Deterministic steepest-ascent climb from the demand centroid.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSearch;

impl HubAlgorithm for LocalSearch {
    fn name(&self) -> &'static str {
        "local-search"
    }

    fn solve(
        &self,
        problem: &ProblemInstance,
        save_history: bool,
    ) -> Result<Solution, ValidationError> {
        problem.validate()?;

        let start = Instant::now();
        let result = LsRunner::run_with_history(&HubLandscape::new(problem), save_history);
        let elapsed = start.elapsed();

        debug!(
            algorithm = self.name(),
            hub = %result.best,
            objective = result.best_objective,
            iterations = result.iterations,
            ?elapsed,
            "solved"
        );

        Ok(Solution {
            hub: result.best,
            objective: result.best_objective,
            elapsed,
            iterations: result.iterations,
            history: result.history,
        })
    }
}

/// Seeded annealing walk over king moves.
#[derive(Debug, Clone, Default)]
pub struct SimulatedAnnealing {
    pub config: SaConfig,
}

impl SimulatedAnnealing {
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }
}

impl HubAlgorithm for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        "simulated-annealing"
    }

    fn solve(
        &self,
        problem: &ProblemInstance,
        save_history: bool,
    ) -> Result<Solution, ValidationError> {
        problem.validate()?;

        let start = Instant::now();
        let result =
            SaRunner::run_with_history(&HubLandscape::new(problem), &self.config, save_history)?;
        let elapsed = start.elapsed();

        debug!(
            algorithm = self.name(),
            seed = self.config.seed,
            hub = %result.best,
            objective = result.best_objective,
            iterations = result.iterations,
            stagnated = result.stagnated,
            ?elapsed,
            "solved"
        );

        Ok(Solution {
            hub: result.best,
            objective: result.best_objective,
            elapsed,
            iterations: result.iterations,
            history: result.history,
        })
    }
}

/// Runs [`LocalSearch`] on `problem`.
pub fn local_search(
    problem: &ProblemInstance,
    save_history: bool,
) -> Result<Solution, ValidationError> {
    LocalSearch.solve(problem, save_history)
}

/// Runs [`SimulatedAnnealing`] with `config` on `problem`.
pub fn simulated_annealing(
    problem: &ProblemInstance,
    config: &SaConfig,
    save_history: bool,
) -> Result<Solution, ValidationError> {
    SimulatedAnnealing::new(config.clone()).solve(problem, save_history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, GeneratorConfig};
    use crate::geometry::{Bounds, Point};
    use crate::problem::DeliveryPoint;

    fn single_point() -> ProblemInstance {
        ProblemInstance::new(
            vec![DeliveryPoint::new(Point::new(2, 2), 1)],
            Bounds::new(Point::new(0, 0), Point::new(4, 4)),
            10.0,
        )
    }

    #[test]
    fn test_local_search_leaves_point_under_centroid() {
        let solution = local_search(&single_point(), true).unwrap();

        assert_eq!(solution.hub, Point::new(3, 2));
        assert!((solution.objective - 1.0).abs() < 1e-12);
        assert_eq!(solution.iterations, 2);
        assert_eq!(
            solution.history,
            Some(vec![Point::new(2, 2), Point::new(3, 2)])
        );
    }

    #[test]
    fn test_local_search_without_history() {
        let solution = local_search(&single_point(), false).unwrap();
        assert!(solution.history.is_none());
    }

    #[test]
    fn test_local_search_rejects_invalid() {
        let mut problem = single_point();
        problem.drone_range = -1.0;
        assert_eq!(
            local_search(&problem, false),
            Err(ValidationError::NonPositiveRange(-1.0))
        );
    }

    #[test]
    fn test_local_search_is_local_optimum() {
        let problem = generate(&GeneratorConfig::default().with_seed(17));
        let solution = local_search(&problem, false).unwrap();

        for d in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            let neighbor = solution.hub + Point::new(d.0, d.1);
            if problem.bounds.contains(neighbor) {
                assert!(problem.objective(neighbor) <= solution.objective);
            }
        }
    }

    #[test]
    fn test_annealing_deterministic() {
        let problem = generate(&GeneratorConfig::default().with_seed(8));
        let config = SaConfig::default().with_seed(99);

        let a = simulated_annealing(&problem, &config, false).unwrap();
        let b = simulated_annealing(&problem, &config, false).unwrap();

        assert_eq!(a.hub, b.hub);
        assert_eq!(a.objective.to_bits(), b.objective.to_bits());
        assert_eq!(a.iterations, b.iterations);
    }

    #[test]
    fn test_annealing_best_dominates_history() {
        let problem = generate(&GeneratorConfig::default().with_seed(12));
        let config = SaConfig::default().with_seed(4);
        let solution = simulated_annealing(&problem, &config, true).unwrap();
        let history = solution.history.expect("history requested");

        assert!(!history.is_empty());
        for hub in history {
            assert!(problem.bounds.contains(hub));
            assert!(problem.objective(hub) <= solution.objective);
        }
    }

    #[test]
    fn test_annealing_single_cell() {
        let problem = ProblemInstance::new(
            vec![DeliveryPoint::new(Point::new(1, 1), 2)],
            Bounds::new(Point::new(1, 1), Point::new(1, 1)),
            4.0,
        );
        let solution = simulated_annealing(&problem, &SaConfig::default(), false).unwrap();
        assert_eq!(solution.hub, Point::new(1, 1));
        assert_eq!(solution.iterations, 0);
        assert_eq!(solution.objective, 0.0);
    }

    #[test]
    fn test_local_search_at_i32_edge() {
        let problem = ProblemInstance::new(
            vec![DeliveryPoint::new(Point::new(i32::MAX, 1), 2)],
            Bounds::new(Point::new(i32::MAX - 2, 0), Point::new(i32::MAX, 2)),
            10.0,
        );
        let solution = local_search(&problem, false).unwrap();

        assert!(problem.bounds.contains(solution.hub));
        assert!((solution.objective - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_annealing_on_full_plane() {
        let problem = ProblemInstance::new(
            vec![DeliveryPoint::new(Point::new(0, 0), 1)],
            Bounds::new(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            10.0,
        );
        let config = SaConfig::default().with_seed(6).with_iterations(200);
        let solution = simulated_annealing(&problem, &config, false).unwrap();

        assert_eq!(solution.iterations, 200);
        assert!(problem.bounds.contains(solution.hub));
    }

    #[test]
    fn test_annealing_rejects_invalid_problem_before_config() {
        let mut problem = single_point();
        problem.points.push(DeliveryPoint::new(Point::new(7, 7), 1));
        let config = SaConfig::default().with_cooling_rate(2.0);
        assert!(matches!(
            simulated_annealing(&problem, &config, false),
            Err(ValidationError::PointOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_trait_object_dispatch() {
        let algorithms: Vec<Box<dyn HubAlgorithm>> = vec![
            Box::new(LocalSearch),
            Box::new(SimulatedAnnealing::new(SaConfig::default().with_seed(1))),
        ];
        let problem = single_point();
        for algorithm in &algorithms {
            let solution = algorithm.solve(&problem, false).unwrap();
            assert!(solution.objective > 0.0, "{} found nothing", algorithm.name());
        }
    }
}
