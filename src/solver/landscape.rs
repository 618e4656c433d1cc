//! Adapter exposing a [`ProblemInstance`] to the generic runners.

use rand::Rng;

use crate::generator::random_point;
use crate::geometry::Point;
use crate::ls::LsProblem;
use crate::problem::ProblemInstance;
use crate::sa::SaProblem;

/// 4-connected moves, in tie-break order.
const DIRECTIONS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// The hub objective over the integer points of an instance's bounds.
///
/// Borrows a validated instance; never outlives a single solve.
pub(crate) struct HubLandscape<'a> {
    problem: &'a ProblemInstance,
}

impl<'a> HubLandscape<'a> {
    pub(crate) fn new(problem: &'a ProblemInstance) -> Self {
        Self { problem }
    }
}

impl LsProblem for HubLandscape<'_> {
    type Solution = Point;

    /// Demand-weighted centroid, or the middle of the region when there
    /// is no demand.
    fn initial_solution(&self) -> Point {
        self.problem
            .centroid()
            .unwrap_or_else(|| self.problem.bounds.center())
    }

    fn objective(&self, hub: &Point) -> f64 {
        self.problem.objective(*hub)
    }

    fn neighbors(&self, hub: &Point) -> Vec<Point> {
        DIRECTIONS
            .iter()
            .filter_map(|&d| hub.checked_add(d))
            .filter(|&p| self.problem.bounds.contains(p))
            .collect()
    }
}

impl SaProblem for HubLandscape<'_> {
    type Solution = Point;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Point {
        random_point(&self.problem.bounds, rng)
    }

    fn objective(&self, hub: &Point) -> f64 {
        self.problem.objective(*hub)
    }

    /// Rejection-samples a king move: dx and dy each from {-1, 0, 1},
    /// redrawn until the result differs from `hub` and lies in bounds.
    fn neighbor<R: Rng>(&self, hub: &Point, rng: &mut R) -> Option<Point> {
        let bounds = &self.problem.bounds;
        if bounds.is_single_cell() {
            return None;
        }

        loop {
            let dx = rng.random_range(-1..=1);
            let dy = rng.random_range(-1..=1);
            if let Some(candidate) = hub.checked_add(Point::new(dx, dy)) {
                if candidate != *hub && bounds.contains(candidate) {
                    return Some(candidate);
                }
            }
        }
    }
}
