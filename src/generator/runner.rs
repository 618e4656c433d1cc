//! Instance synthesis.
//!
//! # Algorithm
//!
//! Everything is drawn from one seeded stream in a fixed order:
//!
//! 1. Width, then height (skipped when bounds are explicit)
//! 2. Point count (skipped when the count is explicit)
//! 3. Distinct point coordinates, by rejection sampling
//! 4. Demand of each point, in placement order
//! 5. Drone range

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use super::config::{GeneratorConfig, GeneratorError};
use crate::geometry::{Bounds, Point};
use crate::problem::{DeliveryPoint, ProblemInstance};
use crate::random::create_rng;

/// Density above this is clamped.
const MAX_DENSITY: f64 = 0.9;

/// Produces problem instances from an owned, re-seedable stream.
///
/// Successive calls to [`generate`](ProblemGenerator::generate) continue
/// the same stream; call [`reseed`](ProblemGenerator::reseed) to restart
/// it.
pub struct ProblemGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl ProblemGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = create_rng(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Restarts the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = create_rng(seed);
    }

    /// Draws one instance.
    ///
    /// The configuration is not validated here. An explicit count larger
    /// than the number of cells in the region never terminates; use
    /// [`try_generate`] when the knobs come from outside.
    pub fn generate(&mut self) -> ProblemInstance {
        let bounds = match self.config.bounds {
            Some(bounds) => bounds,
            None => self.draw_bounds(),
        };

        let count = match self.config.count {
            Some(count) => count,
            None => self.draw_count(&bounds),
        };

        let locations = self.draw_locations(&bounds, count);

        let frequency = self.config.frequency;
        let points: Vec<DeliveryPoint> = locations
            .into_iter()
            .map(|location| {
                let deliveries = (self.rng.random::<f64>() * frequency)
                    .max(1.0)
                    .round_ties_even();
                DeliveryPoint::new(location, deliveries as u32)
            })
            .collect();

        let longest_side = bounds.width().max(bounds.height()) as f64 + 1.0;
        let drone_range = self.rng.random_range(0.2..0.8) * longest_side;

        debug!(
            seed = self.config.seed,
            %bounds,
            points = points.len(),
            drone_range,
            "generated problem instance"
        );

        ProblemInstance::new(points, bounds, drone_range)
    }

    fn draw_bounds(&mut self) -> Bounds {
        let ((wl, wh), (hl, hh)) = self.config.size_range();
        let width = self.rng.random_range(wl..=wh);
        let height = self.rng.random_range(hl..=hh);
        Bounds::new(Point::new(0, 0), Point::new(width, height))
    }

    /// At least one point unless the region or the target is empty.
    fn draw_count(&mut self, bounds: &Bounds) -> usize {
        let cells = bounds.cell_count();
        let target = cells as f64 * self.config.density.min(MAX_DENSITY);

        if cells == 0 || target <= 0.0 {
            return 0;
        }

        let target_count = (target.round_ties_even() as u64).max(1);
        let min_count = ((target * (1.0 - self.config.deviation)).round_ties_even() as u64)
            .max(1)
            .min(target_count);

        self.rng.random_range(min_count..=target_count) as usize
    }

    /// `count` distinct points in first-drawn order.
    fn draw_locations(&mut self, bounds: &Bounds, count: usize) -> Vec<Point> {
        let mut seen = HashSet::with_capacity(count);
        let mut locations = Vec::with_capacity(count);

        while locations.len() < count {
            let point = random_point(bounds, &mut self.rng);
            if seen.insert(point) {
                locations.push(point);
            }
        }

        locations
    }
}

/// Uniform point inside `bounds`, x drawn before y.
pub(crate) fn random_point<R: Rng>(bounds: &Bounds, rng: &mut R) -> Point {
    let x = rng.random_range(bounds.min.x..=bounds.max.x);
    let y = rng.random_range(bounds.min.y..=bounds.max.y);
    Point::new(x, y)
}

/// Generates one instance from a fresh stream seeded with `config.seed`.
pub fn generate(config: &GeneratorConfig) -> ProblemInstance {
    ProblemGenerator::new(config.clone()).generate()
}

/// Validates `config`, then generates.
pub fn try_generate(config: &GeneratorConfig) -> Result<ProblemInstance, GeneratorError> {
    config.validate()?;
    Ok(generate(config))
}
