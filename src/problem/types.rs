//! Delivery points and the hub placement instance.

use super::error::ValidationError;
use crate::geometry::{Bounds, Point};

/// A demand location weighted by its number of deliveries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeliveryPoint {
    #[cfg_attr(feature = "serde", serde(rename = "Coordinates"))]
    pub location: Point,
    #[cfg_attr(feature = "serde", serde(rename = "Deliveries"))]
    pub deliveries: u32,
}

impl DeliveryPoint {
    pub const fn new(location: Point, deliveries: u32) -> Self {
        Self {
            location,
            deliveries,
        }
    }
}

/// A single-hub placement problem.
///
/// `drone_range` is the full flight distance of a drone, so a delivery
/// point is servable only within `drone_range / 2` of the hub.
///
/// Engines borrow an instance read-only; point order only affects the
/// order in which the objective sum is accumulated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemInstance {
    #[cfg_attr(feature = "serde", serde(rename = "Points"))]
    pub points: Vec<DeliveryPoint>,
    #[cfg_attr(feature = "serde", serde(rename = "Bounds", default = "default_bounds"))]
    pub bounds: Bounds,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "DroneDistance", default = "default_drone_range")
    )]
    pub drone_range: f64,
}

#[cfg(feature = "serde")]
fn default_bounds() -> Bounds {
    ProblemInstance::DEFAULT_BOUNDS
}

#[cfg(feature = "serde")]
fn default_drone_range() -> f64 {
    ProblemInstance::DEFAULT_DRONE_RANGE
}

impl ProblemInstance {
    /// The 64x64 footprint scaled by the generator's volume knob.
    pub const DEFAULT_BOUNDS: Bounds = Bounds::new(Point::new(0, 0), Point::new(64, 64));

    pub const DEFAULT_DRONE_RANGE: f64 = 32.0;

    pub fn new(points: Vec<DeliveryPoint>, bounds: Bounds, drone_range: f64) -> Self {
        Self {
            points,
            bounds,
            drone_range,
        }
    }

    /// Checks bounds, point containment, then drone range, and returns
    /// the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.bounds.is_well_formed() {
            return Err(ValidationError::MalformedBounds {
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }

        if let Some(outside) = self
            .points
            .iter()
            .find(|p| !self.bounds.contains(p.location))
        {
            return Err(ValidationError::PointOutOfBounds {
                point: outside.location,
                bounds: self.bounds,
            });
        }

        if self.drone_range.is_nan() || self.drone_range <= 0.0 {
            return Err(ValidationError::NonPositiveRange(self.drone_range));
        }

        Ok(())
    }

    /// Coverage score of placing the hub at `hub`.
    ///
    /// Sums `deliveries / distance` over every point with
    /// `0 < distance <= drone_range / 2`. A point under the hub
    /// contributes nothing.
    pub fn objective(&self, hub: Point) -> f64 {
        let reach = self.drone_range / 2.0;
        let mut total = 0.0;

        for point in &self.points {
            let distance = hub.distance_to(point.location);
            if distance > 0.0 && distance <= reach {
                total += f64::from(point.deliveries) / distance;
            }
        }

        total
    }

    /// Demand-weighted center of mass, rounded to the nearest grid point
    /// with ties going to the even coordinate.
    ///
    /// Returns `None` when there is no demand to weigh.
    pub fn centroid(&self) -> Option<Point> {
        let total: f64 = self.points.iter().map(|p| f64::from(p.deliveries)).sum();
        if total <= 0.0 {
            return None;
        }

        let (sx, sy) = self.points.iter().fold((0.0, 0.0), |(sx, sy), p| {
            let w = f64::from(p.deliveries);
            (
                sx + f64::from(p.location.x) * w,
                sy + f64::from(p.location.y) * w,
            )
        });

        Some(Point::new(
            (sx / total).round_ties_even() as i32,
            (sy / total).round_ties_even() as i32,
        ))
    }

    /// Sum of all delivery weights.
    pub fn total_deliveries(&self) -> u64 {
        self.points.iter().map(|p| u64::from(p.deliveries)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_point() -> ProblemInstance {
        ProblemInstance::new(
            vec![DeliveryPoint::new(Point::new(2, 2), 1)],
            Bounds::new(Point::new(0, 0), Point::new(4, 4)),
            10.0,
        )
    }

    #[test]
    fn test_valid_instance_passes() {
        assert!(single_point().validate().is_ok());
    }

    #[test]
    fn test_malformed_bounds_rejected() {
        let mut p = single_point();
        p.bounds = Bounds::new(Point::new(5, 0), Point::new(4, 4));
        assert!(matches!(
            p.validate(),
            Err(ValidationError::MalformedBounds { .. })
        ));
    }

    #[test]
    fn test_point_outside_rejected() {
        let mut p = single_point();
        p.points.push(DeliveryPoint::new(Point::new(9, 1), 3));
        assert_eq!(
            p.validate(),
            Err(ValidationError::PointOutOfBounds {
                point: Point::new(9, 1),
                bounds: p.bounds,
            })
        );
    }

    #[test]
    fn test_zero_range_rejected() {
        let mut p = single_point();
        p.drone_range = 0.0;
        assert_eq!(p.validate(), Err(ValidationError::NonPositiveRange(0.0)));
        p.drone_range = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_first_violation_wins() {
        // Malformed bounds and zero range: bounds are reported.
        let p = ProblemInstance::new(
            vec![],
            Bounds::new(Point::new(1, 1), Point::new(0, 0)),
            0.0,
        );
        assert!(matches!(
            p.validate(),
            Err(ValidationError::MalformedBounds { .. })
        ));
    }

    #[test]
    fn test_objective_excludes_point_under_hub() {
        let p = single_point();
        assert_eq!(p.objective(Point::new(2, 2)), 0.0);
    }

    #[test]
    fn test_objective_adjacent() {
        let p = single_point();
        assert!((p.objective(Point::new(3, 2)) - 1.0).abs() < 1e-12);
        assert!((p.objective(Point::new(4, 2)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_objective_respects_half_range() {
        let mut p = single_point();
        p.drone_range = 4.0;
        // Exactly at reach: included.
        assert!((p.objective(Point::new(0, 2)) - 0.5).abs() < 1e-12);
        // Beyond reach: excluded.
        assert_eq!(p.objective(Point::new(0, 0)), 0.0);
    }

    #[test]
    fn test_objective_weights_by_deliveries() {
        let p = ProblemInstance::new(
            vec![
                DeliveryPoint::new(Point::new(0, 0), 4),
                DeliveryPoint::new(Point::new(4, 0), 2),
            ],
            Bounds::new(Point::new(0, 0), Point::new(4, 4)),
            20.0,
        );
        let expected = 4.0 / 2.0 + 2.0 / 2.0;
        assert!((p.objective(Point::new(2, 0)) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_centroid_weighted() {
        let p = ProblemInstance::new(
            vec![
                DeliveryPoint::new(Point::new(0, 0), 3),
                DeliveryPoint::new(Point::new(4, 8), 1),
            ],
            Bounds::new(Point::new(0, 0), Point::new(8, 8)),
            10.0,
        );
        assert_eq!(p.centroid(), Some(Point::new(1, 2)));
        assert_eq!(p.total_deliveries(), 4);
    }

    #[test]
    fn test_centroid_ties_round_to_even() {
        let p = ProblemInstance::new(
            vec![
                DeliveryPoint::new(Point::new(0, 0), 1),
                DeliveryPoint::new(Point::new(1, 0), 1),
            ],
            Bounds::new(Point::new(0, 0), Point::new(4, 4)),
            10.0,
        );
        assert_eq!(p.centroid(), Some(Point::new(0, 0)));

        let p = ProblemInstance::new(
            vec![
                DeliveryPoint::new(Point::new(2, 3), 1),
                DeliveryPoint::new(Point::new(3, 4), 1),
            ],
            Bounds::new(Point::new(0, 0), Point::new(4, 4)),
            10.0,
        );
        assert_eq!(p.centroid(), Some(Point::new(2, 4)));
    }

    #[test]
    fn test_centroid_without_demand() {
        let p = ProblemInstance::new(vec![], ProblemInstance::DEFAULT_BOUNDS, 10.0);
        assert_eq!(p.centroid(), None);
    }
}
