use std::fmt;

use super::Point;

/// Inclusive axis-aligned rectangle on the integer grid.
///
/// `width` and `height` are `max - min`, so a single-cell region has
/// zero width and height. The type does not enforce `min <= max`;
/// [`Bounds::is_well_formed`] reports it and problem validation rejects
/// malformed regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    #[cfg_attr(feature = "serde", serde(rename = "Minimum"))]
    pub min: Point,
    #[cfg_attr(feature = "serde", serde(rename = "Maximum"))]
    pub max: Point,
}

impl Bounds {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// `max.x - min.x`, negative when malformed.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x)
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y)
    }

    /// Exactly one cell.
    pub fn is_single_cell(&self) -> bool {
        self.min == self.max
    }

    /// `min <= max` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.max.x >= self.min.x && self.max.y >= self.min.y
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Number of distinct integer points inside the region.
    ///
    /// Zero for malformed bounds; saturates at `u64::MAX` for the full
    /// `i32` plane.
    pub fn cell_count(&self) -> u64 {
        if !self.is_well_formed() {
            return 0;
        }
        let columns = (self.width() + 1) as u64;
        let rows = (self.height() + 1) as u64;
        columns.checked_mul(rows).unwrap_or(u64::MAX)
    }

    /// Midpoint, rounded towards `min`.
    pub fn center(&self) -> Point {
        let cx = (i64::from(self.min.x) + i64::from(self.max.x)).div_euclid(2);
        let cy = (i64::from(self.min.y) + i64::from(self.max.y)).div_euclid(2);
        Point::new(cx as i32, cy as i32)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
