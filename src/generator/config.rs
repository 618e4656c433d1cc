//! Generator configuration.

use thiserror::Error;

use crate::geometry::Bounds;
use crate::problem::ProblemInstance;

/// A generator configuration that could not produce a valid instance.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidKnob { name: &'static str, value: f64 },

    #[error("deviation must be in [0, 1], got {0}")]
    DeviationOutOfRange(f64),

    #[error("explicit bounds {0} are malformed")]
    MalformedBounds(Bounds),

    /// Rejection sampling of distinct points would never finish.
    #[error("cannot place {requested} distinct points in {available} cells")]
    TooManyPoints { requested: usize, available: u64 },
}

/// Shape knobs for synthetic problem instances.
///
/// The same seed and knobs always yield the same instance.
///
/// # Examples
///
/// ```
/// use drone_hub::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_seed(7)
///     .with_volume(2.0)
///     .with_density(0.1)
///     .with_deviation(0.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Seed of the single stream every drawn value comes from.
    pub seed: u64,

    /// Multiplier applied to the 64x64 default footprint.
    pub volume: f64,

    /// Fraction of cells holding a delivery point. Capped at 0.9.
    pub density: f64,

    /// Upper bound of per-point demand. Every point gets at least 1.
    pub frequency: f64,

    /// Relative spread of the drawn size and point count around their
    /// targets.
    pub deviation: f64,

    /// Exact number of points. Overrides `density`.
    pub count: Option<usize>,

    /// Exact region. Overrides `volume`.
    pub bounds: Option<Bounds>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            volume: 1.0,
            density: 0.2,
            frequency: 4.0,
            deviation: 0.2,
            count: None,
            bounds: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_deviation(mut self, deviation: f64) -> Self {
        self.deviation = deviation;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Validates the configuration.
    ///
    /// Also guarantees that point sampling terminates: an explicit count
    /// must fit in the smallest region the knobs can produce.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (name, value) in [
            ("volume", self.volume),
            ("density", self.density),
            ("frequency", self.frequency),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(GeneratorError::InvalidKnob { name, value });
            }
        }

        if !(0.0..=1.0).contains(&self.deviation) {
            return Err(GeneratorError::DeviationOutOfRange(self.deviation));
        }

        if let Some(bounds) = self.bounds {
            if !bounds.is_well_formed() {
                return Err(GeneratorError::MalformedBounds(bounds));
            }
        }

        if let Some(requested) = self.count {
            let available = self.min_cell_count();
            if requested as u64 > available {
                return Err(GeneratorError::TooManyPoints {
                    requested,
                    available,
                });
            }
        }

        Ok(())
    }

    /// Inclusive range the drawn width and height are taken from.
    pub(crate) fn size_range(&self) -> ((i32, i32), (i32, i32)) {
        let footprint = ProblemInstance::DEFAULT_BOUNDS;
        (
            spread(footprint.width() as f64 * self.volume, self.deviation),
            spread(footprint.height() as f64 * self.volume, self.deviation),
        )
    }

    fn min_cell_count(&self) -> u64 {
        match self.bounds {
            Some(bounds) => bounds.cell_count(),
            None => {
                let ((w, _), (h, _)) = self.size_range();
                (w as u64 + 1) * (h as u64 + 1)
            }
        }
    }
}

/// `[target * (1 - deviation), target * (1 + deviation)]`, floored at 1.
/// Ends round half to even.
fn spread(target: f64, deviation: f64) -> (i32, i32) {
    let lo = ((target * (1.0 - deviation)).round_ties_even() as i32).max(1);
    let hi = ((target * (1.0 + deviation)).round_ties_even() as i32).max(lo);
    (lo, hi)
}
