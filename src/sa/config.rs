//! SA configuration.

use crate::problem::ValidationError;

/// Configuration for the Simulated Annealing algorithm.
///
/// Temperature follows geometric cooling: after every iteration,
/// accepted or not, `T_{k+1} = cooling_rate * T_k`.
///
/// # Examples
///
/// ```
/// use drone_hub::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_seed(42)
///     .with_iterations(5_000)
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99)
///     .with_max_stagnation(400);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Seed of the run's stream. The start point is its first draw.
    pub seed: u64,

    /// Iteration budget.
    pub iterations: usize,

    /// Initial temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1]. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Stop early after this many consecutive iterations without a new
    /// best. `None` disables the check.
    pub max_stagnation: Option<usize>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            iterations: 1000,
            initial_temperature: 100.0,
            cooling_rate: 0.995,
            max_stagnation: None,
        }
    }
}

impl SaConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_stagnation(mut self, n: usize) -> Self {
        self.max_stagnation = Some(n);
        self
    }

    /// Signed form of the stagnation limit: any negative value disables it.
    pub fn with_max_stagnation_raw(mut self, n: i64) -> Self {
        self.max_stagnation = usize::try_from(n).ok();
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.initial_temperature;
        if !t.is_finite() || t <= 0.0 {
            return Err(ValidationError::NonPositiveTemperature(t));
        }
        let rate = self.cooling_rate;
        if rate.is_nan() || rate <= 0.0 || rate > 1.0 {
            return Err(ValidationError::InvalidCoolingRate(rate));
        }
        Ok(())
    }
}
