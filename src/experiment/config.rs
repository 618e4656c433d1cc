//! Sweep definitions.

use thiserror::Error;

use crate::generator::{GeneratorConfig, GeneratorError};
use crate::problem::ProblemInstance;
use crate::sa::SaConfig;

/// An experiment that cannot start.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExperimentError {
    #[error("at least one experiment argument is required")]
    NoValues,

    #[error("at least one launch per sweep value is required")]
    NoLaunches,

    #[error("sweep value {value} gives an invalid generator: {source}")]
    Generator {
        value: f64,
        #[source]
        source: GeneratorError,
    },
}

/// The single knob an experiment varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sweep {
    /// Generator point density, on the default footprint.
    Density,
    /// Generator volume multiplier.
    Volume,
    /// Initial annealing temperature.
    Temperature,
    /// Annealing cooling rate.
    CoolingRate,
    /// Stagnation factor `alpha`; the limit is `alpha * n * log2(n)` with
    /// `n = sqrt(width * height)` of each generated instance.
    Stagnation,
}

impl Sweep {
    /// Label of the varied value in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Sweep::Density => "Density",
            Sweep::Volume => "Volume",
            Sweep::Temperature => "Temperature",
            Sweep::CoolingRate => "Cooling rate",
            Sweep::Stagnation => "Alpha",
        }
    }

    /// Local search has no parameters, so it only joins sweeps that
    /// change the instances.
    pub fn runs_local_search(&self) -> bool {
        matches!(self, Sweep::Density | Sweep::Volume)
    }

    pub(crate) fn generator_config(&self, value: f64) -> GeneratorConfig {
        let base = GeneratorConfig::default()
            .with_density(0.2)
            .with_deviation(0.0)
            .with_volume(2.0);

        match self {
            Sweep::Density => base.with_volume(1.0).with_density(value),
            Sweep::Volume => base.with_volume(value),
            Sweep::Temperature | Sweep::CoolingRate | Sweep::Stagnation => base,
        }
    }

    pub(crate) fn annealing_config(
        &self,
        base: &SaConfig,
        value: f64,
        problem: &ProblemInstance,
    ) -> SaConfig {
        let config = base.clone();
        match self {
            Sweep::Density | Sweep::Volume => config,
            Sweep::Temperature => config.with_initial_temperature(value),
            Sweep::CoolingRate => config.with_cooling_rate(value),
            Sweep::Stagnation => config.with_max_stagnation(stagnation_limit(value, problem)),
        }
    }
}

/// `round(alpha * n * log2(n))` for `n = sqrt(width * height)`, never
/// negative.
pub(crate) fn stagnation_limit(alpha: f64, problem: &ProblemInstance) -> usize {
    let area = problem.bounds.width() as f64 * problem.bounds.height() as f64;
    let n = area.sqrt();
    let limit = (alpha * n * n.log2()).round_ties_even();
    if limit.is_finite() && limit > 0.0 {
        limit as usize
    } else {
        0
    }
}

/// A parameter sweep.
///
/// For every value, `launches` instances are generated; run `i` uses
/// seed `seed + i` for both the generator and the annealing stream.
///
/// # Examples
///
/// ```
/// use drone_hub::experiment::{ExperimentConfig, Sweep};
///
/// let config = ExperimentConfig::new(Sweep::CoolingRate, vec![0.9, 0.99])
///     .with_seed(5)
///     .with_launches(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExperimentConfig {
    pub sweep: Sweep,
    pub values: Vec<f64>,
    pub seed: u64,
    /// Runs averaged per value.
    pub launches: usize,
    /// Annealing parameters the sweep starts from.
    pub annealing: SaConfig,
}

impl ExperimentConfig {
    pub fn new(sweep: Sweep, values: Vec<f64>) -> Self {
        Self {
            sweep,
            values,
            seed: 0,
            launches: 10,
            annealing: SaConfig::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_launches(mut self, n: usize) -> Self {
        self.launches = n;
        self
    }

    pub fn with_annealing(mut self, config: SaConfig) -> Self {
        self.annealing = config;
        self
    }

    /// Validates the configuration, including every generator the sweep
    /// will build.
    pub fn validate(&self) -> Result<(), ExperimentError> {
        if self.values.is_empty() {
            return Err(ExperimentError::NoValues);
        }
        if self.launches == 0 {
            return Err(ExperimentError::NoLaunches);
        }
        for &value in &self.values {
            self.sweep
                .generator_config(value)
                .validate()
                .map_err(|source| ExperimentError::Generator { value, source })?;
        }
        Ok(())
    }
}
