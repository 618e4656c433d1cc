//! The hub placement problem: delivery points, the bounded search
//! region, the drone range, and the coverage objective both engines
//! maximize.

mod error;
mod types;

pub use error::ValidationError;
pub use types::{DeliveryPoint, ProblemInstance};
