//! Single-hub placement for drone delivery.
//!
//! Given weighted delivery points inside a bounded integer region and a
//! drone flight range, find the grid location for a hub that maximizes
//! coverage: the sum of `deliveries / distance` over every point within
//! half the range.
//!
//! - **Problem model** ([`problem`]): instances, validation, and the
//!   objective both engines share.
//! - **Local Search (LS)** ([`ls`]): deterministic steepest ascent from
//!   the demand centroid over 4-connected moves.
//! - **Simulated Annealing (SA)** ([`sa`]): seeded random walk over king
//!   moves with geometric cooling and an optional stagnation stop.
//! - **Generator** ([`generator`]): reproducible synthetic instances.
//! - **Solver** ([`solver`]): the hub-specific engines and the facade that
//!   runs them.
//! - **Experiments** ([`experiment`]): parameter sweeps averaging repeated
//!   seeded runs.
//!
//! # Architecture
//!
//! [`ls`] and [`sa`] are generic over a problem trait and know nothing
//! about drones. [`solver`] plugs the hub objective into them. Every
//! random draw comes from a stream created by [`random::create_rng`] from
//! an explicit seed, so identical inputs replay identical runs.

pub mod experiment;
pub mod generator;
pub mod geometry;
pub mod ls;
pub mod problem;
pub mod random;
pub mod sa;
pub mod solution;
pub mod solver;
