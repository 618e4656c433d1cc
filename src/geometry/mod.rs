//! Integer plane primitives shared by the problem model and both engines.

mod bounds;
mod point;

pub use bounds::Bounds;
pub use point::Point;
