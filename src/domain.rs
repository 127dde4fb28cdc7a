//! The domain module holds the overlap oracle: primitive shapes, vehicles composed of them, and
//! the rules deciding whether two bodies overlap.
//!
//! It has no dependency on the rendering side of the crate, so it can be used on its own.

mod basis;
mod body;
mod collision;
mod scene;
mod shape;
mod vehicle;

pub use basis::Position;
pub use body::Body;
pub use collision::{
    circle_rectangle_overlap, circles_overlap, overlaps, rectangles_overlap, HasCollision, Shape,
};
pub use scene::Scene;
pub use shape::{Bounds, Circle, Rectangle, ShapeError};
pub use vehicle::{Vehicle, VehicleConfig, VehicleError};
