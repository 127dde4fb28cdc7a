//! Primitive shapes: circles and axis-aligned rectangles.

use thiserror::Error;

use super::Position;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Position,
    radius: f64,
}

impl Circle {
    pub fn new(center: Position, radius: f64) -> Result<Self, ShapeError> {
        if !center.is_finite() || !radius.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if radius < 0.0 {
            return Err(ShapeError::NegativeRadius(radius));
        }
        Ok(Self { center, radius })
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Position::new(self.center.x() - self.radius, self.center.y() - self.radius),
            Position::new(self.center.x() + self.radius, self.center.y() + self.radius),
        )
    }

    pub fn translated(&self, offset: Position) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }
}

/// Axis-aligned rectangle given by its center and half extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    center: Position,
    half_width: f64,
    half_height: f64,
}

impl Rectangle {
    pub fn new(center: Position, half_width: f64, half_height: f64) -> Result<Self, ShapeError> {
        if !center.is_finite() || !half_width.is_finite() || !half_height.is_finite() {
            return Err(ShapeError::NonFinite);
        }
        if half_width < 0.0 || half_height < 0.0 {
            return Err(ShapeError::NegativeExtent {
                half_width,
                half_height,
            });
        }
        Ok(Self {
            center,
            half_width,
            half_height,
        })
    }

    /// Creates a rectangle from its full width and height.
    pub fn from_size(center: Position, width: f64, height: f64) -> Result<Self, ShapeError> {
        Self::new(center, width / 2.0, height / 2.0)
    }

    pub fn center(&self) -> Position {
        self.center
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn width(&self) -> f64 {
        2.0 * self.half_width
    }

    pub fn height(&self) -> f64 {
        2.0 * self.half_height
    }

    pub fn x_min(&self) -> f64 {
        self.center.x() - self.half_width
    }

    pub fn x_max(&self) -> f64 {
        self.center.x() + self.half_width
    }

    pub fn y_min(&self) -> f64 {
        self.center.y() - self.half_height
    }

    pub fn y_max(&self) -> f64 {
        self.center.y() + self.half_height
    }

    pub fn corners(&self) -> [Position; 4] {
        [
            Position::new(self.x_min(), self.y_min()),
            Position::new(self.x_min(), self.y_max()),
            Position::new(self.x_max(), self.y_min()),
            Position::new(self.x_max(), self.y_max()),
        ]
    }

    /// Whether the position lies in the open interior. Points on an edge are outside.
    pub fn strictly_contains(&self, position: Position) -> bool {
        self.x_min() < position.x()
            && position.x() < self.x_max()
            && self.y_min() < position.y()
            && position.y() < self.y_max()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            Position::new(self.x_min(), self.y_min()),
            Position::new(self.x_max(), self.y_max()),
        )
    }

    pub fn translated(&self, offset: Position) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: Position,
    max: Position,
}

impl Bounds {
    pub fn new(min: Position, max: Position) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> Position {
        self.min
    }

    pub fn max(&self) -> Position {
        self.max
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    pub fn center(&self) -> Position {
        Position::new(
            (self.min.x() + self.max.x()) / 2.0,
            (self.min.y() + self.max.y()) / 2.0,
        )
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds::new(
            Position::new(
                self.min.x().min(other.min.x()),
                self.min.y().min(other.min.y()),
            ),
            Position::new(
                self.max.x().max(other.max.x()),
                self.max.y().max(other.max.y()),
            ),
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("negative radius {0}")]
    NegativeRadius(f64),
    #[error("negative half extents ({half_width}, {half_height})")]
    NegativeExtent { half_width: f64, half_height: f64 },
    #[error("non-finite coordinate or size")]
    NonFinite,
}
