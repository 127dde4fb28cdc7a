//! Basic building blocks.

use std::ops::{Add, Neg, Sub};

use nalgebra::{distance_squared, Point2};

/// A point in the plane. Also used as an offset when moving bodies around.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(Point2<f64>);

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    pub fn distance(&self, position: Self) -> f64 {
        self.distance_squared(position).sqrt()
    }

    pub fn distance_squared(&self, position: Self) -> f64 {
        distance_squared(&self.0, &position.0)
    }

    pub fn is_finite(&self) -> bool {
        self.0.x.is_finite() && self.0.y.is_finite()
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0.coords)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(Point2::from(self.0.coords - rhs.0.coords))
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Self::Output {
        Self(Point2::from(-self.0.coords))
    }
}

impl Default for Position {
    fn default() -> Self {
        Self(Point2::origin())
    }
}
