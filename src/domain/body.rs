//! Owned bodies of every kind.

use super::{Bounds, Circle, Position, Rectangle, Vehicle};

#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    Circle(Circle),
    Rectangle(Rectangle),
    Vehicle(Vehicle),
}

impl Body {
    /// Primitives have depth 0, vehicles one more than their deepest member.
    pub fn depth(&self) -> usize {
        match self {
            Body::Circle(_) | Body::Rectangle(_) => 0,
            Body::Vehicle(vehicle) => vehicle.depth(),
        }
    }

    /// `None` if the body contains no primitive at all.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Body::Circle(circle) => Some(circle.bounds()),
            Body::Rectangle(rectangle) => Some(rectangle.bounds()),
            Body::Vehicle(vehicle) => vehicle.bounds(),
        }
    }

    pub fn translated(&self, offset: Position) -> Body {
        match self {
            Body::Circle(circle) => Body::Circle(circle.translated(offset)),
            Body::Rectangle(rectangle) => Body::Rectangle(rectangle.translated(offset)),
            Body::Vehicle(vehicle) => Body::Vehicle(vehicle.translated(offset)),
        }
    }

    /// Visits every primitive in member order, descending into nested vehicles.
    pub fn for_each_primitive(&self, f: &mut impl FnMut(&Body)) {
        match self {
            Body::Circle(_) | Body::Rectangle(_) => f(self),
            Body::Vehicle(vehicle) => {
                for member in vehicle.members() {
                    member.for_each_primitive(&mut *f);
                }
            }
        }
    }
}

impl From<Circle> for Body {
    fn from(value: Circle) -> Self {
        Body::Circle(value)
    }
}

impl From<Rectangle> for Body {
    fn from(value: Rectangle) -> Self {
        Body::Rectangle(value)
    }
}

impl From<Vehicle> for Body {
    fn from(value: Vehicle) -> Self {
        Body::Vehicle(value)
    }
}
