//! Collision detection based on basic shapes.
//!
//! Circles and rectangles are tested with one of three predicates. Vehicles are expanded member
//! by member until a pair of primitives overlaps or every pair has been tried.

use super::{Body, Circle, Position, Rectangle, Vehicle};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.shape().has_intersection(other.shape())
    }

    fn shape(&self) -> Shape<'_>;
}

/// Tests whether two bodies of any kind overlap.
pub fn overlaps(subject: &dyn HasCollision, target: &dyn HasCollision) -> bool {
    subject.has_collision(target)
}

/// Borrowed view of a body, used to dispatch on the pair of kinds.
#[derive(Clone, Copy, Debug)]
pub enum Shape<'a> {
    Circle(&'a Circle),
    Rectangle(&'a Rectangle),
    Vehicle(&'a Vehicle),
}

impl<'a> Shape<'a> {
    pub fn has_intersection(self, other: Shape<'a>) -> bool {
        match (self, other) {
            (Shape::Circle(circle), Shape::Circle(other_circle)) => {
                circles_overlap(circle, other_circle)
            }
            (Shape::Circle(circle), Shape::Rectangle(rectangle))
            | (Shape::Rectangle(rectangle), Shape::Circle(circle)) => {
                circle_rectangle_overlap(circle, rectangle)
            }
            (Shape::Rectangle(rectangle), Shape::Rectangle(other_rectangle)) => {
                rectangles_overlap(rectangle, other_rectangle)
            }
            (Shape::Vehicle(vehicle), Shape::Vehicle(other_vehicle)) => {
                vehicle.members().iter().any(|member| {
                    other_vehicle
                        .members()
                        .iter()
                        .any(|other_member| member.shape().has_intersection(other_member.shape()))
                })
            }
            (Shape::Vehicle(vehicle), other) | (other, Shape::Vehicle(vehicle)) => vehicle
                .members()
                .iter()
                .any(|member| other.has_intersection(member.shape())),
        }
    }
}

/// Circles touching in a single point do not overlap.
pub fn circles_overlap(circle: &Circle, other: &Circle) -> bool {
    circle.center().distance_squared(other.center()) < (circle.radius() + other.radius()).powi(2)
}

/// Rectangles sharing an edge do not overlap.
pub fn rectangles_overlap(rectangle: &Rectangle, other: &Rectangle) -> bool {
    (rectangle.center().x() - other.center().x()).abs()
        < rectangle.half_width() + other.half_width()
        && (rectangle.center().y() - other.center().y()).abs()
            < rectangle.half_height() + other.half_height()
}

/// Approximate circle/rectangle test in two phases.
///
/// First, any rectangle corner strictly inside the circle is a hit. Second, any of the circle's
/// four axis-extreme points or its center strictly inside the rectangle is a hit. The center
/// catches a circle lying inside a rectangle of matching extents, where the extreme points sit
/// exactly on the edges.
///
/// This misses a circle whose arc cuts through a rectangle without enclosing a corner or putting
/// an extreme point inside, e.g. a large circle covering the middle of a long thin rectangle and
/// reaching past its far side. Such pairs report no overlap.
pub fn circle_rectangle_overlap(circle: &Circle, rectangle: &Rectangle) -> bool {
    let center = circle.center();
    let radius = circle.radius();

    if rectangle
        .corners()
        .iter()
        .any(|corner| corner.distance_squared(center) < radius.powi(2))
    {
        return true;
    }

    [
        center - Position::new(radius, 0.0),
        center + Position::new(radius, 0.0),
        center - Position::new(0.0, radius),
        center + Position::new(0.0, radius),
        center,
    ]
    .into_iter()
    .any(|p| rectangle.strictly_contains(p))
}

impl HasCollision for Body {
    fn shape(&self) -> Shape<'_> {
        match self {
            Body::Circle(circle) => Shape::Circle(circle),
            Body::Rectangle(rectangle) => Shape::Rectangle(rectangle),
            Body::Vehicle(vehicle) => Shape::Vehicle(vehicle),
        }
    }
}

impl HasCollision for Circle {
    fn shape(&self) -> Shape<'_> {
        Shape::Circle(self)
    }
}

impl HasCollision for Rectangle {
    fn shape(&self) -> Shape<'_> {
        Shape::Rectangle(self)
    }
}

impl HasCollision for Vehicle {
    fn shape(&self) -> Shape<'_> {
        Shape::Vehicle(self)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::tests::{circle, demo_vehicle, rectangle, vehicle};

    #[rstest]
    #[case::far_apart(circle(0.0, 0.0, 3.0), circle(10.0, 0.0, 3.0), false)]
    #[case::overlapping(circle(0.0, 0.0, 3.0), circle(4.0, 0.0, 3.0), true)]
    #[case::tangent(circle(0.0, 0.0, 3.0), circle(6.0, 0.0, 3.0), false)]
    #[case::almost_tangent(circle(0.0, 0.0, 3.0), circle(6.0 - 1e-9, 0.0, 3.0), true)]
    #[case::diagonal_tangent(circle(0.0, 0.0, 2.0), circle(3.0, 4.0, 3.0), false)]
    #[case::contained(circle(0.0, 0.0, 5.0), circle(1.0, 1.0, 1.0), true)]
    #[case::identical(circle(1.0, 1.0, 1.0), circle(1.0, 1.0, 1.0), true)]
    #[case::both_points(circle(1.0, 1.0, 0.0), circle(1.0, 1.0, 0.0), false)]
    fn test_circles_overlap(#[case] a: Body, #[case] b: Body, #[case] expected: bool) {
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[rstest]
    #[case::identical(rectangle(5.0, 3.0, 5.0, 3.0), rectangle(5.0, 3.0, 5.0, 3.0), true)]
    #[case::touching_x(rectangle(0.0, 0.0, 1.0, 1.0), rectangle(3.0, 0.0, 2.0, 1.0), false)]
    #[case::touching_y(rectangle(0.0, 0.0, 1.0, 1.0), rectangle(0.0, 2.0, 1.0, 1.0), false)]
    #[case::touching_corner(rectangle(0.0, 0.0, 1.0, 1.0), rectangle(2.0, 2.0, 1.0, 1.0), false)]
    #[case::overlap_x_only(rectangle(0.0, 0.0, 1.0, 1.0), rectangle(0.5, 5.0, 1.0, 1.0), false)]
    #[case::overlapping(rectangle(0.0, 0.0, 1.0, 1.0), rectangle(1.5, 1.5, 1.0, 1.0), true)]
    #[case::cross(rectangle(0.0, 0.0, 5.0, 0.5), rectangle(0.0, 0.0, 0.5, 5.0), true)]
    #[case::contained(rectangle(0.0, 0.0, 5.0, 5.0), rectangle(1.0, 1.0, 0.5, 0.5), true)]
    #[case::stacked_demo(rectangle(5.0, 3.0, 5.0, 3.0), rectangle(5.0, 13.0, 5.0, 3.0), false)]
    #[case::degenerate(rectangle(0.0, 0.0, 0.0, 0.0), rectangle(0.0, 0.0, 0.0, 0.0), false)]
    fn test_rectangles_overlap(#[case] a: Body, #[case] b: Body, #[case] expected: bool) {
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[rstest]
    #[case::corner_inside(circle(1.0, 1.0, 1.5), rectangle(0.0, 0.0, 1.0, 1.0), true)]
    #[case::corner_on_circle(circle(2.0, 1.0, 1.0), rectangle(0.0, 0.0, 1.0, 1.0), false)]
    #[case::extreme_point_inside(circle(0.0, 2.5, 2.0), rectangle(0.0, 0.0, 3.0, 1.0), true)]
    #[case::extreme_point_on_edge(circle(0.0, 3.0, 2.0), rectangle(0.0, 0.0, 3.0, 1.0), false)]
    #[case::circle_inside_rectangle(circle(0.0, 0.0, 1.0), rectangle(0.0, 0.0, 5.0, 5.0), true)]
    #[case::rectangle_inside_circle(circle(0.0, 0.0, 10.0), rectangle(0.0, 0.0, 1.0, 1.0), true)]
    #[case::matching_extents(circle(0.0, 0.0, 1.0), rectangle(0.0, 0.0, 1.0, 1.0), true)]
    #[case::far_apart(circle(20.0, 20.0, 1.0), rectangle(0.0, 0.0, 1.0, 1.0), false)]
    #[case::point_circle_inside(circle(0.0, 0.0, 0.0), rectangle(0.0, 0.0, 1.0, 1.0), true)]
    #[case::point_rectangle_inside(circle(0.0, 0.0, 1.0), rectangle(0.0, 0.0, 0.0, 0.0), true)]
    fn test_circle_rectangle_overlap(#[case] c: Body, #[case] r: Body, #[case] expected: bool) {
        assert_eq!(overlaps(&c, &r), expected);
        assert_eq!(overlaps(&r, &c), expected);
    }

    #[test]
    fn test_circle_rectangle_overlap_known_false_negative() {
        // The circle covers the rectangle's center, but its top lies above the rectangle and
        // every corner is outside the circle.
        let c = Circle::new(Position::new(0.0, -5.0), 6.5).unwrap();
        let r = Rectangle::new(Position::new(0.0, 0.0), 10.0, 1.0).unwrap();
        assert!(c.center().distance(r.center()) < c.radius());
        assert!(!circle_rectangle_overlap(&c, &r));
    }

    #[rstest]
    fn test_symmetry(
        #[values(
            circle(0.0, 0.0, 3.0),
            circle(4.0, 0.0, 1.0),
            rectangle(5.0, 3.0, 5.0, 3.0),
            rectangle(-2.0, 0.0, 1.0, 4.0),
            vehicle("empty", vec![]),
            demo_vehicle("A", 0.0),
            demo_vehicle("B", 8.5)
        )]
        a: Body,
        #[values(
            circle(0.0, 6.0, 3.0),
            rectangle(2.0, 2.0, 0.5, 0.5),
            rectangle(10.0, -3.0, 1.0, 1.0),
            vehicle("empty", vec![]),
            demo_vehicle("C", 25.0)
        )]
        b: Body,
    ) {
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
    }

    #[rstest]
    #[case::lone_circle_hits_first(circle(-2.0, 0.0, 1.0), true)]
    #[case::lone_circle_hits_second(circle(12.0, 0.0, 1.0), true)]
    #[case::lone_circle_misses_both(circle(5.0, 0.0, 1.0), false)]
    #[case::lone_rectangle_hits_both(rectangle(5.0, 0.0, 10.0, 0.5), true)]
    #[case::lone_rectangle_misses(rectangle(5.0, 10.0, 1.0, 1.0), false)]
    fn test_vehicle_expansion_matches_members(#[case] lone: Body, #[case] expected: bool) {
        let first = circle(0.0, 0.0, 3.0);
        let second = circle(10.0, 0.0, 3.0);
        let pair = vehicle("pair", vec![first.clone(), second.clone()]);

        let direct = overlaps(&lone, &first) || overlaps(&lone, &second);
        assert_eq!(direct, expected);
        assert_eq!(overlaps(&pair, &lone), direct);
        assert_eq!(overlaps(&lone, &pair), direct);
    }

    #[rstest]
    #[case(circle(0.0, 0.0, 100.0))]
    #[case(rectangle(0.0, 0.0, 100.0, 100.0))]
    #[case(vehicle("empty", vec![]))]
    #[case(demo_vehicle("A", 0.0))]
    fn test_empty_vehicle_overlaps_nothing(#[case] other: Body) {
        let empty = vehicle("empty", vec![]);
        assert!(!overlaps(&empty, &other));
        assert!(!overlaps(&other, &empty));
        assert!(!overlaps(&empty, &empty));
    }

    #[test]
    fn test_nested_vehicle() {
        let buried = circle(50.0, 50.0, 1.0);
        let level_3 = vehicle("level 3", vec![buried]);
        let level_2 = vehicle("level 2", vec![rectangle(-50.0, 0.0, 1.0, 1.0), level_3]);
        let level_1 = vehicle(
            "level 1",
            vec![circle(0.0, 0.0, 1.0), level_2, vehicle("empty", vec![])],
        );

        let probe = circle(51.0, 50.0, 0.5);
        assert!(overlaps(&level_1, &probe));
        assert!(overlaps(&probe, &level_1));

        let probe_vehicle = vehicle("probe", vec![vehicle("wrapped", vec![probe])]);
        assert!(overlaps(&level_1, &probe_vehicle));
        assert!(overlaps(&probe_vehicle, &level_1));

        let miss = vehicle("miss", vec![circle(25.0, 25.0, 1.0)]);
        assert!(!overlaps(&level_1, &miss));
    }

    #[rstest]
    #[case::demo(demo_vehicle("A", 0.0), true)]
    #[case::single_circle(vehicle("c", vec![circle(0.0, 0.0, 1.0)]), true)]
    #[case::single_point(vehicle("p", vec![circle(0.0, 0.0, 0.0)]), false)]
    #[case::disjoint_points(
        vehicle("pp", vec![circle(0.0, 0.0, 0.0), circle(5.0, 0.0, 0.0)]),
        false
    )]
    #[case::empty(vehicle("empty", vec![]), false)]
    fn test_vehicle_self_overlap(#[case] v: Body, #[case] expected: bool) {
        assert_eq!(overlaps(&v, &v), expected);
    }

    #[rstest]
    #[case::far_away(25.0, false)]
    #[case::rectangles_ten_apart(10.0, false)]
    #[case::corner_tangent(9.0, false)]
    #[case::corner_inside(8.5, true)]
    #[case::circles_tangent(6.0, true)]
    #[case::rectangles_overlap(5.0, true)]
    #[case::identical(0.0, true)]
    fn test_demo_vehicles(#[case] offset: f64, #[case] expected: bool) {
        let a = demo_vehicle("A", 0.0);
        let b = demo_vehicle("B", offset);
        assert_eq!(overlaps(&a, &b), expected);
        assert_eq!(overlaps(&b, &a), expected);
    }

    #[test]
    fn test_has_collision_on_concrete_types() {
        let c = Circle::new(Position::new(0.0, 0.0), 3.0).unwrap();
        let r = Rectangle::from_size(Position::new(5.0, 3.0), 10.0, 6.0).unwrap();
        let v = Vehicle::new("v").with_member(r).unwrap();
        assert!(c.has_collision(&r));
        assert!(r.has_collision(&c));
        assert!(v.has_collision(&c));
        assert!(!Vehicle::new("empty").has_collision(&v));
    }
}
