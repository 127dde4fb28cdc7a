//! Demo scene: the two vehicles to compare plus optional random debris.

use bevy::ecs::system::Resource;
use rand::{
    distr::{uniform, Distribution, Uniform},
    Rng,
};
use thiserror::Error;
use vehicle_collision::domain::{
    Body, Bounds, Circle, Position, Rectangle, Scene, ShapeError, Vehicle, VehicleError,
};

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct DemoConfig {
    /// Vertical distance between vehicle "A" and vehicle "B".
    pub vehicle_offset: f64,
    /// Units per second a body moves while an arrow key is held.
    pub move_speed: f64,
    pub max_debris: usize,
    pub rng_seed: u64,
    pub pixels_per_unit: f32,
}

impl DemoConfig {
    pub const fn new(
        vehicle_offset: f64,
        move_speed: f64,
        max_debris: usize,
        rng_seed: u64,
        pixels_per_unit: f32,
    ) -> Self {
        DemoConfig {
            vehicle_offset,
            move_speed,
            max_debris,
            rng_seed,
            pixels_per_unit,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(25.0, 8.0, 16, 19878367467712, 12.0)
    }
}

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("invalid shape: {0}")]
    Shape(#[from] ShapeError),
    #[error("invalid vehicle: {0}")]
    Vehicle(#[from] VehicleError),
    #[error("invalid sampling range: {0}")]
    Sampling(#[from] uniform::Error),
}

/// Two wheels and a body, shifted upwards by `offset`.
pub fn create_vehicle(label: &str, offset: f64) -> Result<Vehicle, DemoError> {
    Ok(Vehicle::new(label)
        .with_member(Circle::new(Position::new(0.0, offset), 3.0)?)?
        .with_member(Circle::new(Position::new(10.0, offset), 3.0)?)?
        .with_member(Rectangle::from_size(
            Position::new(5.0, 3.0 + offset),
            10.0,
            6.0,
        )?)?)
}

pub fn create_scene(config: &DemoConfig) -> Result<Scene, DemoError> {
    Ok(Scene::new(vec![
        create_vehicle("A", 0.0)?.into(),
        create_vehicle("B", config.vehicle_offset)?.into(),
    ]))
}

/// A circle or square placed uniformly within `area`.
pub fn create_debris(rng: &mut impl Rng, area: Bounds) -> Result<Body, DemoError> {
    let x = Uniform::new_inclusive(area.min().x(), area.max().x())?;
    let y = Uniform::new_inclusive(area.min().y(), area.max().y())?;
    let size = Uniform::new_inclusive(0.5, 2.5)?;
    let center = Position::new(x.sample(rng), y.sample(rng));

    Ok(if rng.random_bool(0.5) {
        Circle::new(center, size.sample(rng))?.into()
    } else {
        let half_length = size.sample(rng);
        Rectangle::new(center, half_length, half_length)?.into()
    })
}

pub fn describe(body: &Body) -> String {
    match body {
        Body::Circle(circle) => format!("circle r={:.1}", circle.radius()),
        Body::Rectangle(rectangle) => {
            format!("rectangle {:.1}x{:.1}", rectangle.width(), rectangle.height())
        }
        Body::Vehicle(vehicle) => format!("vehicle {}", vehicle.label()),
    }
}
