//! Keyboard control of the scene.
//!
//! The arrow keys move the selected body, `Tab` selects the next body, `N` drops a random piece of
//! debris into the scene and `R` restores the initial scene.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use vehicle_collision::domain::{Bounds, Position, Scene};

use crate::{
    demo::{create_debris, create_scene, describe, DemoConfig},
    resource::{RngRes, SceneRes, SelectionRes},
};

pub struct Controller;

impl Plugin for Controller {
    fn build(&self, app: &mut App) {
        let config = app
            .world
            .get_resource::<DemoConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(initial_scene(&config))
            .init_resource::<SelectionRes>()
            .add_systems(Update, control);
    }
}

pub fn control(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<DemoConfig>,
    mut selection: ResMut<SelectionRes>,
    mut scene: ResMut<SceneRes>,
    mut rng: ResMut<RngRes>,
) {
    if keys.just_pressed(KeyCode::KeyR) {
        *scene = initial_scene(&config);
        *rng = RngRes::new(config.rng_seed);
        selection.reset();
        info!("scene reset");
    }

    if keys.just_pressed(KeyCode::Tab) {
        selection.select_next(scene.len());
    }

    if keys.just_pressed(KeyCode::KeyN) {
        add_debris(&config, &mut scene, &mut rng);
    }

    let direction = [
        (KeyCode::ArrowUp, Position::new(0.0, 1.0)),
        (KeyCode::ArrowDown, Position::new(0.0, -1.0)),
        (KeyCode::ArrowLeft, Position::new(-1.0, 0.0)),
        (KeyCode::ArrowRight, Position::new(1.0, 0.0)),
    ]
    .into_iter()
    .filter(|(key, _)| keys.pressed(*key))
    .fold(Position::default(), |direction, (_, step)| direction + step);

    if direction != Position::default() {
        let distance = config.move_speed * time.delta_seconds_f64();
        scene.translate_body(
            selection.index(),
            Position::new(direction.x() * distance, direction.y() * distance),
        );
    }
}

fn initial_scene(config: &DemoConfig) -> SceneRes {
    create_scene(config)
        .unwrap_or_else(|err| {
            error!("failed to create demo scene: {err}");
            Scene::default()
        })
        .into()
}

fn add_debris(config: &DemoConfig, scene: &mut Scene, rng: &mut ChaCha8Rng) {
    if scene.len() >= 2 + config.max_debris {
        info!(max_debris = config.max_debris, "debris limit reached");
        return;
    }

    let area = scene
        .bounds()
        .unwrap_or(Bounds::new(Position::new(-10.0, -10.0), Position::new(10.0, 10.0)));

    match create_debris(rng, area) {
        Ok(debris) => {
            let description = describe(&debris);
            let idx = scene.push(debris);
            info!(idx, "added debris: {description}");
        }
        Err(err) => error!("failed to create debris: {err}"),
    }
}
