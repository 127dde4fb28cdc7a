//! Overlap detection for the whole scene.
//!
//! Whenever the scene changes, all pairs of bodies are tested again and the overlapping pairs
//! are stored for the visualizer.

use bevy::prelude::*;
use vehicle_collision::domain::overlaps;

use crate::{
    controller::control,
    demo::describe,
    resource::{IntersectionsRes, SceneRes},
};

pub struct Detector;

impl Plugin for Detector {
    fn build(&self, app: &mut App) {
        app.init_resource::<IntersectionsRes>()
            .add_systems(Startup, report)
            .add_systems(Update, detect.after(control));
    }
}

/// Logs whether the first two bodies overlap.
fn report(scene: Res<SceneRes>) {
    if let [subject, target, ..] = scene.bodies() {
        info!(
            "{} overlaps {}: {}",
            describe(subject),
            describe(target),
            overlaps(subject, target)
        );
    }
}

fn detect(scene: Res<SceneRes>, mut intersections: ResMut<IntersectionsRes>) {
    if !scene.is_changed() {
        return;
    }

    let pairs = scene.intersections();
    if pairs != intersections.pairs() {
        info!(?pairs, "overlapping bodies changed");
        intersections.set_pairs(pairs);
    }
}
