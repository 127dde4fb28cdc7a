use bevy::prelude::*;

mod controller;
mod demo;
mod detector;
mod resource;
mod visualizer;

fn main() {
    let config = demo::DemoConfig::default();

    App::new()
        .add_plugins(DefaultPlugins)
        .insert_resource(resource::RngRes::new(config.rng_seed))
        .insert_resource(config)
        .add_plugins(controller::Controller)
        .add_plugins(detector::Detector)
        .add_plugins(visualizer::Visualizer)
        .run();
}
