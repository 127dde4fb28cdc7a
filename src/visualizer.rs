//! 2D visualization.

use bevy::prelude::*;
use vehicle_collision::domain::{Body, Position};

use crate::{
    demo::{describe, DemoConfig},
    resource::{IntersectionsRes, SceneRes, SelectionRes},
};

pub struct Visualizer;

impl Plugin for Visualizer {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, set_up)
            .add_systems(Update, (draw_bodies, update_text, handle_keyboard_input))
            .insert_resource(Overlay { show_text: true });
    }
}

#[derive(Resource)]
struct Overlay {
    show_text: bool,
}

const OVERLAPPING_COLOR: Color = Color::RED;
const SELECTED_COLOR: Color = Color::YELLOW;
const DEFAULT_COLOR: Color = Color::WHITE;

fn set_up(mut commands: Commands, scene: Res<SceneRes>, config: Res<DemoConfig>) {
    create_camera(&mut commands, &scene, &config);
    create_text(&mut commands);
}

fn create_camera(commands: &mut Commands, scene: &SceneRes, config: &DemoConfig) {
    let focus = scene
        .bounds()
        .map(|bounds| bounds.center())
        .unwrap_or_default();
    let focus = to_bevy_position(focus, config.pixels_per_unit);

    let mut camera = Camera2dBundle::default();
    camera.transform.translation.x = focus.x;
    camera.transform.translation.y = focus.y;
    commands.spawn(camera);
}

fn create_text(commands: &mut Commands) {
    let text_style = TextStyle {
        font_size: 20.0,
        ..default()
    };
    commands.spawn(
        TextBundle::from_sections(vec![TextSection::new("", text_style.clone())]).with_style(
            Style {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                ..default()
            },
        ),
    );
}

fn draw_bodies(
    mut gizmos: Gizmos,
    scene: Res<SceneRes>,
    intersections: Res<IntersectionsRes>,
    selection: Res<SelectionRes>,
    config: Res<DemoConfig>,
) {
    for (idx, body) in scene.bodies().iter().enumerate() {
        let color = if intersections.involves(idx) {
            OVERLAPPING_COLOR
        } else if selection.index() == idx {
            SELECTED_COLOR
        } else {
            DEFAULT_COLOR
        };
        body.for_each_primitive(&mut |primitive| {
            draw_primitive(&mut gizmos, primitive, color, config.pixels_per_unit)
        });

        if selection.index() == idx {
            if let Some(bounds) = body.bounds() {
                gizmos.rect_2d(
                    to_bevy_position(bounds.center(), config.pixels_per_unit),
                    0.0,
                    Vec2::new(bounds.width() as f32, bounds.height() as f32)
                        * config.pixels_per_unit,
                    SELECTED_COLOR.with_a(0.3),
                );
            }
        }
    }
}

fn draw_primitive(gizmos: &mut Gizmos, primitive: &Body, color: Color, pixels_per_unit: f32) {
    match primitive {
        Body::Circle(circle) => {
            gizmos.circle_2d(
                to_bevy_position(circle.center(), pixels_per_unit),
                circle.radius() as f32 * pixels_per_unit,
                color,
            );
        }
        Body::Rectangle(rectangle) => {
            gizmos.rect_2d(
                to_bevy_position(rectangle.center(), pixels_per_unit),
                0.0,
                Vec2::new(rectangle.width() as f32, rectangle.height() as f32) * pixels_per_unit,
                color,
            );
        }
        Body::Vehicle(_) => {}
    }
}

fn update_text(
    mut text: Query<&mut Text>,
    overlay: Res<Overlay>,
    scene: Res<SceneRes>,
    intersections: Res<IntersectionsRes>,
    selection: Res<SelectionRes>,
) {
    let mut text = text.single_mut();
    if overlay.show_text {
        let selected = scene
            .body(selection.index())
            .map_or("---".to_string(), describe);
        let overlapping = if intersections.pairs().is_empty() {
            "none".to_string()
        } else {
            intersections
                .pairs()
                .iter()
                .map(|(i, j)| format!("{i}-{j}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        text.sections[0].value = format!("SEL: {selected}   OVERLAPS: {overlapping}");
    } else {
        text.sections[0].value = String::new();
    }
}

fn handle_keyboard_input(keys: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<Overlay>) {
    if keys.just_pressed(KeyCode::KeyT) {
        overlay.show_text = !overlay.show_text;
    }
}

fn to_bevy_position(position: Position, pixels_per_unit: f32) -> Vec2 {
    Vec2::new(position.x() as f32, position.y() as f32) * pixels_per_unit
}
