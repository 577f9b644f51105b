//! Movement domain: player and arena spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{MovementController, MovementTuning};
use crate::movement::{GameLayer, Player, Wall};

pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<MovementTuning>) {
    let controller = match MovementController::new(tuning.clone()) {
        Ok(controller) => controller,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            return;
        }
    };

    info!(
        "Spawning player: base_speed={}, dash_power={}, dash_duration={}",
        tuning.base_speed, tuning.dash_power, tuning.dash_duration
    );

    commands.spawn((
        // Identity & Movement
        (Player, controller),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(28.0, 28.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(28.0, 28.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // Top-down: the controller owns all velocity
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Wall]),
        ),
    ));
}

pub(crate) fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let pillar_color = Color::srgb(0.45, 0.35, 0.3);

    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    let mut spawn_wall = |color: Color, size: Vec2, position: Vec2| {
        commands.spawn((
            Wall,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(position.x, position.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            wall_layers,
        ));
    };

    // Arena boundary
    spawn_wall(wall_color, Vec2::new(1200.0, 40.0), Vec2::new(0.0, 340.0));
    spawn_wall(wall_color, Vec2::new(1200.0, 40.0), Vec2::new(0.0, -340.0));
    spawn_wall(wall_color, Vec2::new(40.0, 720.0), Vec2::new(-580.0, 0.0));
    spawn_wall(wall_color, Vec2::new(40.0, 720.0), Vec2::new(580.0, 0.0));

    // Free-standing pillars for dash-stick practice
    spawn_wall(pillar_color, Vec2::new(40.0, 160.0), Vec2::new(-220.0, 100.0));
    spawn_wall(pillar_color, Vec2::new(40.0, 160.0), Vec2::new(220.0, -100.0));
    spawn_wall(pillar_color, Vec2::new(160.0, 40.0), Vec2::new(0.0, -160.0));
}
