//! Debug overlay for fast movement iteration.
//!
//! F1 toggles a small text readout of the controller's state: mode,
//! ramped speed, dash readiness, remaining cooldown.

use bevy::prelude::*;

use crate::controller::MovementController;
use crate::movement::Player;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

/// Marker for the overlay text
#[derive(Component, Debug)]
pub struct DebugOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

/// Toggle the overlay with F1
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.overlay_visible = !debug_state.overlay_visible;

    if debug_state.overlay_visible {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<&MovementController, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugOverlay>>,
) {
    if !debug_state.overlay_visible {
        return;
    }

    if let (Some(controller), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format!(
            "Mode: {:?}\nSpeed: {:.1}\nDash ready: {}\nCooldown: {:.2}s",
            controller.mode(),
            controller.current_speed(),
            controller.dash_ready(),
            controller.cooldown_remaining()
        );
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
