//! Movement domain: the fixed-tick driver for the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::{InputSnapshot, MovementController};
use crate::movement::{MovementInput, Player};

/// Build this tick's input snapshot, advance the state machine, and hand
/// the resulting velocity to the physics body.
pub(crate) fn apply_movement(
    time: Res<Time>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(&mut MovementController, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    let snapshot = InputSnapshot {
        // Normalize so diagonals are no faster than straight movement.
        move_direction: input.axis.normalize_or_zero(),
        sprinting: input.sprinting,
        dash_pressed: input.dash_pressed,
    };

    for (mut controller, mut velocity) in &mut query {
        velocity.0 = controller.tick(&snapshot, dt);
    }

    // Edge consumed by this tick.
    input.dash_pressed = false;
}
