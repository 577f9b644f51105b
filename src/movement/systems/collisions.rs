//! Movement domain: wall impact detection for the dash stick.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controller::{Mode, MovementController};
use crate::movement::{Player, Wall};

/// Forward wall impacts from the previous physics step into the state
/// machine. Runs before `apply_movement` so a collision always resolves
/// before the next movement decision.
pub(crate) fn resolve_wall_impacts(
    mut collision_events: MessageReader<CollisionStart>,
    walls: Query<(), With<Wall>>,
    mut players: Query<(&mut MovementController, &mut LinearVelocity), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, wall_entity) in pairs {
            let Ok((mut controller, mut velocity)) = players.get_mut(player_entity) else {
                continue;
            };
            if walls.get(wall_entity).is_err() {
                continue;
            }

            // Only a dash sticks; brushing a wall while walking is handled
            // by the solver alone.
            if controller.mode() != Mode::Dashing {
                continue;
            }

            controller.on_wall_hit();
            velocity.0 = Vec2::ZERO;
            debug!("Dash hit a wall, sticking");
        }
    }
}
