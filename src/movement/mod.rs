//! Movement domain: host wiring around the dash/stick controller.
//!
//! The controller itself lives in [`crate::controller`] and knows nothing
//! about Bevy schedules or avian. This module supplies its collaborators:
//! input sampling, the fixed-tick driver, wall impact detection, tuning
//! loading, and the player/arena bootstrap.

mod bootstrap;
mod components;
mod loader;
mod resources;
mod systems;

pub use components::{GameLayer, Player, Wall};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_arena, spawn_player};
use crate::movement::loader::load_movement_tuning;
use crate::movement::systems::{apply_movement, read_input, resolve_wall_impacts};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(
                Startup,
                (load_movement_tuning, spawn_arena, spawn_player).chain(),
            )
            .add_systems(Update, read_input)
            // Impacts from the previous physics step resolve before this
            // tick's movement decision.
            .add_systems(FixedUpdate, (resolve_wall_impacts, apply_movement).chain());
    }
}
