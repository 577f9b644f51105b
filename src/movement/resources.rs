//! Movement domain: sampled input resource.

use bevy::prelude::*;

/// Raw input sampled once per frame in `Update` and consumed once per
/// fixed tick. `dash_pressed` is latched: a press between two fixed steps
/// stays set until the next tick consumes it, so edges are neither lost
/// nor double-counted.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub sprinting: bool,
    pub dash_pressed: bool,
}
