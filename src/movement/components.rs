//! Movement domain: markers and physics layers for the player and walls.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Wall surfaces that a dash can stick to
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
