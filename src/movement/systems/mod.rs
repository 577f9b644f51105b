//! Movement domain: system modules for the controller's host wiring.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::resolve_wall_impacts;
pub(crate) use input::read_input;
pub(crate) use movement::apply_movement;
