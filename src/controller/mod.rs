//! Controller domain: the engine-agnostic dash/stick state machine.
//!
//! Nothing in here touches input devices, physics, or the scene. The
//! controller consumes one [`InputSnapshot`] per fixed tick, returns the
//! velocity the physics body should take, and accepts wall-impact
//! notifications through [`MovementController::on_wall_hit`].

mod state;
mod tuning;

pub use state::{InputSnapshot, Mode, MovementController};
pub use tuning::{MovementTuning, TuningError};
