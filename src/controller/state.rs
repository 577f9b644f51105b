//! Controller domain: the dash/stick state machine itself.

use bevy::prelude::*;

use super::tuning::{MovementTuning, TuningError};

/// One fixed tick's worth of input. Rebuilt every tick by the host;
/// `move_direction` is unit length or zero, `dash_pressed` is true only on
/// the tick the dash button went down.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub move_direction: Vec2,
    pub sprinting: bool,
    pub dash_pressed: bool,
}

/// Exclusive movement modes. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Dashing,
    StuckToWall,
}

/// Per-actor movement state machine: ramped walk/sprint speed, a timed
/// dash with cooldown, and the wall-stick triggered by dashing into a
/// wall.
///
/// Drive it with one [`tick`](Self::tick) per fixed simulation step and
/// call [`on_wall_hit`](Self::on_wall_hit) between the physics step that
/// detected a wall impact and the next tick. Dash phases are explicit
/// elapsed-time counters, advanced only inside `tick`.
#[derive(Component, Debug)]
pub struct MovementController {
    tuning: MovementTuning,
    mode: Mode,
    current_speed: f32,
    dash_ready: bool,
    dash_direction: Vec2,
    skip_cooldown: bool,
    dash_elapsed: f32,
    cooldown_elapsed: f32,
    cooling_down: bool,
}

impl MovementController {
    /// Build a controller from validated tuning. Non-positive parameters
    /// are a configuration error and are rejected here.
    pub fn new(tuning: MovementTuning) -> Result<Self, Vec<TuningError>> {
        tuning.validate()?;
        Ok(Self {
            current_speed: tuning.base_speed,
            tuning,
            mode: Mode::Normal,
            dash_ready: true,
            dash_direction: Vec2::ZERO,
            skip_cooldown: false,
            dash_elapsed: 0.0,
            cooldown_elapsed: 0.0,
            cooling_down: false,
        })
    }

    /// Advance one fixed step and return the velocity the body should
    /// take this tick.
    pub fn tick(&mut self, input: &InputSnapshot, dt: f32) -> Vec2 {
        match self.mode {
            Mode::Normal => self.normal_tick(input, dt),
            Mode::Dashing => self.dash_tick(input, dt),
            Mode::StuckToWall => self.stuck_tick(input),
        }
    }

    /// Wall impact notification from the physics collaborator. Only
    /// meaningful mid-dash; any other mode ignores it.
    pub fn on_wall_hit(&mut self) {
        if self.mode != Mode::Dashing {
            return;
        }
        self.mode = Mode::StuckToWall;
        // An interrupted dash never finishes its cooldown. Whether the
        // dash re-arms depends entirely on how the player unsticks.
        self.cooling_down = false;
    }

    fn normal_tick(&mut self, input: &InputSnapshot, dt: f32) -> Vec2 {
        if self.cooling_down {
            self.cooldown_elapsed += dt;
            if self.cooldown_elapsed >= self.tuning.dash_cooldown {
                self.cooling_down = false;
                self.dash_ready = true;
            }
        }

        let target_speed = if input.sprinting {
            self.tuning.base_speed * self.tuning.sprint_multiplier
        } else {
            self.tuning.base_speed
        };
        let rate = if target_speed > self.current_speed {
            self.tuning.acceleration
        } else {
            self.tuning.deceleration
        };
        let t = (rate * dt).clamp(0.0, 1.0);
        self.current_speed += (target_speed - self.current_speed) * t;

        // A dash press preempts this tick's ramped output entirely.
        if input.dash_pressed && self.dash_ready && input.move_direction != Vec2::ZERO {
            self.begin_dash(input.move_direction, false);
            return self.dash_direction * self.tuning.dash_power;
        }

        input.move_direction * self.current_speed
    }

    fn dash_tick(&mut self, input: &InputSnapshot, dt: f32) -> Vec2 {
        self.dash_elapsed += dt;
        if self.dash_elapsed < self.tuning.dash_duration {
            return self.dash_direction * self.tuning.dash_power;
        }

        // Dash over: control returns to normal ramping this same tick,
        // from whatever current_speed was before the dash. The cooldown is
        // an independent countdown that starts on the next tick.
        self.mode = Mode::Normal;
        let velocity = self.normal_tick(input, dt);
        if self.skip_cooldown {
            self.dash_ready = true;
        } else {
            self.cooling_down = true;
            self.cooldown_elapsed = 0.0;
        }
        velocity
    }

    fn stuck_tick(&mut self, input: &InputSnapshot) -> Vec2 {
        // Dashing off the wall skips the cooldown and needs no dash_ready.
        if input.dash_pressed && input.move_direction != Vec2::ZERO {
            self.begin_dash(input.move_direction, true);
            return self.dash_direction * self.tuning.dash_power;
        }

        // Sprinting drops off the wall without a dash. dash_ready is left
        // untouched (usually false), and the cooldown stays stopped: only
        // a wall dash re-arms the dash after a stick.
        if input.sprinting {
            self.mode = Mode::Normal;
        }

        Vec2::ZERO
    }

    fn begin_dash(&mut self, direction: Vec2, skip_cooldown: bool) {
        self.mode = Mode::Dashing;
        self.dash_direction = direction.normalize();
        self.dash_elapsed = 0.0;
        self.dash_ready = false;
        self.skip_cooldown = skip_cooldown;
        self.cooling_down = false;
        self.cooldown_elapsed = 0.0;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Ramped scalar speed used in `Normal` mode.
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    pub fn dash_ready(&self) -> bool {
        self.dash_ready
    }

    /// Seconds until the dash re-arms, zero when no cooldown is running.
    pub fn cooldown_remaining(&self) -> f32 {
        if self.cooling_down {
            (self.tuning.dash_cooldown - self.cooldown_elapsed).max(0.0)
        } else {
            0.0
        }
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }
}
