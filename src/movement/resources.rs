//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Max horizontal speed of the player.
    pub max_speed: f32,
    /// Initial vertical velocity at the start of a jump, before the modifier.
    pub jump_take_off_speed: f32,
    /// Scales the takeoff speed.
    pub jump_modifier: f32,
    /// Damping applied to an ascending jump when the button is released early.
    pub jump_deceleration: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            jump_take_off_speed: 450.0,
            jump_modifier: 1.5,
            jump_deceleration: 0.5,
            gravity: 1800.0,
        }
    }
}

impl MovementTuning {
    /// Vertical speed actually imparted at takeoff.
    pub fn takeoff_velocity(&self) -> f32 {
        self.jump_take_off_speed * self.jump_modifier
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1].
    pub horizontal_axis: f32,
    /// True only on the tick the jump button went down.
    pub jump_just_pressed: bool,
    /// True only on the tick the jump button was released.
    pub jump_just_released: bool,
}
