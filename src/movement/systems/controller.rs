//! Movement domain: the per-tick controller loop and gravity.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::step::{TickInput, step};
use crate::movement::{
    Controllable, GroundContact, MovementInput, MovementState, MovementTuning, Player,
};
use crate::scheduler::{EventScheduler, ScheduledEvent};

/// Runs the transition once per tick and commits the result: replaces the
/// state snapshot, hands the kinematic velocity to the physics body, and
/// queues whatever the transition decided. Velocity is committed before the
/// scheduler drains.
pub(crate) fn tick_controller(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut scheduler: ResMut<EventScheduler>,
    mut query: Query<
        (
            Entity,
            &mut MovementState,
            &Controllable,
            &GroundContact,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
) {
    for (entity, mut state, controllable, contact, mut velocity) in &mut query {
        let tick = TickInput {
            horizontal_axis: input.horizontal_axis,
            jump_pressed: input.jump_just_pressed,
            jump_released: input.jump_just_released,
        };

        let out = step(
            *state,
            tick,
            contact.on_ground,
            velocity.y,
            controllable.enabled,
            &tuning,
        );

        set_kinematic_velocity(&mut velocity, out.state.velocity, tuning.max_speed);
        *state = out.state;

        for kind in out.events {
            scheduler.schedule(ScheduledEvent {
                actor: entity,
                kind,
            });
        }
    }
}

/// Apply hook from the state machine to the physics body: vertical speed
/// verbatim, horizontal axis scaled to world speed.
fn set_kinematic_velocity(velocity: &mut LinearVelocity, resolved: Vec2, max_speed: f32) {
    velocity.x = resolved.x * max_speed;
    velocity.y = resolved.y;
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.y -= tuning.gravity * dt;
    }
}
