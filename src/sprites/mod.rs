//! Sprites domain: syncing the renderer and animator with movement state.


use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundContact, JumpPhase, MovementSet, MovementState, MovementTuning, Player};

/// Discrete animation states for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

/// Mirror of what the state machine pushes to the animator every tick.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub grounded: bool,
    /// Horizontal speed as a fraction of the tuned maximum.
    pub normalized_speed: f32,
}

/// Pick the animation for one tick of movement.
pub fn animation_state_for(phase: JumpPhase, velocity: Vec2) -> AnimationState {
    match phase {
        JumpPhase::Jumping | JumpPhase::InFlight if velocity.y > 0.0 => AnimationState::Jump,
        JumpPhase::Jumping | JumpPhase::InFlight => AnimationState::Fall,
        _ if velocity.x.abs() > 0.01 => AnimationState::Run,
        _ => AnimationState::Idle,
    }
}

pub(crate) fn update_sprite_facing(mut query: Query<(&MovementState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        if state.velocity.x > 0.01 {
            sprite.flip_x = false;
        } else if state.velocity.x < -0.01 {
            sprite.flip_x = true;
        }
    }
}

pub(crate) fn update_animator(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &MovementState,
            &GroundContact,
            &LinearVelocity,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    for (state, contact, velocity, mut animator) in &mut query {
        animator.grounded = contact.on_ground;
        animator.normalized_speed = velocity.x.abs() / tuning.max_speed;
        animator.state = animation_state_for(state.phase, state.velocity);
    }
}

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_sprite_facing, update_animator).in_set(MovementSet::Effects),
        );
    }
}
