//! Movement domain: jump phases, player state, and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Whether the player currently accepts input. While this is off the
/// controller holds vertical velocity, zeroes steering, and freezes the
/// jump phase.
#[derive(Component, Debug)]
pub struct Controllable {
    pub enabled: bool,
}

impl Default for Controllable {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Physics feedback: whether the foot ray hit ground this tick.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub on_ground: bool,
}

/// Discrete stage of the jump lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// One tick's snapshot of the jump state machine. The controller replaces
/// the whole value every tick; collaborators only read it.
///
/// `jump_requested` and `stop_requested` are transient: the vertical
/// velocity resolution consumes them in the same tick they are raised, so a
/// stored snapshot always carries them `false`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementState {
    pub phase: JumpPhase,
    pub jump_requested: bool,
    pub stop_requested: bool,
    /// x is the raw horizontal axis value, y the vertical speed.
    pub velocity: Vec2,
}

impl MovementState {
    pub fn with_phase(self, phase: JumpPhase) -> Self {
        Self { phase, ..self }
    }

    pub fn with_jump_requested(self, jump_requested: bool) -> Self {
        Self {
            jump_requested,
            ..self
        }
    }

    pub fn with_stop_requested(self, stop_requested: bool) -> Self {
        Self {
            stop_requested,
            ..self
        }
    }

    pub fn with_velocity(self, velocity: Vec2) -> Self {
        Self { velocity, ..self }
    }
}
