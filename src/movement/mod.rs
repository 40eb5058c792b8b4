//! Movement domain: the jump state machine and its controller loop.
//!
//! The transition itself lives in [`step`] as a pure function; the systems
//! here only sample collaborators (input, physics) for it and commit its
//! output (velocity, scheduled events) afterwards.

mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod step;
mod systems;


pub use components::{
    Controllable, GameLayer, Ground, GroundContact, JumpPhase, MovementState, Player,
};
pub use events::{JumpStoppedEvent, JumpedEvent, LandedEvent};
pub use resources::{MovementInput, MovementTuning};
pub use step::{StepOutput, TickInput, step};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::{apply_gravity, detect_ground, read_input, tick_controller};

/// Stages of one simulation tick. Velocity is committed in `Step`; the
/// scheduler drain and its listeners run in `Effects`, after the commit.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Sample,
    Step,
    Effects,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (MovementSet::Sample, MovementSet::Step, MovementSet::Effects).chain(),
            )
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (read_input, detect_ground).in_set(MovementSet::Sample),
            )
            .add_systems(
                Update,
                (tick_controller, apply_gravity)
                    .chain()
                    .in_set(MovementSet::Step),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_test_room)
            .add_systems(Update, dev::reset_player.in_set(MovementSet::Sample));
    }
}

fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Player,
        Controllable::default(),
        MovementState::default(),
        GroundContact::default(),
        crate::sprites::AnimationController::default(),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(Vec2::new(24.0, 48.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is integrated by apply_gravity
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
