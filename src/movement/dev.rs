//! Movement domain: debug-only room and reset so the sandbox is playable.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, MovementState, Player};
use crate::scheduler::EventScheduler;

/// R resets the run: player back at the spawn point with a fresh state,
/// pending scheduled events discarded without executing.
pub(crate) fn reset_player(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut scheduler: ResMut<EventScheduler>,
    mut query: Query<(&mut Transform, &mut LinearVelocity, &mut MovementState), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    scheduler.clear();
    for (mut transform, mut velocity, mut state) in &mut query {
        transform.translation = Vec3::new(0.0, 100.0, 0.0);
        *velocity = LinearVelocity::default();
        *state = MovementState::default();
    }
    info!("Player reset");
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(800.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(800.0, 40.0),
        ground_layers,
    ));

    // Platform 1 - left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));

    // Platform 2 - right side, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(250.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        ground_layers,
    ));
}
