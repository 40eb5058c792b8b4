//! Core domain: camera and control toggling.

use bevy::prelude::*;

use crate::movement::{Controllable, Player};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, toggle_player_control);
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Escape freezes/unfreezes player control. While control is off the state
/// machine holds phase and vertical velocity and zeroes steering.
pub(crate) fn toggle_player_control(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<&mut Controllable, With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    for mut controllable in &mut query {
        controllable.enabled = !controllable.enabled;
        info!("Player control enabled: {}", controllable.enabled);
    }
}
