//! Movement domain: input sampling for the controller loop.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal_axis = x;
    input.jump_just_pressed =
        keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK);
    input.jump_just_released =
        keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK);
}
