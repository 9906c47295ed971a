//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

/// Samples held directions and latches edges until the next fixed tick
/// consumes them.
pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);

    input.jump_pressed |= keyboard.just_pressed(KeyCode::Space);
    let pressed = keyboard.just_pressed(KeyCode::KeyE);
    let released = keyboard.just_released(KeyCode::KeyE);
    input.interact_pressed |= pressed;
    input.interact_released |= released;
    if pressed || released {
        // Within one frame the held state tells which edge came last.
        input.interact_last_pressed = Some(keyboard.pressed(KeyCode::KeyE));
    }
}
