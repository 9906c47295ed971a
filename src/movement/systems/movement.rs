//! Movement domain: the per-tick kinematic controller.

use bevy::prelude::*;

use crate::core::{EventSink, SoundCue};
use crate::movement::{Facing, MotionState, MovementInput, MovementTuning, Player};
use crate::rooms::CollisionWorld;

impl Player {
    /// Advances the player one fixed tick.
    pub fn step(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        world: &(impl CollisionWorld + ?Sized),
        events: &mut impl EventSink,
    ) {
        self.apply_interaction_edges(input);

        if input.jump_pressed {
            self.try_jump(tuning, events);
        }

        apply_horizontal_input(self, input, tuning);
        self.velocity.y += tuning.gravity;

        self.move_horizontal(world);
        self.move_vertical(world);

        self.motion = derive_motion(self);
    }

    /// Jumping is only possible from the ground; otherwise a no-op.
    pub fn try_jump(&mut self, tuning: &MovementTuning, events: &mut impl EventSink) -> bool {
        if !self.on_ground {
            return false;
        }

        self.velocity.y = -tuning.jump_strength;
        self.jumping = true;
        self.on_ground = false;
        self.motion = MotionState::Jump;
        events.play(SoundCue::Jump);
        debug!("Jump from y={}", self.position.y);
        true
    }

    /// Press edges set the intent, release edges clear it.
    pub fn apply_interaction_edges(&mut self, input: &MovementInput) {
        if input.interact_pressed {
            self.interacting = true;
        } else if input.interact_released {
            self.interacting = false;
        }
    }

    /// A press and release latched into the same tick act as a one-tick tap,
    /// unless the press came last and the key is still held.
    pub fn finish_interaction_tap(&mut self, input: &MovementInput) {
        if input.interact_pressed
            && input.interact_released
            && input.interact_last_pressed != Some(true)
        {
            self.interacting = false;
        }
    }
}

/// Instantaneous velocity: -speed, 0 or +speed. Left wins when both are held.
fn apply_horizontal_input(player: &mut Player, input: &MovementInput, tuning: &MovementTuning) {
    player.velocity.x = 0.0;
    if input.left {
        player.velocity.x = -tuning.speed;
        player.facing = Facing::Left;
    } else if input.right {
        player.velocity.x = tuning.speed;
        player.facing = Facing::Right;
    }
}

pub(crate) fn derive_motion(player: &Player) -> MotionState {
    match (player.on_ground, player.velocity.x != 0.0) {
        (true, true) => MotionState::Walk,
        (true, false) => MotionState::Idle,
        (false, _) if player.velocity.y < 0.0 => MotionState::Jump,
        (false, _) => MotionState::Fall,
    }
}
