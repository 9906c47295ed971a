//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-tick movement constants. Units are pixels and pixels per tick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_strength: f32,
    pub gravity: f32,
    pub player_width: f32,
    pub player_height: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 5.0,
            jump_strength: 15.0,
            gravity: 0.8,
            player_width: 50.0,
            player_height: 80.0,
        }
    }
}

impl MovementTuning {
    pub fn player_size(&self) -> Vec2 {
        Vec2::new(self.player_width, self.player_height)
    }

    /// Apex of a standing jump: h = v^2 / (2g) in the discrete per-tick model,
    /// ignoring the half-step error.
    pub fn jump_height(&self) -> f32 {
        self.jump_strength * self.jump_strength / (2.0 * self.gravity)
    }
}

/// Input intents for the next fixed tick.
///
/// Held directions are sampled; jump and interact are edges latched between
/// ticks so that presses landing between fixed steps are not lost.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub jump_pressed: bool,
    pub interact_pressed: bool,
    pub interact_released: bool,
    /// Direction of the most recent interact edge (`Some(true)` for a press)
    /// when both edges were latched since the last tick.
    pub interact_last_pressed: Option<bool>,
}

impl MovementInput {
    pub fn clear_edges(&mut self) {
        self.jump_pressed = false;
        self.interact_pressed = false;
        self.interact_released = false;
        self.interact_last_pressed = None;
    }
}
