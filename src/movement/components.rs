//! Movement domain: player kinematic state.

use bevy::prelude::*;

use crate::geometry::Bounds;
use crate::memory::MemoryInventory;
use crate::rooms::PlatformIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Animation state derived from the resolved motion of the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
}

#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner in room space, sub-pixel.
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: Vec2,
    pub facing: Facing,
    /// Recomputed by vertical collision resolution every tick.
    pub on_ground: bool,
    pub jumping: bool,
    pub motion: MotionState,
    pub interacting: bool,
    /// Platform that supported the player last tick. Lookup only; cleared
    /// whenever the room is rebuilt.
    pub riding: Option<PlatformIndex>,
    pub memories: MemoryInventory,
}

impl Player {
    pub fn new(start: Vec2, size: Vec2) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            size,
            facing: Facing::default(),
            on_ground: false,
            jumping: false,
            motion: MotionState::default(),
            interacting: false,
            riding: None,
            memories: MemoryInventory::default(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_position(self.position, self.size)
    }

    /// Moves the player into a freshly loaded room.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.riding = None;
    }
}
