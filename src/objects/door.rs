//! Objects domain: doors that open once and then act as room exits.

use bevy::prelude::*;

use crate::core::{EventSink, SoundCue};
use crate::geometry::Bounds;
use crate::memory::MemoryKind;
use crate::objects::{Activation, Interactive, InteractionContext, ObjectKind, RenderData};

pub const DOOR_OPEN_DURATION_MS: u64 = 500;
pub const DOOR_REACH: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    Closed,
    Opening { started_at: u64 },
    Open,
}

/// Where an open door sends the player.
#[derive(Debug, Clone, PartialEq)]
pub struct DoorTarget {
    pub room_id: String,
    pub spawn: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Door {
    pub bounds: Bounds,
    pub required: Option<MemoryKind>,
    pub target: Option<DoorTarget>,
    state: DoorState,
}

impl Door {
    pub fn new(bounds: Bounds, required: Option<MemoryKind>, target: Option<DoorTarget>) -> Self {
        Self {
            bounds,
            required,
            target,
            state: DoorState::Closed,
        }
    }

    pub fn state(&self) -> DoorState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }

    /// The exit taken when the player overlaps this door. Only open doors
    /// with a target lead anywhere.
    pub fn exit_for(&self, player_bounds: &Bounds) -> Option<&DoorTarget> {
        if !self.is_open() || !player_bounds.intersects(&self.bounds) {
            return None;
        }
        self.target.as_ref()
    }
}

impl Interactive for Door {
    fn update(
        &mut self,
        ctx: &InteractionContext<'_>,
        events: &mut impl EventSink,
    ) -> Option<Activation> {
        match self.state {
            DoorState::Closed => {
                let near = ctx
                    .player_bounds
                    .intersects(&self.bounds.trigger_zone(DOOR_REACH));
                if near && ctx.interacting && ctx.memories.satisfies(self.required) {
                    self.state = DoorState::Opening {
                        started_at: ctx.now,
                    };
                    events.play(SoundCue::DoorOpen);
                    debug!("Door opening (gate={:?})", self.required);
                }
            }
            DoorState::Opening { started_at } => {
                if ctx.now.saturating_sub(started_at) >= DOOR_OPEN_DURATION_MS {
                    self.state = DoorState::Open;
                    debug!("Door open, target={:?}", self.target);
                }
            }
            DoorState::Open => {}
        }
        None
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            kind: ObjectKind::Door,
            bounds: self.bounds,
            lit: self.is_open(),
        }
    }
}
