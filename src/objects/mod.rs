//! Objects domain: interactive room objects and the activation graph.
//!
//! Levers and switches never touch platforms directly. They return an
//! [`Activation`] which the room resolves against its platforms by id.

mod activation;
mod door;
mod platform;


pub use activation::{
    Activation, ActivationAction, Lever, Switch, TRIGGER_REACH, TRIGGER_SIZE,
};
pub use door::{DOOR_OPEN_DURATION_MS, DOOR_REACH, Door, DoorState, DoorTarget};
pub use platform::{MovingPlatform, PlatformId, resolve_activation};

use crate::core::EventSink;
use crate::geometry::Bounds;
use crate::memory::MemoryInventory;

/// What an object sees of the player during its update.
#[derive(Debug, Clone, Copy)]
pub struct InteractionContext<'a> {
    pub player_bounds: Bounds,
    pub interacting: bool,
    pub memories: &'a MemoryInventory,
    pub now: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Door,
    Lever,
    Switch,
    Platform,
}

/// Presentation snapshot of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderData {
    pub kind: ObjectKind,
    pub bounds: Bounds,
    /// Door open, lever/switch thrown, or platform running.
    pub lit: bool,
}

/// Per-tick behaviour shared by every interactive object kind.
pub trait Interactive {
    fn update(
        &mut self,
        ctx: &InteractionContext<'_>,
        events: &mut impl EventSink,
    ) -> Option<Activation>;

    fn render_data(&self) -> RenderData;
}

/// Doors, levers and switches of a room. Platforms live in their own
/// collection because the player holds indices into it.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractiveObject {
    Door(Door),
    Lever(Lever),
    Switch(Switch),
}

impl InteractiveObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            InteractiveObject::Door(_) => ObjectKind::Door,
            InteractiveObject::Lever(_) => ObjectKind::Lever,
            InteractiveObject::Switch(_) => ObjectKind::Switch,
        }
    }

    pub fn as_door(&self) -> Option<&Door> {
        match self {
            InteractiveObject::Door(door) => Some(door),
            _ => None,
        }
    }
}

impl Interactive for InteractiveObject {
    fn update(
        &mut self,
        ctx: &InteractionContext<'_>,
        events: &mut impl EventSink,
    ) -> Option<Activation> {
        match self {
            InteractiveObject::Door(door) => door.update(ctx, events),
            InteractiveObject::Lever(lever) => lever.update(ctx, events),
            InteractiveObject::Switch(switch) => switch.update(ctx, events),
        }
    }

    fn render_data(&self) -> RenderData {
        match self {
            InteractiveObject::Door(door) => door.render_data(),
            InteractiveObject::Lever(lever) => lever.render_data(),
            InteractiveObject::Switch(switch) => switch.render_data(),
        }
    }
}
