//! Objects domain: one-shot levers and memory-gated switches.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{EventSink, SoundCue};
use crate::geometry::Bounds;
use crate::memory::MemoryKind;
use crate::objects::{Interactive, InteractionContext, ObjectKind, PlatformId, RenderData};

/// Side length of lever and switch sprites.
pub const TRIGGER_SIZE: f32 = 40.0;
/// How far from a lever's centre the player can reach it.
pub const TRIGGER_REACH: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivationAction {
    Activate,
    Deactivate,
    Toggle,
}

/// Command produced by a lever or switch, resolved against the room's platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    pub target: PlatformId,
    pub action: ActivationAction,
}

/// Shared one-shot state of levers and switches.
#[derive(Debug, Clone, PartialEq)]
struct OneShotTrigger {
    bounds: Bounds,
    target: PlatformId,
    action: ActivationAction,
    activated: bool,
}

impl OneShotTrigger {
    fn new(position: Vec2, target: PlatformId, action: ActivationAction) -> Self {
        Self {
            bounds: Bounds::from_position(position, Vec2::splat(TRIGGER_SIZE)),
            target,
            action,
            activated: false,
        }
    }

    fn fire(
        &mut self,
        ctx: &InteractionContext<'_>,
        gate: Option<MemoryKind>,
        events: &mut impl EventSink,
    ) -> Option<Activation> {
        if self.activated || !ctx.interacting {
            return None;
        }
        if !ctx.player_bounds.intersects(&self.bounds.trigger_zone(TRIGGER_REACH)) {
            return None;
        }
        if !ctx.memories.satisfies(gate) {
            return None;
        }

        self.activated = true;
        events.play(SoundCue::SwitchActivate);
        Some(Activation {
            target: self.target,
            action: self.action,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lever {
    trigger: OneShotTrigger,
}

impl Lever {
    pub fn new(position: Vec2, target: PlatformId, action: ActivationAction) -> Self {
        Self {
            trigger: OneShotTrigger::new(position, target, action),
        }
    }

    pub fn is_activated(&self) -> bool {
        self.trigger.activated
    }

    pub fn bounds(&self) -> Bounds {
        self.trigger.bounds
    }
}

impl Interactive for Lever {
    fn update(
        &mut self,
        ctx: &InteractionContext<'_>,
        events: &mut impl EventSink,
    ) -> Option<Activation> {
        let activation = self.trigger.fire(ctx, None, events)?;
        debug!("Lever pulled: {:?}", activation);
        Some(activation)
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            kind: ObjectKind::Lever,
            bounds: self.trigger.bounds,
            lit: self.trigger.activated,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    trigger: OneShotTrigger,
    pub required: MemoryKind,
}

impl Switch {
    pub fn new(
        position: Vec2,
        required: MemoryKind,
        target: PlatformId,
        action: ActivationAction,
    ) -> Self {
        Self {
            trigger: OneShotTrigger::new(position, target, action),
            required,
        }
    }

    pub fn is_activated(&self) -> bool {
        self.trigger.activated
    }

    pub fn bounds(&self) -> Bounds {
        self.trigger.bounds
    }
}

impl Interactive for Switch {
    fn update(
        &mut self,
        ctx: &InteractionContext<'_>,
        events: &mut impl EventSink,
    ) -> Option<Activation> {
        let activation = self.trigger.fire(ctx, Some(self.required), events)?;
        debug!(
            "Switch thrown with {:?} memory: {:?}",
            self.required, activation
        );
        Some(activation)
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            kind: ObjectKind::Switch,
            bounds: self.trigger.bounds,
            lit: self.trigger.activated,
        }
    }
}
