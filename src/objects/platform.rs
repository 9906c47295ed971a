//! Objects domain: platforms that ping-pong along a fixed path.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::EventSink;
use crate::geometry::Bounds;
use crate::objects::{
    Activation, ActivationAction, Interactive, InteractionContext, ObjectKind, RenderData,
};

/// Absorbs float drift so a speed that divides 1 evenly lands exactly on a bound.
const PROGRESS_EPSILON: f32 = 1e-5;

/// Join key between platforms and the levers/switches that drive them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct MovingPlatform {
    pub id: PlatformId,
    pub bounds: Bounds,
    start: Vec2,
    displacement: Vec2,
    speed: f32,
    progress: f32,
    forward: bool,
    active: bool,
    previous: Bounds,
    delta: Vec2,
}

impl MovingPlatform {
    /// Platforms start inactive at `start` and wait for a trigger.
    pub fn new(id: PlatformId, start: Vec2, size: Vec2, displacement: Vec2, speed: f32) -> Self {
        let bounds = Bounds::from_position(start, size);
        Self {
            id,
            bounds,
            start,
            displacement,
            speed,
            progress: 0.0,
            forward: true,
            active: false,
            previous: bounds,
            delta: Vec2::ZERO,
        }
    }

    /// Top-left corners at progress 0 and progress 1.
    pub fn endpoints(&self) -> (Vec2, Vec2) {
        (self.start, self.start + self.displacement)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_forward(&self) -> bool {
        self.forward
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Displacement of the last `advance`. Zero while inactive.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn apply(&mut self, action: ActivationAction) {
        self.active = match action {
            ActivationAction::Activate => true,
            ActivationAction::Deactivate => false,
            ActivationAction::Toggle => !self.active,
        };
        debug!("Platform {:?} {:?} -> active={}", self.id, action, self.active);
    }

    /// One tick of motion. Called every tick; inactive platforms stay put
    /// and report a zero delta.
    pub fn advance(&mut self) {
        self.previous = self.bounds;

        if !self.active {
            self.delta = Vec2::ZERO;
            return;
        }

        if self.forward {
            self.progress += self.speed;
            if self.progress >= 1.0 - PROGRESS_EPSILON {
                self.progress = 1.0;
                self.forward = false;
                debug!("Platform {:?} reversing at end", self.id);
            }
        } else {
            self.progress -= self.speed;
            if self.progress <= PROGRESS_EPSILON {
                self.progress = 0.0;
                self.forward = true;
                debug!("Platform {:?} reversing at start", self.id);
            }
        }

        let position = self.start + self.displacement * self.progress;
        self.bounds.x = position.x;
        self.bounds.y = position.y;
        self.delta = position - self.previous.position();
    }
}

impl Interactive for MovingPlatform {
    fn update(
        &mut self,
        _ctx: &InteractionContext<'_>,
        _events: &mut impl EventSink,
    ) -> Option<Activation> {
        self.advance();
        None
    }

    fn render_data(&self) -> RenderData {
        RenderData {
            kind: ObjectKind::Platform,
            bounds: self.bounds,
            lit: self.active,
        }
    }
}

/// Applies `activation` to every platform carrying its target id.
/// Returns false when nothing matched.
pub fn resolve_activation(platforms: &mut [MovingPlatform], activation: Activation) -> bool {
    let mut matched = false;
    for platform in platforms
        .iter_mut()
        .filter(|platform| platform.id == activation.target)
    {
        platform.apply(activation.action);
        matched = true;
    }

    if !matched {
        warn!(
            "No platform {:?} in room for {:?}, ignoring",
            activation.target, activation.action
        );
    }
    matched
}
