//! Memory domain: time-limited abilities held by the player.
//!
//! A memory is Active until its lifetime runs out, then Fading for a fixed
//! window, then forgotten. Only Active memories satisfy gates on doors and
//! switches.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::{EventSink, GameEvent, SoundCue};
use crate::geometry::Bounds;


/// Time a memory stays visible (but unusable) after its lifetime ends.
pub const FADE_WINDOW_MS: u64 = 2000;

/// Half-size of a memory orb's pickup square.
pub const ORB_RADIUS: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Reflect)]
#[serde(rename_all = "lowercase")]
pub enum MemoryKind {
    Red,
    Blue,
    Green,
    Purple,
    Yellow,
}

impl MemoryKind {
    /// Lifetime granted by an orb of this kind. `None` is permanent.
    pub fn default_duration_ms(self) -> Option<u64> {
        match self {
            MemoryKind::Red => None,
            MemoryKind::Blue => Some(10_000),
            MemoryKind::Green => Some(20_000),
            MemoryKind::Purple => Some(15_000),
            MemoryKind::Yellow => Some(30_000),
        }
    }

    pub fn color(self) -> Color {
        match self {
            MemoryKind::Red => Color::srgb_u8(255, 0, 0),
            MemoryKind::Blue => Color::srgb_u8(0, 0, 255),
            MemoryKind::Green => Color::srgb_u8(0, 255, 0),
            MemoryKind::Purple => Color::srgb_u8(128, 0, 128),
            MemoryKind::Yellow => Color::srgb_u8(255, 255, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub kind: MemoryKind,
    pub acquired_at: u64,
    pub duration_ms: Option<u64>,
    pub fading_since: Option<u64>,
}

impl Memory {
    pub fn new(kind: MemoryKind, acquired_at: u64, duration_ms: Option<u64>) -> Self {
        Self {
            kind,
            acquired_at,
            duration_ms,
            fading_since: None,
        }
    }

    #[cfg(test)]
    pub fn permanent(kind: MemoryKind, acquired_at: u64) -> Self {
        Self::new(kind, acquired_at, None)
    }

    pub fn is_fading(&self) -> bool {
        self.fading_since.is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.is_fading()
    }

    fn lifetime_elapsed(&self, now: u64) -> bool {
        self.duration_ms
            .is_some_and(|duration| now.saturating_sub(self.acquired_at) >= duration)
    }

    /// How far through the fade window this memory is, in [0, 1].
    /// Active memories report 0.
    pub fn fade_progress(&self, now: u64) -> f32 {
        match self.fading_since {
            Some(start) => {
                (now.saturating_sub(start) as f32 / FADE_WINDOW_MS as f32).clamp(0.0, 1.0)
            }
            None => 0.0,
        }
    }
}

/// Memories currently held by the player, in pickup order.
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    memories: Vec<Memory>,
}

impl MemoryInventory {
    pub fn collect(&mut self, memory: Memory, events: &mut impl EventSink) {
        debug!(
            "Memory collected: {:?} (duration={:?})",
            memory.kind, memory.duration_ms
        );
        events.emit(GameEvent::MemoryCollected { kind: memory.kind });
        events.play(SoundCue::Collect);
        self.memories.push(memory);
    }

    /// True only while a memory of `kind` is held and not yet fading.
    pub fn possesses(&self, kind: MemoryKind) -> bool {
        self.memories
            .iter()
            .any(|memory| memory.kind == kind && memory.is_active())
    }

    /// `None` gates are always satisfied.
    pub fn satisfies(&self, gate: Option<MemoryKind>) -> bool {
        gate.is_none_or(|kind| self.possesses(kind))
    }

    /// Starts fades for expired memories and forgets memories whose fade
    /// window has elapsed.
    pub fn tick(&mut self, now: u64, events: &mut impl EventSink) {
        self.memories.retain_mut(|memory| {
            if memory.fading_since.is_none() && memory.lifetime_elapsed(now) {
                memory.fading_since = Some(now);
                debug!("Memory {:?} started fading at {}", memory.kind, now);
            }

            match memory.fading_since {
                Some(start) if now.saturating_sub(start) >= FADE_WINDOW_MS => {
                    debug!("Memory {:?} forgotten", memory.kind);
                    events.play(SoundCue::MemoryFade);
                    false
                }
                _ => true,
            }
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Memory> {
        self.memories.iter()
    }

    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}

/// Pickup source placed in a room.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryOrb {
    pub kind: MemoryKind,
    pub center: Vec2,
    pub duration_ms: Option<u64>,
}

impl MemoryOrb {
    /// `duration_override` replaces the kind's default lifetime when set.
    pub fn new(kind: MemoryKind, center: Vec2, duration_override: Option<u64>) -> Self {
        Self {
            kind,
            center,
            duration_ms: duration_override.or(kind.default_duration_ms()),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::centered(self.center, ORB_RADIUS)
    }

    pub fn into_memory(self, now: u64) -> Memory {
        Memory::new(self.kind, now, self.duration_ms)
    }
}
