//! Core domain: discrete events emitted by the simulation.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::memory::MemoryKind;

/// Sound cues understood by the audio collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Collect,
    DoorOpen,
    MemoryFade,
    SwitchActivate,
}

/// Fire-and-forget notification leaving the core.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlaySound(SoundCue),
    MemoryCollected { kind: MemoryKind },
    RoomChanged { room_id: String, spawn: Vec2 },
}

impl Message for GameEvent {}

/// Destination for events produced during a tick.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);

    fn play(&mut self, cue: SoundCue) {
        self.emit(GameEvent::PlaySound(cue));
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Events queued by the fixed tick, drained into Bevy messages afterwards.
#[derive(Resource, Debug, Default)]
pub struct PendingEvents(pub Vec<GameEvent>);

impl EventSink for PendingEvents {
    fn emit(&mut self, event: GameEvent) {
        self.0.push(event);
    }
}
