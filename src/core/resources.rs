//! Core domain: shared resources for settings, time and pausing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use crate::movement::MovementTuning;

pub const SETTINGS_PATH: &str = "assets/data/settings.ron";

/// Startup configuration read from assets/data/settings.ron.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub tuning: MovementTuning,
    pub level_path: String,
    pub tick_hz: f64,
    /// Draw trigger zones and platform paths (needs the dev-tools feature).
    pub debug_draw: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            tuning: MovementTuning::default(),
            level_path: "assets/levels/level_1.ron".to_string(),
            tick_hz: 60.0,
            debug_draw: false,
        }
    }
}

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }

    /// Flips `source` and returns whether gameplay is paused afterwards.
    pub fn toggle(&mut self, source: impl Into<String>) -> bool {
        let source = source.into();
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
        self.is_paused()
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Milliseconds of simulated play. Only advances while ticks run, so
/// memory and door timers freeze during pause.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct GameClock {
    elapsed: Duration,
}

impl GameClock {
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    pub fn now_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
