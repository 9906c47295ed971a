//! Core domain: the game state and its fixed tick.

use bevy::prelude::*;

use crate::content::{ContentLoadError, LevelTemplate, ValidationError};
use crate::core::EventSink;
use crate::movement::{MovementInput, MovementTuning, Player};
use crate::rooms::Level;

/// All simulation state. Mutated only by [`Game::tick`] and [`Game::restart`].
#[derive(Resource, Debug)]
pub struct Game {
    level: Level,
    player: Player,
    tuning: MovementTuning,
}

impl Game {
    pub fn new(template: LevelTemplate, tuning: MovementTuning) -> Result<Self, ContentLoadError> {
        if tuning.player_width <= 0.0 || tuning.player_height <= 0.0 {
            return Err(ContentLoadError::Validation(vec![
                ValidationError::InvalidPlayerSize {
                    width: tuning.player_width,
                    height: tuning.player_height,
                },
            ]));
        }

        let level = Level::new(template)?;
        let player = Player::new(level.player_start(), tuning.player_size());
        Ok(Self {
            level,
            player,
            tuning,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn tuning(&self) -> &MovementTuning {
        &self.tuning
    }

    /// One fixed step: player movement and memory timers, then room objects
    /// and pickups, then at most one room transition.
    pub fn tick(&mut self, input: &MovementInput, now: u64, events: &mut impl EventSink) {
        self.player
            .step(input, &self.tuning, self.level.room(), events);
        self.player.memories.tick(now, events);

        let exit = self
            .level
            .room_mut()
            .update(&mut self.player, now, events);
        if let Some(target) = exit {
            self.level.enter(&target, &mut self.player, events);
        }

        self.player.finish_interaction_tap(input);
    }

    /// Back to the start room with a fresh player and no memories.
    pub fn restart(&mut self) {
        let start_room = self.level.template().start_room.clone();
        self.level.load_room(&start_room);
        self.player = Player::new(self.level.player_start(), self.tuning.player_size());
        info!("Level restarted in '{}'", start_room);
    }
}
