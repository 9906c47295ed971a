//! Rooms domain: the level, which owns room templates and the current room.

use bevy::prelude::*;

use crate::content::{ContentLoadError, LevelTemplate, validate_level};
use crate::core::{EventSink, GameEvent};
use crate::movement::Player;
use crate::objects::DoorTarget;
use crate::rooms::Room;

#[derive(Debug, Clone)]
pub struct Level {
    template: LevelTemplate,
    room: Room,
}

impl Level {
    /// Validates the whole level up front so room loads can't fail mid-game.
    pub fn new(template: LevelTemplate) -> Result<Self, ContentLoadError> {
        let errors = validate_level(&template);
        if !errors.is_empty() {
            return Err(ContentLoadError::Validation(errors));
        }

        let start = template.start_room.clone();
        let room_template = template
            .rooms
            .get(&start)
            .ok_or_else(|| ContentLoadError::MissingRoom(start.clone()))?;
        let room = Room::from_template(&start, room_template);
        info!(
            "Level loaded: {} rooms, starting in '{}'",
            template.rooms.len(),
            start
        );

        Ok(Self { template, room })
    }

    pub fn template(&self) -> &LevelTemplate {
        &self.template
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn player_start(&self) -> Vec2 {
        Vec2::new(self.template.player_start.x, self.template.player_start.y)
    }

    /// Discards the current room and rebuilds `room_id` from its template.
    /// Unknown ids leave the current room in place.
    pub fn load_room(&mut self, room_id: &str) -> bool {
        let Some(template) = self.template.rooms.get(room_id) else {
            warn!("Room '{}' not found, staying in '{}'", room_id, self.room.id);
            return false;
        };
        self.room = Room::from_template(room_id, template);
        info!("Entered room '{}'", room_id);
        true
    }

    /// Takes an open door: loads the target room and drops the player at
    /// the door's spawn point.
    pub fn enter(&mut self, target: &DoorTarget, player: &mut Player, events: &mut impl EventSink) {
        if !self.load_room(&target.room_id) {
            return;
        }
        player.teleport(target.spawn);
        events.emit(GameEvent::RoomChanged {
            room_id: target.room_id.clone(),
            spawn: target.spawn,
        });
    }
}
