//! Validation for level templates.
//!
//! Everything that could otherwise blow up mid-game is rejected here, at load
//! time. Levers or switches naming a platform that does not exist are legal
//! (they do nothing) and only produce a warning.

use bevy::prelude::*;
use std::collections::HashSet;
use thiserror::Error;

use super::data::{LevelTemplate, RoomTemplate};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("start room '{0}' is not defined")]
    MissingStartRoom(String),
    #[error("room '{room}': door {index} targets missing room '{target}'")]
    MissingDoorTarget {
        room: String,
        index: usize,
        target: String,
    },
    #[error("room '{room}': {object} {index} must have a positive width and height")]
    DegenerateBounds {
        room: String,
        object: &'static str,
        index: usize,
    },
    #[error("room '{room}': platform {id} speed {speed} must be in (0, 1]")]
    InvalidPlatformSpeed { room: String, id: u32, speed: f32 },
    #[error("room '{room}': platform id {id} is used more than once")]
    DuplicatePlatformId { room: String, id: u32 },
    #[error("room '{room}': tile id {tile} in layer '{layer}' has no tile_mapping entry")]
    UnmappedTile {
        room: String,
        layer: String,
        tile: u32,
    },
    #[error("player size {width}x{height} must be positive")]
    InvalidPlayerSize { width: f32, height: f32 },
}

/// Validate a whole level.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelTemplate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if !level.rooms.contains_key(&level.start_room) {
        errors.push(ValidationError::MissingStartRoom(level.start_room.clone()));
    }

    for (room_id, room) in &level.rooms {
        validate_room(level, room_id, room, &mut errors);
    }

    errors
}

fn validate_room(
    level: &LevelTemplate,
    room_id: &str,
    room: &RoomTemplate,
    errors: &mut Vec<ValidationError>,
) {
    let degenerate = |object: &'static str, index: usize| ValidationError::DegenerateBounds {
        room: room_id.to_string(),
        object,
        index,
    };

    for (index, door) in room.doors.iter().enumerate() {
        if door.width <= 0.0 || door.height <= 0.0 {
            errors.push(degenerate("door", index));
        }
        if let Some(target) = &door.target_room {
            if !level.rooms.contains_key(target) {
                errors.push(ValidationError::MissingDoorTarget {
                    room: room_id.to_string(),
                    index,
                    target: target.clone(),
                });
            }
        }
    }

    let mut platform_ids = HashSet::new();
    for (index, platform) in room.moving_platforms.iter().enumerate() {
        if platform.width <= 0.0 || platform.height <= 0.0 {
            errors.push(degenerate("platform", index));
        }
        if !(platform.speed > 0.0 && platform.speed <= 1.0) {
            errors.push(ValidationError::InvalidPlatformSpeed {
                room: room_id.to_string(),
                id: platform.id.0,
                speed: platform.speed,
            });
        }
        if !platform_ids.insert(platform.id) {
            errors.push(ValidationError::DuplicatePlatformId {
                room: room_id.to_string(),
                id: platform.id.0,
            });
        }
    }

    for (layer, grid) in &room.layers {
        let unmapped: HashSet<u32> = grid
            .iter()
            .flatten()
            .copied()
            .filter(|&tile| tile != 0 && !room.tile_mapping.contains_key(&tile))
            .collect();
        let mut unmapped: Vec<_> = unmapped.into_iter().collect();
        unmapped.sort_unstable();
        errors.extend(unmapped.into_iter().map(|tile| ValidationError::UnmappedTile {
            room: room_id.to_string(),
            layer: layer.clone(),
            tile,
        }));
    }

    let targets = room
        .levers
        .iter()
        .map(|lever| lever.target_id)
        .chain(room.switches.iter().map(|switch| switch.target_id));
    for target in targets {
        if !platform_ids.contains(&target) {
            warn!(
                "Room '{}': trigger targets platform {} which is not in the room",
                room_id, target.0
            );
        }
    }
}
