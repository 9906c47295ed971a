//! Data definitions for level files.
//!
//! These structs mirror the structure in assets/levels/*.ron (or the older
//! JSON layout with the same field names). Optional fields default to
//! `None`/zero; missing geometry or ids fail to parse.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::memory::MemoryKind;
use crate::objects::{ActivationAction, PlatformId};

/// Side length of a grid tile in pixels.
pub const TILE_SIZE: f32 = 64.0;

fn default_start_room() -> String {
    "start".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelTemplate {
    #[serde(default = "default_start_room")]
    pub start_room: String,
    pub player_start: PointDef,
    pub rooms: BTreeMap<String, RoomTemplate>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RoomTemplate {
    /// Tile id -> tile type name. Id 0 is always empty space.
    #[serde(default)]
    pub tile_mapping: BTreeMap<u32, String>,
    /// Layer name -> rows of tile ids. Only "foreground" collides.
    #[serde(default)]
    pub layers: BTreeMap<String, Vec<Vec<u32>>>,
    #[serde(default)]
    pub memory_orbs: Vec<OrbDef>,
    #[serde(default)]
    pub doors: Vec<DoorDef>,
    #[serde(default)]
    pub levers: Vec<LeverDef>,
    #[serde(default)]
    pub switches: Vec<SwitchDef>,
    #[serde(default)]
    pub moving_platforms: Vec<PlatformDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OrbDef {
    pub x: f32,
    pub y: f32,
    pub memory_type: MemoryKind,
    /// Lifetime override in milliseconds.
    #[serde(default)]
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DoorDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub required_memory: Option<MemoryKind>,
    #[serde(default)]
    pub target_room: Option<String>,
    #[serde(default)]
    pub target_x: f32,
    #[serde(default)]
    pub target_y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LeverDef {
    pub x: f32,
    pub y: f32,
    pub target_id: PlatformId,
    pub action: ActivationAction,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SwitchDef {
    pub x: f32,
    pub y: f32,
    pub required_memory: MemoryKind,
    pub target_id: PlatformId,
    pub action: ActivationAction,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub id: PlatformId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub move_x: f32,
    #[serde(default)]
    pub move_y: f32,
    pub speed: f32,
}
