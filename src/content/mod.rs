//! Content domain: level templates, loading and validation.

mod data;
mod loader;
mod validation;


pub use data::{
    DoorDef, LevelTemplate, LeverDef, OrbDef, PlatformDef, PointDef, RoomTemplate, SwitchDef,
    TILE_SIZE,
};
pub use loader::{ContentLoadError, load_level, load_settings, parse_level_json, parse_level_ron};
pub use validation::{ValidationError, validate_level};
