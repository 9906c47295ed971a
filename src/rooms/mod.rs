//! Rooms domain: live rooms, collision queries and room transitions.

mod level;
mod query;
mod room;


pub use level::Level;
pub use query::{CollisionWorld, PlatformIndex, Solid};
pub use room::{Room, Tile};
