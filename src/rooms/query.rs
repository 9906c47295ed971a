//! Rooms domain: collision queries against static and moving solids.

use crate::geometry::Bounds;
use crate::rooms::Room;

/// Index into a room's platform collection. Only meaningful for the room
/// instance that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlatformIndex(pub usize);

/// A solid overlapping the queried bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub bounds: Bounds,
    /// Set when the solid is a moving platform.
    pub platform: Option<PlatformIndex>,
}

impl Solid {
    pub fn tile(bounds: Bounds) -> Self {
        Self {
            bounds,
            platform: None,
        }
    }
}

pub trait CollisionWorld {
    /// Every solid intersecting `bounds`: static tiles first, then platforms.
    fn colliding_solids(&self, bounds: &Bounds) -> Vec<Solid>;
}

impl CollisionWorld for Room {
    fn colliding_solids(&self, bounds: &Bounds) -> Vec<Solid> {
        let tiles = self
            .tiles
            .iter()
            .filter(|tile| tile.bounds.intersects(bounds))
            .map(|tile| Solid::tile(tile.bounds));

        let platforms = self
            .platforms
            .iter()
            .enumerate()
            .filter(|(_, platform)| platform.bounds.intersects(bounds))
            .map(|(index, platform)| Solid {
                bounds: platform.bounds,
                platform: Some(PlatformIndex(index)),
            });

        tiles.chain(platforms).collect()
    }
}

/// Fixed geometry, mostly for tests and tools.
impl CollisionWorld for [Bounds] {
    fn colliding_solids(&self, bounds: &Bounds) -> Vec<Solid> {
        self.iter()
            .filter(|solid| solid.intersects(bounds))
            .copied()
            .map(Solid::tile)
            .collect()
    }
}
