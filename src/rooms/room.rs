//! Rooms domain: a live room instance and its per-tick update.

use bevy::prelude::*;

use crate::content::{RoomTemplate, TILE_SIZE};
use crate::core::EventSink;
use crate::geometry::Bounds;
use crate::memory::MemoryOrb;
use crate::movement::Player;
use crate::objects::{
    Door, DoorTarget, Interactive, InteractionContext, InteractiveObject, Lever, MovingPlatform,
    RenderData, Switch, resolve_activation,
};
use crate::rooms::PlatformIndex;

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub bounds: Bounds,
    pub tile_type: String,
}

/// Everything dynamic in the current room. Built fresh from the template on
/// every load, so nothing survives a transition.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    /// Foreground tiles; these collide.
    pub tiles: Vec<Tile>,
    pub background: Vec<Tile>,
    pub orbs: Vec<MemoryOrb>,
    pub objects: Vec<InteractiveObject>,
    pub platforms: Vec<MovingPlatform>,
}

impl Room {
    /// Expects a template that already passed validation.
    pub fn from_template(id: &str, template: &RoomTemplate) -> Self {
        let mut tiles = Vec::new();
        let mut background = Vec::new();
        for (layer_name, grid) in &template.layers {
            let target = if layer_name == "foreground" {
                &mut tiles
            } else {
                &mut background
            };
            for (row, cells) in grid.iter().enumerate() {
                for (column, &tile_id) in cells.iter().enumerate() {
                    if tile_id == 0 {
                        continue;
                    }
                    target.push(Tile {
                        bounds: Bounds::new(
                            column as f32 * TILE_SIZE,
                            row as f32 * TILE_SIZE,
                            TILE_SIZE,
                            TILE_SIZE,
                        ),
                        tile_type: template
                            .tile_mapping
                            .get(&tile_id)
                            .cloned()
                            .unwrap_or_default(),
                    });
                }
            }
        }

        let orbs = template
            .memory_orbs
            .iter()
            .map(|orb| MemoryOrb::new(orb.memory_type, Vec2::new(orb.x, orb.y), orb.duration))
            .collect();

        let doors = template.doors.iter().map(|door| {
            let target = door.target_room.as_ref().map(|room_id| DoorTarget {
                room_id: room_id.clone(),
                spawn: Vec2::new(door.target_x, door.target_y),
            });
            InteractiveObject::Door(Door::new(
                Bounds::new(door.x, door.y, door.width, door.height),
                door.required_memory,
                target,
            ))
        });
        let levers = template.levers.iter().map(|lever| {
            InteractiveObject::Lever(Lever::new(
                Vec2::new(lever.x, lever.y),
                lever.target_id,
                lever.action,
            ))
        });
        let switches = template.switches.iter().map(|switch| {
            InteractiveObject::Switch(Switch::new(
                Vec2::new(switch.x, switch.y),
                switch.required_memory,
                switch.target_id,
                switch.action,
            ))
        });
        let objects = doors.chain(levers).chain(switches).collect();

        let platforms = template
            .moving_platforms
            .iter()
            .map(|platform| {
                MovingPlatform::new(
                    platform.id,
                    Vec2::new(platform.x, platform.y),
                    Vec2::new(platform.width, platform.height),
                    Vec2::new(platform.move_x, platform.move_y),
                    platform.speed,
                )
            })
            .collect();

        Self {
            id: id.to_string(),
            tiles,
            background,
            orbs,
            objects,
            platforms,
        }
    }

    pub fn platform(&self, index: PlatformIndex) -> Option<&MovingPlatform> {
        self.platforms.get(index.0)
    }

    /// Runs objects, platforms, rider carry and pickups for one tick, after
    /// the player has moved. Returns the exit to take when the player stands in an
    /// open door.
    pub fn update(
        &mut self,
        player: &mut Player,
        now: u64,
        events: &mut impl EventSink,
    ) -> Option<DoorTarget> {
        let player_bounds = player.bounds();
        {
            let ctx = InteractionContext {
                player_bounds,
                interacting: player.interacting,
                memories: &player.memories,
                now,
            };

            let activations: Vec<_> = self
                .objects
                .iter_mut()
                .filter_map(|object| object.update(&ctx, events))
                .collect();
            for activation in activations {
                resolve_activation(&mut self.platforms, activation);
            }

            for platform in &mut self.platforms {
                platform.update(&ctx, events);
            }
        }

        self.carry_rider(player);
        let player_bounds = player.bounds();

        let (collected, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.orbs)
            .into_iter()
            .partition(|orb| orb.bounds().intersects(&player_bounds));
        self.orbs = remaining;
        for orb in collected {
            player.memories.collect(orb.into_memory(now), events);
        }

        self.objects
            .iter()
            .filter_map(InteractiveObject::as_door)
            .find_map(|door| door.exit_for(&player_bounds))
            .cloned()
    }

    /// Moves a rider by the displacement its supporting platform underwent
    /// this tick. Feet stay exactly on the platform top.
    fn carry_rider(&self, player: &mut Player) {
        let Some(platform) = player.riding.and_then(|index| self.platform(index)) else {
            return;
        };
        player.position.x += platform.delta().x;
        player.position.y = platform.bounds.top() - player.size.y;
    }

    pub fn render_data(&self) -> Vec<RenderData> {
        self.objects
            .iter()
            .map(Interactive::render_data)
            .chain(self.platforms.iter().map(Interactive::render_data))
            .collect()
    }

    /// Area covered by foreground tiles, if any.
    pub fn extent(&self) -> Option<Bounds> {
        self.tiles
            .iter()
            .map(|tile| tile.bounds)
            .reduce(|acc, bounds| acc.union(&bounds))
    }
}
