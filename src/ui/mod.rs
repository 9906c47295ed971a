//! UI domain: room drawing and the memory HUD.

mod hud_memory;
mod world;

pub(crate) use world::draw_bounds;

use bevy::prelude::*;

use crate::core::Game;
use crate::ui::hud_memory::{spawn_memory_hud, update_memory_hud};
use crate::ui::world::draw_room;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_memory_hud).add_systems(
            Update,
            (draw_room, update_memory_hud).run_if(resource_exists::<Game>),
        );
    }
}
