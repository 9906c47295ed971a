//! Core domain: game state, fixed-tick orchestration and plugin wiring.

mod events;
mod game;
mod resources;
mod systems;


pub use events::{EventSink, GameEvent, PendingEvents, SoundCue};
pub use game::Game;
pub use resources::{GameClock, GameSettings, GameplayPaused, SETTINGS_PATH, gameplay_active};

use bevy::prelude::*;

use crate::core::systems::{
    follow_player, forward_events, handle_pause_hotkeys, load_game, log_events, run_game_tick,
    setup_camera,
};
use crate::movement::{MovementInput, read_input};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .init_resource::<GameClock>()
            .init_resource::<MovementInput>()
            .init_resource::<PendingEvents>()
            .add_message::<GameEvent>()
            .add_systems(Startup, (setup_camera, load_game))
            .add_systems(Update, (read_input, handle_pause_hotkeys).chain())
            .add_systems(
                Update,
                (follow_player, log_events).run_if(resource_exists::<Game>),
            )
            .add_systems(
                FixedUpdate,
                (run_game_tick, forward_events)
                    .chain()
                    .run_if(resource_exists::<Game>)
                    .run_if(gameplay_active),
            );
    }
}
