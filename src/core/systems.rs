//! Core domain: Bevy systems driving the fixed tick.

use bevy::app::AppExit;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::path::Path;

use crate::content::{load_level, load_settings};
use crate::core::events::{GameEvent, PendingEvents};
use crate::core::game::Game;
use crate::core::resources::{GameClock, GameSettings, GameplayPaused, SETTINGS_PATH};
use crate::movement::MovementInput;

const PAUSE_SOURCE: &str = "menu";

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Reads settings and the level, then inserts the [`Game`]. Bad content
/// ends the app here instead of surfacing mid-game.
pub(crate) fn load_game(
    mut commands: Commands,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut exit: MessageWriter<AppExit>,
) {
    let settings = match load_settings(Path::new(SETTINGS_PATH)) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let game = load_level(Path::new(&settings.level_path))
        .and_then(|template| Game::new(template, settings.tuning.clone()));
    let game = match game {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    fixed_time.set_timestep_hz(settings.tick_hz);
    info!(
        "Loaded {} at {} Hz, room '{}'",
        settings.level_path,
        settings.tick_hz,
        game.level().room().id
    );
    commands.insert_resource(game);
    commands.insert_resource(settings);
}

pub(crate) fn run_game_tick(
    time: Res<Time>,
    mut clock: ResMut<GameClock>,
    mut game: ResMut<Game>,
    mut input: ResMut<MovementInput>,
    mut pending: ResMut<PendingEvents>,
) {
    clock.advance(time.delta());
    game.tick(&input, clock.now_ms(), &mut *pending);
    input.clear_edges();
}

pub(crate) fn forward_events(
    mut pending: ResMut<PendingEvents>,
    mut writer: MessageWriter<GameEvent>,
) {
    for event in pending.0.drain(..) {
        writer.write(event);
    }
}

/// Stand-in for the audio collaborator: events are only logged.
pub(crate) fn log_events(mut events: MessageReader<GameEvent>) {
    for event in events.read() {
        match event {
            GameEvent::PlaySound(cue) => debug!("[SOUND] {:?}", cue),
            GameEvent::MemoryCollected { kind } => info!("Collected {:?} memory", kind),
            GameEvent::RoomChanged { room_id, spawn } => {
                info!("[TRANSITION] Now in '{}' at {:?}", room_id, spawn)
            }
        }
    }
}

/// Escape toggles pause; R while paused restarts the level.
pub(crate) fn handle_pause_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
    mut input: ResMut<MovementInput>,
    mut clock: ResMut<GameClock>,
    game: Option<ResMut<Game>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        let now_paused = paused.toggle(PAUSE_SOURCE);
        // Edges pressed while paused should not fire on resume.
        input.clear_edges();
        info!("Gameplay {}", if now_paused { "paused" } else { "resumed" });
    }

    if paused.is_paused() && keyboard.just_pressed(KeyCode::KeyR) {
        if let Some(mut game) = game {
            game.restart();
            clock.reset();
            input.clear_edges();
            paused.unpause(PAUSE_SOURCE);
        }
    }
}

/// Centres the camera on the player, kept inside the room's tile extent when
/// the room is larger than the view. Room space is y-down, world is y-up.
pub(crate) fn follow_player(
    game: Res<Game>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let mut center = game.player().bounds().center();

    if let (Some(extent), Ok(window)) = (game.level().room().extent(), window_query.single()) {
        center.x = clamp_axis(center.x, extent.left(), extent.right(), window.width() / 2.0);
        center.y = clamp_axis(center.y, extent.top(), extent.bottom(), window.height() / 2.0);
    }

    for mut transform in &mut camera_query {
        transform.translation.x = center.x;
        transform.translation.y = -center.y;
    }
}

/// Rooms narrower than the view stay centred.
pub(crate) fn clamp_axis(value: f32, min: f32, max: f32, half_view: f32) -> f32 {
    if max - min <= half_view * 2.0 {
        (min + max) / 2.0
    } else {
        value.clamp(min + half_view, max - half_view)
    }
}
