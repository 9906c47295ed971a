mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod geometry;
mod memory;
mod movement;
mod objects;
mod rooms;
mod ui;

use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Echoes of the Labyrinth".to_string(),
            resolution: (1280, 705).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .add_plugins((core::CorePlugin, ui::UiPlugin));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
