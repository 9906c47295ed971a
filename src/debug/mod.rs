//! Debug overlay for level authoring.
//!
//! F1 toggles drawing of interaction reach around doors, levers and
//! switches, the travel path of every moving platform, and the apex of a
//! standing jump.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::core::{Game, GameSettings};
use crate::geometry::Bounds;
use crate::objects::{DOOR_REACH, Interactive, ObjectKind, TRIGGER_REACH};
use crate::ui::draw_bounds;

const REACH_COLOR: Color = Color::srgba(1.0, 1.0, 0.0, 0.6);
const PATH_COLOR: Color = Color::srgba(0.0, 1.0, 1.0, 0.6);
const PLAYER_BOX_COLOR: Color = Color::srgb(1.0, 0.0, 1.0);
const APEX_COLOR: Color = Color::srgba(1.0, 0.5, 0.0, 0.6);

/// Overlay toggle, seeded from `debug_draw` in the settings file.
#[derive(Resource, Debug, Default)]
pub struct DebugOverlay {
    pub visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugOverlay>()
            .add_systems(
                Update,
                (seed_overlay, toggle_overlay)
                    .chain()
                    .run_if(resource_exists::<GameSettings>),
            )
            .add_systems(
                Update,
                draw_overlay
                    .run_if(resource_exists::<Game>)
                    .run_if(|overlay: Res<DebugOverlay>| overlay.visible),
            );
    }
}

fn seed_overlay(settings: Res<GameSettings>, mut overlay: ResMut<DebugOverlay>) {
    if settings.is_added() {
        overlay.visible = settings.debug_draw;
    }
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut overlay: ResMut<DebugOverlay>) {
    if keyboard.just_pressed(KeyCode::F1) {
        overlay.visible = !overlay.visible;
        info!(
            "[DEBUG] Overlay {}",
            if overlay.visible { "ON" } else { "OFF" }
        );
    }
}

fn draw_overlay(game: Res<Game>, mut gizmos: Gizmos) {
    let room = game.level().room();

    for object in &room.objects {
        let reach = match object.kind() {
            ObjectKind::Door => DOOR_REACH,
            _ => TRIGGER_REACH,
        };
        let zone = object.render_data().bounds.trigger_zone(reach);
        draw_bounds(&mut gizmos, &zone, REACH_COLOR);
    }

    for platform in &room.platforms {
        let (from, to) = platform.endpoints();
        let half = platform.bounds.size() / 2.0;
        gizmos.line_2d(
            Vec2::new(from.x + half.x, -(from.y + half.y)),
            Vec2::new(to.x + half.x, -(to.y + half.y)),
            PATH_COLOR,
        );
        draw_bounds(
            &mut gizmos,
            &Bounds::from_position(to, platform.bounds.size()),
            PATH_COLOR,
        );
    }

    let player = game.player();
    draw_bounds(&mut gizmos, &player.bounds(), PLAYER_BOX_COLOR);
    gizmos.circle_2d(
        Isometry2d::from_translation(Vec2::new(player.position.x, -player.position.y)),
        3.0,
        PLAYER_BOX_COLOR,
    );

    // Standing-jump apex
    if player.on_ground {
        let apex = player.bounds().translated(Vec2::new(0.0, -game.tuning().jump_height()));
        draw_bounds(&mut gizmos, &apex, APEX_COLOR);
    }
}
