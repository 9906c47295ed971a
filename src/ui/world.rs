//! UI domain: placeholder rendering of the current room with gizmos.
//!
//! Room space is y-down with the origin at the room's top-left; Bevy's world
//! is y-up, so every y is negated on the way out.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::core::Game;
use crate::geometry::Bounds;
use crate::memory::ORB_RADIUS;
use crate::movement::MotionState;
use crate::objects::{ObjectKind, RenderData};

const TILE_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const BACKGROUND_COLOR: Color = Color::srgb(0.15, 0.15, 0.25);

pub(crate) fn to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

pub(crate) fn draw_bounds(gizmos: &mut Gizmos, bounds: &Bounds, color: Color) {
    gizmos.rect_2d(
        Isometry2d::from_translation(to_world(bounds.center())),
        bounds.size(),
        color,
    );
}

fn object_color(data: &RenderData) -> Color {
    match (data.kind, data.lit) {
        (ObjectKind::Door, false) => Color::srgb(0.55, 0.35, 0.2),
        (ObjectKind::Door, true) => Color::srgb(0.9, 0.75, 0.4),
        (ObjectKind::Lever, false) | (ObjectKind::Switch, false) => Color::srgb(0.6, 0.6, 0.6),
        (ObjectKind::Lever, true) | (ObjectKind::Switch, true) => Color::srgb(0.3, 0.9, 0.9),
        (ObjectKind::Platform, false) => Color::srgb(0.5, 0.4, 0.3),
        (ObjectKind::Platform, true) => Color::srgb(0.8, 0.6, 0.3),
    }
}

fn player_color(motion: MotionState) -> Color {
    match motion {
        MotionState::Idle => Color::srgb(0.9, 0.9, 0.9),
        MotionState::Walk => Color::srgb(0.85, 0.95, 0.85),
        MotionState::Jump => Color::srgb(0.85, 0.85, 0.95),
        MotionState::Fall => Color::srgb(0.95, 0.85, 0.85),
    }
}

pub(crate) fn draw_room(game: Res<Game>, mut gizmos: Gizmos) {
    let room = game.level().room();

    for tile in &room.background {
        draw_bounds(&mut gizmos, &tile.bounds, BACKGROUND_COLOR);
    }
    for tile in &room.tiles {
        draw_bounds(&mut gizmos, &tile.bounds, TILE_COLOR);
    }
    for data in room.render_data() {
        draw_bounds(&mut gizmos, &data.bounds, object_color(&data));
    }
    for orb in &room.orbs {
        gizmos.circle_2d(
            Isometry2d::from_translation(to_world(orb.center)),
            ORB_RADIUS,
            orb.kind.color(),
        );
    }

    let player = game.player();
    draw_bounds(&mut gizmos, &player.bounds(), player_color(player.motion));
}
