//! Movement domain: tests for the kinematic controller and collision resolution.

use bevy::prelude::Vec2;

use super::systems::movement::derive_motion;
use super::{Facing, MotionState, MovementInput, MovementTuning, Player};
use crate::content::{LeverDef, PlatformDef, RoomTemplate};
use crate::core::{GameEvent, SoundCue};
use crate::geometry::Bounds;
use crate::objects::{ActivationAction, PlatformId};
use crate::rooms::{PlatformIndex, Room};

fn tuning() -> MovementTuning {
    MovementTuning::default()
}

fn player_at(x: f32, y: f32) -> Player {
    Player::new(Vec2::new(x, y), tuning().player_size())
}

fn floor() -> Vec<Bounds> {
    vec![Bounds::new(0.0, 200.0, 640.0, 64.0)]
}

fn standing_player() -> Player {
    let mut player = player_at(100.0, 120.0);
    player.on_ground = true;
    player
}

fn held(left: bool, right: bool) -> MovementInput {
    MovementInput {
        left,
        right,
        ..Default::default()
    }
}

fn jump_input() -> MovementInput {
    MovementInput {
        jump_pressed: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Player state tests
// -----------------------------------------------------------------------------

#[test]
fn test_new_player_defaults() {
    let player = player_at(10.0, 20.0);
    assert_eq!(player.position, Vec2::new(10.0, 20.0));
    assert_eq!(player.velocity, Vec2::ZERO);
    assert_eq!(player.facing, Facing::Right);
    assert_eq!(player.motion, MotionState::Idle);
    assert!(!player.on_ground);
    assert!(player.memories.is_empty());
}

#[test]
fn test_player_bounds_from_top_left() {
    let player = player_at(10.0, 20.0);
    assert_eq!(player.bounds(), Bounds::new(10.0, 20.0, 50.0, 80.0));
}

#[test]
fn test_teleport_clears_riding() {
    let mut player = player_at(0.0, 0.0);
    player.riding = Some(PlatformIndex(2));
    player.teleport(Vec2::new(300.0, 40.0));
    assert_eq!(player.position, Vec2::new(300.0, 40.0));
    assert!(player.riding.is_none());
}

#[test]
fn test_jump_height_from_tuning() {
    let tuning = tuning();
    assert!((tuning.jump_height() - 140.625).abs() < 1e-3);
}

// -----------------------------------------------------------------------------
// Vertical resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_snaps_to_tile_top() {
    let mut player = player_at(100.0, 116.0);
    player.velocity.y = 5.0;
    player.jumping = true;

    player.move_vertical(floor().as_slice());

    assert_eq!(player.position.y, 120.0);
    assert_eq!(player.velocity.y, 0.0);
    assert!(player.on_ground);
    assert!(!player.jumping);
    assert!(player.riding.is_none());
}

#[test]
fn test_standing_player_stays_grounded() {
    let mut player = standing_player();
    let mut events = Vec::new();

    for _ in 0..30 {
        player.step(&MovementInput::default(), &tuning(), floor().as_slice(), &mut events);
        assert!(player.on_ground);
        assert_eq!(player.velocity.y, 0.0);
        assert_eq!(player.position.y, 120.0);
    }
    assert_eq!(player.motion, MotionState::Idle);
}

#[test]
fn test_falling_without_support() {
    let mut player = player_at(100.0, 0.0);
    let mut events = Vec::new();
    let no_solids: Vec<Bounds> = Vec::new();

    player.step(&MovementInput::default(), &tuning(), no_solids.as_slice(), &mut events);
    player.step(&MovementInput::default(), &tuning(), no_solids.as_slice(), &mut events);

    assert!(!player.on_ground);
    assert!((player.velocity.y - 1.6).abs() < 1e-5);
    assert!((player.position.y - 2.4).abs() < 1e-5);
    assert_eq!(player.motion, MotionState::Fall);
}

#[test]
fn test_ceiling_bonk_zeroes_upward_velocity() {
    let ceiling = vec![Bounds::new(0.0, 0.0, 640.0, 64.0)];
    let mut player = player_at(100.0, 70.0);
    player.velocity.y = -10.0;

    player.move_vertical(ceiling.as_slice());

    assert_eq!(player.position.y, 64.0);
    assert_eq!(player.velocity.y, 0.0);
    assert!(!player.on_ground);
}

// -----------------------------------------------------------------------------
// Horizontal resolution tests
// -----------------------------------------------------------------------------

#[test]
fn test_walking_into_wall_clamps_to_left_face() {
    let wall = vec![Bounds::new(200.0, 0.0, 64.0, 256.0)];
    let mut player = player_at(148.0, 50.0);
    player.velocity.x = 5.0;

    player.move_horizontal(wall.as_slice());

    assert_eq!(player.position.x, 150.0);
}

#[test]
fn test_walking_left_into_wall_clamps_to_right_face() {
    let wall = vec![Bounds::new(0.0, 0.0, 64.0, 256.0)];
    let mut player = player_at(66.0, 50.0);
    player.velocity.x = -5.0;

    player.move_horizontal(wall.as_slice());

    assert_eq!(player.position.x, 64.0);
}

#[test]
fn test_walking_along_floor_does_not_snag() {
    let mut player = standing_player();
    let mut events = Vec::new();

    player.step(&held(false, true), &tuning(), floor().as_slice(), &mut events);

    assert_eq!(player.position, Vec2::new(105.0, 120.0));
    assert_eq!(player.motion, MotionState::Walk);
}

// -----------------------------------------------------------------------------
// Input tests
// -----------------------------------------------------------------------------

#[test]
fn test_left_wins_when_both_held() {
    let mut player = standing_player();
    let mut events = Vec::new();

    player.step(&held(true, true), &tuning(), floor().as_slice(), &mut events);

    assert_eq!(player.velocity.x, -5.0);
    assert_eq!(player.facing, Facing::Left);
}

#[test]
fn test_releasing_direction_stops_instantly() {
    let mut player = standing_player();
    let mut events = Vec::new();

    player.step(&held(false, true), &tuning(), floor().as_slice(), &mut events);
    player.step(&MovementInput::default(), &tuning(), floor().as_slice(), &mut events);

    assert_eq!(player.velocity.x, 0.0);
    assert_eq!(player.facing, Facing::Right);
}

#[test]
fn test_jump_from_ground() {
    let mut player = standing_player();
    let mut events = Vec::new();

    player.step(&jump_input(), &tuning(), floor().as_slice(), &mut events);

    // -15 launch plus one tick of gravity
    assert!((player.velocity.y + 14.2).abs() < 1e-5);
    assert!((player.position.y - 105.8).abs() < 1e-4);
    assert!(player.jumping);
    assert!(!player.on_ground);
    assert_eq!(player.motion, MotionState::Jump);
    assert_eq!(events, vec![GameEvent::PlaySound(SoundCue::Jump)]);
}

#[test]
fn test_jump_in_air_is_ignored() {
    let mut player = player_at(100.0, 0.0);
    let mut events = Vec::new();

    assert!(!player.try_jump(&tuning(), &mut events));
    assert_eq!(player.velocity.y, 0.0);
    assert!(events.is_empty());
}

#[test]
fn test_jump_lands_back_on_floor() {
    let mut player = standing_player();
    let mut events = Vec::new();

    player.step(&jump_input(), &tuning(), floor().as_slice(), &mut events);
    let mut ticks = 1;
    while !player.on_ground && ticks < 200 {
        player.step(&MovementInput::default(), &tuning(), floor().as_slice(), &mut events);
        ticks += 1;
    }

    assert!(player.on_ground);
    assert_eq!(player.position.y, 120.0);
    assert!(!player.jumping);
}

#[test]
fn test_interaction_edges() {
    let mut player = player_at(0.0, 0.0);

    player.apply_interaction_edges(&MovementInput {
        interact_pressed: true,
        ..Default::default()
    });
    assert!(player.interacting);

    player.apply_interaction_edges(&MovementInput::default());
    assert!(player.interacting);

    player.apply_interaction_edges(&MovementInput {
        interact_released: true,
        ..Default::default()
    });
    assert!(!player.interacting);
}

#[test]
fn test_interaction_tap_lasts_one_tick() {
    let mut player = player_at(0.0, 0.0);
    let tap = MovementInput {
        interact_pressed: true,
        interact_released: true,
        ..Default::default()
    };

    player.apply_interaction_edges(&tap);
    assert!(player.interacting);

    player.finish_interaction_tap(&tap);
    assert!(!player.interacting);
}

#[test]
fn test_release_then_press_keeps_interacting() {
    let mut player = player_at(0.0, 0.0);
    player.interacting = true;
    // Key released and pressed again between two ticks, still held.
    let repress = MovementInput {
        interact_pressed: true,
        interact_released: true,
        interact_last_pressed: Some(true),
        ..Default::default()
    };

    player.apply_interaction_edges(&repress);
    player.finish_interaction_tap(&repress);
    assert!(player.interacting);
}

#[test]
fn test_press_then_release_ends_with_release() {
    let mut player = player_at(0.0, 0.0);
    let tap = MovementInput {
        interact_pressed: true,
        interact_released: true,
        interact_last_pressed: Some(false),
        ..Default::default()
    };

    player.apply_interaction_edges(&tap);
    assert!(player.interacting);
    player.finish_interaction_tap(&tap);
    assert!(!player.interacting);
}

#[test]
fn test_clear_edges_keeps_held_directions() {
    let mut input = MovementInput {
        left: true,
        jump_pressed: true,
        interact_pressed: true,
        interact_released: true,
        interact_last_pressed: Some(true),
        ..Default::default()
    };
    input.clear_edges();
    assert!(input.left);
    assert!(!input.jump_pressed);
    assert!(!input.interact_pressed);
    assert!(!input.interact_released);
    assert!(input.interact_last_pressed.is_none());
}

// -----------------------------------------------------------------------------
// Motion state tests
// -----------------------------------------------------------------------------

#[test]
fn test_derive_motion() {
    let mut player = player_at(0.0, 0.0);

    player.on_ground = true;
    assert_eq!(derive_motion(&player), MotionState::Idle);

    player.velocity.x = 5.0;
    assert_eq!(derive_motion(&player), MotionState::Walk);

    player.on_ground = false;
    player.velocity.y = -3.0;
    assert_eq!(derive_motion(&player), MotionState::Jump);

    player.velocity.y = 3.0;
    assert_eq!(derive_motion(&player), MotionState::Fall);
}

// -----------------------------------------------------------------------------
// Platform riding tests
// -----------------------------------------------------------------------------

fn platform_room(move_x: f32) -> Room {
    let template = RoomTemplate {
        moving_platforms: vec![PlatformDef {
            id: PlatformId(1),
            x: 0.0,
            y: 200.0,
            width: 128.0,
            height: 20.0,
            move_x,
            move_y: 0.0,
            speed: 0.01,
        }],
        ..Default::default()
    };
    Room::from_template("test", &template)
}

#[test]
fn test_landing_on_platform_records_rider() {
    let room = platform_room(100.0);
    let mut player = player_at(20.0, 116.0);
    player.velocity.y = 5.0;

    player.move_vertical(&room);

    assert!(player.on_ground);
    assert_eq!(player.position.y, 120.0);
    assert_eq!(player.riding, Some(PlatformIndex(0)));
}

#[test]
fn test_rider_carried_by_platform() {
    let mut room = platform_room(100.0);
    room.platforms[0].apply(ActivationAction::Activate);
    let mut player = player_at(20.0, 120.0);
    player.on_ground = true;
    let mut events = Vec::new();

    let before = player.position.x;
    player.step(&MovementInput::default(), &tuning(), &room, &mut events);
    room.update(&mut player, 0, &mut events);

    // Carried by this tick's advance, not the previous one.
    assert_eq!(player.riding, Some(PlatformIndex(0)));
    assert!((player.position.x - before - 1.0).abs() < 1e-4);
    assert_eq!(player.position.x - before, room.platforms[0].delta().x);
    assert_eq!(player.position.y, 120.0);
}

#[test]
fn test_stepping_off_platform_clears_rider() {
    let room = platform_room(0.0);
    let mut player = player_at(20.0, 120.0);
    player.on_ground = true;
    let mut events = Vec::new();

    player.step(&MovementInput::default(), &tuning(), &room, &mut events);
    assert_eq!(player.riding, Some(PlatformIndex(0)));

    player.teleport(Vec2::new(400.0, 0.0));
    player.step(&MovementInput::default(), &tuning(), &room, &mut events);
    assert!(player.riding.is_none());
    assert!(!player.on_ground);
}

// -----------------------------------------------------------------------------
// Lift tests
// -----------------------------------------------------------------------------

/// A vertical lift rising 200 px at 2 px per tick, with a lever that starts it
/// within reach of a rider standing on its left end.
fn lift_room() -> Room {
    let template = RoomTemplate {
        levers: vec![LeverDef {
            x: 60.0,
            y: 240.0,
            target_id: PlatformId(1),
            action: ActivationAction::Activate,
        }],
        moving_platforms: vec![PlatformDef {
            id: PlatformId(1),
            x: 0.0,
            y: 300.0,
            width: 128.0,
            height: 20.0,
            move_x: 0.0,
            move_y: -200.0,
            speed: 0.01,
        }],
        ..Default::default()
    };
    Room::from_template("lift", &template)
}

fn lift_rider() -> Player {
    let mut player = player_at(20.0, 220.0);
    player.on_ground = true;
    player.interacting = true;
    player
}

fn assert_flush(player: &Player, room: &Room, tick: u64) {
    let top = room.platforms[0].bounds.top();
    assert_eq!(player.riding, Some(PlatformIndex(0)), "tick {tick}");
    assert!(player.on_ground, "tick {tick}");
    assert!(
        (player.bounds().bottom() - top).abs() < 1e-3,
        "tick {tick}: feet at {} but platform top at {top}",
        player.bounds().bottom()
    );
}

#[test]
fn test_rider_flush_on_activation_tick() {
    let mut room = lift_room();
    let mut player = lift_rider();
    let mut events = Vec::new();

    player.step(&MovementInput::default(), &tuning(), &room, &mut events);
    room.update(&mut player, 0, &mut events);

    assert!(room.platforms[0].is_active());
    assert_eq!(room.platforms[0].bounds.top(), 298.0);
    assert_flush(&player, &room, 0);
    assert!(events.contains(&GameEvent::PlaySound(SoundCue::SwitchActivate)));
}

#[test]
fn test_rider_flush_through_full_lift_cycle() {
    let mut room = lift_room();
    let mut player = lift_rider();
    let mut events = Vec::new();
    let mut reversals = 0;
    let mut forward = true;

    // Up, down and half way up again: both reversals.
    for tick in 0..250 {
        player.step(&MovementInput::default(), &tuning(), &room, &mut events);
        room.update(&mut player, tick * 16, &mut events);

        assert_flush(&player, &room, tick);
        if room.platforms[0].is_forward() != forward {
            forward = room.platforms[0].is_forward();
            reversals += 1;
        }
    }

    assert_eq!(reversals, 2);
    assert!((room.platforms[0].bounds.top() - 200.0).abs() < 1e-2);
    assert_eq!(player.position.x, 20.0);
}

#[test]
fn test_rider_flush_when_lift_reverses_at_top() {
    let mut room = lift_room();
    let mut player = lift_rider();
    let mut events = Vec::new();

    for tick in 0..99 {
        player.step(&MovementInput::default(), &tuning(), &room, &mut events);
        room.update(&mut player, tick * 16, &mut events);
    }
    assert!(room.platforms[0].is_forward());

    // Last rising tick, then the first descending one.
    for tick in 99..101 {
        player.step(&MovementInput::default(), &tuning(), &room, &mut events);
        room.update(&mut player, tick * 16, &mut events);
        assert_flush(&player, &room, tick);
    }
    assert!(!room.platforms[0].is_forward());
    assert!((room.platforms[0].delta().y - 2.0).abs() < 1e-3);
}

#[test]
fn test_walking_on_rising_lift_stays_on_it() {
    let mut room = lift_room();
    let mut player = lift_rider();
    let mut events = Vec::new();

    for tick in 0..8 {
        player.step(&held(false, true), &tuning(), &room, &mut events);
        room.update(&mut player, tick * 16, &mut events);
        assert_flush(&player, &room, tick);
    }

    assert_eq!(player.position.x, 60.0);
    assert_eq!(player.motion, MotionState::Walk);
}
