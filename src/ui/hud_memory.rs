//! UI domain: HUD row showing held memories and their fade.

use bevy::prelude::*;

use crate::core::{Game, GameClock};

pub(crate) const MEMORY_SLOT_COUNT: usize = 8;
pub(crate) const MEMORY_SLOT_SIZE: f32 = 40.0;
pub(crate) const MEMORY_SLOT_SPACING: f32 = 10.0;
pub(crate) const MEMORY_HUD_PADDING: f32 = 20.0;

/// Marker for the HUD row container
#[derive(Component)]
pub struct MemoryHudUI;

/// One slot in the HUD row, shown when the player holds that many memories.
#[derive(Component)]
pub struct MemorySlot(pub usize);

pub(crate) fn spawn_memory_hud(mut commands: Commands) {
    commands
        .spawn((
            MemoryHudUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(MEMORY_HUD_PADDING),
                top: Val::Px(MEMORY_HUD_PADDING),
                column_gap: Val::Px(MEMORY_SLOT_SPACING),
                ..default()
            },
        ))
        .with_children(|parent| {
            for index in 0..MEMORY_SLOT_COUNT {
                parent.spawn((
                    MemorySlot(index),
                    Node {
                        width: Val::Px(MEMORY_SLOT_SIZE),
                        height: Val::Px(MEMORY_SLOT_SIZE),
                        border: UiRect::all(Val::Px(2.0)),
                        display: Display::None,
                        ..default()
                    },
                    BackgroundColor(Color::NONE),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ));
            }
        });
}

pub(crate) fn update_memory_hud(
    game: Res<Game>,
    clock: Res<GameClock>,
    mut slot_query: Query<(&MemorySlot, &mut Node, &mut BackgroundColor)>,
) {
    let now = clock.now_ms();
    let memories: Vec<_> = game.player().memories.iter().collect();

    for (slot, mut node, mut bg_color) in &mut slot_query {
        match memories.get(slot.0) {
            Some(memory) => {
                node.display = Display::Flex;
                // Fading memories wash out toward white
                let fade = memory.fade_progress(now);
                let base = memory.kind.color().to_srgba();
                bg_color.0 = Color::srgba(
                    base.red + (1.0 - base.red) * fade,
                    base.green + (1.0 - base.green) * fade,
                    base.blue + (1.0 - base.blue) * fade,
                    1.0 - fade * 0.8,
                );
            }
            None => node.display = Display::None,
        }
    }
}
