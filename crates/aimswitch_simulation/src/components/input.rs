//! Input sources, которые читает aim source selector
//!
//! # Архитектура
//!
//! ```text
//! Window cursor / host bridge ──→ PointerPosition (Resource, global)
//! Gamepad (right stick)       ──→ BoundInput (Component на owner)
//!                                     ↓
//!                          select_aim_source (aim_source::systems)
//! ```
//!
//! Dead-zone *processing* (rescale и т.п.) — забота input layer,
//! здесь только порог для "есть ли stick input".

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Default dead-zone на ось
pub const DEFAULT_STICK_DEAD_ZONE: f32 = 0.2;

/// Текущая позиция pointer (global pointer query)
///
/// Пишется раз в frame: `sample_cursor_position` или host напрямую.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PointerPosition(pub Vec2);

/// Bound input source владельца оружия
///
/// Вешается на owner entity (актёр), НЕ на оружие.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct BoundInput {
    /// Secondary movement vector (right stick), sampled этот frame
    pub secondary_move: Vec2,

    /// Dead-zone threshold по осям
    pub dead_zone: Vec2,
}

impl Default for BoundInput {
    fn default() -> Self {
        Self {
            secondary_move: Vec2::ZERO,
            dead_zone: Vec2::splat(DEFAULT_STICK_DEAD_ZONE),
        }
    }
}

impl BoundInput {
    pub fn with_dead_zone(dead_zone: Vec2) -> Self {
        Self {
            dead_zone,
            ..default()
        }
    }
}

/// Какой gamepad кормит `BoundInput` этого owner
///
/// Используется `sample_bound_gamepads`; без него `BoundInput` пишет host.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct GamepadBinding {
    pub gamepad: Entity,
}
