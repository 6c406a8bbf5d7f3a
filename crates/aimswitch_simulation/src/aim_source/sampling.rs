//! Device feeders: реальные устройства → PointerPosition / BoundInput
//!
//! Host, который сам гонит input (bridge, тесты, synthetic), может их выключить:
//! `AimSourcePlugin { sample_devices: false }`.

use bevy::input::gamepad::Gamepad;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, Window};

use crate::components::{BoundInput, GamepadBinding, PointerPosition};

/// System: cursor primary window → PointerPosition
///
/// Нет окна или cursor вне окна → ресурс не трогаем
/// (последняя позиция остаётся, pointer считается неподвижным).
pub fn sample_cursor_position(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pointer: ResMut<PointerPosition>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    if pointer.0 != cursor {
        pointer.0 = cursor;
    }
}

/// System: right stick привязанного gamepad → BoundInput::secondary_move
///
/// Gamepad отключён (entity пропал) → `Vec2::ZERO`.
pub fn sample_bound_gamepads(
    gamepads: Query<&Gamepad>,
    mut owners: Query<(&GamepadBinding, &mut BoundInput)>,
) {
    for (binding, mut input) in owners.iter_mut() {
        let stick = gamepads
            .get(binding.gamepad)
            .map(|gamepad| gamepad.right_stick())
            .unwrap_or(Vec2::ZERO);

        if input.secondary_move != stick {
            input.secondary_move = stick;
        }
    }
}
