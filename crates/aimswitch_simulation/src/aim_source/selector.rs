//! AimSourceSelector — арбитраж pointer vs. secondary stick
//!
//! Вешается на weapon entity рядом с `WeaponAim` (required) и `Weapon` (optional).
//! Siblings резолвятся один раз (resolve_aim_selectors), дальше
//! select_aim_source каждый frame пишет `WeaponAim::mode`.

use bevy::prelude::*;

use crate::components::AimMode;

/// Lifecycle selector'а
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum SelectorState {
    /// Siblings ещё не проверены (до первого frame)
    #[default]
    Unresolved,

    /// `WeaponAim` найден, selector работает каждый frame
    Active {
        /// Есть ли `Weapon` identity на том же entity (нужна для stick check)
        weapon_identity: bool,
    },

    /// `WeaponAim` отсутствовал при резолве. Терминальное состояние.
    Disabled,
}

#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct AimSourceSelector {
    pub state: SelectorState,

    /// Последняя увиденная позиция pointer
    pub last_pointer: Vec2,
}

impl AimSourceSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SelectorState::Active { .. })
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, SelectorState::Disabled)
    }

    /// Сравнивает pointer с прошлым frame и запоминает новую позицию.
    ///
    /// Любая ненулевая дельта = pointer активен.
    pub fn observe_pointer(&mut self, pointer: Vec2) -> bool {
        if pointer == self.last_pointer {
            return false;
        }
        self.last_pointer = pointer;
        true
    }
}

/// Stick активен, если его длина больше dead-zone по X
pub fn stick_exceeds_dead_zone(stick: Vec2, dead_zone: Vec2) -> bool {
    stick.length() > dead_zone.x
}

/// Решение на один frame.
///
/// Pointer проверяется первым, stick вторым и перезаписывает его.
/// Если ни один source не активен — режим не меняется.
pub fn next_mode(current: AimMode, pointer_moved: bool, stick_active: bool) -> AimMode {
    let mut mode = current;
    if pointer_moved {
        mode = AimMode::PointerDriven;
    }
    if stick_active {
        mode = AimMode::StickDriven;
    }
    mode
}
