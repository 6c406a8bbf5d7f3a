//! Aim source events
//!
//! Emit: aim_source systems. Consume: UI / debug overlay / тесты.

use bevy::prelude::*;

use crate::components::AimMode;

/// Event: `WeaponAim::mode` реально сменился
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimModeChanged {
    /// Weapon entity (на нём selector + WeaponAim)
    pub weapon: Entity,

    pub from: AimMode,
    pub to: AimMode,
}

/// Event: selector отключился при резолве (нет `WeaponAim`)
///
/// Emit ровно один раз на selector.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AimSelectorDisabled {
    pub entity: Entity,
}
