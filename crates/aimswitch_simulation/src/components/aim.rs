//! Aim компоненты: какой input source сейчас ведёт прицел оружия

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Источник, который сейчас управляет направлением прицела
///
/// Меняется ТОЛЬКО через `AimSourceSelector` (select_aim_source system).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum AimMode {
    /// Прицел следует за pointer (мышь)
    #[default]
    PointerDriven,

    /// Прицел следует за secondary stick (правый стик геймпада)
    StickDriven,
}

impl AimMode {
    pub fn is_pointer(&self) -> bool {
        matches!(self, AimMode::PointerDriven)
    }

    pub fn is_stick(&self) -> bool {
        matches!(self, AimMode::StickDriven)
    }
}

/// Aim capability оружия
///
/// Внешние aim systems читают `mode` позже в том же frame
/// (ordering: `.after(AimSourceSet::Select)`).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct WeaponAim {
    pub mode: AimMode,
}

impl WeaponAim {
    pub fn new(mode: AimMode) -> Self {
        Self { mode }
    }
}
