//! Aim source module — какой input (pointer или stick) ведёт прицел оружия
//!
//! # Архитектура
//!
//! ```text
//! Weapon entity:  AimSourceSelector + WeaponAim (required) + Weapon (optional)
//!                         │                                      │ owner
//!                         ▼                                      ▼
//!               PointerPosition (Resource)          Owner entity: BoundInput
//! ```
//!
//! Selector НЕ наследует aim логику — держит ссылку на sibling capability
//! (`WeaponAim` на том же entity) и пишет только её `mode`.
//!
//! # Компоненты модуля
//!
//! - `selector` - AimSourceSelector + чистая логика решения
//! - `systems` - resolve / select systems
//! - `sampling` - device feeders (window cursor, gamepad right stick)
//! - `events` - AimModeChanged, AimSelectorDisabled

use bevy::prelude::*;

pub mod events;
pub mod sampling;
pub mod selector;
pub mod systems;


pub use events::*;
pub use sampling::*;
pub use selector::*;
pub use systems::*;

use crate::components::{AimMode, BoundInput, GamepadBinding, PointerPosition, Weapon, WeaponAim};

/// Фазы aim source внутри frame (chained)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AimSourceSet {
    /// Device → PointerPosition / BoundInput
    Sample,
    /// Резолв siblings у новых selector'ов
    Resolve,
    /// Запись `WeaponAim::mode`
    Select,
}

/// Aim Source Plugin
///
/// Регистрирует системы в Update (раз в rendered frame, НЕ FixedUpdate):
/// Sample → Resolve → Select.
pub struct AimSourcePlugin {
    /// Читать реальные устройства (window cursor, gamepads)
    pub sample_devices: bool,
}

impl Default for AimSourcePlugin {
    fn default() -> Self {
        Self {
            sample_devices: true,
        }
    }
}

impl AimSourcePlugin {
    /// Без device feeders: input пишет host
    pub fn host_driven() -> Self {
        Self {
            sample_devices: false,
        }
    }
}

impl Plugin for AimSourcePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AimModeChanged>()
            .add_event::<AimSelectorDisabled>()
            .init_resource::<PointerPosition>()
            .register_type::<AimMode>()
            .register_type::<WeaponAim>()
            .register_type::<Weapon>()
            .register_type::<BoundInput>()
            .register_type::<GamepadBinding>()
            .register_type::<PointerPosition>()
            .register_type::<AimSourceSelector>();

        app.configure_sets(
            Update,
            (
                AimSourceSet::Sample,
                AimSourceSet::Resolve,
                AimSourceSet::Select,
            )
                .chain(),
        );

        if self.sample_devices {
            app.add_systems(
                Update,
                (sampling::sample_cursor_position, sampling::sample_bound_gamepads)
                    .in_set(AimSourceSet::Sample),
            );
        }

        app.add_systems(
            Update,
            (
                systems::resolve_aim_selectors.in_set(AimSourceSet::Resolve),
                systems::select_aim_source.in_set(AimSourceSet::Select),
            ),
        );
    }
}
