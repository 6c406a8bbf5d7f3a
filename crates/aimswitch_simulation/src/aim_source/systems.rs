//! Aim source systems (Update, раз в rendered frame)
//!
//! Порядок (AimSourceSet, chained):
//! 1. Sample — device feeders (sampling.rs), опционально
//! 2. Resolve — resolve_aim_selectors
//! 3. Select — select_aim_source
//!
//! Внешние aim systems читают `WeaponAim::mode` после `AimSourceSet::Select`.

use bevy::prelude::*;

use super::events::{AimModeChanged, AimSelectorDisabled};
use super::selector::{next_mode, stick_exceeds_dead_zone, AimSourceSelector, SelectorState};
use crate::components::{BoundInput, PointerPosition, Weapon, WeaponAim};

/// System: резолв siblings для новых selector'ов (first use)
///
/// - `WeaponAim` есть → `Active`, запоминаем наличие `Weapon` identity
/// - `WeaponAim` нет → `Disabled` навсегда + один warning + `AimSelectorDisabled`
///
/// Query фильтрует `Added<AimSourceSelector>` — работа только на first use.
/// Уже резолвнутые selector'ы не пересматриваются: `WeaponAim`,
/// добавленный позже, disabled selector не оживит.
pub fn resolve_aim_selectors(
    mut selectors: Query<
        (Entity, &mut AimSourceSelector, Has<WeaponAim>, Has<Weapon>),
        Added<AimSourceSelector>,
    >,
    mut disabled_events: EventWriter<AimSelectorDisabled>,
) {
    for (entity, mut selector, has_aim, has_weapon) in selectors.iter_mut() {
        if selector.state != SelectorState::Unresolved {
            continue;
        }

        if !has_aim {
            selector.state = SelectorState::Disabled;
            disabled_events.write(AimSelectorDisabled { entity });

            crate::log_warning(&format!(
                "⚠️ AimSourceSelector on {:?}: WeaponAim not found on the same entity, selector disabled",
                entity
            ));
            continue;
        }

        selector.state = SelectorState::Active {
            weapon_identity: has_weapon,
        };

        if !has_weapon {
            crate::log(&format!(
                "AimSourceSelector on {:?}: no Weapon identity, stick input unavailable",
                entity
            ));
        }
    }
}

/// System: выбор aim source для каждого активного selector'а
///
/// 1. Pointer сдвинулся (любая ненулевая дельта) → PointerDriven
/// 2. Stick владельца вне dead-zone → StickDriven (перезаписывает шаг 1)
/// 3. Ничего → mode не трогаем
///
/// Нет owner / нет `BoundInput` у owner = "stick input недоступен", не ошибка.
pub fn select_aim_source(
    pointer: Res<PointerPosition>,
    mut weapons: Query<(Entity, &mut AimSourceSelector, &mut WeaponAim, Option<&Weapon>)>,
    owners: Query<&BoundInput>,
    mut changed_events: EventWriter<AimModeChanged>,
) {
    for (entity, mut selector, mut aim, weapon) in weapons.iter_mut() {
        let SelectorState::Active { weapon_identity } = selector.state else {
            continue;
        };

        let pointer_moved = selector.observe_pointer(pointer.0);

        let stick_active = weapon_identity
            && weapon
                .and_then(|weapon| weapon.owner)
                .and_then(|owner| owners.get(owner).ok())
                .is_some_and(|input| stick_exceeds_dead_zone(input.secondary_move, input.dead_zone));

        let current = aim.mode;
        let mode = next_mode(current, pointer_moved, stick_active);
        if mode == current {
            continue;
        }

        // Пишем только при реальной смене (change detection)
        aim.mode = mode;
        changed_events.write(AimModeChanged {
            weapon: entity,
            from: current,
            to: mode,
        });

        crate::log(&format!(
            "🎯 Aim source {:?} → {:?} (weapon {:?})",
            current, mode, entity
        ));
    }
}
