//! Weapon identity: кто держит оружие

use bevy::prelude::*;

/// Identity оружия (optional sibling для `AimSourceSelector`)
///
/// Без этого компонента selector работает только от pointer —
/// владельца (и его bound input) узнать неоткуда.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct Weapon {
    /// Отображаемое имя (для логов)
    pub name: String,

    /// Актёр, который держит оружие (None = лежит на земле / не экипировано)
    pub owner: Option<Entity>,
}

impl Weapon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: None,
        }
    }

    pub fn owned_by(name: impl Into<String>, owner: Entity) -> Self {
        Self {
            name: name.into(),
            owner: Some(owner),
        }
    }

    pub fn equip(&mut self, owner: Entity) {
        self.owner = Some(owner);
    }

    pub fn drop_owner(&mut self) {
        self.owner = None;
    }
}
