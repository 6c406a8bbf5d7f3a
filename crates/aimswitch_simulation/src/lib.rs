//! AIMSWITCH Simulation Core
//!
//! ECS-логика на Bevy 0.16: какой input source (pointer или secondary stick)
//! сейчас ведёт прицел оружия.
//!
//! - components: WeaponAim / AimMode, Weapon, PointerPosition, BoundInput
//! - aim_source: AimSourceSelector + systems (Update, раз в frame)
//! - synthetic: детерминированный input для headless прогонов

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod aim_source;
pub mod components;
pub mod logger;
pub mod synthetic;

// Re-export базовых типов
pub use aim_source::{
    AimModeChanged, AimSelectorDisabled, AimSourcePlugin, AimSourceSelector, AimSourceSet,
    SelectorState,
};
pub use components::*;
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use synthetic::{SyntheticInputConfig, SyntheticInputPlugin};

/// Главный plugin (объединяет все подсистемы)
#[derive(Default)]
pub struct AimSwitchPlugin {
    pub aim_source: AimSourcePlugin,
}

impl Plugin for AimSwitchPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(AimSourcePlugin {
            sample_devices: self.aim_source.sample_devices,
        });
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless прогона
///
/// Input гонит host (или SyntheticInputPlugin) — device feeders выключены.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .add_plugins(AimSwitchPlugin {
            aim_source: AimSourcePlugin::host_driven(),
        });

    app
}

/// Spawn owner (актёр с bound input) + оружие в его руках
///
/// Возвращает (owner, weapon).
pub fn spawn_armed_owner(world: &mut World, weapon_name: &str, dead_zone: Vec2) -> (Entity, Entity) {
    let owner = world.spawn(BoundInput::with_dead_zone(dead_zone)).id();
    let weapon = world
        .spawn((
            AimSourceSelector::new(),
            WeaponAim::default(),
            Weapon::owned_by(weapon_name, owner),
        ))
        .id();

    (owner, weapon)
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
