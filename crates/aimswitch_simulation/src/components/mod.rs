//! ECS Components для aim source arbitration
//!
//! Организация по доменам:
//! - aim: режим прицеливания оружия (WeaponAim, AimMode)
//! - weapon: identity оружия и его владелец (Weapon)
//! - input: input sources (PointerPosition, BoundInput, GamepadBinding)

pub mod aim;
pub mod input;
pub mod weapon;

// Re-exports для удобного импорта
pub use aim::*;
pub use input::*;
pub use weapon::*;
