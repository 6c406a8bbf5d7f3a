//! Synthetic input — детерминированный "игрок" для headless прогонов
//!
//! Каждый frame с заданной вероятностью двигает pointer и/или отклоняет stick
//! у всех owners с `BoundInput`. RNG — `DeterministicRng` (seeded ChaCha8),
//! поэтому одинаковый seed = одинаковая последовательность смен режима.

use bevy::prelude::*;
use rand::Rng;

use crate::aim_source::AimSourceSet;
use crate::components::{BoundInput, PointerPosition};
use crate::DeterministicRng;

/// Вероятности synthetic input за один frame
#[derive(Resource, Debug, Clone, Copy)]
pub struct SyntheticInputConfig {
    /// Шанс, что pointer сдвинется
    pub pointer_move_chance: f64,

    /// Шанс, что stick выйдет за dead-zone
    pub stick_chance: f64,

    /// Максимальный сдвиг pointer за frame (px)
    pub max_pointer_step: f32,
}

impl Default for SyntheticInputConfig {
    fn default() -> Self {
        Self {
            pointer_move_chance: 0.25,
            stick_chance: 0.15,
            max_pointer_step: 12.0,
        }
    }
}

pub struct SyntheticInputPlugin;

impl Plugin for SyntheticInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SyntheticInputConfig>()
            .init_resource::<PointerPosition>()
            .add_systems(Update, drive_synthetic_input.in_set(AimSourceSet::Sample));
    }
}

impl SyntheticInputConfig {
    /// Шанс pointer move, зажатый в [0, 1] (NaN = никогда)
    pub fn pointer_chance(&self) -> f64 {
        probability(self.pointer_move_chance)
    }

    /// Шанс stick input, зажатый в [0, 1] (NaN = никогда)
    pub fn stick_chance(&self) -> f64 {
        probability(self.stick_chance)
    }

    /// Шаг pointer, минимум 1px; не-finite значения → 1px
    pub fn pointer_step(&self) -> f32 {
        if self.max_pointer_step.is_finite() {
            self.max_pointer_step.max(1.0)
        } else {
            1.0
        }
    }
}

fn probability(chance: f64) -> f64 {
    if chance.is_nan() {
        0.0
    } else {
        chance.clamp(0.0, 1.0)
    }
}

/// System: пишет PointerPosition и BoundInput::secondary_move
pub fn drive_synthetic_input(
    config: Res<SyntheticInputConfig>,
    mut rng: ResMut<DeterministicRng>,
    mut pointer: ResMut<PointerPosition>,
    mut inputs: Query<&mut BoundInput>,
) {
    let rng = &mut rng.rng;

    if rng.gen_bool(config.pointer_chance()) {
        let step = config.pointer_step();
        let delta = Vec2::new(rng.gen_range(-step..step), rng.gen_range(-step..step));
        pointer.0 += delta;
    }

    for mut input in inputs.iter_mut() {
        let stick_fires = rng.gen_bool(config.stick_chance());

        // Dead-zone NaN / inf → за неё не выйти, stick молчит
        let stick = if stick_fires && input.dead_zone.x.is_finite() {
            // Направление случайное, длина гарантированно за dead-zone
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let min_length = input.dead_zone.x.max(0.0) + 0.05;
            let length = rng.gen_range(min_length..=min_length.max(1.0));
            Vec2::from_angle(angle) * length
        } else {
            Vec2::ZERO
        };
        input.secondary_move = stick;
    }
}
