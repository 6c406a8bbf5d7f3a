//! Headless прогон AIMSWITCH
//!
//! Synthetic input (seeded) → aim source selector → лог смен режима.

use bevy::prelude::*;
use aimswitch_simulation::{
    create_headless_app, spawn_armed_owner, AimModeChanged, SyntheticInputPlugin,
    DEFAULT_STICK_DEAD_ZONE,
};

/// Считает смены режима по событиям
#[derive(Resource, Default)]
struct ModeChangeCount(usize);

fn count_mode_changes(mut events: EventReader<AimModeChanged>, mut count: ResMut<ModeChangeCount>) {
    count.0 += events.read().count();
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);
    println!("Starting AIMSWITCH headless simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SyntheticInputPlugin)
        .init_resource::<ModeChangeCount>()
        .add_systems(Last, count_mode_changes);

    spawn_armed_owner(app.world_mut(), "Rifle", Vec2::splat(DEFAULT_STICK_DEAD_ZONE));
    spawn_armed_owner(app.world_mut(), "Pistol", Vec2::splat(DEFAULT_STICK_DEAD_ZONE));

    for frame in 0..1000 {
        app.update();

        if frame % 100 == 0 {
            let changes = app.world().resource::<ModeChangeCount>().0;
            println!("Frame {}: {} aim source changes", frame, changes);
        }
    }

    println!("Simulation complete!");
}
