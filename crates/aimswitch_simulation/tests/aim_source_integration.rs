//! Aim source integration test
//!
//! Полный headless App (MinimalPlugins + AimSwitchPlugin):
//! - сценарии pointer / stick / оба / нет owner
//! - disabled selector без WeaponAim
//! - synthetic input не ломает инварианты

use bevy::prelude::*;
use aimswitch_simulation::*;

fn set_pointer(app: &mut App, position: Vec2) {
    app.world_mut().resource_mut::<PointerPosition>().0 = position;
}

fn set_stick(app: &mut App, owner: Entity, stick: Vec2) {
    app.world_mut()
        .get_mut::<BoundInput>(owner)
        .expect("owner has BoundInput")
        .secondary_move = stick;
}

fn aim_mode(app: &App, weapon: Entity) -> AimMode {
    app.world()
        .get::<WeaponAim>(weapon)
        .expect("weapon has WeaponAim")
        .mode
}

#[test]
fn test_pointer_then_stick_then_pointer() {
    let mut app = create_headless_app(1);
    let (owner, weapon) = spawn_armed_owner(app.world_mut(), "Rifle", Vec2::splat(0.2));

    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::PointerDriven);

    set_stick(&mut app, owner, Vec2::new(0.5, 0.5));
    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::StickDriven);

    set_stick(&mut app, owner, Vec2::ZERO);
    set_pointer(&mut app, Vec2::new(5.0, 5.0));
    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::PointerDriven);

    // Оба сразу → stick
    set_pointer(&mut app, Vec2::new(6.0, 5.0));
    set_stick(&mut app, owner, Vec2::new(0.0, -0.7));
    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::StickDriven);
}

#[test]
fn test_dropped_weapon_keeps_pointer_working() {
    let mut app = create_headless_app(2);
    let (owner, weapon) = spawn_armed_owner(app.world_mut(), "Pistol", Vec2::splat(0.2));

    set_stick(&mut app, owner, Vec2::new(0.9, 0.0));
    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::StickDriven);

    // Оружие выбросили — owner пропал, stick больше не учитывается
    app.world_mut()
        .get_mut::<Weapon>(weapon)
        .expect("weapon identity")
        .drop_owner();

    set_pointer(&mut app, Vec2::new(-3.0, 8.0));
    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::PointerDriven);

    app.update();
    assert_eq!(aim_mode(&app, weapon), AimMode::PointerDriven);
}

#[test]
fn test_selector_without_aim_never_mutates() {
    let mut app = create_headless_app(3);
    let owner = app.world_mut().spawn(BoundInput::default()).id();
    let orphan = app
        .world_mut()
        .spawn((AimSourceSelector::new(), Weapon::owned_by("Orphan", owner)))
        .id();

    for step in 1..=50 {
        set_pointer(&mut app, Vec2::splat(step as f32));
        set_stick(&mut app, owner, Vec2::new(1.0, 0.0));
        app.update();
    }

    let selector = app
        .world()
        .get::<AimSourceSelector>(orphan)
        .expect("selector stays on entity");
    assert_eq!(selector.state, SelectorState::Disabled);
    assert_eq!(selector.last_pointer, Vec2::ZERO);
    assert!(app.world().get::<WeaponAim>(orphan).is_none());
}

/// Synthetic input 1000 frames: каждая смена режима консистентна
#[test]
fn test_synthetic_input_mode_changes_are_consistent() {
    #[derive(Resource, Default)]
    struct Changes(Vec<AimModeChanged>);

    fn collect(mut events: EventReader<AimModeChanged>, mut changes: ResMut<Changes>) {
        changes.0.extend(events.read().copied());
    }

    let mut app = create_headless_app(99);
    app.add_plugins(SyntheticInputPlugin)
        .init_resource::<Changes>()
        .add_systems(Update, collect.after(AimSourceSet::Select));

    let (_, weapon) = spawn_armed_owner(app.world_mut(), "Rifle", Vec2::splat(0.2));

    for _ in 0..1000 {
        app.update();
    }

    let changes = &app.world().resource::<Changes>().0;
    assert!(!changes.is_empty(), "synthetic input should flip aim source at least once");

    let mut expected_from = AimMode::PointerDriven;
    for change in changes {
        assert_eq!(change.weapon, weapon);
        assert_ne!(change.from, change.to);
        assert_eq!(change.from, expected_from);
        expected_from = change.to;
    }
    assert_eq!(aim_mode(&app, weapon), expected_from);
}
