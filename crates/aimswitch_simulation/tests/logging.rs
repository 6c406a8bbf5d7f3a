//! Logger integration test
//!
//! Свой test binary: глобальный logger не делится с остальными тестами.
//! Внутри binary тесты сериализуются через SERIAL.

use std::sync::{Arc, Mutex, MutexGuard};

use aimswitch_simulation::logger::{set_log_level, set_logger, LogLevel, LogPrinter};
use aimswitch_simulation::*;
use bevy::prelude::*;

static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Printer, который складывает строки в память
#[derive(Clone, Default)]
struct CapturePrinter {
    lines: Arc<Mutex<Vec<(LogLevel, String)>>>,
}

impl CapturePrinter {
    fn install() -> Self {
        let printer = Self::default();
        set_logger(Box::new(printer.clone()));
        printer
    }

    fn count(&self, level: LogLevel) -> usize {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(line_level, _)| *line_level == level)
            .count()
    }

    fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl LogPrinter for CapturePrinter {
    fn log(&self, level: LogLevel, message: &str) {
        self.lines.lock().unwrap().push((level, message.to_string()));
    }
}

#[test]
fn test_missing_aim_warns_exactly_once() {
    let _guard = serial();
    set_log_level(LogLevel::Debug);

    let mut app = create_headless_app(7);
    // create_headless_app ставит ConsoleLogger — подменяем после
    let printer = CapturePrinter::install();

    let owner = app.world_mut().spawn(BoundInput::default()).id();
    let orphan = app
        .world_mut()
        .spawn((AimSourceSelector::new(), Weapon::owned_by("Orphan", owner)))
        .id();

    for step in 1..=25 {
        app.world_mut().resource_mut::<PointerPosition>().0 = Vec2::splat(step as f32);
        app.update();
    }

    assert_eq!(printer.count(LogLevel::Warning), 1);

    let warning = printer
        .messages()
        .into_iter()
        .find(|message| message.contains("WeaponAim not found"))
        .expect("missing-aim warning logged");
    assert!(warning.contains(&format!("{:?}", orphan)));
}

#[test]
fn test_level_filter_drops_lower_levels() {
    let _guard = serial();
    let printer = CapturePrinter::install();

    set_log_level(LogLevel::Warning);
    log("debug line");
    log_info("info line");
    log_warning("warning line");
    log_error("error line");
    set_log_level(LogLevel::Debug);

    assert_eq!(printer.count(LogLevel::Debug), 0);
    assert_eq!(printer.count(LogLevel::Info), 0);
    assert_eq!(printer.count(LogLevel::Warning), 1);
    assert_eq!(printer.count(LogLevel::Error), 1);

    // Timestamp добавляется facade, не printer
    let messages = printer.messages();
    assert!(messages.iter().all(|message| message.starts_with('[')));
    assert!(messages[0].ends_with("warning line"));

    // После сброса уровня debug снова проходит
    log("debug again");
    assert_eq!(printer.count(LogLevel::Debug), 1);
}
