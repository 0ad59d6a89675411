//! End-to-end onboarding flow: boot -> affiliation -> standby.

use std::time::Duration;

use operative_engine::{App, BOOT_LOGS, BootSequence, Screen};
use operative_types::{Agency, INITIAL_MISSION, UiOptions};

fn deterministic_boot() -> BootSequence {
    let delays = vec![Duration::from_millis(50); BOOT_LOGS.len()];
    BootSequence::with_schedule(&BOOT_LOGS, &delays, Duration::from_millis(200))
}

#[test]
fn full_onboarding_flow() {
    let mut app = App::with_boot(UiOptions::default(), deterministic_boot());

    // Fresh session: boot screen, default state.
    assert_eq!(app.screen(), Screen::Boot);
    assert_eq!(app.store().state().affiliation, None);
    assert_eq!(
        app.store().state().current_mission.as_deref(),
        Some(INITIAL_MISSION)
    );

    // Mid-boot: some lines revealed, still gated.
    app.advance(Duration::from_millis(125));
    assert_eq!(app.boot_lines().len(), 2);
    assert_eq!(app.screen(), Screen::Boot);

    // All lines revealed, hold not yet elapsed.
    app.advance(Duration::from_millis(350));
    assert_eq!(app.boot_lines().len(), BOOT_LOGS.len());
    assert_eq!(app.screen(), Screen::Boot);

    // Hold elapses: the picker is presented.
    app.advance(Duration::from_millis(200));
    assert_eq!(app.screen(), Screen::Affiliation);

    // Choose MI6 and confirm.
    app.select_next();
    app.select_next();
    app.confirm_selection();
    assert_eq!(app.store().state().affiliation, Some(Agency::Mi6));
    assert_eq!(app.screen(), Screen::Standby);

    // Gates never revert, even under further time and input.
    app.advance(Duration::from_secs(30));
    app.confirm_selection();
    assert_eq!(app.screen(), Screen::Standby);
    assert_eq!(app.store().state().affiliation, Some(Agency::Mi6));
}

#[test]
fn boot_lines_match_the_log_in_order() {
    let mut app = App::with_boot(UiOptions::default(), deterministic_boot());
    app.advance(Duration::from_secs(5));
    let texts: Vec<&str> = app.boot_lines().iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, BOOT_LOGS);
}

#[test]
fn trace_meter_properties_hold_through_the_app() {
    let mut app = App::with_boot(UiOptions::default(), deterministic_boot());

    // Saturation at the ceiling.
    for _ in 0..20 {
        app.store_mut().increase_trace(13);
    }
    assert_eq!(app.store().state().trace_level, 100);

    // Floor at zero.
    for _ in 0..20 {
        app.store_mut().decrease_trace(17);
    }
    assert_eq!(app.store().state().trace_level, 0);

    // Direct set bypasses the clamp.
    app.store_mut().set_trace_level(150);
    assert_eq!(app.store().state().trace_level, 150);
}
