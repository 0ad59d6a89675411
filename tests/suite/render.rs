//! Full-frame render assertions through a vt100 virtual terminal.

use std::time::Duration;

use ratatui::Terminal;

use operative_engine::{App, BootSequence, Screen};
use operative_tui::draw;
use operative_types::UiOptions;

use crate::vt100_backend::VT100Backend;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn render(app: &App) -> String {
    let backend = VT100Backend::new(WIDTH, HEIGHT);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal.backend().contents()
}

fn scripted_boot(messages: &[&str]) -> BootSequence {
    let delays = vec![Duration::from_millis(10); messages.len()];
    BootSequence::with_schedule(messages, &delays, Duration::from_millis(1000))
}

#[test]
fn boot_screen_shows_only_revealed_lines() {
    let mut app = App::with_boot(
        UiOptions::default(),
        scripted_boot(&["ALPHA ONLINE", "BRAVO ONLINE", "CHARLIE ONLINE"]),
    );
    app.advance(Duration::from_millis(25));

    let screen = render(&app);
    assert!(screen.contains("ALPHA ONLINE"), "screen:\n{screen}");
    assert!(screen.contains("BRAVO ONLINE"), "screen:\n{screen}");
    assert!(!screen.contains("CHARLIE ONLINE"), "screen:\n{screen}");
}

#[test]
fn every_screen_carries_the_terminal_chrome() {
    let mut app = App::with_boot(UiOptions::default(), scripted_boot(&["SYSTEM READY."]));

    for _ in 0..3 {
        let screen = render(&app);
        assert!(screen.contains("LIVE CONNECTION"), "screen:\n{screen}");
        assert!(screen.contains("ENCRYPTION: AES-4096-GCM"), "screen:\n{screen}");
        assert!(screen.contains("TERMINAL_ID: GHOST_01"), "screen:\n{screen}");
        assert!(screen.contains("AGENCY_OS v3.0.4"), "screen:\n{screen}");

        match app.screen() {
            Screen::Boot => app.advance(Duration::from_secs(5)),
            Screen::Affiliation => app.confirm_selection(),
            Screen::Standby => {}
        }
    }
}

#[test]
fn affiliation_screen_lists_the_full_roster() {
    let mut app = App::with_boot(UiOptions::default(), scripted_boot(&[]));
    app.advance(Duration::from_secs(2));
    assert_eq!(app.screen(), Screen::Affiliation);

    let screen = render(&app);
    assert!(screen.contains("A F F I L I A T I O N"), "screen:\n{screen}");
    for fragment in ["CIA", "NSA", "MI6", "THE COMPANY", "THE FORT", "THE CIRCUS"] {
        assert!(screen.contains(fragment), "missing {fragment}:\n{screen}");
    }
}

#[test]
fn standby_screen_shows_globe_and_session_readout() {
    let mut app = App::with_boot(UiOptions::default(), scripted_boot(&[]));
    app.advance(Duration::from_secs(2));
    app.select_next();
    app.confirm_selection();
    assert_eq!(app.screen(), Screen::Standby);

    let screen = render(&app);
    assert!(screen.contains("AWAITING HANDLE..."), "screen:\n{screen}");
    assert!(screen.contains("GLOBAL_SURVEILLANCE"), "screen:\n{screen}");
    assert!(screen.contains("TRACE LEVEL"), "screen:\n{screen}");
    assert!(screen.contains("NSA"), "screen:\n{screen}");
    assert!(screen.contains("MISSION_00_INIT"), "screen:\n{screen}");
}

#[test]
fn affiliation_lock_flashes_in_the_footer() {
    let mut app = App::with_boot(UiOptions::default(), scripted_boot(&[]));
    app.advance(Duration::from_secs(2));
    app.select_index(2);
    app.confirm_selection();
    app.advance(Duration::ZERO); // drain the store event into the flash

    let screen = render(&app);
    assert!(screen.contains("AFFILIATION LOCKED: MI6"), "screen:\n{screen}");
}

#[test]
fn ascii_only_render_has_no_unicode_glyphs() {
    let options = UiOptions {
        ascii_only: true,
        ..Default::default()
    };
    let mut app = App::with_boot(options, scripted_boot(&["SYSTEM READY."]));
    app.advance(Duration::from_millis(15));

    let screen = render(&app);
    assert!(screen.contains("SYSTEM READY."), "screen:\n{screen}");
    assert!(!screen.contains('\u{25cf}'), "unexpected live dot:\n{screen}");
    assert!(!screen.contains('\u{2588}'), "unexpected cursor block:\n{screen}");
}
