//! Input handling for the Operative TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use operative_engine::{App, Screen};

const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drain the terminal event queue without blocking.
///
/// Returns true if the app should quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    let mut handled = 0;
    while handled < MAX_EVENTS_PER_FRAME && event::poll(Duration::ZERO)? {
        handled += 1;
        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release) - important for Windows
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Ctrl+C quits from any screen
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                tracing::debug!("ctrl-c received");
                return Ok(true);
            }

            handle_key(app, key);
        }
    }

    Ok(app.should_quit())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match app.screen() {
        // Pure timed reveal: the boot screen takes no input.
        Screen::Boot => {}
        Screen::Affiliation => handle_affiliation(app, key),
        Screen::Standby => handle_standby(app, key),
    }
}

fn handle_affiliation(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.select_prev(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next(),
        // Digits lock the choice in directly
        KeyCode::Char(c @ '1'..='3') => {
            app.select_index(c as usize - '1' as usize);
            app.confirm_selection();
        }
        KeyCode::Enter => app.confirm_selection(),
        _ => {}
    }
}

fn handle_standby(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}
