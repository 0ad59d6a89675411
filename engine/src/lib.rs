//! Core engine for Operative - screen sequencing and session state.
//!
//! This crate owns the `App` state machine without any TUI dependencies:
//!
//! - **Screen sequencer**: one-way boolean gates deciding which full-screen
//!   view is presented (boot -> affiliation -> standby)
//! - **Boot sequence**: tick-driven timed reveal of the startup log
//! - **Session store**: the single session-state record plus its observable
//!   mutation queue
//! - **Config**: TOML user configuration
//!
//! The TUI layer (`operative-tui`) reads state from [`App`] and forwards
//! input back to it. No rendering logic lives here.

mod boot;
mod config;
mod roster;
mod session;

pub use boot::{BOOT_LOGS, BootLine, BootSequence};
pub use config::{AppConfig, ConfigError, OperativeConfig};
pub use roster::{Accent, AgencyProfile, ROSTER};
pub use session::SessionStore;

use std::time::{Duration, Instant};

use operative_types::{SessionEvent, UiOptions};

/// Which full-screen view is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Boot,
    Affiliation,
    Standby,
}

/// One-way completion gates, scanned in fixed order.
///
/// A gate flips false -> true when its screen signals completion and never
/// resets. The first screen whose prerequisites are satisfied but whose own
/// gate is unset is the one presented.
#[derive(Debug, Default)]
struct Gates {
    booted: bool,
    affiliation_chosen: bool,
}

impl Gates {
    fn current(&self) -> Screen {
        if !self.booted {
            Screen::Boot
        } else if !self.affiliation_chosen {
            Screen::Affiliation
        } else {
            Screen::Standby
        }
    }
}

/// Transient footer message fed by drained session events.
#[derive(Debug, Clone)]
struct StatusFlash {
    text: String,
    remaining: Duration,
}

const STATUS_FLASH_DURATION: Duration = Duration::from_millis(2500);

/// Top-level application state.
///
/// The cli drives this once per frame: drain input, `tick()`, draw. All
/// timing flows through [`advance`](Self::advance) as elapsed durations, so
/// the whole state machine is deterministic under test.
#[derive(Debug)]
pub struct App {
    gates: Gates,
    boot: BootSequence,
    store: SessionStore,
    /// Cursor over [`ROSTER`] on the affiliation screen.
    cursor: usize,
    ui_options: UiOptions,
    status: Option<StatusFlash>,
    /// Monotonic animation clock, accumulated from frame deltas.
    animation_clock: Duration,
    last_tick: Instant,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(ui_options: UiOptions) -> Self {
        Self::with_boot(ui_options, BootSequence::new())
    }

    /// Build with an explicit boot schedule (deterministic sequencing).
    #[must_use]
    pub fn with_boot(ui_options: UiOptions, boot: BootSequence) -> Self {
        Self {
            gates: Gates::default(),
            boot,
            store: SessionStore::new(),
            cursor: 0,
            ui_options,
            status: None,
            animation_clock: Duration::ZERO,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    /// Advance by wall-clock time since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(delta);
    }

    /// Advance the state machine by an explicit elapsed duration.
    pub fn advance(&mut self, delta: Duration) {
        self.animation_clock = self.animation_clock.saturating_add(delta);

        if self.gates.current() == Screen::Boot {
            self.boot.advance(delta);
            if self.boot.take_completed() {
                self.gates.booted = true;
                tracing::info!("boot sequence complete");
            }
        }

        // Decay the current flash before draining, so a flash set this tick
        // gets its full display window.
        if let Some(status) = &mut self.status {
            if status.remaining <= delta {
                self.status = None;
            } else {
                status.remaining -= delta;
            }
        }

        for event in self.store.drain_events() {
            tracing::debug!(?event, "session event");
            self.flash(describe_event(&event));
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.gates.current()
    }

    #[must_use]
    pub fn boot_lines(&self) -> &[BootLine] {
        self.boot.lines()
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SessionStore {
        &mut self.store
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Monotonic clock for decorative animation (globe rotation, pulses).
    #[must_use]
    pub fn animation_time(&self) -> Duration {
        self.animation_clock
    }

    #[must_use]
    pub fn status_line(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    // --- affiliation screen -------------------------------------------------

    /// Index of the highlighted roster card.
    #[must_use]
    pub fn selection(&self) -> usize {
        self.cursor
    }

    pub fn select_next(&mut self) {
        if self.screen() == Screen::Affiliation {
            self.cursor = (self.cursor + 1) % ROSTER.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.screen() == Screen::Affiliation {
            self.cursor = (self.cursor + ROSTER.len() - 1) % ROSTER.len();
        }
    }

    pub fn select_index(&mut self, index: usize) {
        if self.screen() == Screen::Affiliation && index < ROSTER.len() {
            self.cursor = index;
        }
    }

    /// Lock in the highlighted agency and advance past the picker.
    ///
    /// Only meaningful on the affiliation screen; the gate is one-way, so the
    /// store's affiliation is written at most once through this path.
    pub fn confirm_selection(&mut self) {
        if self.screen() != Screen::Affiliation {
            return;
        }
        let agency = ROSTER[self.cursor].agency;
        self.store.set_affiliation(agency);
        self.gates.affiliation_chosen = true;
        tracing::info!(%agency, "affiliation locked");
    }

    // --- lifecycle ----------------------------------------------------------

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn flash(&mut self, text: String) {
        self.status = Some(StatusFlash {
            text,
            remaining: STATUS_FLASH_DURATION,
        });
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiOptions::default())
    }
}

fn describe_event(event: &SessionEvent) -> String {
    match event {
        SessionEvent::TraceChanged { level } => format!("TRACE {level}%"),
        SessionEvent::TrustChanged { level } => format!("HELIX TRUST {level}"),
        SessionEvent::AffiliationSet { agency } => format!("AFFILIATION LOCKED: {agency}"),
        SessionEvent::HandleSet { handle } => format!("HANDLE REGISTERED: {handle}"),
        SessionEvent::MissionChanged { mission } => match mission {
            Some(id) => format!("MISSION: {id}"),
            None => "MISSION CLEARED".to_owned(),
        },
    }
}
