//! Core domain types for Operative - no IO, no async, no ratatui dependency.
//!
//! Shared between the engine (state ownership) and the TUI (rendering).

mod session;
mod ui;

pub use session::{Agency, INITIAL_MISSION, SessionEvent, SessionState, TRACE_MAX, TRACE_MIN};
pub use ui::UiOptions;
