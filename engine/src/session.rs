//! The session store: owned state plus an observable mutation queue.
//!
//! The store is not a global. It is a plain field on [`crate::App`], passed
//! by reference to whoever needs to read it. Every mutator is synchronous and
//! total: it applies the change immediately (visible to any reader on the
//! next access) and pushes a [`SessionEvent`] describing the new value onto a
//! pending queue. The owner drains that queue once per tick and decides what
//! to surface (status flash, log line, future gameplay triggers).

use std::mem;

use operative_types::{Agency, SessionEvent, SessionState, TRACE_MAX, TRACE_MIN};

/// Owns the [`SessionState`] record and emits one event per mutation.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: SessionState,
    pending: Vec<SessionEvent>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the full session state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Store a trace level directly, without clamping.
    ///
    /// Asymmetric with [`increase_trace`](Self::increase_trace) /
    /// [`decrease_trace`](Self::decrease_trace) on purpose: the inherited
    /// contract leaves the direct setter unclamped.
    pub fn set_trace_level(&mut self, level: i32) {
        self.state.trace_level = level;
        self.emit(SessionEvent::TraceChanged { level });
    }

    /// Raise the trace meter, clamping the result to `[TRACE_MIN, TRACE_MAX]`.
    pub fn increase_trace(&mut self, amount: i32) {
        let level = self
            .state
            .trace_level
            .saturating_add(amount)
            .clamp(TRACE_MIN, TRACE_MAX);
        self.state.trace_level = level;
        self.emit(SessionEvent::TraceChanged { level });
    }

    /// Lower the trace meter, clamping the result to `[TRACE_MIN, TRACE_MAX]`.
    pub fn decrease_trace(&mut self, amount: i32) {
        let level = self
            .state
            .trace_level
            .saturating_sub(amount)
            .clamp(TRACE_MIN, TRACE_MAX);
        self.state.trace_level = level;
        self.emit(SessionEvent::TraceChanged { level });
    }

    pub fn set_trust(&mut self, level: i32) {
        self.state.trust_level = level;
        self.emit(SessionEvent::TrustChanged { level });
    }

    /// Record the chosen affiliation.
    ///
    /// The store itself stays total (last write wins); "set at most once" is
    /// enforced by the screen sequencer never re-showing the picker.
    pub fn set_affiliation(&mut self, agency: Agency) {
        self.state.affiliation = Some(agency);
        self.emit(SessionEvent::AffiliationSet { agency });
    }

    pub fn set_handle(&mut self, handle: String) {
        self.state.handle = Some(handle.clone());
        self.emit(SessionEvent::HandleSet { handle });
    }

    pub fn set_mission(&mut self, mission: Option<String>) {
        self.state.current_mission = mission.clone();
        self.emit(SessionEvent::MissionChanged { mission });
    }

    /// Take all pending mutation events, in the order they were applied.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        mem::take(&mut self.pending)
    }

    fn emit(&mut self, event: SessionEvent) {
        self.pending.push(event);
    }
}
