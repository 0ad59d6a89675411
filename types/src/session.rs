//! Session state: the single in-memory record of onboarding progress.
//!
//! One record exists per running shell. It is created with default values at
//! startup, mutated by the onboarding screens (and later by gameplay events),
//! and discarded when the process exits. Ownership lives in the engine's
//! `SessionStore`; nothing here performs IO.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower bound for the trace meter.
pub const TRACE_MIN: i32 = 0;
/// Upper bound for the trace meter.
pub const TRACE_MAX: i32 = 100;

/// Mission id assigned before the first briefing.
pub const INITIAL_MISSION: &str = "MISSION_00_INIT";

/// The operator's chosen agency, fixed for the session once set.
///
/// This is a closed set - the affiliation screen offers exactly these three
/// and nothing validates beyond the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agency {
    Cia,
    Nsa,
    Mi6,
}

impl Agency {
    /// All agencies in roster order.
    pub const ALL: [Agency; 3] = [Agency::Cia, Agency::Nsa, Agency::Mi6];

    /// Short identifier as shown on the selection cards.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Agency::Cia => "CIA",
            Agency::Nsa => "NSA",
            Agency::Mi6 => "MI6",
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Snapshot of everything the session tracks.
///
/// `trace_level` is nominally in `[TRACE_MIN, TRACE_MAX]`. Only the
/// increment/decrement mutators on the store clamp; the direct setter stores
/// whatever it is given. That asymmetry is inherited behavior and is kept
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub trace_level: i32,
    pub trust_level: i32,
    pub affiliation: Option<Agency>,
    pub handle: Option<String>,
    pub current_mission: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            trace_level: TRACE_MIN,
            trust_level: 50, // starts neutral
            affiliation: None,
            handle: None,
            current_mission: Some(INITIAL_MISSION.to_owned()),
        }
    }
}

/// A mutation observed on the session store.
///
/// Every store mutator emits exactly one of these, carrying the value after
/// the mutation. The owner drains them each tick; there is no global
/// subscriber registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TraceChanged { level: i32 },
    TrustChanged { level: i32 },
    AffiliationSet { agency: Agency },
    HandleSet { handle: String },
    MissionChanged { mission: Option<String> },
}
