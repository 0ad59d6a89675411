//! Boot sequence: timed reveal of the startup log.
//!
//! The schedule is a value owned by the [`crate::App`], advanced by elapsed
//! frame time. There are no detached timers: dropping the sequence drops the
//! schedule with it, so nothing can fire after the boot screen is torn down.

use std::collections::VecDeque;
use std::time::Duration;

use chrono::Local;
use rand::RngExt;

/// Startup log, revealed one line at a time.
pub const BOOT_LOGS: [&str; 8] = [
    "BIOS CHECK... OK",
    "LOADING KERNEL... OK",
    "MOUNTING VOLUMES... OK",
    "DECRYPTING FILESYSTEM...",
    "ESTABLISHING SECURE LINK...",
    "HANDSHAKE ACCEPTED.",
    "INITIALIZING HELIX ENGINE...",
    "SYSTEM READY.",
];

// Each line waits an independently drawn delay in this range.
const REVEAL_DELAY_MIN_MS: u64 = 200;
const REVEAL_DELAY_MAX_MS: u64 = 700;

// Pause between the last reveal and completion.
const COMPLETION_HOLD: Duration = Duration::from_millis(1000);

/// A revealed log line, stamped with its reveal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootLine {
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug)]
struct Scheduled {
    text: String,
    /// Delay after the previous event before this line appears.
    delay: Duration,
}

/// Tick-driven reveal schedule for the boot screen.
///
/// Lines are revealed strictly in input order into an append-only list.
/// After the last line, a fixed hold elapses and the sequence completes;
/// [`take_completed`](Self::take_completed) observes that exactly once.
#[derive(Debug)]
pub struct BootSequence {
    pending: VecDeque<Scheduled>,
    revealed: Vec<BootLine>,
    /// Countdown to the next reveal, or to completion once pending is empty.
    until_next: Duration,
    hold: Duration,
    complete: bool,
    completion_taken: bool,
}

impl BootSequence {
    /// The standard boot log with randomized reveal delays.
    #[must_use]
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let delays: Vec<Duration> = BOOT_LOGS
            .iter()
            .map(|_| Duration::from_millis(rng.random_range(REVEAL_DELAY_MIN_MS..REVEAL_DELAY_MAX_MS)))
            .collect();
        Self::with_schedule(&BOOT_LOGS, &delays, COMPLETION_HOLD)
    }

    /// Build a sequence with an explicit schedule (deterministic sequencing).
    ///
    /// `delays[i]` is the wait before message `i`, measured from the previous
    /// reveal (or from start for the first). `hold` is the pause between the
    /// last reveal and completion.
    #[must_use]
    pub fn with_schedule(messages: &[&str], delays: &[Duration], hold: Duration) -> Self {
        debug_assert_eq!(messages.len(), delays.len());
        let pending: VecDeque<Scheduled> = messages
            .iter()
            .zip(delays)
            .map(|(text, delay)| Scheduled {
                text: (*text).to_owned(),
                delay: *delay,
            })
            .collect();
        let until_next = pending.front().map_or(hold, |next| next.delay);
        Self {
            pending,
            revealed: Vec::new(),
            until_next,
            hold,
            complete: false,
            completion_taken: false,
        }
    }

    /// Advance the schedule by elapsed frame time.
    ///
    /// A single large delta may cross several deadlines; every due reveal is
    /// applied, in order, before the hold starts counting.
    pub fn advance(&mut self, mut delta: Duration) {
        while !self.complete {
            if delta < self.until_next {
                self.until_next -= delta;
                return;
            }
            delta -= self.until_next;
            self.until_next = Duration::ZERO;
            self.step();
        }
    }

    fn step(&mut self) {
        if let Some(next) = self.pending.pop_front() {
            self.revealed.push(BootLine {
                timestamp: Local::now().format("%H:%M:%S").to_string(),
                text: next.text,
            });
            self.until_next = self
                .pending
                .front()
                .map_or(self.hold, |upcoming| upcoming.delay);
        } else {
            self.complete = true;
        }
    }

    /// Lines revealed so far, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[BootLine] {
        &self.revealed
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Returns true exactly once, after the hold following the last reveal.
    pub fn take_completed(&mut self) -> bool {
        if self.complete && !self.completion_taken {
            self.completion_taken = true;
            return true;
        }
        false
    }
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}
