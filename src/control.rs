//! Cooperative pause/resume/stop control shared with a running test
//!
//! A measurement session owns exactly one `ControlSignal`. The caller
//! mutates it from outside the measurement loop; the measurers read it at
//! loop checkpoints. Pause suspends the loop (polling at a short interval)
//! and the suspended time is excluded from phase elapsed-time accounting.
//! Stop makes the next checkpoint exit the loop after the in-flight
//! transfer completes; cancel additionally aborts the in-flight transfer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Notify;

/// Poll interval while suspended on a pause checkpoint
const PAUSE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Outcome of a pause/stop checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    /// False once the session is stopped or cancelled
    pub proceed: bool,
    /// Wall-clock time spent suspended at this checkpoint
    pub paused_for: Duration,
}

#[derive(Debug, Default)]
struct ControlFlags {
    paused: AtomicBool,
    stopped: AtomicBool,
    cancelled: AtomicBool,
}

/// Shared pause/resume/stop/cancel flag for one in-flight test session.
///
/// Cheap to clone (`Arc` inside); all clones observe the same state. The
/// flags are independent booleans read and written atomically, so caller
/// and measurer never tear each other's updates. Once `stop` or `cancel`
/// is set it stays set until `reset`, which is only valid between
/// sessions.
#[derive(Debug, Clone, Default)]
pub struct ControlSignal {
    flags: Arc<ControlFlags>,
    cancel_notify: Arc<Notify>,
}

impl ControlSignal {
    /// Create a fresh signal with all flags clear
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend the measurement loop at its next checkpoint
    pub fn pause(&self) {
        self.flags.paused.store(true, Ordering::SeqCst);
    }

    /// Let a paused loop continue
    pub fn resume(&self) {
        self.flags.paused.store(false, Ordering::SeqCst);
    }

    /// Exit the loop at the next checkpoint. The in-flight transfer is
    /// allowed to finish; clears pause so a suspended loop wakes promptly.
    pub fn stop(&self) {
        self.flags.stopped.store(true, Ordering::SeqCst);
        self.flags.paused.store(false, Ordering::SeqCst);
    }

    /// Abort the session outright, interrupting any in-flight transfer.
    /// The phase still returns its best-available partial result.
    pub fn cancel(&self) {
        self.flags.cancelled.store(true, Ordering::SeqCst);
        self.flags.paused.store(false, Ordering::SeqCst);
        self.cancel_notify.notify_waiters();
    }

    /// Clear all flags. Only valid before a session starts or after it has
    /// fully terminated.
    pub fn reset(&self) {
        self.flags.paused.store(false, Ordering::SeqCst);
        self.flags.stopped.store(false, Ordering::SeqCst);
        self.flags.cancelled.store(false, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.flags.paused.load(Ordering::SeqCst)
    }

    pub fn is_stopped(&self) -> bool {
        self.flags.stopped.load(Ordering::SeqCst)
            || self.flags.cancelled.load(Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.flags.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves when `cancel` is called; used to race in-flight transfers
    pub async fn cancelled(&self) {
        let notified = self.cancel_notify.notified();
        tokio::pin!(notified);
        // Register interest before re-checking the flag so a cancel landing
        // in between is not missed.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Loop checkpoint: suspend while paused, report the suspended time,
    /// and say whether the loop should keep running.
    pub async fn checkpoint(&self) -> Checkpoint {
        if !self.is_paused() {
            return Checkpoint {
                proceed: !self.is_stopped(),
                paused_for: Duration::ZERO,
            };
        }

        let pause_start = Instant::now();
        while self.is_paused() && !self.is_stopped() {
            tokio::time::sleep(PAUSE_POLL_INTERVAL).await;
        }

        Checkpoint {
            proceed: !self.is_stopped(),
            paused_for: pause_start.elapsed(),
        }
    }
}

/// Elapsed-time accounting for one phase, excluding paused intervals
#[derive(Debug)]
pub struct PhaseClock {
    started: Instant,
    paused_total: Duration,
}

impl PhaseClock {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            paused_total: Duration::ZERO,
        }
    }

    /// Record time spent suspended at a checkpoint
    pub fn note_pause(&mut self, paused_for: Duration) {
        self.paused_total += paused_for;
    }

    /// Active elapsed time: wall-clock minus paused intervals
    pub fn active_elapsed(&self) -> Duration {
        self.started.elapsed().saturating_sub(self.paused_total)
    }

    /// Total time spent paused so far
    pub fn paused_total(&self) -> Duration {
        self.paused_total
    }
}
