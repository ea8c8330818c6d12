//! Software timers for auto-repeat seeking and the end-of-media watchdog
//!
//! The controller never sleeps. It asks a [`TimerHost`] to schedule a
//! timer and the host calls
//! [`TransportController::on_timer`](crate::TransportController::on_timer)
//! with the returned id when it fires. Ids are never reused, so a fired id
//! that arrives after its timer was cancelled is simply ignored.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Identifier of a scheduled timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId(pub u64);

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Scheduler the controller uses for its timers
pub trait TimerHost {
    /// Fire once after `delay`
    fn schedule_once(&mut self, delay: Duration) -> TimerId;

    /// Fire every `period`, first after one full period
    fn schedule_repeating(&mut self, period: Duration) -> TimerId;

    /// Stop a timer; unknown ids are ignored
    fn cancel(&mut self, id: TimerId);
}

// =============================================================================
// Manual (virtual clock) timers
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    deadline: Duration,
    period: Option<Duration>,
}

/// Deterministic timer host driven by an explicit virtual clock
///
/// Useful for hosts that own their frame loop and for tests. Drive it
/// through [`TransportController::advance_time`](crate::TransportController::advance_time)
/// so fired timers are dispatched one at a time.
#[derive(Debug, Default)]
pub struct ManualTimers {
    now: Duration,
    next_id: u64,
    pending: HashMap<TimerId, PendingTimer>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that can still fire
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Pop the earliest timer due at or before `limit`.
    ///
    /// The clock moves to the timer's deadline. Repeating timers are
    /// rescheduled one period later.
    pub fn fire_next(&mut self, limit: Duration) -> Option<TimerId> {
        let (id, deadline, period) = self
            .pending
            .iter()
            .map(|(id, timer)| (*id, timer.deadline, timer.period))
            .min_by_key(|(id, deadline, _)| (*deadline, *id))?;

        if deadline > limit {
            return None;
        }

        self.now = self.now.max(deadline);
        match period {
            Some(period) => {
                if let Some(timer) = self.pending.get_mut(&id) {
                    timer.deadline = deadline + period;
                }
            }
            None => {
                self.pending.remove(&id);
            }
        }

        trace!(timer = %id, now_ms = self.now.as_millis() as u64, "Manual timer fired");
        Some(id)
    }

    /// Move the clock forward without firing anything
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    fn insert(&mut self, delay: Duration, period: Option<Duration>) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert(
            id,
            PendingTimer {
                deadline: self.now + delay,
                period,
            },
        );
        id
    }
}

impl TimerHost for ManualTimers {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.insert(delay, None)
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.insert(period, Some(period))
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.remove(&id);
    }
}

// =============================================================================
// Tokio timers
// =============================================================================

/// Timer host backed by tokio tasks
///
/// Every timer is a spawned task that sends its id on the channel returned
/// by [`TokioTimers::new`] when it fires. The event loop owning the
/// controller forwards those ids to `on_timer`. Must be used from within a
/// tokio runtime.
#[derive(Debug)]
pub struct TokioTimers {
    next_id: u64,
    tasks: HashMap<TimerId, JoinHandle<()>>,
    fired_tx: mpsc::UnboundedSender<TimerId>,
}

impl TokioTimers {
    /// Create a timer host and the receiver of fired timer ids
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerId>) {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let timers = Self {
            next_id: 0,
            tasks: HashMap::new(),
            fired_tx,
        };
        (timers, fired_rx)
    }

    /// Number of timers whose task is still running
    pub fn active_count(&self) -> usize {
        self.tasks.values().filter(|task| !task.is_finished()).count()
    }

    fn next_id(&mut self) -> TimerId {
        self.tasks.retain(|_, task| !task.is_finished());
        self.next_id += 1;
        TimerId(self.next_id)
    }
}

impl TimerHost for TokioTimers {
    fn schedule_once(&mut self, delay: Duration) -> TimerId {
        let id = self.next_id();
        let tx = self.fired_tx.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(id);
        });
        self.tasks.insert(id, task);
        id
    }

    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        let id = self.next_id();
        let tx = self.fired_tx.clone();
        let period = period.max(Duration::from_millis(1));
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            loop {
                ticker.tick().await;
                if tx.send(id).is_err() {
                    break;
                }
            }
        });
        self.tasks.insert(id, task);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(task) = self.tasks.remove(&id) {
            task.abort();
        }
    }
}

impl Drop for TokioTimers {
    fn drop(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.abort();
        }
    }
}
