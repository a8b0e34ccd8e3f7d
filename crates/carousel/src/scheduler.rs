//! Reconciliation scheduling.
//!
//! Bursts of data-change or layout-change requests coalesce into a single
//! rebuild through a trailing-edge debounce: every request resets the
//! deadline, and the rebuild runs only once the window elapses with no
//! further requests.
//!
//! The scheduler is cooperative and poll-driven. It never spawns threads or
//! wall-clock timers; the hosting event loop passes `Instant`s in and polls
//! [`fire_if_due`](ReconcileScheduler::fire_if_due) each turn, sleeping by
//! [`time_until_due`](ReconcileScheduler::time_until_due) in between. Tests
//! drive it with fabricated instants.

use std::time::{Duration, Instant};

/// Trailing-edge debounce for reconciliation requests.
#[derive(Debug)]
pub struct ReconcileScheduler {
    /// The debounce window.
    delay: Duration,
    /// When the pending rebuild becomes due, if one is pending.
    deadline: Option<Instant>,
}

impl ReconcileScheduler {
    /// Create a scheduler with the given debounce window.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The configured debounce window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a rebuild is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Request a rebuild.
    ///
    /// Arms the deadline at `now + delay`, resetting any pending deadline so
    /// that only the trailing edge of a request burst fires.
    pub fn request(&mut self, now: Instant) {
        let deadline = now + self.delay;
        tracing::trace!(
            target: "carousel::reconcile",
            rearmed = self.deadline.is_some(),
            "reconciliation requested"
        );
        self.deadline = Some(deadline);
    }

    /// Consume the deadline if it has elapsed.
    ///
    /// Returns `true` exactly once per armed deadline; the caller runs the
    /// rebuild when it does.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the pending rebuild is due.
    ///
    /// `None` when nothing is pending; `Duration::ZERO` when overdue.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| {
            if deadline > now {
                deadline - now
            } else {
                Duration::ZERO
            }
        })
    }

    /// Cancel a pending rebuild.
    ///
    /// Returns `true` if a rebuild was pending. Called at teardown so no
    /// rebuild can fire against destroyed state.
    pub fn cancel(&mut self) -> bool {
        let was_pending = self.deadline.take().is_some();
        if was_pending {
            tracing::debug!(target: "carousel::reconcile", "pending reconciliation cancelled");
        }
        was_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_once_after_window() {
        let mut sched = ReconcileScheduler::new(ms(50));
        let t0 = Instant::now();

        sched.request(t0);
        assert!(sched.is_pending());
        assert!(!sched.fire_if_due(t0 + ms(49)));
        assert!(sched.fire_if_due(t0 + ms(50)));
        // Consumed: does not fire again.
        assert!(!sched.fire_if_due(t0 + ms(100)));
        assert!(!sched.is_pending());
    }

    #[test]
    fn test_requests_within_window_coalesce() {
        let mut sched = ReconcileScheduler::new(ms(50));
        let t0 = Instant::now();

        sched.request(t0);
        sched.request(t0 + ms(20));
        sched.request(t0 + ms(40));

        // The first deadline was reset by the later requests.
        assert!(!sched.fire_if_due(t0 + ms(50)));
        assert!(!sched.fire_if_due(t0 + ms(89)));
        assert!(sched.fire_if_due(t0 + ms(90)));
        assert!(!sched.fire_if_due(t0 + ms(200)));
    }

    #[test]
    fn test_cancel_drops_pending_work() {
        let mut sched = ReconcileScheduler::new(ms(50));
        let t0 = Instant::now();

        sched.request(t0);
        assert!(sched.cancel());
        assert!(!sched.cancel());
        assert!(!sched.fire_if_due(t0 + ms(100)));
    }

    #[test]
    fn test_time_until_due() {
        let mut sched = ReconcileScheduler::new(ms(50));
        let t0 = Instant::now();

        assert_eq!(sched.time_until_due(t0), None);
        sched.request(t0);
        assert_eq!(sched.time_until_due(t0 + ms(10)), Some(ms(40)));
        assert_eq!(sched.time_until_due(t0 + ms(80)), Some(Duration::ZERO));
    }
}
