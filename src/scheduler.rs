//! # Redraw Scheduler
//!
//! Cooperative once-per-second redraw cadence for interactive mode.
//!
//! The scheduler does not own a timer. It hands out [`PendingTick`]s that the
//! event loop turns into a one-shot wake-up, and it accepts a tick back only
//! if its token is still the pending one. Cancelling simply forgets the
//! token, so a wake-up that was already in flight is dropped on arrival and
//! there is never more than one outstanding tick.
//!
//! ## Phase Alignment
//! After each tick the next one is scheduled for the next interval boundary
//! of the wall clock (`interval - now % interval`) rather than a fixed
//! interval after the previous one, so ticks land on second boundaries no
//! matter how long drawing took.

use std::time::Duration;

/// Default interactive redraw interval
pub const INTERACTIVE_UPDATE_RATE_MS: u64 = 1000;

/// A tick the event loop should deliver back after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTick {
    pub token: u64,
    pub delay: Duration,
}

#[derive(Debug)]
pub struct RedrawScheduler {
    interval_ms: u64,
    next_token: u64,
    pending: Option<PendingTick>,
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new(INTERACTIVE_UPDATE_RATE_MS)
    }
}

impl RedrawScheduler {
    pub fn new(interval_ms: u64) -> Self {
        RedrawScheduler {
            interval_ms: interval_ms.max(1),
            next_token: 0,
            pending: None,
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<PendingTick> {
        self.pending
    }

    /// Cancel any pending tick and, if `should_run`, schedule one immediately.
    pub fn reconcile(&mut self, should_run: bool) -> Option<PendingTick> {
        self.cancel();
        if should_run {
            Some(self.schedule(Duration::ZERO))
        } else {
            None
        }
    }

    /// Accept a delivered tick. Returns false for cancelled or superseded tokens.
    pub fn fire(&mut self, token: u64) -> bool {
        match self.pending {
            Some(tick) if tick.token == token => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Schedule the tick after a fired one, aligned to the next interval
    /// boundary of `now_ms` (milliseconds since the epoch).
    pub fn reschedule(&mut self, should_run: bool, now_ms: i64) -> Option<PendingTick> {
        self.cancel();
        if !should_run {
            return None;
        }
        Some(self.schedule(Duration::from_millis(self.delay_to_boundary(now_ms))))
    }

    /// Milliseconds from `now_ms` to the next interval boundary, in `1..=interval`.
    pub fn delay_to_boundary(&self, now_ms: i64) -> u64 {
        let interval = self.interval_ms as i64;
        (interval - now_ms.rem_euclid(interval)) as u64
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    fn schedule(&mut self, delay: Duration) -> PendingTick {
        self.next_token = self.next_token.wrapping_add(1);
        let tick = PendingTick {
            token: self.next_token,
            delay,
        };
        self.pending = Some(tick);
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_true_schedules_one_immediate_tick() {
        let mut scheduler = RedrawScheduler::default();
        let tick = scheduler.reconcile(true).unwrap();
        assert_eq!(tick.delay, Duration::ZERO);
        assert!(scheduler.is_scheduled());
        assert!(scheduler.fire(tick.token));
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn test_reconcile_false_cancels_pending_tick() {
        let mut scheduler = RedrawScheduler::default();
        let tick = scheduler.reconcile(true).unwrap();
        assert!(scheduler.reconcile(false).is_none());

        assert!(!scheduler.is_scheduled());
        assert!(!scheduler.fire(tick.token), "cancelled tick must not fire");
    }

    #[test]
    fn test_repeated_reconcile_leaves_single_tick() {
        let mut scheduler = RedrawScheduler::default();
        let first = scheduler.reconcile(true).unwrap();
        let second = scheduler.reconcile(true).unwrap();

        assert_ne!(first.token, second.token);
        assert!(!scheduler.fire(first.token));
        assert!(scheduler.fire(second.token));
        // Each token fires at most once
        assert!(!scheduler.fire(second.token));
    }

    #[test]
    fn test_delay_aligns_to_second_boundary() {
        let scheduler = RedrawScheduler::default();
        assert_eq!(scheduler.delay_to_boundary(1_700_000_000_250), 750);
        assert_eq!(scheduler.delay_to_boundary(1_700_000_000_999), 1);
        // Exactly on a boundary waits a full interval
        assert_eq!(scheduler.delay_to_boundary(1_700_000_000_000), 1000);
        assert_eq!(scheduler.delay_to_boundary(-250), 250);
    }

    #[test]
    fn test_reschedule_follows_should_run() {
        let mut scheduler = RedrawScheduler::default();
        let tick = scheduler.reconcile(true).unwrap();
        assert!(scheduler.fire(tick.token));

        let next = scheduler.reschedule(true, 12_400).unwrap();
        assert_eq!(next.delay, Duration::from_millis(600));
        assert_eq!(scheduler.pending(), Some(next));

        assert!(scheduler.reschedule(false, 13_000).is_none());
        assert!(!scheduler.is_scheduled());
    }

    #[test]
    fn test_custom_interval() {
        let mut scheduler = RedrawScheduler::new(250);
        scheduler.reconcile(true);
        let next = scheduler.reschedule(true, 1_100).unwrap();
        assert_eq!(next.delay, Duration::from_millis(150));
    }
}
