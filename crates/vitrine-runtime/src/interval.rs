#![forbid(unsafe_code)]

//! Cancellable, resettable repeating timer.
//!
//! An [`Interval`] is pure deadline state: it never sleeps and never calls
//! anything. The owner asks it whether a period has elapsed via
//! [`poll`](Interval::poll), and the host arms whatever platform timer it
//! has to the value of [`deadline`](Interval::deadline).
//!
//! # Invariants
//!
//! 1. At most one schedule is live. [`start`](Interval::start) replaces the
//!    previous schedule in one assignment, so there is no window where two
//!    deadlines coexist.
//! 2. After `stop()`, `poll()` returns `false` until the next `start()`.
//! 3. `poll(now)` fires at most once per call; periods missed while the host
//!    was late coalesce, and the next deadline is always strictly after `now`.
//! 4. Every `start()` bumps [`generation`](Interval::generation), letting a
//!    host discard platform callbacks armed for an older schedule.

use core::time::Duration;

/// Shortest accepted period. Zero would fire on every poll.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Repeating timer state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    deadline: Option<Duration>,
    generation: u64,
}

impl Interval {
    /// Create a stopped interval. Periods below [`MIN_PERIOD`] are raised to it.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            deadline: None,
            generation: 0,
        }
    }

    /// Create a stopped interval from a millisecond period.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    /// (Re)start the schedule so the first fire is one full period after `now`.
    ///
    /// Any previous schedule is discarded. Returns the new generation.
    pub fn start(&mut self, now: Duration) -> u64 {
        self.deadline = Some(now.saturating_add(self.period));
        self.generation = self.generation.wrapping_add(1);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "interval.start",
            generation = self.generation,
            period_ms = self.period.as_millis() as u64
        );
        self.generation
    }

    /// Cancel the schedule. Returns `true` if it was running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.deadline.take().is_some();
        #[cfg(feature = "tracing")]
        if was_running {
            tracing::trace!(message = "interval.stop", generation = self.generation);
        }
        was_running
    }

    /// Whether a schedule is live.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time of the next fire, if running.
    #[inline]
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Time left until the next fire, if running. Zero when overdue.
    #[must_use]
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_sub(now))
    }

    /// Configured period.
    #[inline]
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Change the period. A running schedule keeps its current deadline.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period.max(MIN_PERIOD);
    }

    /// Counter bumped by every [`start`](Self::start).
    #[inline]
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Fire if the deadline has passed, then schedule the next one.
    pub fn poll(&mut self, now: Duration) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline.saturating_add(self.period);
        if next <= now {
            // Skip whole missed periods, keeping the phase of the schedule.
            let behind = now - deadline;
            let missed = behind.as_nanos() / self.period.as_nanos();
            let skip = u32::try_from(missed).unwrap_or(u32::MAX);
            next = deadline
                .saturating_add(self.period.saturating_mul(skip))
                .saturating_add(self.period);
            if next <= now {
                next = now.saturating_add(self.period);
            }
        }
        self.deadline = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn new_interval_is_stopped() {
        let mut iv = Interval::from_millis(5000);
        assert!(!iv.is_running());
        assert_eq!(iv.deadline(), None);
        assert!(!iv.poll(ms(1_000_000)));
    }

    #[test]
    fn fires_after_one_period() {
        let mut iv = Interval::from_millis(5000);
        iv.start(ms(0));
        assert!(!iv.poll(ms(4999)));
        assert!(iv.poll(ms(5000)));
        assert_eq!(iv.deadline(), Some(ms(10_000)));
    }

    #[test]
    fn restart_discards_previous_deadline() {
        let mut iv = Interval::from_millis(5000);
        let g1 = iv.start(ms(0));
        let g2 = iv.start(ms(4000));
        assert_ne!(g1, g2);
        assert!(!iv.poll(ms(5000)));
        assert!(!iv.poll(ms(8999)));
        assert!(iv.poll(ms(9000)));
    }

    #[test]
    fn stop_prevents_fire() {
        let mut iv = Interval::from_millis(100);
        iv.start(ms(0));
        assert!(iv.stop());
        assert!(!iv.stop());
        assert!(!iv.poll(ms(500)));
    }

    #[test]
    fn missed_periods_coalesce() {
        let mut iv = Interval::from_millis(100);
        iv.start(ms(0));
        assert!(iv.poll(ms(350)));
        // Phase preserved: next fire at 400, not 450.
        assert_eq!(iv.deadline(), Some(ms(400)));
        assert!(!iv.poll(ms(399)));
        assert!(iv.poll(ms(400)));
    }

    #[test]
    fn next_deadline_strictly_after_now() {
        let mut iv = Interval::from_millis(100);
        iv.start(ms(0));
        assert!(iv.poll(ms(200)));
        assert_eq!(iv.deadline(), Some(ms(300)));
    }

    #[test]
    fn zero_period_is_clamped() {
        let iv = Interval::new(Duration::ZERO);
        assert_eq!(iv.period(), MIN_PERIOD);
    }

    #[test]
    fn remaining_counts_down() {
        let mut iv = Interval::from_millis(1000);
        assert_eq!(iv.remaining(ms(0)), None);
        iv.start(ms(100));
        assert_eq!(iv.remaining(ms(600)), Some(ms(500)));
        assert_eq!(iv.remaining(ms(2000)), Some(Duration::ZERO));
    }

    #[test]
    fn set_period_applies_from_next_start() {
        let mut iv = Interval::from_millis(1000);
        iv.start(ms(0));
        iv.set_period(ms(200));
        assert_eq!(iv.deadline(), Some(ms(1000)));
        iv.start(ms(0));
        assert_eq!(iv.deadline(), Some(ms(200)));
    }
}
