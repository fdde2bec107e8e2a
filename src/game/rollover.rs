//! Midnight rollover timer
//!
//! A [`Rollover`] is a cancellable handle armed for the next local midnight.
//! It does not own a thread: the event loop polls it with the current time,
//! and it re-arms itself 24 hours later each time it fires.

use crate::clock::{Clock, next_midnight};
use chrono::{Duration, NaiveDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollover {
    deadline: Option<NaiveDateTime>,
}

impl Rollover {
    /// Arm for the first midnight after `clock.now()`
    #[must_use]
    pub fn schedule<C: Clock + ?Sized>(clock: &C) -> Self {
        Self {
            deadline: next_midnight(clock.now()),
        }
    }

    /// When the timer fires next, if armed
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDateTime> {
        self.deadline
    }

    /// Time left until the deadline, zero once it has passed
    #[must_use]
    pub fn remaining(&self, now: NaiveDateTime) -> Option<std::time::Duration> {
        self.deadline
            .map(|deadline| (deadline - now).to_std().unwrap_or_default())
    }

    /// Fire if the deadline has passed
    ///
    /// Returns true at most once per call. After firing the timer is re-armed
    /// for the next 24-hour boundary after `now`, so a long gap between polls
    /// produces one rollover, not a burst.
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let mut next = deadline.checked_add_signed(Duration::days(1));
        while let Some(at) = next
            && at <= now
        {
            next = at.checked_add_signed(Duration::days(1));
        }
        self.deadline = next;
        true
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn armed_for_next_midnight() {
        let clock = ManualClock::new(at(17, 15, 45));
        let timer = Rollover::schedule(&clock);

        assert_eq!(timer.deadline(), Some(at(18, 0, 0)));
        assert_eq!(
            timer.remaining(clock.now()),
            Some(std::time::Duration::from_secs(8 * 3600 + 15 * 60))
        );
    }

    #[test]
    fn does_not_fire_early() {
        let mut timer = Rollover::schedule(&ManualClock::new(at(17, 23, 0)));
        assert!(!timer.poll(at(17, 23, 59)));
        assert_eq!(timer.deadline(), Some(at(18, 0, 0)));
    }

    #[test]
    fn fires_at_midnight_and_rearms_daily() {
        let mut timer = Rollover::schedule(&ManualClock::new(at(17, 12, 0)));

        assert!(timer.poll(at(18, 0, 0)));
        assert_eq!(timer.deadline(), Some(at(19, 0, 0)));
        assert!(!timer.poll(at(18, 0, 1)));

        assert!(timer.poll(at(19, 0, 5)));
        assert_eq!(timer.deadline(), Some(at(20, 0, 0)));
    }

    #[test]
    fn long_gap_fires_once() {
        let mut timer = Rollover::schedule(&ManualClock::new(at(17, 12, 0)));

        assert!(timer.poll(at(20, 9, 0)));
        assert_eq!(timer.deadline(), Some(at(21, 0, 0)));
        assert!(!timer.poll(at(20, 9, 1)));
    }

    #[test]
    fn remaining_is_zero_when_overdue() {
        let timer = Rollover::schedule(&ManualClock::new(at(17, 12, 0)));
        assert_eq!(timer.remaining(at(18, 1, 0)), Some(std::time::Duration::ZERO));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = Rollover::schedule(&ManualClock::new(at(17, 12, 0)));
        timer.cancel();

        assert_eq!(timer.deadline(), None);
        assert_eq!(timer.remaining(at(17, 12, 0)), None);
        assert!(!timer.poll(at(25, 0, 0)));
    }
}
