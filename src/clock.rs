//! Time sources for the daily game
//!
//! The engine never reads the system time directly; it asks a [`Clock`].
//! All times are naive local times, matching how the game thinks about days.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current local date and time
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current local calendar date
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Wall clock in the local timezone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to
///
/// Useful for tests and for replaying a specific day.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<NaiveDateTime>,
}

impl ManualClock {
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Clock set to midnight at the start of `date`
    #[must_use]
    pub fn at_start_of(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }

    pub fn set(&self, now: NaiveDateTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        self.now.get()
    }
}

/// The first local midnight strictly after `now`
///
/// Returns `None` only at the very end of chrono's representable range.
#[must_use]
pub fn next_midnight(now: NaiveDateTime) -> Option<NaiveDateTime> {
    now.date()
        .succ_opt()
        .map(|tomorrow| tomorrow.and_time(NaiveTime::MIN))
}
