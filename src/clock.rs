//! Calendar time source, kept behind a trait so date logic is deterministic
//! under test.

use std::{cell::Cell, rc::Rc};

use chrono::{Days, Local, NaiveDate};

/// Supplies the current calendar date to the library facade.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock backed [`Clock`] used by the console shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Settable clock for tests and demos; clones share the same date.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Rc<Cell<NaiveDate>>,
}

impl ManualClock {
    /// Creates a clock pinned at `start`.
    pub fn new(start: NaiveDate) -> Self {
        Self {
            today: Rc::new(Cell::new(start)),
        }
    }

    /// Moves the clock forward by `days`.
    pub fn advance_days(&self, days: u64) {
        self.today.set(self.today.get() + Days::new(days));
    }

    /// Pins the clock at `date`.
    pub fn set(&self, date: NaiveDate) {
        self.today.set(date);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}
