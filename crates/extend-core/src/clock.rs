//! Clock
//!
//! "Today" is the only time input the controller needs.

use chrono::NaiveDate;

pub trait Clock {
    /// Current local date (midnight semantics)
    fn today(&self) -> NaiveDate;
}

/// Clock pinned to one date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
