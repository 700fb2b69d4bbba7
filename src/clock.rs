//! Current date source

use chrono::{Local, NaiveDate};

/// Source of the current date
pub trait Clock {
    /// Current local date
    fn today(&self) -> NaiveDate;
}

/// Local wall clock
#[derive(Debug, Default, Copy, Clone)]
#[expect(clippy::module_name_repetitions, reason = "re-exported at crate root")]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Copy, Clone)]
#[expect(clippy::module_name_repetitions, reason = "re-exported at crate root")]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C> Clock for &C
where
    C: Clock + ?Sized,
{
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
