use chrono::{Local, NaiveDate};

/// Calendar clock abstraction used to decide which log file a call targets.
///
/// - today(): the current calendar date, with no time-of-day component
///
/// Time zone handling is left to the implementation; `SystemClock` uses the
/// machine's local zone.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    #[inline]
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Default, real-time clock backed by `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date. Backs `--date` overrides and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    #[inline]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Move the pinned date (useful for multi-day tests).
    pub fn set(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

impl Clock for FixedClock {
    #[inline]
    fn today(&self) -> NaiveDate {
        self.date
    }
}
