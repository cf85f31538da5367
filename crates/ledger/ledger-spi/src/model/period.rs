//! Calendar scope of a forecast.

use crate::error::{LedgerError, Result};
use chrono::{Datelike, NaiveDate};

/// A year and/or month filter; a missing field matches every value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Period {
    year: Option<i32>,
    month: Option<u32>,
}

impl Period {
    /// Build a period, rejecting a month outside `1..=12`.
    pub fn new(year: Option<i32>, month: Option<u32>) -> Result<Self> {
        if month.is_some_and(|m| !(1..=12).contains(&m)) {
            return Err(LedgerError::InvalidMonth);
        }
        Ok(Self { year, month })
    }

    /// The unrestricted period.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.year.map_or(true, |y| date.year() == y)
            && self.month.map_or(true, |m| date.month() == m)
    }
}
