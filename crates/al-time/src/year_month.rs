//! `YearMonth`: a validated (year, month) pair.

use al_core::ensure;
use al_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::month::Month;
use crate::sequence::DateRange;

/// A month of a specific year, e.g. May 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YearMonth {
    year: u16,
    month: Month,
}

impl YearMonth {
    /// Create a year-month, validating the year against the representable
    /// range and the month against `[1, 12]`.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        ensure!(
            (Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year),
            "year {year} out of range [{}, {}]",
            Date::MIN_YEAR,
            Date::MAX_YEAR
        );
        let month = Month::from_number(month)
            .ok_or_else(|| Error::Validation(format!("month {month} out of range [1, 12]")))?;
        Ok(Self { year, month })
    }

    /// The year-month containing `date`.
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month_of_year(),
        }
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Canonical number of days in this month.
    pub fn length_of_month(&self) -> u8 {
        days_in_month(self.year, self.month.number())
    }

    /// Return the first day of the month.
    pub fn first_day(&self) -> Date {
        self.day(1)
    }

    /// Return the last day of the month.
    pub fn last_day(&self) -> Date {
        self.day(self.length_of_month())
    }

    /// Iterate over every day of the month in order.
    pub fn days(&self) -> DateRange {
        DateRange::new(self.first_day(), self.last_day())
    }

    fn day(&self, day: u8) -> Date {
        // year and month were validated on construction, day is in range
        Date::from_ymd(self.year, self.month.number(), day)
            .expect("YearMonth holds a valid year and month")
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.number())
    }
}
