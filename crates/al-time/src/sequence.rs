//! Civil-date sequence generation.
//!
//! These are the day enumerators the calendar engine is built on: every
//! generated calendar starts from one of them.

use al_core::errors::Result;

use crate::date::Date;
use crate::year_month::YearMonth;

/// An inclusive, ascending range of consecutive dates.
///
/// Produces nothing when `start > end`.
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    /// Create a range over `[start, end]`.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        // `end` is a valid date, so `current + 1` exists whenever current < end
        self.next = if current < self.end {
            current.add_days(1).ok()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| (self.end.serial() - d.serial() + 1) as usize);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DateRange {}

impl std::iter::FusedIterator for DateRange {}

/// Every date of `year`/`month`, in order.
///
/// # Errors
/// Returns a validation error if `month` is outside `[1, 12]` or `year`
/// outside the representable range.
pub fn month_dates(year: u16, month: u8) -> Result<Vec<Date>> {
    Ok(YearMonth::new(year, month)?.days().collect())
}

/// Every date of `year`, in order (365 or 366 dates).
pub fn year_dates(year: u16) -> Result<Vec<Date>> {
    let first = YearMonth::new(year, 1)?.first_day();
    let last = YearMonth::new(year, 12)?.last_day();
    Ok(DateRange::new(first, last).collect())
}

/// Every date in `[start, end]`, in order.  Empty when `start > end`.
pub fn dates_between(start: Date, end: Date) -> Vec<Date> {
    DateRange::new(start, end).collect()
}
