//! # al-time
//!
//! Civil dates and the small vocabulary around them: weekdays, months,
//! year-months, and ordered date sequences.
//!
//! ```
//! use al_time::{Date, Weekday};
//!
//! let d = Date::nth_weekday(2, Weekday::Sunday, 2024, 5).unwrap();
//! assert_eq!(d.map(|d| d.key()), Some("2024-05-12".to_string()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// Month of the year.
pub mod month;

/// Ordered date sequences (month, year, explicit range).
pub mod sequence;

/// Day of the week.
pub mod weekday;

/// A validated year and month.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{days_in_month, is_leap_year, Date};
pub use month::Month;
pub use sequence::{dates_between, month_dates, year_dates, DateRange};
pub use weekday::Weekday;
pub use year_month::YearMonth;
