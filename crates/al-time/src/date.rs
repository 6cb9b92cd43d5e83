//! `Date` type: a proleptic Gregorian civil date.
//!
//! Dates are represented as a serial number of days since **1970-01-01**
//! (serial 0).  Dates before the epoch have negative serials.
//!
//! # Range
//! The valid range is 0001-01-01 to 9999-12-31.  Restricting years to four
//! digits keeps the `yyyy-MM-dd` key fixed-width, so lexical and
//! chronological ordering of keys coincide.

use std::str::FromStr;

use al_core::errors::{Error, Result};
use al_core::utilities::data_formatters::format_date_key;
use al_core::utilities::data_parsers::parse_iso_date;

use crate::month::Month;
use crate::weekday::Weekday;

/// A civil (timezone-independent) calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(-719_162);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(2_932_896);

    /// Smallest representable year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest representable year.
    pub const MAX_YEAR: u16 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)` in one decomposition.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::ALL[self.month() as usize - 1]
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday (index 3 in a Monday-first week).
        Weekday::ALL[(self.0 + 3).rem_euclid(7) as usize]
    }

    /// Return `true` if the date's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Return the number of days in the date's month.
    pub fn length_of_month(&self) -> u8 {
        let (y, m, _) = self.ymd();
        days_in_month(y, m)
    }

    /// Return the `yyyy-MM-dd` key for this date.
    pub fn key(&self) -> String {
        let (y, m, d) = self.ymd();
        format_date_key(y, m, d)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        Self::from_serial(serial)
    }

    /// Advance by `n` weeks.
    pub fn add_weeks(self, n: i32) -> Result<Self> {
        let days = n
            .checked_mul(7)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {n} weeks overflows")))?;
        self.add_days(days)
    }

    /// Advance by `n` months, clamping the day to the end of the target month
    /// (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let total = (y as i64) * 12 + (m as i64 - 1) + n as i64;
        let new_y = checked_year(total.div_euclid(12))?;
        let new_m = (total.rem_euclid(12) + 1) as u8;
        let new_d = d.min(days_in_month(new_y, new_m));
        Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
    }

    /// Advance by `n` years, clamping Feb 29 to Feb 28 in non-leap years.
    pub fn add_years(self, n: i32) -> Result<Self> {
        let months = n
            .checked_mul(12)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {n} years overflows")))?;
        self.add_months(months)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    // ── Adjusters ─────────────────────────────────────────────────────────────

    /// Return the same month and day in `year`, clamping Feb 29 if needed.
    pub fn with_year(self, year: u16) -> Result<Self> {
        check_year(year)?;
        let (_, m, d) = self.ymd();
        Ok(Date(serial_from_ymd(year, m, d.min(days_in_month(year, m)))))
    }

    /// Return the same year and day in `month`, clamping to the month's end.
    pub fn with_month(self, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let (y, _, d) = self.ymd();
        Ok(Date(serial_from_ymd(y, month, d.min(days_in_month(y, month)))))
    }

    /// Return the date with its day-of-month replaced.
    pub fn with_day_of_month(self, day: u8) -> Result<Self> {
        let (y, m, _) = self.ymd();
        Date::from_ymd(y, m, day)
    }

    /// Return the date with its day-of-year replaced.
    pub fn with_day_of_year(self, day_of_year: u16) -> Result<Self> {
        let y = self.year();
        let len = if is_leap_year(y) { 366 } else { 365 };
        if day_of_year == 0 || day_of_year > len {
            return Err(Error::Date(format!(
                "day of year {day_of_year} out of range [1, {len}] for {y:04}"
            )));
        }
        Ok(Date(serial_from_ymd(y, 1, 1) + day_of_year as i32 - 1))
    }

    /// Return the first day of the month containing this date.
    pub fn first_day_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn last_day_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.last_day_of_month()
    }

    /// Return the first date strictly after `self` that falls on `weekday`.
    pub fn next_weekday(self, weekday: Weekday) -> Result<Self> {
        let skip = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(if skip == 0 { 7 } else { skip })
    }

    /// Return the last date strictly before `self` that falls on `weekday`.
    pub fn previous_weekday(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-(if back == 0 { 7 } else { back }))
    }

    /// Return the same month and day in the first leap year after this
    /// date's year.
    pub fn next_leap_year(self) -> Result<Self> {
        let mut y = self.year();
        loop {
            y = y.checked_add(1).ok_or_else(|| {
                Error::Date(format!("no leap year after {self} in range"))
            })?;
            check_year(y)?;
            if is_leap_year(y) {
                return self.with_year(y);
            }
        }
    }

    /// Return the *n*-th occurrence of `weekday` in `year`/`month`.
    ///
    /// The first occurrence is the first `weekday` on or after the 1st; each
    /// later one is seven days on.  For example,
    /// `nth_weekday(2, Weekday::Sunday, 2024, 5)` is 2024-05-12.
    ///
    /// Returns `Ok(None)` when the month has fewer than `n` such weekdays
    /// (e.g. no 5th Wednesday in February 2024).
    ///
    /// # Errors
    /// Returns an error if `n` is outside `[1, 5]` or `year`/`month` is
    /// invalid.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: u16, month: u8) -> Result<Option<Self>> {
        if !(1..=5).contains(&n) {
            return Err(Error::Date(format!(
                "nth_weekday: n must be in [1, 5], got {n}"
            )));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let skip = (weekday.ordinal() as i32 - first.weekday().ordinal() as i32).rem_euclid(7) as u8;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Ok(None);
        }
        Date::from_ymd(year, month, day).map(Some)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

/// # Panics
/// Panics if the result leaves the representable range.
impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

/// # Panics
/// Panics if the result leaves the representable range.
impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse a `yyyy-MM-dd` key.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::Date(format!("cannot parse {s:?} as yyyy-MM-dd")))?;
        Date::from_ymd(y, m, d)
    }
}

impl TryFrom<String> for Date {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Date> for String {
    fn from(d: Date) -> String {
        d.key()
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(d: Date) -> Self {
        let (y, m, day) = d.ymd();
        // Every Date lies inside NaiveDate's range.
        chrono::NaiveDate::from_ymd_opt(y as i32, m as u32, day as u32)
            .expect("Date range is a subset of NaiveDate range")
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;
    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        let year = u16::try_from(d.year())
            .map_err(|_| Error::Date(format!("year {} out of range [1, 9999]", d.year())))?;
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

fn check_year(year: u16) -> Result<()> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
    }
    Ok(())
}

fn checked_year(year: i64) -> Result<u16> {
    if !(Date::MIN_YEAR as i64..=Date::MAX_YEAR as i64).contains(&year) {
        return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
    }
    Ok(year as u16)
}

/// Convert (year, month, day) to a serial number (days since 1970-01-01).
///
/// Counts in 400-year eras starting on March 1 so that the leap day falls
/// at the end of each computational year.
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32 - i32::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = (month as i32 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i32 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i32::from(month <= 2);
    (year as u16, month as u8, day as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
