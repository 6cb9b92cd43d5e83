//! Holiday rule grammar.
//!
//! Solar (civil-calendar) rules:
//!
//! | token       | meaning                                          |
//! |-------------|--------------------------------------------------|
//! | `MM-DD`     | fixed month and day, e.g. `10-01`                |
//! | `MM-W-N-D`  | `N`-th weekday `D` of month `MM` (`D`: 1 = Mon)  |
//!
//! Lunar rules:
//!
//! | token            | meaning                                     |
//! |------------------|---------------------------------------------|
//! | `MMDD`, `MM-DD`  | fixed lunar month and day, e.g. `0815`      |
//! | `CHUXI`          | last day of the lunar year (除夕)           |
//!
//! Numeric fields may be one or two digits, so `5-W-2-7` and `05-W-2-7` are
//! the same rule.  Tokens are parsed once, when a rule table is built; a
//! malformed token is reported as [`Error::InvalidRule`] carrying the holiday
//! name it was bound to.

use std::fmt;

use al_core::errors::{Error, Result};
use al_core::fail;
use al_core::utilities::data_formatters::{format_month_day, format_ordinal};
use al_core::utilities::data_parsers::parse_numeric_field;
use al_lunar::{LunarConverter, LunarDate};
use al_time::{days_in_month, Date, Month, Weekday};

/// Named lunar token for the last day of the lunar year.
pub const NEW_YEARS_EVE_TOKEN: &str = "CHUXI";

/// A parsed holiday rule of either kind.
///
/// Implemented by [`SolarRule`] and [`LunarRule`] so that
/// [`RuleTable`](crate::table::RuleTable) can be generic over the grammar.
pub trait HolidayRule: Sized + Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Parse `token`, reporting failures against holiday `name`.
    fn parse(name: &str, token: &str) -> Result<Self>;

    /// English description, e.g. `"2nd Sunday of May"`.
    fn describe(&self) -> String;
}

// ── Solar rules ───────────────────────────────────────────────────────────────

/// A rule on the civil calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarRule {
    /// The same month and day every year.  A `02-29` rule has no date in
    /// common years.
    Fixed {
        /// Month.
        month: Month,
        /// Day of month.
        day: u8,
    },
    /// The `ordinal`-th `weekday` of `month`.  When the month has fewer than
    /// `ordinal` such weekdays the rule has no date that year.
    NthWeekday {
        /// Month.
        month: Month,
        /// Occurrence, 1–5.
        ordinal: u8,
        /// Day of week.
        weekday: Weekday,
    },
}

impl SolarRule {
    /// The month the rule falls in.
    pub fn month(&self) -> Month {
        match self {
            SolarRule::Fixed { month, .. } | SolarRule::NthWeekday { month, .. } => *month,
        }
    }

    /// The civil date this rule falls on in `year`, or `None` if it has no
    /// occurrence that year.
    ///
    /// # Errors
    /// Returns a date error if `year` is outside the representable range.
    pub fn resolve(&self, year: u16) -> Result<Option<Date>> {
        match *self {
            SolarRule::Fixed { month, day } => {
                if day > days_in_month(year, month.number()) {
                    return Ok(None);
                }
                Date::from_ymd(year, month.number(), day).map(Some)
            }
            SolarRule::NthWeekday {
                month,
                ordinal,
                weekday,
            } => Date::nth_weekday(ordinal, weekday, year, month.number()),
        }
    }
}

impl HolidayRule for SolarRule {
    fn parse(name: &str, token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let fields: Vec<&str> = trimmed.split('-').collect();
        match fields.as_slice() {
            [m, d] => {
                let month = parse_month(name, token, m)?;
                let day = parse_field(name, token, "day", d)?;
                // validated against a leap year so that 02-29 is accepted
                let max = days_in_month(2000, month.number());
                if !(1..=max).contains(&day) {
                    fail!(name, token, "day {day} out of range [1, {max}] for {}", month.long_name());
                }
                Ok(SolarRule::Fixed { month, day })
            }
            [m, w, n, d] if w.eq_ignore_ascii_case("W") => {
                let month = parse_month(name, token, m)?;
                let ordinal = parse_field(name, token, "ordinal", n)?;
                if !(1..=5).contains(&ordinal) {
                    fail!(name, token, "ordinal {ordinal} out of range [1, 5]");
                }
                let d = parse_field(name, token, "weekday", d)?;
                let Some(weekday) = Weekday::from_ordinal(d) else {
                    fail!(name, token, "weekday {d} out of range [1, 7]");
                };
                Ok(SolarRule::NthWeekday {
                    month,
                    ordinal,
                    weekday,
                })
            }
            _ => fail!(name, token, "expected MM-DD or MM-W-N-D"),
        }
    }

    fn describe(&self) -> String {
        match self {
            SolarRule::Fixed { month, day } => format!("{} {day}", month.long_name()),
            SolarRule::NthWeekday {
                month,
                ordinal,
                weekday,
            } => format!(
                "{} {} of {}",
                format_ordinal(*ordinal as u32),
                weekday.long_name(),
                month.long_name()
            ),
        }
    }
}

impl fmt::Display for SolarRule {
    /// Canonical token: `05-01`, `05-W-2-7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarRule::Fixed { month, day } => {
                f.write_str(&format_month_day(month.number(), *day))
            }
            SolarRule::NthWeekday {
                month,
                ordinal,
                weekday,
            } => write!(f, "{:02}-W-{ordinal}-{}", month.number(), weekday.ordinal()),
        }
    }
}

// ── Lunar rules ───────────────────────────────────────────────────────────────

/// A rule on the lunar calendar.
///
/// Fixed rules only ever match regular months: 闰八月十五 is not 中秋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarRule {
    /// Fixed lunar month and day.  Day 30 has no date in years where that
    /// month is 29 days long.
    Fixed {
        /// Lunar month, 1–12.
        month: u8,
        /// Lunar day, 1–30.
        day: u8,
    },
    /// The last day of the lunar year (除夕): day 29 or 30 of the twelfth
    /// month, or of a leap twelfth month when the year has one.
    NewYearsEve,
}

impl LunarRule {
    /// The lunar date this rule falls on in `lunar_year`, or `None` if it has
    /// no occurrence that year.
    ///
    /// # Errors
    /// Returns a range error if `lunar_year` is outside what `converter`
    /// supports.
    pub fn resolve(&self, lunar_year: u16, converter: &dyn LunarConverter) -> Result<Option<LunarDate>> {
        match *self {
            LunarRule::Fixed { month, day } => {
                if day > converter.month_length(lunar_year, month, false)? {
                    return Ok(None);
                }
                LunarDate::new(lunar_year, month, day, false).map(Some)
            }
            LunarRule::NewYearsEve => converter.new_years_eve(lunar_year).map(Some),
        }
    }
}

impl HolidayRule for LunarRule {
    fn parse(name: &str, token: &str) -> Result<Self> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case(NEW_YEARS_EVE_TOKEN) {
            return Ok(LunarRule::NewYearsEve);
        }

        let (m, d) = match trimmed.split_once('-') {
            Some(pair) => pair,
            None if trimmed.len() == 4 && trimmed.is_ascii() => trimmed.split_at(2),
            None => fail!(name, token, "expected MMDD, MM-DD or {NEW_YEARS_EVE_TOKEN}"),
        };
        let month = parse_field(name, token, "lunar month", m)?;
        if !(1..=12).contains(&month) {
            fail!(name, token, "lunar month {month} out of range [1, 12]");
        }
        let day = parse_field(name, token, "lunar day", d)?;
        if !(1..=30).contains(&day) {
            fail!(name, token, "lunar day {day} out of range [1, 30]");
        }
        Ok(LunarRule::Fixed { month, day })
    }

    fn describe(&self) -> String {
        match self {
            LunarRule::Fixed { month, day } => {
                format!("lunar month {month}, day {day}")
            }
            LunarRule::NewYearsEve => "last day of the lunar year".to_string(),
        }
    }
}

impl fmt::Display for LunarRule {
    /// Canonical token: `0815`, `CHUXI`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LunarRule::Fixed { month, day } => write!(f, "{month:02}{day:02}"),
            LunarRule::NewYearsEve => f.write_str(NEW_YEARS_EVE_TOKEN),
        }
    }
}

// ── Field parsing ─────────────────────────────────────────────────────────────

fn parse_field(name: &str, token: &str, what: &str, field: &str) -> Result<u8> {
    parse_numeric_field(field).ok_or_else(|| Error::InvalidRule {
        name: name.to_string(),
        token: token.to_string(),
        reason: format!("{what} {field:?} is not a one- or two-digit number"),
    })
}

fn parse_month(name: &str, token: &str, field: &str) -> Result<Month> {
    let n = parse_field(name, token, "month", field)?;
    match Month::from_number(n) {
        Some(month) => Ok(month),
        None => fail!(name, token, "month {n} out of range [1, 12]"),
    }
}
