//! Calendar generation entry points.
//!
//! Every function validates its arguments and rule maps before any day is
//! generated, then enumerates the requested dates, annotates them, and
//! assembles the result.  All of them are pure: the same arguments always
//! give an equal [`Calendar`].

use std::collections::HashMap;

use al_core::ensure;
use al_core::errors::Result;
use al_lunar::{LunarConverter, TableLunarConverter};
use al_time::{dates_between, year_dates, Date, YearMonth};
use tracing::debug;

use crate::annotate::DayAnnotator;
use crate::assemble::assemble;
use crate::calendar::Calendar;
use crate::options::CalendarOptions;

/// Holiday rule overrides: holiday name → rule token.
pub type RuleMap = HashMap<String, String>;

// ── General entry points ──────────────────────────────────────────────────────

/// Generate one month with explicit options.
///
/// # Errors
/// Validation errors for a bad year, month, or rule token; a range error
/// under [`LunarFailurePolicy::Abort`](crate::LunarFailurePolicy::Abort).
#[tracing::instrument(skip(options), fields(lunar = options.include_lunar, holiday = options.include_holiday))]
pub fn generate_month(year: u16, month: u8, options: &CalendarOptions) -> Result<Calendar> {
    let ym = YearMonth::new(year, month)?;
    generate_dates(ym.days(), options, &TableLunarConverter)
}

/// Generate a whole year (all twelve months) with explicit options.
#[tracing::instrument(skip(options), fields(lunar = options.include_lunar, holiday = options.include_holiday))]
pub fn generate_year(year: u16, options: &CalendarOptions) -> Result<Calendar> {
    let dates = year_dates(year)?;
    generate_dates(dates, options, &TableLunarConverter)
}

/// Generate every day in `[start, end]`, which may span several months or
/// years.  Only the months touched appear in the tree.
///
/// # Errors
/// Returns a validation error if `start` is after `end`.
#[tracing::instrument(skip(options), fields(lunar = options.include_lunar, holiday = options.include_holiday))]
pub fn generate_between(start: Date, end: Date, options: &CalendarOptions) -> Result<Calendar> {
    ensure!(start <= end, "start {start} is after end {end}");
    generate_dates(dates_between(start, end), options, &TableLunarConverter)
}

/// Generate a calendar for an ascending date sequence using `converter`
/// for lunar dates.
///
/// # Errors
/// - [`Error::InvalidRule`](al_core::Error::InvalidRule) if either rule map
///   holds a malformed token; no day is generated.
/// - [`Error::Range`](al_core::Error::Range) if `converter` fails on a date
///   under [`LunarFailurePolicy::Abort`](crate::LunarFailurePolicy::Abort).
/// - [`Error::Validation`](al_core::Error::Validation) if `dates` repeats a
///   date or goes backwards.
pub fn generate_dates<I>(
    dates: I,
    options: &CalendarOptions,
    converter: &dyn LunarConverter,
) -> Result<Calendar>
where
    I: IntoIterator<Item = Date>,
{
    let mut annotator = DayAnnotator::new(options, converter)?;
    let calendar = assemble(dates, |date| annotator.annotate(date))?;
    debug!(
        days = calendar.len(),
        holidays = calendar.holidays().count(),
        "generated calendar"
    );
    Ok(calendar)
}

// ── Month level ───────────────────────────────────────────────────────────────

/// Days of `year`/`month`, without lunar dates or holidays.
pub fn generate_calendar(year: u16, month: u8) -> Result<Calendar> {
    generate_month(year, month, &CalendarOptions::new())
}

/// Days of `year`/`month` with lunar dates.
pub fn generate_calendar_with_lunar(year: u16, month: u8) -> Result<Calendar> {
    generate_month(year, month, &CalendarOptions::new().with_lunar(true))
}

/// Days of `year`/`month` with local (civil-calendar) holidays.
///
/// `local_rules` is laid over the built-in table by name; `None` uses the
/// built-in table alone.
pub fn generate_calendar_with_local_holiday(
    year: u16,
    month: u8,
    local_rules: Option<&RuleMap>,
) -> Result<Calendar> {
    generate_month(year, month, &holiday_options(false, local_rules, None))
}

/// Days of `year`/`month` with lunar dates and both holiday tables.
pub fn generate_calendar_with_holiday(
    year: u16,
    month: u8,
    local_rules: Option<&RuleMap>,
    chinese_rules: Option<&RuleMap>,
) -> Result<Calendar> {
    generate_month(year, month, &holiday_options(true, local_rules, chinese_rules))
}

// ── Year level ────────────────────────────────────────────────────────────────

/// Days of `year`, without lunar dates or holidays.
pub fn generate_year_calendar(year: u16) -> Result<Calendar> {
    generate_year(year, &CalendarOptions::new())
}

/// Days of `year` with lunar dates.
pub fn generate_year_calendar_with_lunar(year: u16) -> Result<Calendar> {
    generate_year(year, &CalendarOptions::new().with_lunar(true))
}

/// Days of `year` with local (civil-calendar) holidays.
pub fn generate_year_calendar_with_local_holiday(
    year: u16,
    local_rules: Option<&RuleMap>,
) -> Result<Calendar> {
    generate_year(year, &holiday_options(false, local_rules, None))
}

/// Days of `year` with lunar dates and both holiday tables.
pub fn generate_year_calendar_with_holiday(
    year: u16,
    local_rules: Option<&RuleMap>,
    chinese_rules: Option<&RuleMap>,
) -> Result<Calendar> {
    generate_year(year, &holiday_options(true, local_rules, chinese_rules))
}

fn holiday_options(
    include_lunar: bool,
    local_rules: Option<&RuleMap>,
    chinese_rules: Option<&RuleMap>,
) -> CalendarOptions {
    CalendarOptions {
        include_lunar,
        include_holiday: true,
        local_rules: local_rules.cloned(),
        chinese_rules: chinese_rules.cloned(),
        ..CalendarOptions::default()
    }
}
