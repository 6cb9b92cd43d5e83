//! `Day`: one generated calendar day.

use std::collections::BTreeSet;

use al_lunar::LunarDate;
use al_time::{Date, Weekday};

/// Lunar information attached to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "status", content = "date"))]
pub enum LunarStatus {
    /// Lunar dates were not requested.
    NotRequested,
    /// Requested, but the date is outside the converter's supported span.
    Unavailable,
    /// The converted lunar date.
    Available(LunarDate),
}

/// A generated day: civil date, optional lunar date, and the names of the
/// holidays falling on it.
///
/// Days are immutable once generated.  A [`Calendar`](crate::Calendar)
/// shares each one between its month, its key index, and its flat list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Day {
    date: Date,
    lunar: LunarStatus,
    holidays: BTreeSet<String>,
}

impl Day {
    /// Assemble a day from its parts.
    pub fn new(date: Date, lunar: LunarStatus, holidays: BTreeSet<String>) -> Self {
        Self {
            date,
            lunar,
            holidays,
        }
    }

    /// A day with no lunar date and no holidays.
    pub fn plain(date: Date) -> Self {
        Self::new(date, LunarStatus::NotRequested, BTreeSet::new())
    }

    // ── Civil date ───────────────────────────────────────────────────────────

    /// The civil date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The `yyyy-MM-dd` index key.
    pub fn key(&self) -> String {
        self.date.key()
    }

    /// Year.
    pub fn year(&self) -> u16 {
        self.date.year()
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Day of month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.date.day_of_month()
    }

    /// Day of year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.date.day_of_year()
    }

    /// Day of week.
    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    /// Day-of-week number, 1 = Monday … 7 = Sunday.
    pub fn weekday_number(&self) -> u8 {
        self.weekday().ordinal()
    }

    /// Chinese day-of-week name, e.g. `"星期一"`.
    pub fn weekday_cn(&self) -> &'static str {
        self.weekday().cn_name()
    }

    /// English day-of-week name, e.g. `"Monday"`.
    pub fn weekday_en(&self) -> &'static str {
        self.weekday().long_name()
    }

    /// Short English day-of-week name, e.g. `"Mon"`.
    pub fn weekday_en_short(&self) -> &'static str {
        self.weekday().short_name()
    }

    /// Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        self.weekday().is_weekend()
    }

    // ── Lunar date ───────────────────────────────────────────────────────────

    /// Lunar status of the day.
    pub fn lunar_status(&self) -> LunarStatus {
        self.lunar
    }

    /// The lunar date, when requested and convertible.
    pub fn lunar(&self) -> Option<LunarDate> {
        match self.lunar {
            LunarStatus::Available(lunar) => Some(lunar),
            _ => None,
        }
    }

    /// `true` when a lunar date was requested but could not be computed.
    pub fn lunar_unavailable(&self) -> bool {
        self.lunar == LunarStatus::Unavailable
    }

    /// Lunar month and day in Chinese, e.g. `"正月初一"` or `"闰六月初八"`.
    pub fn lunar_str(&self) -> Option<String> {
        self.lunar().map(|l| l.month_day_cn())
    }

    /// `true` if the lunar date falls in a leap month.
    pub fn is_lunar_leap_month(&self) -> bool {
        self.lunar().is_some_and(|l| l.is_leap_month())
    }

    // ── Holidays ─────────────────────────────────────────────────────────────

    /// Names of the holidays on this day, sorted.
    pub fn holidays(&self) -> &BTreeSet<String> {
        &self.holidays
    }

    /// `true` if at least one holiday falls on this day.
    pub fn is_holiday(&self) -> bool {
        !self.holidays.is_empty()
    }

    /// `true` if the holiday `name` falls on this day.
    pub fn has_holiday(&self, name: &str) -> bool {
        self.holidays.contains(name)
    }

    /// Holiday names joined with `sep`, e.g. `"劳动节 青年节"`.
    pub fn holiday_str(&self, sep: &str) -> String {
        self.holidays
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl std::fmt::Display for Day {
    /// `2024-02-10 星期六 正月初一 [春节]`; absent parts are omitted.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.weekday_cn())?;
        if let Some(lunar) = self.lunar_str() {
            write!(f, " {lunar}")?;
        }
        if self.is_holiday() {
            write!(f, " [{}]", self.holiday_str(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekday_fields() {
        let day = Day::plain(date(2024, 2, 10));
        assert_eq!(day.key(), "2024-02-10");
        assert_eq!(day.weekday_number(), 6);
        assert_eq!(day.weekday_cn(), "星期六");
        assert_eq!(day.weekday_en(), "Saturday");
        assert_eq!(day.weekday_en_short(), "Sat");
        assert_eq!(day.day_of_year(), 41);
        assert!(day.is_weekend());
        assert_eq!(day.lunar(), None);
        assert!(!day.lunar_unavailable());
        assert_eq!(day.to_string(), "2024-02-10 星期六");
    }

    #[test]
    fn lunar_and_holidays() {
        let lunar = LunarDate::new(2024, 1, 1, false).unwrap();
        let names = BTreeSet::from(["春节".to_string()]);
        let day = Day::new(date(2024, 2, 10), LunarStatus::Available(lunar), names);
        assert_eq!(day.lunar_str().as_deref(), Some("正月初一"));
        assert!(day.has_holiday("春节"));
        assert_eq!(day.to_string(), "2024-02-10 星期六 正月初一 [春节]");
    }

    #[test]
    fn unavailable() {
        let day = Day::new(date(1899, 12, 31), LunarStatus::Unavailable, BTreeSet::new());
        assert!(day.lunar_unavailable());
        assert_eq!(day.lunar(), None);
        assert!(!day.is_lunar_leap_month());
    }
}
