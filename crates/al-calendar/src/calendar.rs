//! `Calendar`: the generated year → month → day tree and its indexes.

use std::collections::HashMap;
use std::sync::Arc;

use al_time::Date;

use crate::day::Day;

/// One generated month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Month {
    month: u8,
    length: u8,
    days: Vec<Arc<Day>>,
}

impl Month {
    pub(crate) fn new(month: u8, length: u8) -> Self {
        Self {
            month,
            length,
            days: Vec::with_capacity(length as usize),
        }
    }

    pub(crate) fn push(&mut self, day: Arc<Day>) {
        self.days.push(day);
    }

    /// Month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Month as an enum.
    pub fn month_of_year(&self) -> al_time::Month {
        // only ever built from a valid date
        al_time::Month::ALL[self.month as usize - 1]
    }

    /// Number of days the month has in its year (28–31), regardless of how
    /// many were generated.
    pub fn length_of_month(&self) -> u8 {
        self.length
    }

    /// Generated days in order.
    pub fn days(&self) -> &[Arc<Day>] {
        &self.days
    }

    /// `true` when every day of the month was generated.
    pub fn is_complete(&self) -> bool {
        self.days.len() == self.length as usize
    }
}

/// One generated year: only the months that were generated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Year {
    year: u16,
    months: Vec<Month>,
}

impl Year {
    pub(crate) fn new(year: u16) -> Self {
        Self {
            year,
            months: Vec::new(),
        }
    }

    pub(crate) fn months_mut(&mut self) -> &mut Vec<Month> {
        &mut self.months
    }

    /// Year number.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Generated months in order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Month `month`, if generated.
    pub fn month(&self, month: u8) -> Option<&Month> {
        self.months.iter().find(|m| m.month == month)
    }

    /// Every generated day of the year in order.
    pub fn days(&self) -> impl Iterator<Item = &Arc<Day>> {
        self.months.iter().flat_map(|m| m.days.iter())
    }
}

/// A generated calendar.
///
/// Holds the year tree plus two views of the same days: a `yyyy-MM-dd`
/// keyed index and a chronological list.  All three share each [`Day`]
/// through one `Arc`.
///
/// Serializes as the year tree only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Calendar {
    years: Vec<Year>,
    #[cfg_attr(feature = "serde", serde(skip))]
    day_map: HashMap<String, Arc<Day>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    day_list: Vec<Arc<Day>>,
}

impl Calendar {
    pub(crate) fn from_parts(
        years: Vec<Year>,
        day_map: HashMap<String, Arc<Day>>,
        day_list: Vec<Arc<Day>>,
    ) -> Self {
        debug_assert_eq!(day_map.len(), day_list.len());
        Self {
            years,
            day_map,
            day_list,
        }
    }

    /// Generated years in order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Year `year`, if generated.
    pub fn year(&self, year: u16) -> Option<&Year> {
        self.years.iter().find(|y| y.year == year)
    }

    /// Every generated month, in order across years.
    pub fn months(&self) -> impl Iterator<Item = &Month> {
        self.years.iter().flat_map(|y| y.months.iter())
    }

    /// Key → day index.
    pub fn day_map(&self) -> &HashMap<String, Arc<Day>> {
        &self.day_map
    }

    /// Days in chronological order.
    pub fn day_list(&self) -> &[Arc<Day>] {
        &self.day_list
    }

    /// Look a day up by its `yyyy-MM-dd` key.
    pub fn day(&self, key: &str) -> Option<&Arc<Day>> {
        self.day_map.get(key)
    }

    /// Look a day up by date.
    pub fn day_on(&self, date: Date) -> Option<&Arc<Day>> {
        self.day(&date.key())
    }

    /// Number of generated days.
    pub fn len(&self) -> usize {
        self.day_list.len()
    }

    /// `true` if no day was generated.
    pub fn is_empty(&self) -> bool {
        self.day_list.is_empty()
    }

    /// First generated day.
    pub fn first_day(&self) -> Option<&Arc<Day>> {
        self.day_list.first()
    }

    /// Last generated day.
    pub fn last_day(&self) -> Option<&Arc<Day>> {
        self.day_list.last()
    }

    /// Days carrying at least one holiday, in order.
    pub fn holidays(&self) -> impl Iterator<Item = &Arc<Day>> {
        self.day_list.iter().filter(|d| d.is_holiday())
    }

    /// Days on which holiday `name` falls, in order.
    pub fn days_of_holiday<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Arc<Day>> + 'a {
        self.day_list.iter().filter(move |d| d.has_holiday(name))
    }
}
