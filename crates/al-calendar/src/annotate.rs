//! `DayAnnotator`: decorates civil dates with lunar dates and holidays.

use std::collections::{BTreeMap, BTreeSet};

use al_core::errors::Result;
use al_holidays::{
    resolve_lunar, resolve_solar, LunarMatches, LunarRuleTable, SolarMatches, SolarRuleTable,
};
use al_lunar::LunarConverter;
use al_time::Date;
use tracing::debug;

use crate::day::{Day, LunarStatus};
use crate::options::{CalendarOptions, LunarFailurePolicy};

/// Turns dates into [`Day`]s for one generation call.
///
/// Rule tables are built (and validated) up front.  Each table is resolved
/// at most once per year, the first time a day of that year (civil for
/// local rules, lunar for Chinese rules) is annotated, and the result is
/// reused for every later day of the year.
#[derive(Debug)]
pub struct DayAnnotator<'a> {
    include_lunar: bool,
    include_holiday: bool,
    lunar_failure: LunarFailurePolicy,
    solar_rules: SolarRuleTable,
    lunar_rules: LunarRuleTable,
    converter: &'a dyn LunarConverter,
    solar_by_year: BTreeMap<u16, SolarMatches>,
    lunar_by_year: BTreeMap<u16, LunarMatches>,
}

impl<'a> DayAnnotator<'a> {
    /// Build an annotator for `options`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRule`](al_core::Error::InvalidRule) if either
    /// rule map holds a malformed token.
    pub fn new(options: &CalendarOptions, converter: &'a dyn LunarConverter) -> Result<Self> {
        let (solar_rules, lunar_rules) = options.rule_tables()?;
        debug!(
            solar_rules = solar_rules.len(),
            lunar_rules = lunar_rules.len(),
            "built holiday rule tables"
        );
        Ok(Self {
            include_lunar: options.include_lunar,
            include_holiday: options.include_holiday,
            lunar_failure: options.lunar_failure,
            solar_rules,
            lunar_rules,
            converter,
            solar_by_year: BTreeMap::new(),
            lunar_by_year: BTreeMap::new(),
        })
    }

    /// Annotate one date.
    ///
    /// # Errors
    /// With [`LunarFailurePolicy::Abort`], a date outside the converter's
    /// span fails with a range error.
    pub fn annotate(&mut self, date: Date) -> Result<Day> {
        let lunar = self.lunar_status(date)?;
        let holidays = if self.include_holiday {
            self.holidays(date, lunar)?
        } else {
            BTreeSet::new()
        };
        Ok(Day::new(date, lunar, holidays))
    }

    fn lunar_status(&self, date: Date) -> Result<LunarStatus> {
        if !self.include_lunar {
            return Ok(LunarStatus::NotRequested);
        }
        match self.converter.to_lunar(date) {
            Ok(lunar) => Ok(LunarStatus::Available(lunar)),
            Err(e) if self.lunar_failure == LunarFailurePolicy::MarkUnavailable => {
                debug!(%date, error = %e, "lunar date unavailable");
                Ok(LunarStatus::Unavailable)
            }
            Err(e) => Err(e),
        }
    }

    fn holidays(&mut self, date: Date, lunar: LunarStatus) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();

        let year = date.year();
        if !self.solar_by_year.contains_key(&year) {
            let matches = resolve_solar(&self.solar_rules, year)?;
            self.solar_by_year.insert(year, matches);
        }
        if let Some(hits) = self.solar_by_year.get(&year).and_then(|m| m.get(&date)) {
            names.extend(hits.iter().cloned());
        }

        if let LunarStatus::Available(lunar) = lunar {
            let lunar_year = lunar.year();
            if !self.lunar_by_year.contains_key(&lunar_year) {
                let matches = resolve_lunar(&self.lunar_rules, lunar_year, self.converter)?;
                self.lunar_by_year.insert(lunar_year, matches);
            }
            if let Some(hits) = self.lunar_by_year.get(&lunar_year).and_then(|m| m.get(&lunar)) {
                names.extend(hits.iter().cloned());
            }
        }
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_lunar::TableLunarConverter;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn nothing_requested() {
        let opts = CalendarOptions::new();
        let mut annotator = DayAnnotator::new(&opts, &TableLunarConverter).unwrap();
        let day = annotator.annotate(date(2024, 1, 1)).unwrap();
        assert_eq!(day.lunar_status(), LunarStatus::NotRequested);
        assert!(day.holidays().is_empty());
    }

    #[test]
    fn holidays_without_lunar_skip_lunar_rules() {
        let opts = CalendarOptions::new().with_holiday(true);
        let mut annotator = DayAnnotator::new(&opts, &TableLunarConverter).unwrap();
        // 2024-02-10 is 春节, but lunar dates were not requested
        assert!(annotator.annotate(date(2024, 2, 10)).unwrap().holidays().is_empty());
        assert!(annotator.annotate(date(2024, 1, 1)).unwrap().has_holiday("元旦"));
    }

    #[test]
    fn solar_and_lunar_names_are_unioned() {
        let opts = CalendarOptions::new().with_lunar(true).with_holiday(true);
        let mut annotator = DayAnnotator::new(&opts, &TableLunarConverter).unwrap();
        // 2024-02-14 is 情人节 and 正月初五
        let day = annotator.annotate(date(2024, 2, 14)).unwrap();
        assert_eq!(day.holiday_str(","), "情人节");
        // 2001-10-01 was both 国庆节 and 中秋节
        let day = annotator.annotate(date(2001, 10, 1)).unwrap();
        assert!(day.has_holiday("国庆节"));
        assert!(day.has_holiday("中秋节"));
    }

    #[test]
    fn failure_policy() {
        let opts = CalendarOptions::new().with_lunar(true).with_holiday(true);
        let mut annotator = DayAnnotator::new(&opts, &TableLunarConverter).unwrap();
        let day = annotator.annotate(date(1899, 12, 31)).unwrap();
        assert!(day.lunar_unavailable());

        let opts = opts.with_lunar_failure(LunarFailurePolicy::Abort);
        let mut annotator = DayAnnotator::new(&opts, &TableLunarConverter).unwrap();
        assert!(annotator.annotate(date(1899, 12, 31)).unwrap_err().is_range());
    }
}
