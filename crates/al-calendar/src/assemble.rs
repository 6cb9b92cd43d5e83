//! Groups annotated days into months and years and builds the key index
//! and flat list.

use std::collections::HashMap;
use std::sync::Arc;

use al_core::ensure;
use al_core::errors::Result;
use al_time::Date;

use crate::calendar::{Calendar, Month, Year};
use crate::day::Day;

/// Incremental calendar builder.
///
/// Days must be pushed in strictly ascending date order, so the tree, the
/// index, and the list stay in chronological order and hold the same days.
#[derive(Debug, Default)]
pub struct CalendarAssembler {
    years: Vec<Year>,
    day_map: HashMap<String, Arc<Day>>,
    day_list: Vec<Arc<Day>>,
}

impl CalendarAssembler {
    /// An empty assembler with room for `days` days.
    pub fn with_capacity(days: usize) -> Self {
        Self {
            years: Vec::new(),
            day_map: HashMap::with_capacity(days),
            day_list: Vec::with_capacity(days),
        }
    }

    /// Append a day, opening a new year or month entry when it starts one.
    ///
    /// # Errors
    /// Returns a validation error, leaving the assembler unchanged, if
    /// `day` is not strictly after the last day pushed.
    pub fn push(&mut self, day: Day) -> Result<()> {
        let date = day.date();
        if let Some(last) = self.day_list.last() {
            let last = last.date();
            ensure!(
                last < date,
                "dates must be strictly ascending: {date} after {last}"
            );
        }
        let day = Arc::new(day);

        if self.years.last().map(Year::year) != Some(date.year()) {
            self.years.push(Year::new(date.year()));
        }
        let months = match self.years.last_mut() {
            Some(year) => year.months_mut(),
            None => unreachable!("a year entry was just ensured"),
        };
        if months.last().map(Month::month) != Some(date.month()) {
            months.push(Month::new(date.month(), date.length_of_month()));
        }
        if let Some(month) = months.last_mut() {
            month.push(Arc::clone(&day));
        }

        self.day_map.insert(date.key(), Arc::clone(&day));
        self.day_list.push(day);
        Ok(())
    }

    /// Number of days pushed so far.
    pub fn len(&self) -> usize {
        self.day_list.len()
    }

    /// `true` if nothing was pushed.
    pub fn is_empty(&self) -> bool {
        self.day_list.is_empty()
    }

    /// Finish into a [`Calendar`].
    pub fn finish(self) -> Calendar {
        Calendar::from_parts(self.years, self.day_map, self.day_list)
    }
}

/// Build a calendar by annotating each date of `dates` in order.
///
/// Stops at the first annotation error, or at the first date that is not
/// strictly after its predecessor.
pub fn assemble<I, F>(dates: I, mut annotate: F) -> Result<Calendar>
where
    I: IntoIterator<Item = Date>,
    F: FnMut(Date) -> Result<Day>,
{
    let dates = dates.into_iter();
    let mut assembler = CalendarAssembler::with_capacity(dates.size_hint().0);
    for date in dates {
        assembler.push(annotate(date)?)?;
    }
    Ok(assembler.finish())
}
