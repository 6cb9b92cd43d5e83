//! Resolve rule tables to concrete dates for one year.

use std::collections::{BTreeMap, BTreeSet};

use al_core::errors::Result;
use al_lunar::{LunarConverter, LunarDate};
use al_time::Date;
use tracing::{debug, trace};

use crate::table::{LunarRuleTable, SolarRuleTable};

/// Civil date → names of the solar holidays falling on it.
pub type SolarMatches = BTreeMap<Date, BTreeSet<String>>;

/// Lunar date → names of the lunar holidays falling on it.
pub type LunarMatches = BTreeMap<LunarDate, BTreeSet<String>>;

/// Resolve every rule of `table` for civil `year`.
///
/// Rules without an occurrence that year (a `02-29` rule in a common year,
/// a fifth weekday the month does not have) are left out.  Several names
/// may share a date.
pub fn resolve_solar(table: &SolarRuleTable, year: u16) -> Result<SolarMatches> {
    let mut out = SolarMatches::new();
    for (name, rule) in table.iter() {
        match rule.resolve(year)? {
            Some(date) => {
                out.entry(date).or_default().insert(name.to_string());
            }
            None => trace!(name, %rule, year, "no occurrence"),
        }
    }
    debug!(year, rules = table.len(), dates = out.len(), "resolved solar holidays");
    Ok(out)
}

/// Resolve every rule of `table` for `lunar_year`.
///
/// Keys are lunar dates in regular months (or the leap twelfth month for
/// 除夕), so a day matches exactly when its converted lunar date is a key.
pub fn resolve_lunar(
    table: &LunarRuleTable,
    lunar_year: u16,
    converter: &dyn LunarConverter,
) -> Result<LunarMatches> {
    let mut out = LunarMatches::new();
    for (name, rule) in table.iter() {
        match rule.resolve(lunar_year, converter)? {
            Some(date) => {
                out.entry(date).or_default().insert(name.to_string());
            }
            None => trace!(name, %rule, lunar_year, "no occurrence"),
        }
    }
    debug!(
        lunar_year,
        rules = table.len(),
        dates = out.len(),
        "resolved lunar holidays"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{chinese_defaults, local_defaults, HolidayLocale};
    use al_lunar::TableLunarConverter;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn solar_defaults_2024() {
        let matches = resolve_solar(&local_defaults(HolidayLocale::Chinese), 2024).unwrap();
        assert!(matches[&date(2024, 1, 1)].contains("元旦"));
        assert!(matches[&date(2024, 5, 12)].contains("母亲节"));
        assert!(matches[&date(2024, 6, 16)].contains("父亲节"));
        assert!(matches[&date(2024, 11, 28)].contains("感恩节"));
        assert_eq!(matches.values().map(BTreeSet::len).sum::<usize>(), 18);
    }

    #[test]
    fn shared_dates_collect_all_names() {
        let table = SolarRuleTable::parse([("a", "07-01"), ("b", "7-1"), ("c", "07-02")]).unwrap();
        let matches = resolve_solar(&table, 2021).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[&date(2021, 7, 1)].iter().collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn lunar_defaults_2024() {
        let conv = TableLunarConverter;
        let matches = resolve_lunar(&chinese_defaults(HolidayLocale::Chinese), 2024, &conv).unwrap();
        let names_on = |y, m, d| {
            let lunar = conv.to_lunar(date(y, m, d)).unwrap();
            matches.get(&lunar).cloned().unwrap_or_default()
        };
        assert!(names_on(2024, 2, 10).contains("春节"));
        assert!(names_on(2024, 2, 24).contains("元宵节"));
        assert!(names_on(2024, 6, 10).contains("端午节"));
        assert!(names_on(2024, 9, 17).contains("中秋节"));
        assert!(names_on(2024, 10, 11).contains("重阳节"));
        assert!(names_on(2025, 1, 28).contains("除夕"));
    }

    #[test]
    fn leap_month_does_not_match() {
        let conv = TableLunarConverter;
        let table = LunarRuleTable::parse([("six-eight", "0608")]).unwrap();
        let matches = resolve_lunar(&table, 2025, &conv).unwrap();
        // 2025-08-01 is 闰六月初八
        let leap = conv.to_lunar(date(2025, 8, 1)).unwrap();
        assert!(leap.is_leap_month());
        assert!(!matches.contains_key(&leap));
        assert_eq!(matches.len(), 1);
    }
}
