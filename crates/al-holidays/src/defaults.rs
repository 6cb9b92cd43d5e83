//! Built-in holiday tables.
//!
//! Two tables ship with the crate: local (civil-calendar) observances and
//! traditional Chinese lunar festivals.  Each entry has a Chinese and an
//! English name; [`HolidayLocale`] picks which one keys the table, and
//! therefore which name callers must use to override an entry.

use al_time::{Month, Weekday};

use crate::rule::{LunarRule, SolarRule};
use crate::table::{LunarRuleTable, SolarRuleTable};

/// Language of the built-in holiday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayLocale {
    /// Chinese names (`元旦`, `中秋节`).
    #[default]
    Chinese,
    /// English names (`New Year's Day`, `Mid-Autumn Festival`).
    English,
}

/// A built-in holiday: Chinese name, English name, rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultHoliday<R> {
    /// Chinese name.
    pub cn: &'static str,
    /// English name.
    pub en: &'static str,
    /// Rule.
    pub rule: R,
}

impl<R> DefaultHoliday<R> {
    /// Name in `locale`.
    pub fn name(&self, locale: HolidayLocale) -> &'static str {
        match locale {
            HolidayLocale::Chinese => self.cn,
            HolidayLocale::English => self.en,
        }
    }
}

const fn fixed(cn: &'static str, en: &'static str, month: Month, day: u8) -> DefaultHoliday<SolarRule> {
    DefaultHoliday {
        cn,
        en,
        rule: SolarRule::Fixed { month, day },
    }
}

const fn nth(
    cn: &'static str,
    en: &'static str,
    month: Month,
    ordinal: u8,
    weekday: Weekday,
) -> DefaultHoliday<SolarRule> {
    DefaultHoliday {
        cn,
        en,
        rule: SolarRule::NthWeekday {
            month,
            ordinal,
            weekday,
        },
    }
}

const fn lunar(cn: &'static str, en: &'static str, month: u8, day: u8) -> DefaultHoliday<LunarRule> {
    DefaultHoliday {
        cn,
        en,
        rule: LunarRule::Fixed { month, day },
    }
}

/// Built-in civil-calendar holidays.
#[rustfmt::skip]
pub const LOCAL_HOLIDAYS: [DefaultHoliday<SolarRule>; 18] = [
    fixed("元旦", "New Year's Day", Month::January, 1),
    fixed("情人节", "Valentine's Day", Month::February, 14),
    fixed("妇女节", "Women's Day", Month::March, 8),
    fixed("植树节", "Arbor Day", Month::March, 12),
    fixed("愚人节", "April Fools' Day", Month::April, 1),
    fixed("劳动节", "Labour Day", Month::May, 1),
    fixed("青年节", "Youth Day", Month::May, 4),
    nth("母亲节", "Mother's Day", Month::May, 2, Weekday::Sunday),
    fixed("儿童节", "Children's Day", Month::June, 1),
    nth("父亲节", "Father's Day", Month::June, 3, Weekday::Sunday),
    fixed("建党节", "CPC Founding Day", Month::July, 1),
    fixed("建军节", "Army Day", Month::August, 1),
    fixed("教师节", "Teachers' Day", Month::September, 10),
    fixed("国庆节", "National Day", Month::October, 1),
    fixed("万圣节", "Halloween", Month::October, 31),
    nth("感恩节", "Thanksgiving Day", Month::November, 4, Weekday::Thursday),
    fixed("平安夜", "Christmas Eve", Month::December, 24),
    fixed("圣诞节", "Christmas Day", Month::December, 25),
];

/// Built-in lunar festivals.
#[rustfmt::skip]
pub const CHINESE_HOLIDAYS: [DefaultHoliday<LunarRule>; 14] = [
    lunar("春节", "Spring Festival", 1, 1),
    lunar("元宵节", "Lantern Festival", 1, 15),
    lunar("龙抬头", "Dragon Head Raising Day", 2, 2),
    lunar("端午节", "Dragon Boat Festival", 5, 5),
    lunar("七夕节", "Qixi Festival", 7, 7),
    lunar("中元节", "Ghost Festival", 7, 15),
    lunar("中秋节", "Mid-Autumn Festival", 8, 15),
    lunar("重阳节", "Double Ninth Festival", 9, 9),
    lunar("寒衣节", "Winter Clothes Day", 10, 1),
    lunar("下元节", "Xiayuan Festival", 10, 15),
    lunar("腊八节", "Laba Festival", 12, 8),
    lunar("北方小年", "Northern Little New Year", 12, 23),
    lunar("南方小年", "Southern Little New Year", 12, 24),
    DefaultHoliday { cn: "除夕", en: "Chinese New Year's Eve", rule: LunarRule::NewYearsEve },
];

/// The built-in local table, keyed by `locale` names.
pub fn local_defaults(locale: HolidayLocale) -> SolarRuleTable {
    LOCAL_HOLIDAYS
        .iter()
        .map(|h| (h.name(locale).to_string(), h.rule))
        .collect()
}

/// The built-in lunar table, keyed by `locale` names.
pub fn chinese_defaults(locale: HolidayLocale) -> LunarRuleTable {
    CHINESE_HOLIDAYS
        .iter()
        .map(|h| (h.name(locale).to_string(), h.rule))
        .collect()
}
