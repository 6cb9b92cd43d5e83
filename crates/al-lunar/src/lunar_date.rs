//! `LunarDate`: a date in the Chinese lunisolar calendar.

use al_core::ensure;
use al_core::errors::Result;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_PREFIX: [&str; 4] = ["初", "十", "廿", "三"];

const DIGITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

const ZODIAC_CN: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

const ZODIAC_EN: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];

/// A lunar-calendar date: lunar year, month (1–12), day (1–30) and whether
/// the month is an intercalary (leap) month.
///
/// The derived ordering is chronological: a leap month sorts after the
/// regular month sharing its number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    year: u16,
    month: u8,
    leap: bool,
    day: u8,
}

impl LunarDate {
    /// Create a lunar date, checking only the field shapes (month in
    /// `[1, 12]`, day in `[1, 30]`).  Whether the date exists in a given
    /// year is the converter's concern.
    pub fn new(year: u16, month: u8, day: u8, leap: bool) -> Result<Self> {
        ensure!((1..=12).contains(&month), "lunar month {month} out of range [1, 12]");
        ensure!((1..=30).contains(&day), "lunar day {day} out of range [1, 30]");
        Ok(Self {
            year,
            month,
            leap,
            day,
        })
    }

    pub(crate) fn from_parts(year: u16, month: u8, day: u8, leap: bool) -> Self {
        debug_assert!((1..=12).contains(&month) && (1..=30).contains(&day));
        Self {
            year,
            month,
            leap,
            day,
        }
    }

    /// Lunar year (the Gregorian year in which it begins).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Lunar month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Lunar day (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// `true` if this date lies in a leap month.
    pub fn is_leap_month(&self) -> bool {
        self.leap
    }

    /// Month name, e.g. `"正月"`, `"冬月"`, `"闰六月"`.
    pub fn month_name_cn(&self) -> String {
        let name = MONTH_NAMES[self.month as usize - 1];
        if self.leap {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// Day name, e.g. `"初一"`, `"十五"`, `"廿九"`, `"三十"`.
    pub fn day_name_cn(&self) -> String {
        match self.day {
            10 => "初十".to_string(),
            20 => "二十".to_string(),
            30 => "三十".to_string(),
            d => format!(
                "{}{}",
                DAY_PREFIX[(d / 10) as usize],
                DIGITS[(d % 10) as usize]
            ),
        }
    }

    /// Month and day, e.g. `"正月初一"`.
    pub fn month_day_cn(&self) -> String {
        format!("{}{}", self.month_name_cn(), self.day_name_cn())
    }

    /// Sexagenary (干支) name of the lunar year, e.g. `"甲辰"` for 2024.
    pub fn gan_zhi_year(&self) -> String {
        let cycle = (self.year as usize + 56) % 60; // 4 CE was 甲子
        format!(
            "{}{}",
            HEAVENLY_STEMS[cycle % 10],
            EARTHLY_BRANCHES[cycle % 12]
        )
    }

    /// Zodiac animal of the lunar year in Chinese, e.g. `"龙"`.
    pub fn zodiac_cn(&self) -> &'static str {
        ZODIAC_CN[(self.year as usize + 8) % 12]
    }

    /// Zodiac animal of the lunar year in English, e.g. `"Dragon"`.
    pub fn zodiac_en(&self) -> &'static str {
        ZODIAC_EN[(self.year as usize + 8) % 12]
    }
}

impl std::fmt::Display for LunarDate {
    /// Renders as `甲辰年正月初一`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}年{}", self.gan_zhi_year(), self.month_day_cn())
    }
}
