//! Packed lunar-year table for 1900–2100.
//!
//! Each entry describes one lunar year:
//!
//! | bits   | meaning                                                     |
//! |--------|-------------------------------------------------------------|
//! | 0–3    | leap month number (0 = no leap month)                       |
//! | 4–15   | months 12 … 1; bit set = 30-day month, clear = 29-day month |
//! | 16     | leap month has 30 days (only meaningful when bits 0–3 ≠ 0)  |
//!
//! Lunar year 1900 begins on civil 1900-01-31.

/// First lunar year covered by the table.
pub const FIRST_YEAR: u16 = 1900;

/// Last lunar year covered by the table.
pub const LAST_YEAR: u16 = 2100;

/// Serial (days since 1970-01-01) of 1900-01-31, the first day of lunar 1900.
pub const BASE_SERIAL: i32 = -25_537;

const YEARS: usize = (LAST_YEAR - FIRST_YEAR + 1) as usize;

#[rustfmt::skip]
const LUNAR_INFO: [u32; YEARS] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910-1919
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920-1929
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940-1949
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960-1969
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980-1989
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990-1999
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010-2019
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020-2029
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040-2049
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050-2059
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060-2069
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070-2079
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080-2089
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090-2099
    0x0d520,                                                                                   // 2100
];

/// Serial of the first day of every lunar year, plus one past the end.
const YEAR_START: [i32; YEARS + 1] = {
    let mut out = [0i32; YEARS + 1];
    out[0] = BASE_SERIAL;
    let mut i = 0;
    while i < YEARS {
        out[i + 1] = out[i] + year_days_of(LUNAR_INFO[i]) as i32;
        i += 1;
    }
    out
};

/// Serial of the last day covered by the table (lunar 2100-12-29).
pub const LAST_SERIAL: i32 = YEAR_START[YEARS] - 1;

const fn leap_days_of(info: u32) -> u16 {
    if info & 0xf == 0 {
        0
    } else if info & 0x1_0000 != 0 {
        30
    } else {
        29
    }
}

const fn year_days_of(info: u32) -> u16 {
    let mut sum = 12 * 29;
    let mut mask = 0x8000;
    while mask > 0x8 {
        if info & mask != 0 {
            sum += 1;
        }
        mask >>= 1;
    }
    sum + leap_days_of(info)
}

fn info(year: u16) -> Option<u32> {
    if (FIRST_YEAR..=LAST_YEAR).contains(&year) {
        Some(LUNAR_INFO[(year - FIRST_YEAR) as usize])
    } else {
        None
    }
}

/// Leap month of `year` (1–12), `Some(None)` when the year has none, `None`
/// when the year is outside the table.
pub fn leap_month(year: u16) -> Option<Option<u8>> {
    info(year).map(|i| match (i & 0xf) as u8 {
        0 => None,
        m => Some(m),
    })
}

/// Length of a regular (`leap == false`) or leap month.  `None` when the
/// year is outside the table, or `leap` is requested for a month that is
/// not that year's leap month.
pub fn month_days(year: u16, month: u8, leap: bool) -> Option<u8> {
    let i = info(year)?;
    if !(1..=12).contains(&month) {
        return None;
    }
    if leap {
        if (i & 0xf) as u8 != month {
            return None;
        }
        return Some(leap_days_of(i) as u8);
    }
    Some(if i & (0x1_0000 >> month) != 0 { 30 } else { 29 })
}

/// Total days in lunar `year`.
pub fn year_days(year: u16) -> Option<u16> {
    info(year).map(year_days_of)
}

/// Serial of lunar new year (month 1, day 1) of `year`.
pub fn year_start(year: u16) -> Option<i32> {
    info(year).map(|_| YEAR_START[(year - FIRST_YEAR) as usize])
}

/// Locate the lunar year containing `serial`, returning the year and the
/// zero-based day offset into it.
pub fn locate(serial: i32) -> Option<(u16, i32)> {
    if !(BASE_SERIAL..=LAST_SERIAL).contains(&serial) {
        return None;
    }
    // First start strictly after `serial`, minus one.
    let idx = YEAR_START.partition_point(|&s| s <= serial) - 1;
    Some((FIRST_YEAR + idx as u16, serial - YEAR_START[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_lengths_are_plausible() {
        for y in FIRST_YEAR..=LAST_YEAR {
            let days = year_days(y).unwrap();
            match leap_month(y).unwrap() {
                None => assert!((353..=355).contains(&days), "{y}: {days}"),
                Some(_) => assert!((383..=385).contains(&days), "{y}: {days}"),
            }
        }
    }

    #[test]
    fn known_leap_months() {
        assert_eq!(leap_month(2020), Some(Some(4)));
        assert_eq!(leap_month(2023), Some(Some(2)));
        assert_eq!(leap_month(2024), Some(None));
        assert_eq!(leap_month(2025), Some(Some(6)));
        assert_eq!(leap_month(2033), Some(Some(11)));
        assert_eq!(leap_month(1899), None);
    }

    #[test]
    fn month_lengths() {
        // Lunar 2023: twelfth month has 30 days, 2024: 29 days
        assert_eq!(month_days(2023, 12, false), Some(30));
        assert_eq!(month_days(2024, 12, false), Some(29));
        assert_eq!(month_days(2025, 6, true), Some(29));
        assert_eq!(month_days(2025, 5, true), None);
        assert_eq!(month_days(2101, 1, false), None);
    }

    #[test]
    fn locate_bounds() {
        assert_eq!(locate(BASE_SERIAL), Some((1900, 0)));
        assert_eq!(locate(BASE_SERIAL - 1), None);
        assert_eq!(locate(LAST_SERIAL).map(|(y, _)| y), Some(2100));
        assert_eq!(locate(LAST_SERIAL + 1), None);
        assert_eq!(LAST_SERIAL, 47_874);
    }
}
