//! Integration tests for civil ⇄ lunar conversion.

use al_lunar::table::{BASE_SERIAL, LAST_SERIAL};
use al_lunar::{LunarConverter, LunarDate, TableLunarConverter};
use al_time::Date;
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn lunar_of(y: u16, m: u8, d: u8) -> LunarDate {
    TableLunarConverter.to_lunar(date(y, m, d)).unwrap()
}

fn parts(l: LunarDate) -> (u16, u8, u8, bool) {
    (l.year(), l.month(), l.day(), l.is_leap_month())
}

// ─── Known conversions ────────────────────────────────────────────────────────

#[test]
fn known_dates() {
    let cases = [
        ((2000, 1, 1), (1999, 11, 25, false)),
        ((2024, 1, 1), (2023, 11, 20, false)),
        ((2024, 2, 9), (2023, 12, 30, false)),
        ((2024, 2, 24), (2024, 1, 15, false)),
        ((2024, 6, 10), (2024, 5, 5, false)),
        ((2024, 9, 17), (2024, 8, 15, false)),
        ((2024, 10, 11), (2024, 9, 9, false)),
        ((2025, 1, 28), (2024, 12, 29, false)),
        ((2020, 5, 23), (2020, 4, 1, true)),
        ((2101, 1, 28), (2100, 12, 29, false)),
    ];
    for ((y, m, d), expected) in cases {
        assert_eq!(parts(lunar_of(y, m, d)), expected, "{y}-{m}-{d}");
    }
}

#[test]
fn display_names() {
    let l = lunar_of(2024, 2, 10);
    assert_eq!(l.to_string(), "甲辰年正月初一");
    let l = lunar_of(2025, 8, 1);
    assert_eq!(l.month_day_cn(), "闰六月初八");
    assert_eq!(l.gan_zhi_year(), "乙巳");
    assert_eq!(l.zodiac_cn(), "蛇");
}

#[test]
fn leap_month_queries() {
    let conv = TableLunarConverter;
    assert_eq!(conv.leap_month(2019).unwrap(), None);
    assert_eq!(conv.leap_month(2020).unwrap(), Some(4));
    assert_eq!(conv.leap_month(2023).unwrap(), Some(2));
    assert_eq!(conv.leap_month(2025).unwrap(), Some(6));
    assert_eq!(conv.month_length(2023, 12, false).unwrap(), 30);
    assert_eq!(conv.month_length(2024, 12, false).unwrap(), 29);
    assert!(conv.month_length(2024, 4, true).unwrap_err().is_range());
}

#[test]
fn new_years_eve_is_day_before_spring_festival() {
    let conv = TableLunarConverter;
    for year in 1900..2100u16 {
        let eve = conv.to_solar(conv.new_years_eve(year).unwrap()).unwrap();
        let next_new_year = conv
            .to_solar(LunarDate::new(year + 1, 1, 1, false).unwrap())
            .unwrap();
        assert_eq!(eve + 1, next_new_year, "lunar year {year}");
    }
}

// ─── Range ────────────────────────────────────────────────────────────────────

#[test]
fn outside_table_is_range_error() {
    let conv = TableLunarConverter;
    for d in [date(1900, 1, 30), date(2101, 1, 29), date(1, 1, 1), date(9999, 12, 31)] {
        let err = conv.to_lunar(d).unwrap_err();
        assert!(err.is_range(), "{d}: {err}");
    }
}

#[test]
fn consecutive_days_advance_by_one() {
    let conv = TableLunarConverter;
    let mut prev = conv.to_lunar(Date::from_serial(BASE_SERIAL).unwrap()).unwrap();
    for serial in BASE_SERIAL + 1..=LAST_SERIAL {
        let cur = conv.to_lunar(Date::from_serial(serial).unwrap()).unwrap();
        assert!(prev < cur, "serial {serial}");
        if cur.day() != 1 {
            assert_eq!(cur.day(), prev.day() + 1, "serial {serial}");
        } else {
            let len = conv
                .month_length(prev.year(), prev.month(), prev.is_leap_month())
                .unwrap();
            assert_eq!(prev.day(), len, "serial {serial}");
        }
        prev = cur;
    }
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn solar_lunar_roundtrip(serial in BASE_SERIAL..=LAST_SERIAL) {
        let conv = TableLunarConverter;
        let d = Date::from_serial(serial).unwrap();
        let lunar = conv.to_lunar(d).unwrap();
        prop_assert_eq!(conv.to_solar(lunar).unwrap(), d);
    }
}
