//! `LunarConverter` trait and the table-driven implementation.
//!
//! The calendar engine only talks to the trait, so a different conversion
//! source (an astronomical model, a wider table) can be dropped in without
//! touching the engine.

use al_core::errors::{Error, Result};
use al_time::Date;

use crate::lunar_date::LunarDate;
use crate::table;

/// Civil ⇄ lunar date conversion.
///
/// Implementations must be pure: the same input always yields the same
/// output.  Inputs outside the supported span fail with
/// [`Error::Range`].
pub trait LunarConverter: std::fmt::Debug + Send + Sync {
    /// Convert a civil date to its lunar representation.
    fn to_lunar(&self, date: Date) -> Result<LunarDate>;

    /// Convert a lunar date back to the civil calendar.
    ///
    /// Fails if the lunar date does not exist (day 30 of a 29-day month, a
    /// leap flag on a month that is not that year's leap month).
    fn to_solar(&self, lunar: LunarDate) -> Result<Date>;

    /// Leap month of `lunar_year`, or `None` if the year has none.
    fn leap_month(&self, lunar_year: u16) -> Result<Option<u8>>;

    /// Number of days (29 or 30) in the given lunar month.
    fn month_length(&self, lunar_year: u16, month: u8, leap: bool) -> Result<u8>;

    /// First and last civil dates this converter handles.
    fn supported_range(&self) -> (Date, Date);

    /// Return `true` if `date` can be converted.
    fn supports(&self, date: Date) -> bool {
        let (first, last) = self.supported_range();
        first <= date && date <= last
    }

    /// Number of days in `lunar_year` (353–355, or 383–385 with a leap
    /// month).
    fn year_length(&self, lunar_year: u16) -> Result<u16> {
        let mut total = 0u16;
        for month in 1..=12 {
            total += self.month_length(lunar_year, month, false)? as u16;
        }
        if let Some(leap) = self.leap_month(lunar_year)? {
            total += self.month_length(lunar_year, leap, true)? as u16;
        }
        Ok(total)
    }

    /// The last day of `lunar_year` (除夕, the day before lunar new year).
    ///
    /// This is the final day of the twelfth month, or of a leap twelfth
    /// month when the year has one.
    fn new_years_eve(&self, lunar_year: u16) -> Result<LunarDate> {
        let leap = self.leap_month(lunar_year)? == Some(12);
        let day = self.month_length(lunar_year, 12, leap)?;
        LunarDate::new(lunar_year, 12, day, leap)
    }
}

/// Table-driven converter covering lunar years 1900–2100 (civil
/// 1900-01-31 to 2101-01-28).
#[derive(Debug, Clone, Copy, Default)]
pub struct TableLunarConverter;

impl TableLunarConverter {
    /// Create a converter.
    pub fn new() -> Self {
        Self
    }

    fn year_out_of_range(year: u16) -> Error {
        Error::Range(format!(
            "lunar year {year} outside supported range [{}, {}]",
            table::FIRST_YEAR,
            table::LAST_YEAR
        ))
    }
}

impl LunarConverter for TableLunarConverter {
    fn to_lunar(&self, date: Date) -> Result<LunarDate> {
        let (year, mut offset) = table::locate(date.serial()).ok_or_else(|| {
            let (first, last) = self.supported_range();
            Error::Range(format!(
                "{date} outside lunar conversion range [{first}, {last}]"
            ))
        })?;
        let leap_month = table::leap_month(year).flatten();

        for month in 1..=12u8 {
            let len = table::month_days(year, month, false).unwrap_or(29) as i32;
            if offset < len {
                return Ok(LunarDate::from_parts(year, month, (offset + 1) as u8, false));
            }
            offset -= len;

            if leap_month == Some(month) {
                let len = table::month_days(year, month, true).unwrap_or(29) as i32;
                if offset < len {
                    return Ok(LunarDate::from_parts(year, month, (offset + 1) as u8, true));
                }
                offset -= len;
            }
        }
        // `locate` guarantees the offset lies inside the year
        unreachable!("day offset past the end of lunar year {year}")
    }

    fn to_solar(&self, lunar: LunarDate) -> Result<Date> {
        let year = lunar.year();
        let month = lunar.month();
        let len = self.month_length(year, month, lunar.is_leap_month())?;
        if lunar.day() > len {
            return Err(Error::Range(format!(
                "{} has only {len} days in lunar {year}",
                lunar.month_name_cn()
            )));
        }

        let start = table::year_start(year).ok_or_else(|| Self::year_out_of_range(year))?;
        let leap_month = table::leap_month(year).flatten();
        let mut offset = 0i32;
        for m in 1..month {
            offset += table::month_days(year, m, false).unwrap_or(29) as i32;
            if leap_month == Some(m) {
                offset += table::month_days(year, m, true).unwrap_or(29) as i32;
            }
        }
        if lunar.is_leap_month() {
            offset += table::month_days(year, month, false).unwrap_or(29) as i32;
        }
        Date::from_serial(start + offset + lunar.day() as i32 - 1)
    }

    fn leap_month(&self, lunar_year: u16) -> Result<Option<u8>> {
        table::leap_month(lunar_year).ok_or_else(|| Self::year_out_of_range(lunar_year))
    }

    fn month_length(&self, lunar_year: u16, month: u8, leap: bool) -> Result<u8> {
        if !(table::FIRST_YEAR..=table::LAST_YEAR).contains(&lunar_year) {
            return Err(Self::year_out_of_range(lunar_year));
        }
        table::month_days(lunar_year, month, leap).ok_or_else(|| {
            Error::Range(format!(
                "lunar {lunar_year} has no {}month {month}",
                if leap { "leap " } else { "" }
            ))
        })
    }

    fn supported_range(&self) -> (Date, Date) {
        let first = Date::from_serial(table::BASE_SERIAL);
        let last = Date::from_serial(table::LAST_SERIAL);
        match (first, last) {
            (Ok(first), Ok(last)) => (first, last),
            _ => unreachable!("lunar table bounds are valid dates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn lunar(y: u16, m: u8, d: u8, leap: bool) -> LunarDate {
        LunarDate::new(y, m, d, leap).unwrap()
    }

    #[test]
    fn spring_festivals() {
        let conv = TableLunarConverter;
        assert_eq!(conv.to_lunar(date(1900, 1, 31)).unwrap(), lunar(1900, 1, 1, false));
        assert_eq!(conv.to_lunar(date(2020, 1, 25)).unwrap(), lunar(2020, 1, 1, false));
        assert_eq!(conv.to_lunar(date(2024, 2, 10)).unwrap(), lunar(2024, 1, 1, false));
        assert_eq!(conv.to_lunar(date(2025, 1, 29)).unwrap(), lunar(2025, 1, 1, false));
    }

    #[test]
    fn leap_months() {
        let conv = TableLunarConverter;
        assert_eq!(conv.to_lunar(date(2025, 8, 1)).unwrap(), lunar(2025, 6, 8, true));
        assert_eq!(conv.to_lunar(date(2023, 3, 22)).unwrap(), lunar(2023, 2, 1, true));
        assert_eq!(conv.to_lunar(date(2023, 4, 20)).unwrap(), lunar(2023, 3, 1, false));
        assert_eq!(conv.to_lunar(date(2033, 12, 22)).unwrap(), lunar(2033, 11, 1, true));
    }

    #[test]
    fn inverse_conversion() {
        let conv = TableLunarConverter;
        assert_eq!(conv.to_solar(lunar(2024, 8, 15, false)).unwrap(), date(2024, 9, 17));
        assert_eq!(conv.to_solar(lunar(2025, 6, 8, true)).unwrap(), date(2025, 8, 1));
        assert_eq!(conv.to_solar(lunar(1999, 11, 25, false)).unwrap(), date(2000, 1, 1));
        // 2024's twelfth month has only 29 days
        assert!(conv.to_solar(lunar(2024, 12, 30, false)).is_err());
        // 2024 has no leap month
        assert!(conv.to_solar(lunar(2024, 6, 1, true)).is_err());
    }

    #[test]
    fn year_length_matches_table() {
        let conv = TableLunarConverter;
        for year in [1900, 2020, 2023, 2024, 2100] {
            assert_eq!(conv.year_length(year).unwrap(), table::year_days(year).unwrap());
        }
        assert_eq!(conv.year_length(2023).unwrap(), 384);
        assert!(conv.year_length(1899).is_err());
    }

    #[test]
    fn new_years_eve() {
        let conv = TableLunarConverter;
        let eve_2023 = conv.new_years_eve(2023).unwrap();
        assert_eq!(eve_2023, lunar(2023, 12, 30, false));
        assert_eq!(conv.to_solar(eve_2023).unwrap(), date(2024, 2, 9));
        let eve_2024 = conv.new_years_eve(2024).unwrap();
        assert_eq!(conv.to_solar(eve_2024).unwrap(), date(2025, 1, 28));
    }

    #[test]
    fn out_of_range() {
        let conv = TableLunarConverter;
        let (first, last) = conv.supported_range();
        assert_eq!(first, date(1900, 1, 31));
        assert_eq!(last, date(2101, 1, 28));
        assert!(conv.to_lunar(date(1900, 1, 30)).unwrap_err().is_range());
        assert!(conv.to_lunar(date(2101, 1, 29)).unwrap_err().is_range());
        assert!(conv.to_lunar(last).is_ok());
        assert!(conv.leap_month(2101).unwrap_err().is_range());
        assert!(!conv.supports(date(1899, 12, 31)));
        assert!(conv.supports(date(2000, 1, 1)));
    }
}
