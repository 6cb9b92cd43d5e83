//! # al-lunar
//!
//! Chinese lunisolar calendar support: the [`LunarDate`] value type, the
//! [`LunarConverter`] trait, and a table-driven converter covering lunar
//! years 1900–2100.
//!
//! ```
//! use al_lunar::{LunarConverter, TableLunarConverter};
//! use al_time::Date;
//!
//! let conv = TableLunarConverter;
//! let lunar = conv.to_lunar(Date::from_ymd(2024, 2, 10).unwrap()).unwrap();
//! assert_eq!(lunar.month_day_cn(), "正月初一");
//! assert_eq!(lunar.zodiac_en(), "Dragon");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `LunarConverter` trait and `TableLunarConverter`.
pub mod converter;

/// `LunarDate`: lunar year, month, day, and leap flag.
pub mod lunar_date;

/// Packed per-year month-length table.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use converter::{LunarConverter, TableLunarConverter};
pub use lunar_date::LunarDate;
