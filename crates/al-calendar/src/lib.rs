//! # al-calendar
//!
//! The almanac calendar engine: generates a year → month → day tree for a
//! month, a year, or a date range, optionally annotating each day with its
//! Chinese lunar date and the names of the holidays falling on it.
//!
//! ```
//! use al_calendar::generate_calendar_with_holiday;
//!
//! let cal = generate_calendar_with_holiday(2024, 2, None, None).unwrap();
//! let day = cal.day("2024-02-10").unwrap();
//! assert_eq!(day.lunar_str().as_deref(), Some("正月初一"));
//! assert!(day.has_holiday("春节"));
//! assert!(cal.day("2024-02-14").unwrap().has_holiday("情人节"));
//! ```
//!
//! Holiday rules are plain `name → token` maps laid over built-in tables:
//!
//! ```
//! use std::collections::HashMap;
//! use al_calendar::generate_calendar_with_local_holiday;
//!
//! let rules = HashMap::from([("母亲节".to_string(), "5-W-1-7".to_string())]);
//! let cal = generate_calendar_with_local_holiday(2024, 5, Some(&rules)).unwrap();
//! assert!(cal.day("2024-05-05").unwrap().has_holiday("母亲节"));
//! assert!(cal.day("2024-05-01").unwrap().has_holiday("劳动节"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DayAnnotator`.
pub mod annotate;

/// `CalendarAssembler`.
pub mod assemble;

/// `Calendar`, `Year`, `Month`.
pub mod calendar;

/// `Day` and `LunarStatus`.
pub mod day;

/// Generation entry points.
pub mod generate;

/// `CalendarOptions` and `LunarFailurePolicy`.
pub mod options;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use annotate::DayAnnotator;
pub use assemble::{assemble, CalendarAssembler};
pub use calendar::{Calendar, Month, Year};
pub use day::{Day, LunarStatus};
pub use generate::{
    generate_between, generate_calendar, generate_calendar_with_holiday,
    generate_calendar_with_local_holiday, generate_calendar_with_lunar, generate_dates,
    generate_month, generate_year, generate_year_calendar, generate_year_calendar_with_holiday,
    generate_year_calendar_with_local_holiday, generate_year_calendar_with_lunar, RuleMap,
};
pub use options::{CalendarOptions, LunarFailurePolicy};
