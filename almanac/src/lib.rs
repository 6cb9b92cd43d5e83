//! # almanac
//!
//! Calendar generation with Chinese lunar dates and configurable holiday
//! rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `al-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! almanac = "0.1"
//! ```
//!
//! ```rust
//! use almanac::generate_year_calendar_with_holiday;
//!
//! let cal = generate_year_calendar_with_holiday(2024, None, None).unwrap();
//! assert_eq!(cal.len(), 366);
//! assert!(cal.day("2024-09-17").unwrap().has_holiday("中秋节"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and text helpers.
pub use al_core as core;

/// Dates, weekdays, months, and date sequences.
pub use al_time as time;

/// Lunar dates and civil ⇄ lunar conversion.
pub use al_lunar as lunar;

/// Holiday rule grammar, tables, and resolution.
pub use al_holidays as holidays;

/// Calendar generation.
pub use al_calendar as calendar;

pub use al_calendar::{
    generate_between, generate_calendar, generate_calendar_with_holiday,
    generate_calendar_with_local_holiday, generate_calendar_with_lunar, generate_month,
    generate_year, generate_year_calendar, generate_year_calendar_with_holiday,
    generate_year_calendar_with_local_holiday, generate_year_calendar_with_lunar, Calendar,
    CalendarOptions, Day, LunarFailurePolicy,
};
pub use al_core::{Error, Result};
pub use al_time::Date;
