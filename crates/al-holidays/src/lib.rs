//! # al-holidays
//!
//! Holiday rules for the almanac calendar engine: a small token grammar for
//! recurring civil and lunar dates, named rule tables with override-by-name
//! merging over built-in defaults, and per-year resolution to concrete
//! dates.
//!
//! ```
//! use al_holidays::{local_defaults, resolve_solar, HolidayLocale};
//! use al_time::Date;
//!
//! let table = local_defaults(HolidayLocale::English);
//! let matches = resolve_solar(&table, 2024).unwrap();
//! let mothers_day = Date::from_ymd(2024, 5, 12).unwrap();
//! assert!(matches[&mothers_day].contains("Mother's Day"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Built-in holiday tables and `HolidayLocale`.
pub mod defaults;

/// Per-year rule resolution.
pub mod resolve;

/// Rule grammar: `SolarRule`, `LunarRule`.
pub mod rule;

/// `RuleTable` and override merging.
pub mod table;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use defaults::{chinese_defaults, local_defaults, HolidayLocale, CHINESE_HOLIDAYS, LOCAL_HOLIDAYS};
pub use resolve::{resolve_lunar, resolve_solar, LunarMatches, SolarMatches};
pub use rule::{HolidayRule, LunarRule, SolarRule};
pub use table::{LunarRuleTable, RuleTable, SolarRuleTable};

use std::collections::HashMap;

use al_core::errors::Result;

/// Built-in local rules for `locale` with `overrides` laid on top.
///
/// # Errors
/// Returns [`Error::InvalidRule`](al_core::Error::InvalidRule) if any
/// override token is malformed.
pub fn local_rules(
    locale: HolidayLocale,
    overrides: Option<&HashMap<String, String>>,
) -> Result<SolarRuleTable> {
    local_defaults(locale).with_overrides(overrides)
}

/// Built-in lunar rules for `locale` with `overrides` laid on top.
///
/// # Errors
/// Returns [`Error::InvalidRule`](al_core::Error::InvalidRule) if any
/// override token is malformed.
pub fn chinese_rules(
    locale: HolidayLocale,
    overrides: Option<&HashMap<String, String>>,
) -> Result<LunarRuleTable> {
    chinese_defaults(locale).with_overrides(overrides)
}
