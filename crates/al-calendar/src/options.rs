//! `CalendarOptions`: what to put on each generated day.

use std::collections::HashMap;

use al_core::errors::Result;
use al_holidays::{chinese_rules, local_rules, HolidayLocale, LunarRuleTable, SolarRuleTable};

/// What to do with a day whose lunar date cannot be computed (it falls
/// outside the converter's table).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LunarFailurePolicy {
    /// Keep the day without a lunar date and mark it unavailable.  Lunar
    /// holidays do not apply to it; other days are unaffected.
    #[default]
    MarkUnavailable,
    /// Fail the whole generation with the converter's range error.
    Abort,
}

/// Generation options.
///
/// The default generates bare days: no lunar dates, no holidays.
///
/// ```
/// use al_calendar::{CalendarOptions, LunarFailurePolicy};
///
/// let opts = CalendarOptions::new()
///     .with_lunar(true)
///     .with_holiday(true)
///     .with_lunar_failure(LunarFailurePolicy::Abort);
/// assert!(opts.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalendarOptions {
    /// Attach a lunar date to every day.
    pub include_lunar: bool,
    /// Attach holiday names.  Lunar holidays additionally need
    /// `include_lunar`.
    pub include_holiday: bool,
    /// Civil-calendar rules (name → token) laid over the built-in table.
    pub local_rules: Option<HashMap<String, String>>,
    /// Lunar rules (name → token) laid over the built-in table.
    pub chinese_rules: Option<HashMap<String, String>>,
    /// Handling of days outside the lunar table.
    pub lunar_failure: LunarFailurePolicy,
    /// Language of the built-in holiday names.
    pub locale: HolidayLocale,
}

impl CalendarOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `include_lunar`.
    pub fn with_lunar(mut self, include: bool) -> Self {
        self.include_lunar = include;
        self
    }

    /// Set `include_holiday`.
    pub fn with_holiday(mut self, include: bool) -> Self {
        self.include_holiday = include;
        self
    }

    /// Override civil-calendar rules by name.
    pub fn with_local_rules(mut self, rules: HashMap<String, String>) -> Self {
        self.local_rules = Some(rules);
        self
    }

    /// Override lunar rules by name.
    pub fn with_chinese_rules(mut self, rules: HashMap<String, String>) -> Self {
        self.chinese_rules = Some(rules);
        self
    }

    /// Set the lunar failure policy.
    pub fn with_lunar_failure(mut self, policy: LunarFailurePolicy) -> Self {
        self.lunar_failure = policy;
        self
    }

    /// Set the locale of built-in holiday names.
    pub fn with_locale(mut self, locale: HolidayLocale) -> Self {
        self.locale = locale;
        self
    }

    /// Check that both rule maps parse.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRule`](al_core::Error::InvalidRule) for the
    /// first malformed token.
    pub fn validate(&self) -> Result<()> {
        self.rule_tables().map(|_| ())
    }

    /// Built-in tables for the locale with this value's overrides applied.
    pub fn rule_tables(&self) -> Result<(SolarRuleTable, LunarRuleTable)> {
        Ok((
            local_rules(self.locale, self.local_rules.as_ref())?,
            chinese_rules(self.locale, self.chinese_rules.as_ref())?,
        ))
    }
}
