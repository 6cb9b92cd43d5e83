//! `RuleTable`: named holiday rules with override-by-name merging.

use std::collections::{BTreeMap, HashMap};

use al_core::errors::Result;
use tracing::debug;

use crate::rule::{HolidayRule, LunarRule, SolarRule};

/// Holiday name → parsed rule.
///
/// Built from built-in defaults with caller overrides laid on top: an
/// override whose name matches a default replaces that default's rule,
/// every other default is kept, and new names are added.  Iteration is in
/// name order, so resolution never depends on hash order.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<R> {
    rules: BTreeMap<String, R>,
}

/// Table of civil-calendar rules.
pub type SolarRuleTable = RuleTable<SolarRule>;

/// Table of lunar-calendar rules.
pub type LunarRuleTable = RuleTable<LunarRule>;

impl<R> Default for RuleTable<R> {
    fn default() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }
}

impl<R: HolidayRule> RuleTable<R> {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from `(name, token)` pairs.  A later pair replaces an
    /// earlier one of the same name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRule`](al_core::Error::InvalidRule) for the
    /// first malformed token.
    pub fn parse<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut table = Self::new();
        for (name, token) in pairs {
            table.insert(name, R::parse(name, token)?);
        }
        Ok(table)
    }

    /// Lay `overrides` over this table by name.
    ///
    /// Entries are applied in name order so the reported error for a map
    /// with several bad tokens is stable.  On error the table is left
    /// unchanged.
    pub fn overlay(&mut self, overrides: &HashMap<String, String>) -> Result<()> {
        let mut entries: Vec<(&String, &String)> = overrides.iter().collect();
        entries.sort();

        let parsed = entries
            .into_iter()
            .map(|(name, token)| Ok((name.clone(), R::parse(name, token)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut replaced = 0usize;
        for (name, rule) in parsed {
            if self.rules.insert(name, rule).is_some() {
                replaced += 1;
            }
        }
        debug!(
            overrides = overrides.len(),
            replaced,
            total = self.rules.len(),
            "applied holiday rule overrides"
        );
        Ok(())
    }

    /// `self` with `overrides` laid on top, if any.
    pub fn with_overrides(mut self, overrides: Option<&HashMap<String, String>>) -> Result<Self> {
        if let Some(overrides) = overrides {
            self.overlay(overrides)?;
        }
        Ok(self)
    }

    /// Insert or replace a single rule.
    pub fn insert(&mut self, name: impl Into<String>, rule: R) -> Option<R> {
        self.rules.insert(name.into(), rule)
    }

    /// Rule bound to `name`.
    pub fn get(&self, name: &str) -> Option<&R> {
        self.rules.get(name)
    }

    /// Return `true` if a rule is bound to `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `(name, rule)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &R)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// The table as `name → canonical token`, the shape callers pass in.
    pub fn to_tokens(&self) -> BTreeMap<String, String> {
        self.rules
            .iter()
            .map(|(name, rule)| (name.clone(), rule.to_string()))
            .collect()
    }
}

impl<R: HolidayRule> FromIterator<(String, R)> for RuleTable<R> {
    fn from_iter<I: IntoIterator<Item = (String, R)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_time::{Month, Weekday};

    fn overrides(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(n, t)| (n.to_string(), t.to_string()))
            .collect()
    }

    #[test]
    fn parse_pairs() {
        let table = SolarRuleTable::parse([("New Year", "01-01"), ("Labour Day", "5-1")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("Labour Day"),
            Some(&SolarRule::Fixed {
                month: Month::May,
                day: 1
            })
        );
    }

    #[test]
    fn overlay_replaces_same_name_and_keeps_others() {
        let mut table =
            SolarRuleTable::parse([("New Year", "01-01"), ("Mother's Day", "5-W-2-7")]).unwrap();
        table
            .overlay(&overrides(&[("Mother's Day", "5-W-3-7"), ("Pi Day", "03-14")]))
            .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get("Mother's Day"),
            Some(&SolarRule::NthWeekday {
                month: Month::May,
                ordinal: 3,
                weekday: Weekday::Sunday
            })
        );
        assert!(table.contains("New Year"));
        assert!(table.contains("Pi Day"));
    }

    #[test]
    fn failed_overlay_leaves_table_unchanged() {
        let mut table = LunarRuleTable::parse([("中秋节", "0815")]).unwrap();
        let before = table.clone();
        let err = table
            .overlay(&overrides(&[("元宵节", "0115"), ("坏", "1340")]))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(table, before);
    }

    #[test]
    fn tokens_are_canonical() {
        let table = LunarRuleTable::parse([("除夕", "chuxi"), ("端午节", "5-5")]).unwrap();
        let tokens = table.to_tokens();
        assert_eq!(tokens["除夕"], "CHUXI");
        assert_eq!(tokens["端午节"], "0505");
    }

    #[test]
    fn no_overrides_is_identity() {
        let table = SolarRuleTable::parse([("New Year", "01-01")]).unwrap();
        assert_eq!(table.clone().with_overrides(None).unwrap(), table);
    }
}
