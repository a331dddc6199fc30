// period.rs — Frequency and PeriodKey: mapping calendar dates to periods.
//
// Every goal recurs on one of four frequencies. A PeriodKey names one
// concrete instance of that cycle ("2024-03-07", "2024-W10", "2024-03",
// "2024") and is the key under which completion records are stored.
//
// The derivation is a pure function of (date, frequency): two dates in
// the same period always produce the identical key, two dates in
// different periods never collide.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::GoalError;

/// How often a goal recurs.
///
/// Closed set — any other string is rejected at parse time with
/// [`GoalError::InvalidFrequency`], so a constructed `Frequency` is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// All frequencies in canonical display order (daily first).
    pub const ALL: [Frequency; 4] = [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    /// The lowercase wire/storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(GoalError::InvalidFrequency(other.to_string())),
        }
    }
}

/// Stable string identifier for one period instance of a frequency.
///
/// Only [`PeriodKey::for_date`] (and deserialization of a persisted
/// history) produces these, so malformed keys cannot enter a goal's
/// history through any other path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeriodKey(String);

impl PeriodKey {
    /// Derive the period key for a calendar date under a frequency.
    ///
    /// - daily:   `2024-03-07`
    /// - weekly:  `2024-W10` (ISO 8601 week numbering — weeks start on
    ///   Monday, week 1 contains the year's first Thursday; the first
    ///   days of January can fall in the previous ISO year's last week)
    /// - monthly: `2024-03`
    /// - yearly:  `2024`
    pub fn for_date(date: NaiveDate, frequency: Frequency) -> Self {
        match frequency {
            Frequency::Daily => PeriodKey(date.format("%Y-%m-%d").to_string()),
            Frequency::Weekly => {
                let week = date.iso_week();
                PeriodKey(format!("{}-W{:02}", week.year(), week.week()))
            }
            Frequency::Monthly => PeriodKey(date.format("%Y-%m").to_string()),
            Frequency::Yearly => PeriodKey(date.format("%Y").to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
