// goal.rs — Goal: a recurring target and its per-period completion history.
//
// A goal's identity is the (name, frequency) pair — "Run" daily and
// "Run" weekly are two different goals. History is keyed by PeriodKey,
// so updates touch exactly one period and leave every other record
// untouched.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::period::{Frequency, PeriodKey};

/// The stored fact that a goal was (or was not) completed in one period.
///
/// Written whole in a single insert — never partially.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub done: bool,
    /// When the record was written, local time, whole seconds.
    pub updated_at: DateTime<Local>,
}

impl CompletionRecord {
    fn now(done: bool) -> Self {
        let now = Local::now();
        // Second precision: the sub-second part carries no meaning here.
        let updated_at = now.with_nanosecond(0).unwrap_or(now);
        Self { done, updated_at }
    }
}

/// Three-valued completion status for a period.
///
/// "Never recorded" is distinct from "recorded as not done" — the
/// presentation layers render all three, and `Unrecorded` must never
/// silently collapse into `NotDone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodStatus {
    Done,
    NotDone,
    Unrecorded,
}

impl PeriodStatus {
    fn from_record(record: Option<&CompletionRecord>) -> Self {
        match record {
            Some(r) if r.done => PeriodStatus::Done,
            Some(_) => PeriodStatus::NotDone,
            None => PeriodStatus::Unrecorded,
        }
    }

    pub fn is_recorded(&self) -> bool {
        !matches!(self, PeriodStatus::Unrecorded)
    }
}

/// A recurring goal and its completion history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Case-sensitive display name; half of the goal's identity.
    pub name: String,

    /// Recurrence cadence; the other half of the identity.
    pub frequency: Frequency,

    /// Completion records keyed by period. Empty means "never recorded".
    #[serde(default)]
    pub history: BTreeMap<PeriodKey, CompletionRecord>,
}

impl Goal {
    /// Create a goal with an empty history.
    pub fn new(name: impl Into<String>, frequency: Frequency) -> Self {
        Self {
            name: name.into(),
            frequency,
            history: BTreeMap::new(),
        }
    }

    /// Whether this goal is identified by the given (name, frequency) pair.
    pub fn matches(&self, name: &str, frequency: Frequency) -> bool {
        self.name == name && self.frequency == frequency
    }

    /// Completion status for the period containing `date`.
    pub fn status_for(&self, date: NaiveDate) -> PeriodStatus {
        let key = PeriodKey::for_date(date, self.frequency);
        PeriodStatus::from_record(self.history.get(&key))
    }

    /// Record completion for the period containing `date`.
    ///
    /// Replaces any prior record for that exact period with a fresh
    /// timestamp; records for all other periods are left untouched.
    pub fn set_status(&mut self, date: NaiveDate, done: bool) {
        let key = PeriodKey::for_date(date, self.frequency);
        self.history.insert(key, CompletionRecord::now(done));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_history_reads_unrecorded_not_false() {
        let goal = Goal::new("Run", Frequency::Daily);
        assert_eq!(goal.status_for(date(2024, 3, 7)), PeriodStatus::Unrecorded);
        assert!(!goal.status_for(date(2024, 3, 7)).is_recorded());
    }

    #[test]
    fn set_status_then_read_back() {
        let mut goal = Goal::new("Run", Frequency::Daily);
        goal.set_status(date(2024, 3, 7), true);
        assert_eq!(goal.status_for(date(2024, 3, 7)), PeriodStatus::Done);

        goal.set_status(date(2024, 3, 8), false);
        assert_eq!(goal.status_for(date(2024, 3, 8)), PeriodStatus::NotDone);
    }

    #[test]
    fn set_status_is_idempotent_per_period() {
        let mut goal = Goal::new("Run", Frequency::Daily);
        goal.set_status(date(2024, 3, 7), true);
        goal.set_status(date(2024, 3, 7), true);
        assert_eq!(goal.history.len(), 1);
        assert_eq!(goal.status_for(date(2024, 3, 7)), PeriodStatus::Done);

        // A third call flips only that record.
        goal.set_status(date(2024, 3, 7), false);
        assert_eq!(goal.history.len(), 1);
        assert_eq!(goal.status_for(date(2024, 3, 7)), PeriodStatus::NotDone);
    }

    #[test]
    fn set_status_leaves_other_periods_untouched() {
        let mut goal = Goal::new("Run", Frequency::Daily);
        goal.set_status(date(2024, 3, 6), true);
        let before = goal
            .history
            .get(&PeriodKey::for_date(date(2024, 3, 6), Frequency::Daily))
            .cloned()
            .unwrap();

        goal.set_status(date(2024, 3, 7), false);
        goal.set_status(date(2024, 3, 7), true);

        let after = goal
            .history
            .get(&PeriodKey::for_date(date(2024, 3, 6), Frequency::Daily))
            .cloned()
            .unwrap();
        assert_eq!(before, after);
        assert_eq!(goal.history.len(), 2);
    }

    #[test]
    fn weekly_goal_shares_status_across_the_week() {
        let mut goal = Goal::new("Review", Frequency::Weekly);
        // Thursday of ISO week 2024-W10.
        goal.set_status(date(2024, 3, 7), true);
        // Friday of the same ISO week.
        assert_eq!(goal.status_for(date(2024, 3, 8)), PeriodStatus::Done);
        // Monday of week 11 is a different period.
        assert_eq!(goal.status_for(date(2024, 3, 11)), PeriodStatus::Unrecorded);
    }

    #[test]
    fn monthly_goal_end_to_end() {
        let mut goal = Goal::new("Read", Frequency::Monthly);
        goal.set_status(date(2024, 3, 15), true);
        assert_eq!(goal.status_for(date(2024, 3, 20)), PeriodStatus::Done);
        assert_eq!(goal.status_for(date(2024, 4, 1)), PeriodStatus::Unrecorded);
    }

    #[test]
    fn serde_layout_matches_store_format() {
        let mut goal = Goal::new("Read", Frequency::Monthly);
        goal.set_status(date(2024, 3, 15), true);

        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["name"], "Read");
        assert_eq!(json["frequency"], "monthly");
        assert_eq!(json["history"]["2024-03"]["done"], true);
        assert!(json["history"]["2024-03"]["updated_at"].is_string());
    }

    #[test]
    fn goal_without_history_field_deserializes_empty() {
        let goal: Goal =
            serde_json::from_str(r#"{"name": "Run", "frequency": "daily"}"#).unwrap();
        assert!(goal.history.is_empty());
        assert_eq!(goal.frequency, Frequency::Daily);
    }
}
