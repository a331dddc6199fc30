// collection.rs — GoalCollection: the full set of goals for one store.
//
// Vec-backed because insertion order is the listing order downstream;
// uniqueness on (name, frequency) is enforced at every entry point,
// including deserialization of a persisted file.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GoalError;
use crate::goal::Goal;
use crate::period::Frequency;

/// Insertion-ordered set of goals, unique on (name, frequency).
#[derive(Debug, Clone, Default, Serialize)]
pub struct GoalCollection {
    goals: Vec<Goal>,
}

impl GoalCollection {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a collection from already-constructed goals (e.g. a decoded
    /// store file), rejecting duplicate identities.
    pub fn from_goals(goals: Vec<Goal>) -> Result<Self, GoalError> {
        let mut collection = Self::new();
        for goal in goals {
            if collection.contains(&goal.name, goal.frequency) {
                return Err(GoalError::DuplicateGoal {
                    name: goal.name,
                    frequency: goal.frequency,
                });
            }
            collection.goals.push(goal);
        }
        Ok(collection)
    }

    /// Create and insert a new goal with an empty history.
    ///
    /// Fails with [`GoalError::DuplicateGoal`] if the identity pair is
    /// taken, or [`GoalError::EmptyName`] for a blank name; the
    /// collection is unchanged on failure.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        frequency: Frequency,
    ) -> Result<&mut Goal, GoalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GoalError::EmptyName);
        }
        if self.contains(&name, frequency) {
            return Err(GoalError::DuplicateGoal { name, frequency });
        }
        self.goals.push(Goal::new(name, frequency));
        // Just pushed, so last() is the new goal.
        Ok(self.goals.last_mut().expect("pushed goal"))
    }

    /// Exact-match lookup by identity pair.
    pub fn find(&self, name: &str, frequency: Frequency) -> Result<&Goal, GoalError> {
        self.goals
            .iter()
            .find(|g| g.matches(name, frequency))
            .ok_or_else(|| GoalError::GoalNotFound {
                name: name.to_string(),
                frequency,
            })
    }

    /// Exact-match lookup returning a mutable goal.
    pub fn find_mut(&mut self, name: &str, frequency: Frequency) -> Result<&mut Goal, GoalError> {
        self.goals
            .iter_mut()
            .find(|g| g.matches(name, frequency))
            .ok_or_else(|| GoalError::GoalNotFound {
                name: name.to_string(),
                frequency,
            })
    }

    pub fn contains(&self, name: &str, frequency: Frequency) -> bool {
        self.goals.iter().any(|g| g.matches(name, frequency))
    }

    /// All goals in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter()
    }

    /// All goals in insertion order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Goal> {
        self.goals.iter_mut()
    }

    /// Goals of one frequency, in insertion order.
    pub fn by_frequency(&self, frequency: Frequency) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(move |g| g.frequency == frequency)
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

// Hand-rolled so a persisted file with duplicate identities is rejected
// at decode time instead of entering the model.
impl<'de> Deserialize<'de> for GoalCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            goals: Vec<Goal>,
        }

        let raw = Raw::deserialize(deserializer)?;
        GoalCollection::from_goals(raw.goals).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_find() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();

        let goal = coll.find("Run", Frequency::Daily).unwrap();
        assert_eq!(goal.name, "Run");
        assert!(goal.history.is_empty());
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();

        let err = coll.add("Run", Frequency::Daily).unwrap_err();
        assert!(matches!(err, GoalError::DuplicateGoal { .. }));
        assert_eq!(coll.len(), 1);
    }

    #[test]
    fn same_name_different_frequency_is_a_different_goal() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();
        coll.add("Run", Frequency::Weekly).unwrap();
        assert_eq!(coll.len(), 2);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut coll = GoalCollection::new();
        assert!(matches!(
            coll.add("", Frequency::Daily),
            Err(GoalError::EmptyName)
        ));
        assert!(matches!(
            coll.add("   ", Frequency::Daily),
            Err(GoalError::EmptyName)
        ));
        assert!(coll.is_empty());
    }

    #[test]
    fn find_on_empty_collection_fails() {
        let coll = GoalCollection::new();
        let err = coll.find("Ghost", Frequency::Daily).unwrap_err();
        assert!(matches!(
            err,
            GoalError::GoalNotFound { name, frequency: Frequency::Daily } if name == "Ghost"
        ));
    }

    #[test]
    fn name_lookup_is_case_sensitive() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();
        assert!(coll.find("run", Frequency::Daily).is_err());
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut coll = GoalCollection::new();
        coll.add("Charlie", Frequency::Daily).unwrap();
        coll.add("Alpha", Frequency::Daily).unwrap();
        coll.add("Bravo", Frequency::Weekly).unwrap();

        let names: Vec<&str> = coll.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn by_frequency_filters_in_order() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();
        coll.add("Review", Frequency::Weekly).unwrap();
        coll.add("Stretch", Frequency::Daily).unwrap();

        let daily: Vec<&str> = coll
            .by_frequency(Frequency::Daily)
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(daily, ["Run", "Stretch"]);
    }

    #[test]
    fn serde_round_trip_keeps_goals_envelope() {
        let mut coll = GoalCollection::new();
        coll.add("Run", Frequency::Daily).unwrap();

        let json = serde_json::to_value(&coll).unwrap();
        assert!(json["goals"].is_array());

        let back: GoalCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back.len(), 1);
        assert!(back.find("Run", Frequency::Daily).is_ok());
    }

    #[test]
    fn deserializing_duplicates_is_an_error() {
        let json = r#"{"goals": [
            {"name": "Run", "frequency": "daily"},
            {"name": "Run", "frequency": "daily"}
        ]}"#;
        assert!(serde_json::from_str::<GoalCollection>(json).is_err());
    }

    #[test]
    fn deserializing_missing_goals_field_yields_empty() {
        let coll: GoalCollection = serde_json::from_str("{}").unwrap();
        assert!(coll.is_empty());
    }
}
