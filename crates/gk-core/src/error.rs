// error.rs — Error types for the goal-tracking model.

use thiserror::Error;

use crate::period::Frequency;

/// Errors that can occur while working with goals and collections.
///
/// Every error aborts only the requested operation and leaves the
/// collection untouched — there are no partial mutations to roll back.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A frequency string outside the closed daily/weekly/monthly/yearly set.
    #[error("unsupported frequency: {0:?}")]
    InvalidFrequency(String),

    /// An `add` targeted a (name, frequency) pair that already exists.
    #[error("goal '{name}' ({frequency}) already exists")]
    DuplicateGoal { name: String, frequency: Frequency },

    /// A lookup targeted a (name, frequency) pair absent from the collection.
    #[error("goal '{name}' ({frequency}) not found")]
    GoalNotFound { name: String, frequency: Frequency },

    /// A goal name must be a non-empty string.
    #[error("goal name must not be empty")]
    EmptyName,
}
