// service.rs — find-or-fail status updates against a collection.
//
// Shared by the interactive reminder flow, the `check` command, and the
// web update endpoint, so all three surface the same GoalNotFound
// behavior. Persistence stays with the caller: load, mutate through
// here, save.

use chrono::NaiveDate;

use crate::collection::GoalCollection;
use crate::error::GoalError;
use crate::goal::Goal;
use crate::period::Frequency;

/// Record completion for one goal's period containing `date`.
///
/// Looks the goal up by its (name, frequency) identity and delegates to
/// [`Goal::set_status`]. On [`GoalError::GoalNotFound`] the collection
/// is exactly as it was — no partial writes. Returns the mutated goal
/// so the caller can report its new state.
pub fn set_goal_status<'a>(
    collection: &'a mut GoalCollection,
    name: &str,
    frequency: Frequency,
    done: bool,
    date: NaiveDate,
) -> Result<&'a Goal, GoalError> {
    let goal = collection.find_mut(name, frequency)?;
    goal.set_status(date, done);
    tracing::debug!(name, %frequency, done, %date, "recorded goal status");
    Ok(goal)
}
