// check.rs — `gk check`: mark a goal done/not done for a date.

use chrono::{Local, NaiveDate};

use gk_core::{service, Frequency};
use gk_store::GoalStore;

pub fn execute(
    store: &GoalStore,
    name: &str,
    frequency: Frequency,
    done: bool,
    date: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let mut collection = store.load()?;
    let goal = service::set_goal_status(&mut collection, name, frequency, done, date)?;
    let (goal_name, goal_frequency) = (goal.name.clone(), goal.frequency);
    store.save(&collection)?;

    println!(
        "Marked '{}' ({}) as {}.",
        goal_name,
        goal_frequency,
        if done { "done" } else { "not done" }
    );
    Ok(())
}
