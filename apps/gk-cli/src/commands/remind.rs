// remind.rs — `gk remind`: walk every goal and ask for today's status.
//
// Enter (or EOF) skips a goal without touching its history; the file is
// saved once at the end of the run.

use std::io::{self, BufRead, Write};

use chrono::Local;

use gk_core::PeriodStatus;
use gk_store::GoalStore;

pub fn execute(store: &GoalStore) -> anyhow::Result<()> {
    let mut collection = store.load()?;
    if collection.is_empty() {
        println!("No goals to remind you about. Add one with 'gk add' first.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("Daily goal reminder. Press Enter to leave a goal unchanged.");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    for goal in collection.iter_mut() {
        let status_text = match goal.status_for(today) {
            PeriodStatus::Done => "already marked as done",
            PeriodStatus::NotDone => "currently marked as not done",
            PeriodStatus::Unrecorded => "not yet recorded",
        };
        let prompt = format!(
            "Did you finish '{}' ({}, {})? [y/n/Enter] ",
            goal.name, goal.frequency, status_text
        );
        if let Some(done) = prompt_yes_no(&mut input, &prompt)? {
            goal.set_status(today, done);
        }
    }

    store.save(&collection)?;
    println!("Reminder complete. Great job staying on track!");
    Ok(())
}

/// Ask a yes/no question; `None` means skip (empty line or EOF).
fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<Option<bool>> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match line.trim().to_lowercase().as_str() {
            "" => return Ok(None),
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => println!("Please enter 'y' for yes, 'n' for no, or press Enter to skip."),
        }
    }
}
