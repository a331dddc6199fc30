// list.rs — `gk list`: goals grouped by frequency with today's status.

use chrono::Local;

use gk_core::{Frequency, PeriodStatus};
use gk_store::GoalStore;

pub fn execute(store: &GoalStore) -> anyhow::Result<()> {
    let collection = store.load()?;
    if collection.is_empty() {
        println!("No goals defined yet. Use 'gk add' to create one.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    println!("Current goals and today's status:");
    println!();

    for frequency in Frequency::ALL {
        let goals: Vec<_> = collection.by_frequency(frequency).collect();
        if goals.is_empty() {
            continue;
        }
        println!("[{} goals]", group_label(frequency));
        for goal in goals {
            println!("- {}: {}", goal.name, indicator(goal.status_for(today)));
        }
        println!();
    }

    Ok(())
}

fn group_label(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Daily => "Daily",
        Frequency::Weekly => "Weekly",
        Frequency::Monthly => "Monthly",
        Frequency::Yearly => "Yearly",
    }
}

fn indicator(status: PeriodStatus) -> &'static str {
    match status {
        PeriodStatus::Done => "✅ Done",
        PeriodStatus::NotDone => "❌ Not done",
        PeriodStatus::Unrecorded => "⏳ Pending",
    }
}
