// add.rs — `gk add`: create a goal and persist it.

use gk_core::Frequency;
use gk_store::GoalStore;

pub fn execute(store: &GoalStore, name: &str, frequency: Frequency) -> anyhow::Result<()> {
    let mut collection = store.load()?;
    collection.add(name, frequency)?;
    store.save(&collection)?;

    println!("Added {frequency} goal: {name}");
    Ok(())
}
