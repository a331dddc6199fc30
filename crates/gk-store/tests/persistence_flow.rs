// persistence_flow.rs — end-to-end: add a goal, record status, reload.
//
// Exercises the full load → mutate → save cycle the CLI and web UI run
// per operation, across separate store handles.

use chrono::NaiveDate;
use tempfile::tempdir;

use gk_core::{service, Frequency, PeriodStatus};
use gk_store::GoalStore;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn monthly_goal_survives_reload_with_correct_period_semantics() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("goals.json");

    // Operation 1: add.
    {
        let store = GoalStore::new(&path);
        let mut coll = store.load().unwrap();
        coll.add("Read", Frequency::Monthly).unwrap();
        store.save(&coll).unwrap();
    }

    // Operation 2: mark done for a date in March.
    {
        let store = GoalStore::new(&path);
        let mut coll = store.load().unwrap();
        service::set_goal_status(&mut coll, "Read", Frequency::Monthly, true, date(2024, 3, 15))
            .unwrap();
        store.save(&coll).unwrap();
    }

    // Operation 3: read back with a fresh handle.
    {
        let store = GoalStore::new(&path);
        let coll = store.load().unwrap();
        let goal = coll.find("Read", Frequency::Monthly).unwrap();

        // Same month: done. Next month: a new, unrecorded period.
        assert_eq!(goal.status_for(date(2024, 3, 20)), PeriodStatus::Done);
        assert_eq!(goal.status_for(date(2024, 4, 1)), PeriodStatus::Unrecorded);
    }
}

#[test]
fn update_preserves_records_for_other_periods_across_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("goals.json");
    let store = GoalStore::new(&path);

    let mut coll = store.load().unwrap();
    coll.add("Run", Frequency::Daily).unwrap();
    service::set_goal_status(&mut coll, "Run", Frequency::Daily, true, date(2024, 3, 6)).unwrap();
    store.save(&coll).unwrap();

    let mut coll = store.load().unwrap();
    service::set_goal_status(&mut coll, "Run", Frequency::Daily, false, date(2024, 3, 7)).unwrap();
    store.save(&coll).unwrap();

    let coll = store.load().unwrap();
    let goal = coll.find("Run", Frequency::Daily).unwrap();
    assert_eq!(goal.status_for(date(2024, 3, 6)), PeriodStatus::Done);
    assert_eq!(goal.status_for(date(2024, 3, 7)), PeriodStatus::NotDone);
}
