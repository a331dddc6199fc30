//! # gk-core
//!
//! Period-tracking data model for Goalkeeper.
//!
//! A [`Goal`] recurs on a [`Frequency`] (daily/weekly/monthly/yearly) and
//! records, per calendar period, whether it was completed. Calendar dates
//! map deterministically to [`PeriodKey`]s, so asking "did I run today?"
//! and "did I run this ISO week?" are both plain map lookups.
//!
//! ## Key components
//!
//! - [`PeriodKey`] — stable string identifier for one period instance,
//!   derived from a date and a frequency
//! - [`Goal`] — name, frequency, and a history of [`CompletionRecord`]s
//! - [`GoalCollection`] — insertion-ordered set of goals, unique on
//!   (name, frequency)
//! - [`service::set_goal_status`] — find-or-fail status update shared by
//!   the CLI and the web flows
//!
//! The crate performs no I/O; loading and saving the collection is the
//! caller's job (see `gk-store`).

pub mod collection;
pub mod error;
pub mod goal;
pub mod period;
pub mod service;

pub use collection::GoalCollection;
pub use error::GoalError;
pub use goal::{CompletionRecord, Goal, PeriodStatus};
pub use period::{Frequency, PeriodKey};
