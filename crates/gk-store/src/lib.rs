//! # gk-store
//!
//! JSON file persistence for Goalkeeper.
//!
//! A [`GoalStore`] is an explicit handle to one goals file. Callers run
//! a load → mutate → save cycle per operation: the store never caches,
//! and the core model stays free of I/O. The file layout is a single
//! pretty-printed JSON document, `{"goals": [...]}` — easy to inspect
//! and edit by hand.
//!
//! [`default_data_file`] resolves the platform data directory
//! (`GK_DATA_DIR` overrides it) for hosts that want the standard
//! location; tests and embedders pass their own path instead.

pub mod error;
pub mod paths;
pub mod store;

pub use error::StoreError;
pub use paths::default_data_file;
pub use store::GoalStore;
