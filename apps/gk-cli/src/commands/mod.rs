// mod.rs — one module per `gk` subcommand.

pub mod add;
pub mod check;
pub mod list;
pub mod remind;
pub mod serve;
