//! Subcommand implementations.

pub mod list;
pub mod print;
pub mod show;
