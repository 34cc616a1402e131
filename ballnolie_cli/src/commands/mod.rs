//! CLI subcommand implementations.

pub mod averages;
pub mod players;
pub mod stats;
pub mod teams;
