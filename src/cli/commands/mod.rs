//! CLI subcommands

pub mod deepen;
pub mod play;
pub mod sample;
