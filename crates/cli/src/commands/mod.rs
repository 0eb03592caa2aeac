//! CLI commands

pub mod check;
pub mod completion;
pub mod generate;
pub mod graph;
