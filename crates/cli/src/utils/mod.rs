//! Shared helpers for locating the repository and its config file

pub mod config;
pub mod workspace;
