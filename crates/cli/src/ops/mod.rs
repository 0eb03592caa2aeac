//! Reusable operations shared by commands
//!
//! `generate` and `check` run the same pipeline and differ only in what they
//! do with the result.

pub mod plan;
