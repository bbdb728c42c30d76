//! CLI subcommands.

pub mod call;
pub mod demo;
pub mod types;
