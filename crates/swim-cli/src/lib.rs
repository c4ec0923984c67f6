//! Swimming results CLI library.
//!
//! This crate provides the CLI interface over `swim-core`.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
