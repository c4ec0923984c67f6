//! CLI subcommand implementations.

pub mod describe;
pub mod score;
pub mod sort;
pub mod stroke;
pub mod time;
