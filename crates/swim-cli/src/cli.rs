//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::describe::DescribeArgs;
use crate::commands::score::ScoreArgs;
use crate::commands::sort::SortArgs;
use crate::commands::stroke::StrokeArgs;
use crate::commands::time::TimeArgs;

/// Swimming results toolkit.
///
/// Normalizes race times and scores, resolves stroke names and describes
/// events the way meet programs print them.
#[derive(Debug, Parser)]
#[command(name = "swim", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize race times to their canonical form.
    Time(TimeArgs),

    /// Normalize placing scores.
    Score(ScoreArgs),

    /// Sort race times fastest first, with no-times last.
    Sort(SortArgs),

    /// Resolve a stroke name or abbreviation.
    Stroke(StrokeArgs),

    /// Describe events read as JSON.
    Describe(DescribeArgs),
}
