//! Sort command for ordering seed or result times.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::time::parse_time;

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Times to sort.
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,
}

/// Prints the times fastest first. No-times keep their relative order at the end.
pub fn run<W: Write>(writer: &mut W, args: &SortArgs) -> Result<()> {
    let mut times = args
        .values
        .iter()
        .map(|raw| parse_time(raw, false))
        .collect::<Result<Vec<_>>>()?;
    times.sort_by_key(swim_core::Time::sort_key);

    let no_times = times.iter().filter(|time| time.is_no_time()).count();
    tracing::debug!(total = times.len(), no_times, "sorted times");

    for time in &times {
        writeln!(writer, "{time}")?;
    }
    Ok(())
}
