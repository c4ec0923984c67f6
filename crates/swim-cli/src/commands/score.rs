//! Score command for normalizing placing scores.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;
use swim_core::Score;

#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Scores to normalize (e.g. 16, 12.5, NP).
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Read values as numbers: whole numbers are hundredths, fractions are points.
    #[arg(long)]
    pub numeric: bool,
}

fn parse_score(raw: &str, numeric: bool) -> Result<Score> {
    if !numeric {
        return raw
            .parse()
            .with_context(|| format!("failed to parse score {raw:?}"));
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("not a number: {raw}"))?;
    if !value.is_number() {
        bail!("not a number: {raw}");
    }
    Score::from_json(&value).with_context(|| format!("failed to convert {raw} to a score"))
}

pub fn run<W: Write>(writer: &mut W, args: &ScoreArgs) -> Result<()> {
    for raw in &args.values {
        let score = parse_score(raw, args.numeric)?;
        writeln!(writer, "{raw} => {score}")?;
    }
    Ok(())
}
