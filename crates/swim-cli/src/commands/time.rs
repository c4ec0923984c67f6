//! Time command for normalizing race times.

use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;
use swim_core::Time;

#[derive(Debug, Args)]
pub struct TimeArgs {
    /// Times to normalize (e.g. 1:03.5, 10067, NT).
    #[arg(required = true, allow_hyphen_values = true)]
    pub values: Vec<String>,

    /// Read values as numbers: whole numbers are hundredths, fractions are seconds.
    #[arg(long)]
    pub numeric: bool,

    /// Output one JSON object per value.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TimeReport<'a> {
    input: &'a str,
    time: Time,
    negative: bool,
    minutes: u32,
    seconds: u8,
    hundredths: u8,
    value: u64,
}

/// Parses one command-line value as a time.
pub fn parse_time(raw: &str, numeric: bool) -> Result<Time> {
    if !numeric {
        return raw
            .parse()
            .with_context(|| format!("failed to parse time {raw:?}"));
    }

    let value: serde_json::Value =
        serde_json::from_str(raw).with_context(|| format!("not a number: {raw}"))?;
    if !value.is_number() {
        bail!("not a number: {raw}");
    }
    Time::from_json(&value).with_context(|| format!("failed to convert {raw} to a time"))
}

pub fn run<W: Write>(writer: &mut W, args: &TimeArgs) -> Result<()> {
    for raw in &args.values {
        let time = parse_time(raw, args.numeric)?;
        if args.json {
            let report = TimeReport {
                input: raw,
                time,
                negative: time.is_negative(),
                minutes: time.minutes(),
                seconds: time.seconds(),
                hundredths: time.hundredths(),
                value: time.value(),
            };
            writeln!(writer, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(writer, "{raw} => {time}")?;
        }
    }
    Ok(())
}
