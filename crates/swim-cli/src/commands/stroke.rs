//! Stroke command for resolving stroke aliases.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use swim_core::Stroke;

#[derive(Debug, Args)]
pub struct StrokeArgs {
    /// Stroke name or abbreviation (e.g. Free, BK, Medley Relay).
    pub alias: String,

    /// Resolve as a relay stroke.
    #[arg(long)]
    pub relay: bool,
}

pub fn run<W: Write>(writer: &mut W, args: &StrokeArgs) -> Result<()> {
    let stroke = Stroke::for_event(&args.alias, args.relay)
        .with_context(|| format!("failed to resolve stroke {:?}", args.alias))?;

    writeln!(writer, "abbr: {}", stroke.abbr())?;
    writeln!(writer, "common: {}", stroke.common())?;
    writeln!(writer, "full: {}", stroke.full())?;
    writeln!(writer, "context: {}", stroke.context())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn resolve(alias: &str, relay: bool) -> Result<String> {
        let args = StrokeArgs {
            alias: alias.to_string(),
            relay,
        };
        let mut output = Vec::new();
        run(&mut output, &args)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn stroke_prints_all_labels() {
        assert_snapshot!(resolve("fly", false).unwrap(), @r"
        abbr: FL
        common: Fly
        full: Butterfly
        context: individual
        ");
    }

    #[test]
    fn stroke_relay_family_key() {
        assert_snapshot!(resolve("IM", true).unwrap(), @r"
        abbr: MR
        common: Medley Relay
        full: Medley Relay
        context: relay
        ");
    }

    #[test]
    fn stroke_reports_context_mismatch() {
        let err = resolve("Free Relay", false).unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            "failed to resolve stroke \"Free Relay\": 'Free Relay' is only valid for relay events, not individual events"
        );
    }
}
