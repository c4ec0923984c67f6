//! Describe command for rendering events from JSON input.
//!
//! Input is either a JSON array of events or one JSON object per line.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use swim_core::{AgeGroupStyle, DescribeOptions, Event, EventData, GenderStyle, LabelStyle};

use crate::Config;

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// JSON file with events. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Gender rendering: code, mf, mw or bg.
    #[arg(long, value_name = "STYLE")]
    pub gender_style: Option<GenderStyle>,

    /// Age group rendering: full or abbr.
    #[arg(long, value_name = "STYLE")]
    pub age_style: Option<AgeGroupStyle>,

    /// Stroke rendering: abbr, common or full.
    #[arg(long, value_name = "STYLE")]
    pub stroke_style: Option<LabelStyle>,

    /// Append the course to each description.
    #[arg(long)]
    pub course: bool,
}

impl DescribeArgs {
    /// Applies command-line overrides on top of configured defaults.
    pub fn options(&self, defaults: DescribeOptions) -> DescribeOptions {
        DescribeOptions {
            gender: self.gender_style.unwrap_or(defaults.gender),
            age_group: self.age_style.unwrap_or(defaults.age_group),
            stroke: self.stroke_style.unwrap_or(defaults.stroke),
            course: self.course || defaults.course,
        }
    }
}

/// Parses events from a JSON array or JSON lines.
pub fn parse_events(input: &str) -> Result<Vec<Event>> {
    let records: Vec<EventData> = if input.trim_start().starts_with('[') {
        serde_json::from_str(input).context("failed to parse event array")?
    } else {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("failed to parse event on line {}", index + 1))
            })
            .collect::<Result<_>>()?
    };

    records
        .into_iter()
        .map(|data| Event::new(data).context("invalid event"))
        .collect()
}

pub fn run<R: Read, W: Write>(
    mut reader: R,
    writer: &mut W,
    args: &DescribeArgs,
    config: &Config,
) -> Result<()> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("failed to read events")?;

    let events = parse_events(&input)?;
    tracing::debug!(count = events.len(), "parsed events");

    let options = args.options(config.describe);
    for event in &events {
        writeln!(writer, "{}: {}", event.label(), event.describe(&options))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    const EVENTS: &str = r#"[
        {"number": 1, "distance": 100, "stroke": "Free", "gender": "m", "minAge": 0, "maxAge": 10},
        {"number": 2, "letter": "A", "distance": 200, "stroke": "IM", "gender": "f", "ageGroup": {"minAge": 11, "maxAge": 12}, "course": "SCY"},
        {"number": 3, "distance": 200, "stroke": "Medley Relay", "gender": "x", "min_age": 15, "is_relay": true}
    ]"#;

    fn default_args() -> DescribeArgs {
        DescribeArgs {
            input: None,
            gender_style: None,
            age_style: None,
            stroke_style: None,
            course: false,
        }
    }

    fn describe(input: &str, args: &DescribeArgs, config: &Config) -> Result<String> {
        let mut output = Vec::new();
        run(input.as_bytes(), &mut output, args, config)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn describe_uses_default_styles() {
        let output = describe(EVENTS, &default_args(), &Config::default()).unwrap();
        assert_snapshot!(output, @r"
        1: Boys 10 & Under 100 Free
        2A: Girls 11-12 200 IM
        3: Mixed 15 & Over 200 Medley Relay
        ");
    }

    #[test]
    fn describe_flags_override_config() {
        let mut config = Config::default();
        config.describe.gender = GenderStyle::MaleFemale;
        config.describe.stroke = LabelStyle::Full;

        let args = DescribeArgs {
            age_style: Some(AgeGroupStyle::Abbr),
            stroke_style: Some(LabelStyle::Abbr),
            course: true,
            ..default_args()
        };
        let output = describe(EVENTS, &args, &config).unwrap();
        assert_snapshot!(output, @r"
        1: Male 10u 100 FR
        2A: Female 11-12 200 IM (SCY)
        3: Mixed 15o 200 MR
        ");
    }

    #[test]
    fn describe_reads_json_lines() {
        let input = concat!(
            r#"{"number": 5, "distance": 50, "stroke": "BK", "gender": "f", "maxAge": 8}"#,
            "\n\n",
            r#"{"number": 6, "distance": 400, "stroke": "Freestyle Relay", "gender": "m", "isRelay": true}"#,
            "\n",
        );
        let output = describe(input, &default_args(), &Config::default()).unwrap();
        assert_snapshot!(output, @r"
        5: Girls 8 & Under 50 Back
        6: Boys Open 400 Free Relay
        ");
    }

    #[test]
    fn describe_reports_invalid_event() {
        let input = r#"{"number": 7, "letter": "B", "distance": 25.5, "stroke": "Free", "gender": "m"}"#;
        let err = describe(input, &default_args(), &Config::default()).unwrap_err();
        let messages: Vec<String> = err.chain().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            [
                "invalid event",
                "event 7B: invalid distance value: 25.5",
                "invalid distance value: 25.5",
            ]
        );
    }

    #[test]
    fn describe_reports_malformed_line() {
        let input = concat!(
            r#"{"number": 1, "distance": 100, "stroke": "Free", "gender": "m"}"#,
            "\nnot json\n",
        );
        let err = describe(input, &default_args(), &Config::default()).unwrap_err();
        assert_eq!(err.to_string(), "failed to parse event on line 2");
    }
}
