//! Competition events: validated identity and human-readable description.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::age_group::{AgeGroup, AgeGroupStyle};
use crate::course::Course;
use crate::error::ValueError;
use crate::gender::{Gender, GenderStyle};
use crate::lookup::LabelStyle;
use crate::stroke::Stroke;

/// Raw event fields as they arrive from external data.
///
/// Flat `min_age`/`max_age` take precedence over the nested `age_group`.
/// Missing bounds fall back to the open bounds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
    /// Kept untyped so non-integer distances surface as validation errors.
    pub distance: serde_json::Value,
    pub stroke: String,
    pub gender: String,
    #[serde(default, alias = "ageGroup", skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,
    #[serde(default, alias = "minAge", skip_serializing_if = "Option::is_none")]
    pub min_age: Option<i32>,
    #[serde(default, alias = "maxAge", skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
    #[serde(default, alias = "isRelay")]
    pub is_relay: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
}

/// Per-field verbosity for [`Event::describe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeOptions {
    pub gender: GenderStyle,
    pub age_group: AgeGroupStyle,
    pub stroke: LabelStyle,
    /// Append the course abbreviation when the event has one.
    pub course: bool,
}

/// A validated competition event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventData")]
pub struct Event {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    letter: Option<String>,
    distance: u32,
    stroke: Stroke,
    gender: Gender,
    age_group: AgeGroup,
    is_relay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    course: Option<Course>,
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked to be a whole number within u32 range"
)]
fn whole_number(value: f64) -> Option<u64> {
    (value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value)).then(|| value as u64)
}

fn parse_distance(value: &serde_json::Value) -> Result<u32, ValueError> {
    value
        .as_u64()
        .or_else(|| value.as_f64().and_then(whole_number))
        .filter(|&d| d > 0)
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(|| ValueError::InvalidDistance {
            value: value.to_string(),
        })
}

impl Event {
    /// Validates raw event data.
    ///
    /// Errors name the event by number and letter.
    pub fn new(data: EventData) -> Result<Self, ValueError> {
        let letter = data.letter.filter(|letter| !letter.trim().is_empty());
        let label = format!("{}{}", data.number, letter.as_deref().unwrap_or(""));
        let invalid = |source: ValueError| ValueError::InvalidEvent {
            event: label.clone(),
            source: Box::new(source),
        };

        let distance = parse_distance(&data.distance).map_err(invalid)?;
        let gender: Gender = data.gender.parse().map_err(invalid)?;
        let stroke = Stroke::for_event(&data.stroke, data.is_relay).map_err(invalid)?;
        let course = data
            .course
            .as_deref()
            .map(str::parse::<Course>)
            .transpose()
            .map_err(invalid)?;

        let nested = data.age_group.unwrap_or_default();
        let age_group = AgeGroup::new(
            data.min_age.unwrap_or(nested.min_age()),
            data.max_age.unwrap_or(nested.max_age()),
        );

        tracing::trace!(event = %label, "event validated");
        Ok(Self {
            id: data.id,
            number: data.number,
            letter,
            distance,
            stroke,
            gender,
            age_group,
            is_relay: data.is_relay,
            course,
        })
    }

    #[must_use]
    pub const fn id(&self) -> Option<i64> {
        self.id
    }

    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn letter(&self) -> Option<&str> {
        self.letter.as_deref()
    }

    #[must_use]
    pub const fn distance(&self) -> u32 {
        self.distance
    }

    #[must_use]
    pub const fn stroke(&self) -> Stroke {
        self.stroke
    }

    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    #[must_use]
    pub const fn is_relay(&self) -> bool {
        self.is_relay
    }

    #[must_use]
    pub const fn course(&self) -> Option<Course> {
        self.course
    }

    /// Event number with its letter, e.g. `12A`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}{}", self.number, self.letter().unwrap_or(""))
    }

    /// Renders the event, e.g. `Boys 10 & Under 100 Free`.
    #[must_use]
    pub fn describe(&self, options: &DescribeOptions) -> String {
        let mut description = format!(
            "{} {} {} {}",
            self.gender.label(options.gender),
            self.age_group.label(options.age_group),
            self.distance,
            self.stroke.label(options.stroke),
        );
        if let Some(course) = self.course.filter(|_| options.course) {
            description.push_str(" (");
            description.push_str(course.abbr());
            description.push(')');
        }
        description
    }
}

impl TryFrom<EventData> for Event {
    type Error = ValueError;

    fn try_from(data: EventData) -> Result<Self, Self::Error> {
        Self::new(data)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(&DescribeOptions::default()))
    }
}
