//! Pool course (yards or meters, short or long).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::lookup::{LabelStyle, Labels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    ShortCourseYards,
    ShortCourseMeters,
    LongCourseMeters,
}

struct CourseEntry {
    course: Course,
    code: &'static str,
    labels: Labels,
    unit: &'static str,
}

static COURSES: [CourseEntry; 3] = [
    CourseEntry {
        course: Course::ShortCourseYards,
        code: "Y",
        labels: Labels::new("SCY", "Yards", "Short Course Yards"),
        unit: "yards",
    },
    CourseEntry {
        course: Course::ShortCourseMeters,
        code: "S",
        labels: Labels::new("SCM", "SC Meters", "Short Course Meters"),
        unit: "meters",
    },
    CourseEntry {
        course: Course::LongCourseMeters,
        code: "L",
        labels: Labels::new("LCM", "LC Meters", "Long Course Meters"),
        unit: "meters",
    },
];

impl Course {
    fn entry(self) -> &'static CourseEntry {
        &COURSES[self as usize]
    }

    /// Single-letter course code (`Y`, `S`, `L`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        &self.entry().labels
    }

    #[must_use]
    pub fn abbr(&self) -> &'static str {
        self.labels().abbr
    }

    #[must_use]
    pub fn label(&self, style: LabelStyle) -> &'static str {
        self.labels().get(style)
    }

    /// Distance unit of the pool.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        self.entry().unit
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl FromStr for Course {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alias = s.trim();
        COURSES
            .iter()
            .find(|entry| entry.code.eq_ignore_ascii_case(alias) || entry.labels.matches(alias))
            .map(|entry| entry.course)
            .ok_or_else(|| ValueError::UnknownAlias {
                kind: "course",
                value: s.to_string(),
            })
    }
}

impl Serialize for Course {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.abbr())
    }
}

impl<'de> Deserialize<'de> for Course {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_codes_and_labels() {
        assert_eq!("Y".parse::<Course>().unwrap(), Course::ShortCourseYards);
        assert_eq!("scm".parse::<Course>().unwrap(), Course::ShortCourseMeters);
        assert_eq!("Long Course Meters".parse::<Course>().unwrap(), Course::LongCourseMeters);
        assert_eq!("yards".parse::<Course>().unwrap(), Course::ShortCourseYards);
    }

    #[test]
    fn rejects_unknown_course() {
        let err = "open water".parse::<Course>().unwrap_err();
        assert_eq!(err.to_string(), "'open water' is not a valid course identifier");
    }

    #[test]
    fn table_rows_follow_variant_order() {
        for (index, entry) in COURSES.iter().enumerate() {
            assert_eq!(entry.course as usize, index);
        }
    }

    #[test]
    fn units_and_labels() {
        assert_eq!(Course::ShortCourseYards.unit(), "yards");
        assert_eq!(Course::LongCourseMeters.unit(), "meters");
        assert_eq!(Course::LongCourseMeters.code(), "L");
        assert_eq!(Course::ShortCourseMeters.label(LabelStyle::Full), "Short Course Meters");
    }

    #[test]
    fn serde_uses_abbreviation() {
        assert_eq!(serde_json::to_string(&Course::LongCourseMeters).unwrap(), "\"LCM\"");
        let parsed: Course = serde_json::from_str("\"S\"").unwrap();
        assert_eq!(parsed, Course::ShortCourseMeters);
    }
}
