//! Age groups and their boundary classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Lowest age any group can start at.
pub const MIN_AGE: i32 = 0;
/// Age at or above which a group has no upper limit.
pub const MAX_AGE: i32 = 100;

const fn default_max_age() -> i32 {
    MAX_AGE
}

/// An inclusive age range for an event.
///
/// `min_age <= max_age` is expected but not checked. Bounds at or beyond
/// the global limits, negative ones included, count as unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeGroup {
    #[serde(default, alias = "minAge")]
    min_age: i32,
    #[serde(default = "default_max_age", alias = "maxAge")]
    max_age: i32,
}

/// How an age group relates to the global age bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// Covers every age.
    Open,
    /// No lower limit.
    Under { max: i32 },
    /// No upper limit.
    Over { min: i32 },
    /// Bounded on both ends.
    Range { min: i32, max: i32 },
}

/// Which rendering of an [`AgeGroup`] to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroupStyle {
    /// `10 & Under`, `15 & Over`
    #[default]
    Full,
    /// `10u`, `15o`
    Abbr,
}

impl AgeGroupStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Abbr => "abbr",
        }
    }
}

impl fmt::Display for AgeGroupStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroupStyle {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "abbr" => Ok(Self::Abbr),
            _ => Err(ValueError::UnknownAlias {
                kind: "age group style",
                value: s.to_string(),
            }),
        }
    }
}

impl AgeGroup {
    #[must_use]
    pub const fn new(min_age: i32, max_age: i32) -> Self {
        Self { min_age, max_age }
    }

    /// The group covering every age.
    #[must_use]
    pub const fn open() -> Self {
        Self::new(MIN_AGE, MAX_AGE)
    }

    #[must_use]
    pub const fn min_age(&self) -> i32 {
        self.min_age
    }

    #[must_use]
    pub const fn max_age(&self) -> i32 {
        self.max_age
    }

    #[must_use]
    pub const fn bracket(&self) -> AgeBracket {
        let bounded_below = self.min_age > MIN_AGE;
        let bounded_above = self.max_age < MAX_AGE;
        match (bounded_below, bounded_above) {
            (true, true) => AgeBracket::Range {
                min: self.min_age,
                max: self.max_age,
            },
            (false, true) => AgeBracket::Under { max: self.max_age },
            (true, false) => AgeBracket::Over { min: self.min_age },
            (false, false) => AgeBracket::Open,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.bracket(), AgeBracket::Open)
    }

    /// Short form: `11-12`, `10u`, `15o`, `Open`.
    #[must_use]
    pub fn abbr(&self) -> String {
        self.label(AgeGroupStyle::Abbr)
    }

    #[must_use]
    pub fn label(&self, style: AgeGroupStyle) -> String {
        match (self.bracket(), style) {
            (AgeBracket::Open, _) => "Open".to_string(),
            (AgeBracket::Range { min, max }, _) => format!("{min}-{max}"),
            (AgeBracket::Under { max }, AgeGroupStyle::Full) => format!("{max} & Under"),
            (AgeBracket::Under { max }, AgeGroupStyle::Abbr) => format!("{max}u"),
            (AgeBracket::Over { min }, AgeGroupStyle::Full) => format!("{min} & Over"),
            (AgeBracket::Over { min }, AgeGroupStyle::Abbr) => format!("{min}o"),
        }
    }

    /// Whether a swimmer of `age` may enter. Unbounded ends accept any age.
    #[must_use]
    pub const fn contains(&self, age: i32) -> bool {
        let above_min = self.min_age <= MIN_AGE || age >= self.min_age;
        let below_max = self.max_age >= MAX_AGE || age <= self.max_age;
        above_min && below_max
    }
}

impl Default for AgeGroup {
    fn default() -> Self {
        Self::open()
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(AgeGroupStyle::Full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_table() {
        let cases = [
            ((0, 10), "10 & Under", "10u"),
            ((11, 12), "11-12", "11-12"),
            ((15, 200), "15 & Over", "15o"),
            ((15, 100), "15 & Over", "15o"),
            ((0, 100), "Open", "Open"),
            ((0, 250), "Open", "Open"),
            ((-1, 10), "10 & Under", "10u"),
            ((-5, 100), "Open", "Open"),
        ];
        for ((min, max), full, abbr) in cases {
            let group = AgeGroup::new(min, max);
            assert_eq!(group.to_string(), full, "({min}, {max})");
            assert_eq!(group.abbr(), abbr, "({min}, {max})");
        }
    }

    #[test]
    fn brackets() {
        assert_eq!(AgeGroup::new(0, 8).bracket(), AgeBracket::Under { max: 8 });
        assert_eq!(AgeGroup::new(13, 14).bracket(), AgeBracket::Range { min: 13, max: 14 });
        assert_eq!(AgeGroup::new(19, 109).bracket(), AgeBracket::Over { min: 19 });
        assert!(AgeGroup::default().is_open());
    }

    #[test]
    fn inverted_bounds_are_kept() {
        let group = AgeGroup::new(12, 11);
        assert_eq!(group.to_string(), "12-11");
        assert!(!group.contains(11));
    }

    #[test]
    fn contains_respects_open_ends() {
        let under = AgeGroup::new(0, 10);
        assert!(under.contains(5));
        assert!(under.contains(10));
        assert!(!under.contains(11));

        let over = AgeGroup::new(15, 100);
        assert!(over.contains(15));
        assert!(over.contains(120));
        assert!(!over.contains(14));

        assert!(AgeGroup::open().contains(42));

        let negative_min = AgeGroup::new(-1, 8);
        assert_eq!(negative_min.bracket(), AgeBracket::Under { max: 8 });
        assert!(negative_min.contains(0));
    }

    #[test]
    fn deserializes_either_key_style() {
        let group: AgeGroup = serde_json::from_str(r#"{"minAge": 11, "maxAge": 12}"#).unwrap();
        assert_eq!(group, AgeGroup::new(11, 12));

        let group: AgeGroup = serde_json::from_str(r#"{"min_age": 15}"#).unwrap();
        assert_eq!(group, AgeGroup::new(15, 100));
    }
}
