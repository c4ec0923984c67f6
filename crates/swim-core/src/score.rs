//! Placing scores, stored in hundredths of a point.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ValueError, json_type_name};
use crate::numeric::{fraction_hundredths, hundredths_from_f64, leading_integer_is_zero};

static SCORE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2,3})\.?([0-9]{1,2})?$").unwrap());

/// Text that stands for "no score".
pub const NO_SCORE_TOKEN: &str = "NP";

/// Points awarded for a placing, in hundredths of a point (`12.5` is 1250).
///
/// Zero is the "no score" sentinel and renders as `NP`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    /// The "no score" value.
    pub const NONE: Self = Self(0);

    /// Builds a score from hundredths of a point.
    #[must_use]
    pub const fn from_hundredths(value: i64) -> Self {
        Self(value)
    }

    /// Builds a score from a number.
    ///
    /// Whole numbers are hundredths of a point; numbers with a fractional part
    /// are points and get scaled by 100.
    pub fn from_number(value: f64) -> Result<Self, ValueError> {
        hundredths_from_f64(value)
            .map(Self)
            .ok_or_else(|| ValueError::InvalidScore {
                input: value.to_string(),
            })
    }

    /// Builds a score from dynamically typed input (number or string).
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValueError> {
        match value {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(whole) => Ok(Self(whole)),
                None => Self::from_number(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => s.parse(),
            other => Err(ValueError::UnsupportedType {
                target: "score",
                found: json_type_name(other),
            }),
        }
    }

    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn sort_key(&self) -> i64 {
        self.0
    }

    /// True for the "no score" sentinel.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for Score {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(caps) = SCORE_RE.captures(s) {
            let invalid = || ValueError::InvalidScore {
                input: s.to_string(),
            };
            let whole: i64 = caps[1].parse().map_err(|_| invalid())?;
            let hundredths = match caps.get(2) {
                Some(m) => fraction_hundredths(m.as_str()).ok_or_else(invalid)?,
                None => 0,
            };
            return Ok(Self(whole * 100 + i64::from(hundredths)));
        }

        if s == NO_SCORE_TOKEN || leading_integer_is_zero(s) {
            tracing::debug!(input = s, "score text coerced to no score");
            return Ok(Self::NONE);
        }

        tracing::trace!(input = s, "rejected score text");
        Err(ValueError::InvalidScore {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str(NO_SCORE_TOKEN);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", magnitude / 100, magnitude % 100)
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl TryFrom<f64> for Score {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl TryFrom<&serde_json::Value> for Score {
    type Error = ValueError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl Serialize for Score {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
