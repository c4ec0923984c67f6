//! Race times with a lenient text grammar and a canonical rendering.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ValueError, json_type_name};
use crate::numeric::{fraction_hundredths, hundredths_from_f64, leading_integer_is_zero};

/// Everything after the optional minutes group: `[:]SS[.|:][HH]`.
static CLOCK_TAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:?([0-9]{1,2})[.:]?([0-9]{1,2})?$").unwrap());

const HUNDREDTHS_PER_MINUTE: u64 = 6000;
const HUNDREDTHS_PER_SECOND: u64 = 100;

/// Text that stands for "no recorded time".
pub const NO_TIME_TOKEN: &str = "NT";

/// A race time in minutes, seconds and hundredths, with a separate sign.
///
/// The magnitude is never negative; negative times only arise as differences
/// between two swims. A zero magnitude is the "no time" state, which renders
/// as `NT` and sorts after every recorded time.
///
/// Equality, ordering and hashing all go through [`Time::sort_key`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    negative: bool,
    minutes: u32,
    seconds: u8,
    hundredths: u8,
}

impl Time {
    /// The "no time" value.
    pub const NO_TIME: Self = Self {
        negative: false,
        minutes: 0,
        seconds: 0,
        hundredths: 0,
    };

    fn from_parts(negative: bool, minutes: u32, seconds: u8, hundredths: u8) -> Self {
        let mut time = Self {
            negative,
            minutes,
            seconds,
            hundredths,
        };
        // A signed zero is still no time.
        time.negative = negative && !time.is_no_time();
        time
    }

    /// Builds a time from a signed count of hundredths of a second.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "remainders are bounded by the minute length"
    )]
    pub fn from_hundredths(value: i64) -> Result<Self, ValueError> {
        let magnitude = value.unsigned_abs();
        let minutes = u32::try_from(magnitude / HUNDREDTHS_PER_MINUTE).map_err(|_| {
            ValueError::InvalidTime {
                input: value.to_string(),
            }
        })?;
        let rest = magnitude % HUNDREDTHS_PER_MINUTE;
        Ok(Self::from_parts(
            value < 0,
            minutes,
            (rest / HUNDREDTHS_PER_SECOND) as u8,
            (rest % HUNDREDTHS_PER_SECOND) as u8,
        ))
    }

    /// Builds a time from a number.
    ///
    /// Whole numbers count hundredths (`2937` is 29.37). Numbers with a
    /// fractional part count seconds (`29.37` is 29.37).
    pub fn from_number(value: f64) -> Result<Self, ValueError> {
        let hundredths = hundredths_from_f64(value).ok_or_else(|| ValueError::InvalidTime {
            input: value.to_string(),
        })?;
        Self::from_hundredths(hundredths)
    }

    /// Builds a time from dynamically typed input.
    ///
    /// Numbers and strings are parsed; `null` is no time.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValueError> {
        match value {
            serde_json::Value::Null => Ok(Self::NO_TIME),
            serde_json::Value::Number(n) => {
                if let Some(whole) = n.as_i64() {
                    Self::from_hundredths(whole)
                } else {
                    let float = n.as_f64().ok_or_else(|| ValueError::InvalidTime {
                        input: n.to_string(),
                    })?;
                    Self::from_number(float)
                }
            }
            serde_json::Value::String(s) => s.parse(),
            other => Err(ValueError::UnsupportedType {
                target: "time",
                found: json_type_name(other),
            }),
        }
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    #[must_use]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    #[must_use]
    pub const fn hundredths(&self) -> u8 {
        self.hundredths
    }

    /// Magnitude in hundredths of a second, ignoring the sign.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.minutes) * HUNDREDTHS_PER_MINUTE
            + u64::from(self.seconds) * HUNDREDTHS_PER_SECOND
            + u64::from(self.hundredths)
    }

    /// Magnitude in hundredths of a second with the sign applied.
    #[must_use]
    pub fn signed_value(&self) -> i64 {
        // At most u32::MAX minutes, which fits comfortably in an i64.
        let magnitude = i64::try_from(self.value()).unwrap_or(i64::MAX);
        if self.negative { -magnitude } else { magnitude }
    }

    /// True for the "no time" state.
    #[must_use]
    pub fn is_no_time(&self) -> bool {
        self.value() == 0
    }

    /// Key for ascending ordering. No time sorts after every recorded time.
    #[must_use]
    pub fn sort_key(&self) -> i64 {
        if self.is_no_time() {
            i64::MAX
        } else {
            self.signed_value()
        }
    }

    /// Signed difference `self - earlier`, or `None` if either side is no time.
    ///
    /// A negative result means `self` is faster.
    #[must_use]
    pub fn difference(&self, earlier: &Self) -> Option<Self> {
        if self.is_no_time() || earlier.is_no_time() {
            return None;
        }
        Self::from_hundredths(self.signed_value() - earlier.signed_value()).ok()
    }
}

/// Matches the clock grammar, returning `(minutes, seconds, hundredths)`.
///
/// A minutes group is only recognized when it is followed by a colon, by
/// exactly two digits and a dot, or by exactly two digits at the end. Longer
/// minute prefixes are tried first, so `"123"` reads as 1:23.
fn parse_clock(body: &str) -> Option<(u32, u8, u8)> {
    let leading_digits = body.bytes().take_while(u8::is_ascii_digit).count();

    for split in (0..=leading_digits).rev() {
        let rest = &body[split..];
        if !ends_minutes_group(rest) {
            continue;
        }
        if let Some((seconds, hundredths)) = parse_clock_tail(rest) {
            let minutes = match &body[..split] {
                "" => 0,
                digits => digits.parse().ok()?,
            };
            return Some((minutes, seconds, hundredths));
        }
    }

    parse_clock_tail(body).map(|(seconds, hundredths)| (0, seconds, hundredths))
}

fn ends_minutes_group(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    let two_digits = bytes.len() >= 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit();
    bytes.first() == Some(&b':') || (two_digits && (bytes.len() == 2 || bytes[2] == b'.'))
}

fn parse_clock_tail(rest: &str) -> Option<(u8, u8)> {
    let caps = CLOCK_TAIL_RE.captures(rest)?;
    let seconds = caps[1].parse().ok()?;
    let hundredths = match caps.get(2) {
        Some(m) => fraction_hundredths(m.as_str())?,
        None => 0,
    };
    Some((seconds, hundredths))
}

impl FromStr for Time {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, s),
        };

        if let Some((minutes, seconds, hundredths)) = parse_clock(body) {
            return Ok(Self::from_parts(negative, minutes, seconds, hundredths));
        }

        if s == NO_TIME_TOKEN || leading_integer_is_zero(s) {
            tracing::debug!(input = s, "time text coerced to no time");
            return Ok(Self::NO_TIME);
        }

        tracing::trace!(input = s, "rejected time text");
        Err(ValueError::InvalidTime {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_no_time() {
            return f.write_str(NO_TIME_TOKEN);
        }
        if self.negative {
            f.write_str("-")?;
        }
        if self.minutes > 0 {
            write!(f, "{}:{:02}", self.minutes, self.seconds)?;
        } else {
            write!(f, "{}", self.seconds)?;
        }
        write!(f, ".{:02}", self.hundredths)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl Hash for Time {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl TryFrom<i64> for Time {
    type Error = ValueError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_hundredths(value)
    }
}

impl TryFrom<f64> for Time {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_number(value)
    }
}

impl TryFrom<&serde_json::Value> for Time {
    type Error = ValueError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(serde::de::Error::custom)
    }
}
