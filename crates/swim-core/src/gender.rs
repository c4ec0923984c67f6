//! Event gender with its alternate renderings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Competition gender of an event or swimmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

/// Which rendering of a [`Gender`] to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenderStyle {
    /// `m`, `f`, `x`
    #[serde(rename = "code")]
    Code,
    /// Male / Female
    #[serde(rename = "mf")]
    MaleFemale,
    /// Men / Women
    #[serde(rename = "mw")]
    MenWomen,
    /// Boys / Girls
    #[default]
    #[serde(rename = "bg")]
    BoysGirls,
}

impl GenderStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::MaleFemale => "mf",
            Self::MenWomen => "mw",
            Self::BoysGirls => "bg",
        }
    }
}

impl fmt::Display for GenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GenderStyle {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(Self::Code),
            "mf" => Ok(Self::MaleFemale),
            "mw" => Ok(Self::MenWomen),
            "bg" => Ok(Self::BoysGirls),
            _ => Err(ValueError::UnknownAlias {
                kind: "gender style",
                value: s.to_string(),
            }),
        }
    }
}

struct GenderEntry {
    gender: Gender,
    code: &'static str,
    mf: &'static str,
    mw: &'static str,
    bg: &'static str,
}

impl GenderEntry {
    fn matches(&self, alias: &str) -> bool {
        [self.code, self.mf, self.mw, self.bg]
            .iter()
            .any(|label| label.eq_ignore_ascii_case(alias))
    }
}

static GENDERS: [GenderEntry; 3] = [
    GenderEntry {
        gender: Gender::Male,
        code: "m",
        mf: "Male",
        mw: "Men",
        bg: "Boys",
    },
    GenderEntry {
        gender: Gender::Female,
        code: "f",
        mf: "Female",
        mw: "Women",
        bg: "Girls",
    },
    GenderEntry {
        gender: Gender::Mixed,
        code: "x",
        mf: "Mixed",
        mw: "Mixed",
        bg: "Mixed",
    },
];

impl Gender {
    fn entry(self) -> &'static GenderEntry {
        &GENDERS[self as usize]
    }

    /// Single-letter code: `m`, `f` or `x`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.entry().code
    }

    #[must_use]
    pub fn label(&self, style: GenderStyle) -> &'static str {
        let entry = self.entry();
        match style {
            GenderStyle::Code => entry.code,
            GenderStyle::MaleFemale => entry.mf,
            GenderStyle::MenWomen => entry.mw,
            GenderStyle::BoysGirls => entry.bg,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alias = s.trim();
        GENDERS
            .iter()
            .find(|entry| entry.matches(alias))
            .map(|entry| entry.gender)
            .ok_or_else(|| ValueError::UnknownAlias {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

impl Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
