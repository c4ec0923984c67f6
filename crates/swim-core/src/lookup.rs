//! Label records shared by the closed lookup tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The three spellings of a lookup entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Labels {
    pub abbr: &'static str,
    pub common: &'static str,
    pub full: &'static str,
}

impl Labels {
    pub(crate) const fn new(abbr: &'static str, common: &'static str, full: &'static str) -> Self {
        Self { abbr, common, full }
    }

    /// Case-insensitive match against any of the three spellings.
    #[must_use]
    pub fn matches(&self, alias: &str) -> bool {
        [self.abbr, self.common, self.full]
            .iter()
            .any(|label| label.eq_ignore_ascii_case(alias))
    }

    #[must_use]
    pub const fn get(&self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Abbr => self.abbr,
            LabelStyle::Common => self.common,
            LabelStyle::Full => self.full,
        }
    }
}

/// Which spelling of a [`Labels`] record to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    Abbr,
    #[default]
    Common,
    Full,
}

impl LabelStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abbr => "abbr",
            Self::Common => "common",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for LabelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LabelStyle {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abbr" => Ok(Self::Abbr),
            "common" => Ok(Self::Common),
            "full" => Ok(Self::Full),
            _ => Err(ValueError::UnknownAlias {
                kind: "label style",
                value: s.to_string(),
            }),
        }
    }
}
