//! Strokes, resolved from free-form aliases under an individual or relay context.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::lookup::{LabelStyle, Labels};

/// Stroke family, independent of relay context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeFamily {
    Back,
    Breast,
    Fly,
    Free,
    Medley,
}

/// Whether a stroke is swum individually or as a relay leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeContext {
    #[default]
    Individual,
    Relay,
}

impl StrokeContext {
    #[must_use]
    pub const fn from_relay(is_relay: bool) -> Self {
        if is_relay { Self::Relay } else { Self::Individual }
    }

    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Individual => Self::Relay,
            Self::Relay => Self::Individual,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Relay => "relay",
        }
    }
}

impl fmt::Display for StrokeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct StrokeEntry {
    family: StrokeFamily,
    key: &'static str,
    individual: Labels,
    relay: Labels,
}

impl StrokeEntry {
    const fn labels(&self, context: StrokeContext) -> &Labels {
        match context {
            StrokeContext::Individual => &self.individual,
            StrokeContext::Relay => &self.relay,
        }
    }
}

static STROKES: [StrokeEntry; 5] = [
    StrokeEntry {
        family: StrokeFamily::Back,
        key: "BK",
        individual: Labels::new("BK", "Back", "Backstroke"),
        relay: Labels::new("BKR", "Back Relay", "Backstroke Relay"),
    },
    StrokeEntry {
        family: StrokeFamily::Breast,
        key: "BR",
        individual: Labels::new("BR", "Breast", "Breaststroke"),
        relay: Labels::new("BRR", "Breast Relay", "Breaststroke Relay"),
    },
    StrokeEntry {
        family: StrokeFamily::Fly,
        key: "FL",
        individual: Labels::new("FL", "Fly", "Butterfly"),
        relay: Labels::new("FLR", "Fly Relay", "Butterfly Relay"),
    },
    StrokeEntry {
        family: StrokeFamily::Free,
        key: "FR",
        individual: Labels::new("FR", "Free", "Freestyle"),
        relay: Labels::new("FRR", "Free Relay", "Freestyle Relay"),
    },
    StrokeEntry {
        family: StrokeFamily::Medley,
        key: "IM",
        individual: Labels::new("IM", "IM", "Individual Medley"),
        relay: Labels::new("MR", "Medley Relay", "Medley Relay"),
    },
];

fn entry(family: StrokeFamily) -> &'static StrokeEntry {
    // Rows follow `StrokeFamily` declaration order.
    &STROKES[family as usize]
}

/// A stroke family bound to an individual or relay context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stroke {
    family: StrokeFamily,
    context: StrokeContext,
}

impl Stroke {
    /// Resolves an alias under the given context.
    ///
    /// A family key (`BK`, `BR`, `FL`, `FR`, `IM`) selects that family directly.
    /// Otherwise the aliases of the requested context are searched in table
    /// order. An alias that only exists in the other context is reported as a
    /// context mismatch rather than as unknown.
    pub fn resolve(alias: &str, context: StrokeContext) -> Result<Self, ValueError> {
        let alias = alias.trim();

        if let Some(entry) = STROKES.iter().find(|e| e.key.eq_ignore_ascii_case(alias)) {
            return Ok(Self {
                family: entry.family,
                context,
            });
        }

        if let Some(entry) = STROKES.iter().find(|e| e.labels(context).matches(alias)) {
            return Ok(Self {
                family: entry.family,
                context,
            });
        }

        let found = context.opposite();
        if STROKES.iter().any(|e| e.labels(found).matches(alias)) {
            return Err(ValueError::StrokeContextMismatch {
                value: alias.to_string(),
                expected: context,
                found,
            });
        }

        Err(ValueError::UnknownAlias {
            kind: "stroke",
            value: alias.to_string(),
        })
    }

    /// Resolves an alias for an event with the given relay flag.
    pub fn for_event(alias: &str, is_relay: bool) -> Result<Self, ValueError> {
        Self::resolve(alias, StrokeContext::from_relay(is_relay))
    }

    /// The same family under another context, looked up by family key.
    #[must_use]
    pub const fn in_context(self, context: StrokeContext) -> Self {
        Self {
            family: self.family,
            context,
        }
    }

    #[must_use]
    pub const fn family(&self) -> StrokeFamily {
        self.family
    }

    #[must_use]
    pub const fn context(&self) -> StrokeContext {
        self.context
    }

    #[must_use]
    pub const fn is_relay(&self) -> bool {
        matches!(self.context, StrokeContext::Relay)
    }

    /// The family key shared by both contexts.
    #[must_use]
    pub fn key(&self) -> &'static str {
        entry(self.family).key
    }

    #[must_use]
    pub fn labels(&self) -> &'static Labels {
        entry(self.family).labels(self.context)
    }

    #[must_use]
    pub fn abbr(&self) -> &'static str {
        self.labels().abbr
    }

    #[must_use]
    pub fn common(&self) -> &'static str {
        self.labels().common
    }

    #[must_use]
    pub fn full(&self) -> &'static str {
        self.labels().full
    }

    #[must_use]
    pub fn label(&self, style: LabelStyle) -> &'static str {
        self.labels().get(style)
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.common())
    }
}

impl Serialize for Stroke {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.abbr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    #[test]
    fn resolves_every_individual_spelling() {
        for alias in ["FR", "fr", "Free", "FREESTYLE"] {
            let stroke = Stroke::resolve(alias, StrokeContext::Individual).unwrap();
            assert_eq!(stroke.family(), StrokeFamily::Free);
            assert_eq!(stroke.abbr(), "FR");
            assert_eq!(stroke.common(), "Free");
            assert_eq!(stroke.full(), "Freestyle");
        }
    }

    #[test]
    fn resolves_relay_spellings() {
        let stroke = Stroke::resolve("medley relay", StrokeContext::Relay).unwrap();
        assert_eq!(stroke.family(), StrokeFamily::Medley);
        assert_eq!(stroke.abbr(), "MR");
        assert!(stroke.is_relay());

        let stroke = Stroke::for_event("Freestyle Relay", true).unwrap();
        assert_eq!(stroke.family(), StrokeFamily::Free);
        assert_eq!(stroke.to_string(), "Free Relay");
    }

    #[test]
    fn family_key_selects_requested_context() {
        let stroke = Stroke::resolve("IM", StrokeContext::Relay).unwrap();
        assert_eq!(stroke.common(), "Medley Relay");

        let stroke = Stroke::resolve("im", StrokeContext::Individual).unwrap();
        assert_eq!(stroke.full(), "Individual Medley");
    }

    #[test]
    fn relay_alias_on_individual_event_is_a_context_mismatch() {
        let err = Stroke::for_event("Medley Relay", false).unwrap_err();
        assert_eq!(
            err,
            ValueError::StrokeContextMismatch {
                value: "Medley Relay".to_string(),
                expected: StrokeContext::Individual,
                found: StrokeContext::Relay,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn individual_alias_on_relay_event_is_a_context_mismatch() {
        let err = Stroke::for_event("Butterfly", true).unwrap_err();
        assert!(matches!(
            err,
            ValueError::StrokeContextMismatch {
                expected: StrokeContext::Relay,
                found: StrokeContext::Individual,
                ..
            }
        ));
    }

    #[test]
    fn unknown_alias_is_distinct_from_mismatch() {
        let err = Stroke::for_event("Sidestroke", false).unwrap_err();
        assert_eq!(err.to_string(), "'Sidestroke' is not a valid stroke identifier");
    }

    #[test]
    fn in_context_keeps_family() {
        let free = Stroke::for_event("Free", false).unwrap();
        let relay = free.in_context(StrokeContext::Relay);
        assert_eq!(relay.abbr(), "FRR");
        assert_eq!(relay.key(), "FR");
        assert_eq!(relay.in_context(StrokeContext::Individual), free);
    }

    #[test]
    fn table_rows_follow_family_order() {
        for (index, entry) in STROKES.iter().enumerate() {
            assert_eq!(entry.family as usize, index);
        }
    }

    #[test]
    fn label_styles() {
        let stroke = Stroke::for_event("BK", false).unwrap();
        assert_eq!(stroke.label(LabelStyle::Abbr), "BK");
        assert_eq!(stroke.label(LabelStyle::Common), "Back");
        assert_eq!(stroke.label(LabelStyle::Full), "Backstroke");
    }

    #[test]
    fn serializes_as_abbreviation() {
        let stroke = Stroke::for_event("Medley Relay", true).unwrap();
        assert_eq!(serde_json::to_string(&stroke).unwrap(), "\"MR\"");
    }
}
