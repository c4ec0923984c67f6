//! Validation errors for swimming value types.

use std::fmt;

use thiserror::Error;

use crate::stroke::StrokeContext;

/// The two broad classes of construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input of an accepted type that does not match the required grammar or alias set.
    Format,
    /// Input that is not of an accepted type at all.
    Type,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format => f.write_str("format"),
            Self::Type => f.write_str("type"),
        }
    }
}

/// Errors raised while constructing a value from raw input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// Text or number that is not a valid race time.
    #[error("invalid time value: {input}")]
    InvalidTime { input: String },

    /// Text or number that is not a valid score.
    #[error("invalid score value: {input}")]
    InvalidScore { input: String },

    /// An identifier that matches no entry of a lookup table.
    #[error("'{value}' is not a valid {kind} identifier")]
    UnknownAlias { kind: &'static str, value: String },

    /// A stroke alias that exists, but only for the other relay context.
    #[error("'{value}' is only valid for {found} events, not {expected} events")]
    StrokeContextMismatch {
        value: String,
        expected: StrokeContext,
        found: StrokeContext,
    },

    /// Event distance that is not a positive integer.
    #[error("invalid distance value: {value}")]
    InvalidDistance { value: String },

    /// A field of an event failed validation.
    #[error("event {event}: {source}")]
    InvalidEvent {
        event: String,
        #[source]
        source: Box<ValueError>,
    },

    /// Dynamic input of a type the target cannot be built from.
    #[error("cannot build {target} from {found} input")]
    UnsupportedType {
        target: &'static str,
        found: &'static str,
    },
}

impl ValueError {
    /// Classifies the error as a format or type failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedType { .. } => ErrorKind::Type,
            Self::InvalidEvent { source, .. } => source.kind(),
            Self::InvalidTime { .. }
            | Self::InvalidScore { .. }
            | Self::UnknownAlias { .. }
            | Self::StrokeContextMismatch { .. }
            | Self::InvalidDistance { .. } => ErrorKind::Format,
        }
    }
}

/// Name of a JSON value's type, for type errors.
pub(crate) const fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
