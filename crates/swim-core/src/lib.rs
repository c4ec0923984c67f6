//! Core value types for competitive swimming results.
//!
//! This crate contains the validated building blocks that meet, entry and
//! result records are assembled from:
//! - Time / Score: lenient parsing and canonical rendering
//! - Stroke / Gender / Course: closed lookup tables resolved from aliases
//! - AgeGroup: boundary classification and labels
//! - Event: cross-field validation and configurable description

pub mod age_group;
pub mod course;
pub mod error;
pub mod event;
pub mod gender;
pub mod lookup;
mod numeric;
pub mod score;
pub mod stroke;
pub mod time;

pub use age_group::{AgeBracket, AgeGroup, AgeGroupStyle};
pub use course::Course;
pub use error::{ErrorKind, ValueError};
pub use event::{DescribeOptions, Event, EventData};
pub use gender::{Gender, GenderStyle};
pub use lookup::{LabelStyle, Labels};
pub use score::Score;
pub use stroke::{Stroke, StrokeContext, StrokeFamily};
pub use time::Time;
