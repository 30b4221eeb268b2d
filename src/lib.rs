//! pegleaf: leaf matching primitives for PEG-style parsers.
//!
//! The crate provides a bounded, position-tracking [`StringView`] over a
//! shared input string and two leaf expressions, [`Literal`] and
//! [`RegexMatch`], that consume a view and either produce a positioned
//! [`Parsed`] value or fail with a causally-linked [`MatchFailure`].
//! Sequencing, choice, and repetition are deliberately absent; they would be
//! layered on top of the [`Expression`] contract defined here.

pub mod errors;
pub mod expressions;
pub mod helpers;
pub mod view;

pub use crate::errors::{
    FailureCause, FrozenError, InvalidPattern, MatchFailure, OutOfBounds, PatternFailed, ViewError,
};
pub use crate::expressions::{Expression, Literal, Parsed, RegexMatch};
pub use crate::helpers::FreezableMap;
pub use crate::view::{PatternMatch, StringView};
