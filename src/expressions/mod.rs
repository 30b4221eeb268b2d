//! Leaf matching expressions and the contract they share.
//!
//! Expressions are really simple: all they do is attempt to match a view,
//! producing a positioned [`Parsed`] value or a [`MatchFailure`]. The two
//! leaves here, [`Literal`] and [`RegexMatch`], hold only their matching
//! parameters and carry no mutable state, so one instance can be reused
//! across any number of parse calls, concurrently included.

mod literal;
mod regex;

pub use literal::Literal;
pub use regex::RegexMatch;

use serde::{Deserialize, Serialize};

use crate::errors::MatchFailure;
use crate::view::StringView;

/// The basic contract for all expressions.
pub trait Expression {
    /// The value a successful parse produces. `String` for both leaves.
    type Output;

    /// Attempts to parse `input`.
    ///
    /// Succeeds with a [`Parsed`] value positioned at the start of the view,
    /// or fails with a [`MatchFailure`] carrying this expression's
    /// description and the same coordinates. Failures are surfaced
    /// immediately; no expression recovers or retries internally.
    fn parse(&self, input: &StringView<'_>) -> Result<Parsed<Self::Output>, MatchFailure>;

    /// A short description of this expression for failure reports.
    fn describe(&self) -> String;
}

/// A successful parse: the matched value plus the line and column it was
/// produced at.
///
/// The coordinates are copied out of the view at parse time; a `Parsed`
/// value holds no reference back to the view or the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parsed<V> {
    line: usize,
    column: usize,
    value: V,
}

impl<V> Parsed<V> {
    pub fn new(line: usize, column: usize, value: V) -> Self {
        Self {
            line,
            column,
            value,
        }
    }

    /// Line number of the parse.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column number of the parse.
    pub fn column(&self) -> usize {
        self.column
    }

    /// The value produced by the parse.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Consumes the result, returning the value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Maps the value while keeping the position, for combinators that
    /// post-process leaf output.
    pub fn map<W>(self, f: impl FnOnce(V) -> W) -> Parsed<W> {
        Parsed {
            line: self.line,
            column: self.column,
            value: f(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_exposes_its_parts() {
        let parsed = Parsed::new(3, 14, "pi".to_string());
        assert_eq!(parsed.line(), 3);
        assert_eq!(parsed.column(), 14);
        assert_eq!(parsed.value(), "pi");
        assert_eq!(parsed.into_value(), "pi");
    }

    #[test]
    fn parsed_map_keeps_the_position() {
        let parsed = Parsed::new(2, 5, "42".to_string()).map(|v| v.len());
        assert_eq!(parsed.line(), 2);
        assert_eq!(parsed.column(), 5);
        assert_eq!(*parsed.value(), 2);
    }

    #[test]
    fn parsed_round_trips_through_serde() {
        let parsed = Parsed::new(1, 2, "this".to_string());
        let json = serde_json::to_string(&parsed).unwrap();
        let back: Parsed<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, parsed);
    }
}
