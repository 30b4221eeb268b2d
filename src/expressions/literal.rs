//! The literal string expression.

use crate::errors::MatchFailure;
use crate::expressions::{Expression, Parsed};
use crate::view::StringView;

/// Matches an exact fixed string at the start of a view.
///
/// Construction never fails; the empty literal is legal and matches any
/// view, zero-length views included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    literal: String,
}

impl Literal {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// The text this expression matches.
    pub fn as_str(&self) -> &str {
        &self.literal
    }
}

impl Expression for Literal {
    type Output = String;

    fn parse(&self, input: &StringView<'_>) -> Result<Parsed<String>, MatchFailure> {
        if !input.starts_with(&self.literal) {
            return Err(MatchFailure::leaf(self.describe(), input));
        }

        Ok(Parsed::new(
            input.line(),
            input.column(),
            self.literal.clone(),
        ))
    }

    fn describe(&self) -> String {
        format!("literal {:?}", self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_a_prefix_of_the_view() {
        let input = StringView::new("this is a string", 0, 4, 1, 2).unwrap();
        let parsed = Literal::new("this").parse(&input).unwrap();
        assert_eq!(parsed.line(), 1);
        assert_eq!(parsed.column(), 2);
        assert_eq!(parsed.value(), "this");
    }

    #[test]
    fn fails_without_a_cause_when_the_prefix_differs() {
        let input = StringView::new("this is a string", 0, 4, 1, 2).unwrap();
        let failure = Literal::new("not this").parse(&input).unwrap_err();
        assert_eq!(failure.expression, "literal \"not this\"");
        assert_eq!(failure.line, 1);
        assert_eq!(failure.column, 2);
        assert!(failure.cause.is_none());
    }

    #[test]
    fn fails_when_the_literal_exceeds_the_window() {
        // The source continues with the literal, but the window hides it.
        let input = StringView::new("this is a string", 0, 4, 1, 1).unwrap();
        assert!(Literal::new("this ").parse(&input).is_err());
    }

    #[test]
    fn empty_literal_matches_anything() {
        let input = StringView::new("abc", 1, 0, 1, 2).unwrap();
        let parsed = Literal::new("").parse(&input).unwrap();
        assert_eq!(parsed.value(), "");
    }

    #[test]
    fn parse_is_idempotent() {
        let expression = Literal::new("ab");
        let input = StringView::new("abc", 0, 3, 1, 1).unwrap();
        let first = expression.parse(&input).unwrap();
        let second = expression.parse(&input).unwrap();
        assert_eq!(first, second);
    }
}
