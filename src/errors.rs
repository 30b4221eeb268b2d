//! Unified error taxonomy for the pegleaf matching primitives.
//!
//! Every failure mode in the crate lives here: view construction and access
//! errors, pattern-engine failures, expression-level match failures, and the
//! frozen-map guard. All types derive [`thiserror::Error`] and
//! [`miette::Diagnostic`], carry a stable diagnostic code, and participate in
//! the standard error chain so callers can wrap any of them in a
//! `miette::Report`.

use miette::Diagnostic;
use thiserror::Error;

use crate::view::StringView;

// ============================================================================
// VIEW ERRORS - construction and access
// ============================================================================

/// Construction-time failure for [`StringView::new`].
///
/// Of the view invariants, only the source bound is dynamically checkable in
/// this API: offsets, lengths, lines, and columns are `usize`, so the
/// negative cases are unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum ViewError {
    /// The requested window extends past the end of the source string.
    #[error(
        "a view of {length} bytes at offset {offset} extends past the end of a {source_len}-byte source"
    )]
    #[diagnostic(code(pegleaf::view::exceeds_source))]
    ExceedsSource {
        offset: usize,
        length: usize,
        source_len: usize,
    },
}

/// Index access outside a view's bounds.
///
/// Also raised when the index falls inside the view but not on a UTF-8
/// character boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("index {index} is out of bounds for a view of {length} bytes")]
#[diagnostic(code(pegleaf::view::out_of_bounds))]
pub struct OutOfBounds {
    pub index: usize,
    pub length: usize,
}

/// The pattern engine found no acceptable match within a view's bounds.
///
/// Either the engine found no candidate at all, or its first candidate at or
/// after the view's offset was not fully contained in the window. The search
/// is never retried deeper into the source.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("pattern /{pattern}/ has no match within the view at line {line}, column {column}")]
#[diagnostic(code(pegleaf::view::pattern_failed))]
pub struct PatternFailed {
    /// The pattern that failed, as originally written.
    pub pattern: String,
    /// Line of the start of the view the pattern ran against.
    pub line: usize,
    /// Column of the start of the view the pattern ran against.
    pub column: usize,
}

// ============================================================================
// EXPRESSION ERRORS - construction and matching
// ============================================================================

/// A pattern failed to compile when constructing a `RegexMatch` expression.
///
/// This is a construction-time failure, distinct from a match-time
/// [`PatternFailed`]: an expression holding an invalid pattern never exists.
#[derive(Debug, Clone, Error, Diagnostic)]
#[error("invalid pattern /{pattern}/")]
#[diagnostic(
    code(pegleaf::expression::invalid_pattern),
    help("the pattern must be valid syntax for the regex engine")
)]
pub struct InvalidPattern {
    /// The pattern that failed to compile.
    pub pattern: String,
    /// The engine's compilation error.
    #[source]
    pub source: regex::Error,
}

/// An expression failed to match a view.
///
/// Carries the failing expression's self-description and the coordinates of
/// the start of the view it was attempted against. Failures form a singly
/// linked chain through [`FailureCause`]: a leaf regex failure wraps the
/// engine-level [`PatternFailed`], and combinators layered on top of this
/// crate can wrap a lower expression's `MatchFailure` the same way.
#[derive(Debug, Error, Diagnostic)]
#[error("{expression} failed to match at line {line}, column {column}")]
#[diagnostic(code(pegleaf::expression::match_failed))]
pub struct MatchFailure {
    /// Description of the failing expression, from [`Expression::describe`].
    ///
    /// [`Expression::describe`]: crate::expressions::Expression::describe
    pub expression: String,
    /// Line of the start of the view the expression was attempted against.
    pub line: usize,
    /// Column of the start of the view the expression was attempted against.
    pub column: usize,
    /// The lower-level failure that triggered this one, if any.
    #[source]
    pub cause: Option<FailureCause>,
}

impl MatchFailure {
    /// A leaf failure with no underlying cause.
    pub fn leaf(expression: impl Into<String>, input: &StringView<'_>) -> Self {
        Self {
            expression: expression.into(),
            line: input.line(),
            column: input.column(),
            cause: None,
        }
    }

    /// A failure wrapping the lower-level failure that triggered it.
    pub fn caused_by(
        expression: impl Into<String>,
        input: &StringView<'_>,
        cause: impl Into<FailureCause>,
    ) -> Self {
        Self {
            expression: expression.into(),
            line: input.line(),
            column: input.column(),
            cause: Some(cause.into()),
        }
    }

    /// Walks the chain of expression-level causes down to the innermost
    /// failure, which carries the deepest diagnostic position.
    pub fn deepest(&self) -> &MatchFailure {
        match &self.cause {
            Some(FailureCause::Expression(inner)) => inner.deepest(),
            _ => self,
        }
    }
}

/// The cause slot of a [`MatchFailure`].
#[derive(Debug, Error, Diagnostic)]
pub enum FailureCause {
    /// An engine-level pattern failure (the typical cause for a regex leaf).
    #[error(transparent)]
    #[diagnostic(transparent)]
    Pattern(#[from] PatternFailed),
    /// A failure of a lower expression, for combinators built on this crate.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Expression(Box<MatchFailure>),
}

impl From<MatchFailure> for FailureCause {
    fn from(failure: MatchFailure) -> Self {
        Self::Expression(Box::new(failure))
    }
}

// ============================================================================
// HELPER ERRORS
// ============================================================================

/// A mutating operation was attempted on a frozen map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
#[error("the map has been frozen and no longer accepts modifications")]
#[diagnostic(code(pegleaf::helpers::frozen))]
pub struct FrozenError;

#[cfg(test)]
mod tests {
    use super::*;

    fn view(source: &str) -> StringView<'_> {
        StringView::new(source, 0, source.len(), 1, 1).unwrap()
    }

    #[test]
    fn leaf_failure_copies_view_coordinates() {
        let input = StringView::new("hello", 2, 3, 4, 7).unwrap();
        let failure = MatchFailure::leaf("literal \"x\"", &input);
        assert_eq!(failure.line, 4);
        assert_eq!(failure.column, 7);
        assert!(failure.cause.is_none());
    }

    #[test]
    fn caused_failure_exposes_source_chain() {
        let input = view("hello");
        let pattern = PatternFailed {
            pattern: "x+".into(),
            line: input.line(),
            column: input.column(),
        };
        let failure = MatchFailure::caused_by("pattern /x+/", &input, pattern);

        let source = std::error::Error::source(&failure).expect("cause is wired as source");
        assert!(source.to_string().contains("pattern /x+/"));
    }

    #[test]
    fn deepest_walks_expression_causes_only() {
        let input = view("hello");
        let engine = PatternFailed {
            pattern: "x".into(),
            line: 9,
            column: 9,
        };
        let inner = MatchFailure::caused_by("pattern /x/", &input, engine);
        let outer = MatchFailure::caused_by("outer", &input, inner);

        // The innermost MatchFailure, not the engine failure beneath it.
        assert_eq!(outer.deepest().expression, "pattern /x/");
    }

    #[test]
    fn deepest_of_a_leaf_is_itself() {
        let input = view("hello");
        let failure = MatchFailure::leaf("literal \"a\"", &input);
        assert_eq!(failure.deepest().expression, "literal \"a\"");
    }

    #[test]
    fn diagnostics_render_through_miette() {
        let input = view("hello");
        let failure = MatchFailure::leaf("literal \"nope\"", &input);
        let report = miette::Report::new(failure);
        let rendered = format!("{report:?}");
        assert!(rendered.contains("failed to match"));
    }
}
