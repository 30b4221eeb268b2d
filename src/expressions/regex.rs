//! The regular-expression leaf expression.
//!
//! Not part of the classic PEG repertoire, but it encapsulates the concept
//! of a character class and gives grammars a convenient way to define
//! lexical tokens without a separate lexer pass.

use regex::Regex;

use crate::errors::{InvalidPattern, MatchFailure};
use crate::expressions::{Expression, Parsed};
use crate::view::StringView;

/// Matches a compiled pattern searched from the start of a view, accepting
/// only matches whose whole span lies within the view's bounds.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    pattern: Regex,
}

impl RegexMatch {
    /// Compiles `pattern`, failing with [`InvalidPattern`] if the engine
    /// rejects its syntax. Validation happens here, once; parse calls never
    /// re-validate.
    pub fn new(pattern: &str) -> Result<Self, InvalidPattern> {
        let pattern = Regex::new(pattern).map_err(|source| InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// The pattern this expression matches, as originally written.
    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Expression for RegexMatch {
    type Output = String;

    fn parse(&self, input: &StringView<'_>) -> Result<Parsed<String>, MatchFailure> {
        // A zero-length window never matches; the engine is not consulted.
        if input.is_empty() {
            return Err(MatchFailure::leaf(self.describe(), input));
        }

        match input.match_pattern(&self.pattern) {
            // The reported position is the start of the view, not the start
            // of the match, even when the match begins later in the window.
            Ok(found) => Ok(Parsed::new(
                input.line(),
                input.column(),
                found.whole().to_string(),
            )),
            Err(cause) => Err(MatchFailure::caused_by(self.describe(), input, cause)),
        }
    }

    fn describe(&self) -> String {
        format!("pattern /{}/", self.pattern.as_str())
    }
}
