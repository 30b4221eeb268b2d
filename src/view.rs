//! Bounded, position-tracking views over a shared source string.
//!
//! A [`StringView`] is a cheap window descriptor: a borrowed source plus
//! byte bounds and the line/column coordinates of the window's start. It owns
//! no copy of the text, so callers advancing through input re-create views
//! freely instead of slicing out substrings per attempt.

use regex::Regex;

use crate::errors::{OutOfBounds, PatternFailed, ViewError};

/// A constrained view of a string.
///
/// The window is a hard visibility limit: nothing before `offset` and nothing
/// past `offset + length` is reachable through it. Offsets and lengths are
/// byte positions into the source. Views are immutable once constructed; the
/// line and column describe the start of the window and are carried verbatim
/// for diagnostics, with no recomputation from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringView<'a> {
    source: &'a str,
    offset: usize,
    length: usize,
    line: usize,
    column: usize,
}

impl<'a> StringView<'a> {
    /// Creates a view over `source` spanning `offset..offset + length`.
    ///
    /// Fails with [`ViewError::ExceedsSource`] when the window extends past
    /// the end of the source. A zero-length window positioned exactly at the
    /// end of the source is legal.
    pub fn new(
        source: &'a str,
        offset: usize,
        length: usize,
        line: usize,
        column: usize,
    ) -> Result<Self, ViewError> {
        let exceeds = ViewError::ExceedsSource {
            offset,
            length,
            source_len: source.len(),
        };
        let end = offset.checked_add(length).ok_or(exceeds)?;
        if end > source.len() {
            return Err(exceeds);
        }

        Ok(Self {
            source,
            offset,
            length,
            line,
            column,
        })
    }

    /// Line number of the start of this view.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column number of the start of this view.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte offset of the start of this view into the source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes visible through this view.
    pub fn length(&self) -> usize {
        self.length
    }

    /// `true` if the view exposes no bytes at all.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The full underlying source string, unclipped by the window.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Tests whether this view begins with `prefix`.
    ///
    /// A prefix longer than the window can never match, even when the
    /// underlying source continues with it past the window's end.
    pub fn starts_with(&self, prefix: &str) -> bool {
        if prefix.len() > self.length {
            return false;
        }

        self.source.as_bytes()[self.offset..self.offset + prefix.len()] == *prefix.as_bytes()
    }

    /// The character beginning at byte `index` into the view.
    ///
    /// Fails with [`OutOfBounds`] when `index >= length()` or when `index`
    /// does not fall on a UTF-8 character boundary. The absolute position in
    /// the source is `offset + index`.
    pub fn at(&self, index: usize) -> Result<char, OutOfBounds> {
        let out_of_bounds = OutOfBounds {
            index,
            length: self.length,
        };
        if index >= self.length {
            return Err(out_of_bounds);
        }

        self.source
            .get(self.offset + index..)
            .and_then(|rest| rest.chars().next())
            .ok_or(out_of_bounds)
    }

    /// Attempts to match an already-compiled pattern against this view.
    ///
    /// The pattern runs against the entire source string, searching from
    /// `offset`, so anchors and word boundaries resolve against the unbounded
    /// text. Acceptance is clipped to the window: with the found match
    /// spanning `[m, m + k)`, the call succeeds only when `m >= offset` and
    /// `m + k <= offset + length`. A zero-width match exactly at either edge
    /// of the window is accepted. If the engine finds no candidate, or its
    /// first candidate violates the bound, the call fails; it never retries
    /// deeper into the source.
    pub fn match_pattern(&self, pattern: &Regex) -> Result<PatternMatch<'a>, PatternFailed> {
        let caps = pattern
            .captures_at(self.source, self.offset)
            .ok_or_else(|| self.pattern_failed(pattern))?;

        let Some(whole) = caps.get(0) else {
            return Err(self.pattern_failed(pattern));
        };
        if whole.start() < self.offset || whole.end() > self.offset + self.length {
            return Err(self.pattern_failed(pattern));
        }

        Ok(PatternMatch {
            groups: caps.iter().map(|group| group.map(|m| m.as_str())).collect(),
        })
    }

    fn pattern_failed(&self, pattern: &Regex) -> PatternFailed {
        PatternFailed {
            pattern: pattern.as_str().to_string(),
            line: self.line,
            column: self.column,
        }
    }
}

/// A successful pattern match: the whole match plus its capture groups,
/// indexed by group number, as substrings borrowed from the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch<'a> {
    groups: Vec<Option<&'a str>>,
}

impl<'a> PatternMatch<'a> {
    /// The text of the whole match (group 0). Empty for a zero-width match.
    pub fn whole(&self) -> &'a str {
        self.groups.first().copied().flatten().unwrap_or("")
    }

    /// The text of capture group `index`, or `None` if the group did not
    /// participate in the match or does not exist.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.groups.get(index).copied().flatten()
    }

    /// Number of groups, counting the whole match as group 0.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
