//! The pattern matchers.
//!
//! The [`PatternMatcher`] trait is the main interface for pattern matching.
//! The following implementations of this trait are provided:
//!  - [`Automaton`], which matches all patterns at once in a single pass.
//!    The main matcher implementation of this crate.
//!  - [`NaiveManyMatcher`], matching one pattern at a time at every position.
//!    Mostly useful as a benchmark and for testing.

mod naive;

use derive_more::{From, Into};
use std::ops::Range;

pub use self::naive::NaiveManyMatcher;
use crate::Automaton;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identify patterns with IDs.
///
/// IDs are assigned in the order patterns are first inserted.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PatternID(pub usize);

/// Find pattern occurrences in texts.
pub trait PatternMatcher {
    /// Find all occurrences of all patterns in `text`.
    ///
    /// Overlapping occurrences are all reported.
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a;
}

impl PatternMatcher for Automaton {
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        self.find_all(text)
    }
}

/// A pattern occurrence in a text.
///
/// The match location is given by the byte offset at which the pattern
/// starts, so that `&text[offset..offset + pattern.len()]` equals `pattern`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Match<'a> {
    /// The byte offset of the first symbol of the occurrence.
    pub offset: usize,
    /// The matching pattern.
    pub pattern: &'a str,
    /// The matching pattern ID.
    pub id: PatternID,
}

impl<'a> Match<'a> {
    /// The byte offset right after the last symbol of the occurrence.
    pub fn end(&self) -> usize {
        self.offset + self.pattern.len()
    }

    /// The byte range of the occurrence in the text.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}
