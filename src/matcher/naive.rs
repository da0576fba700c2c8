//! A simple matcher trying every pattern at every position.
//!
//! This matcher is used as a baseline in benchmarking and as a reference
//! in tests. Matching costs O(N * M) for a text of length N and M patterns.

use itertools::Itertools;

use crate::{InvalidPattern, Match, PatternID};

use super::PatternMatcher;

/// A matcher checking each pattern separately at every text position.
///
/// Matches are reported in the same order as [crate::Automaton::find_all]:
/// by increasing end position, then longest pattern first.
#[derive(Clone, Debug, Default)]
pub struct NaiveManyMatcher {
    patterns: Vec<String>,
}

impl NaiveManyMatcher {
    /// Create a matcher from a list of patterns.
    ///
    /// Duplicate patterns are kept once, with the ID of their first
    /// occurrence. Return an error if any of the patterns is empty.
    pub fn try_from_patterns<I>(patterns: I) -> Result<Self, InvalidPattern>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut unique = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                return Err(InvalidPattern::Empty);
            }
            if !unique.iter().any(|p: &String| p == pattern) {
                unique.push(pattern.to_string());
            }
        }
        Ok(Self { patterns: unique })
    }

    fn matches_ending_at<'a>(&'a self, text: &str, end: usize) -> Vec<Match<'a>> {
        let prefix = &text[..end];
        self.patterns
            .iter()
            .enumerate()
            .filter(|(_, p)| prefix.ends_with(p.as_str()))
            .map(|(i, p)| Match {
                offset: end - p.len(),
                pattern: p.as_str(),
                id: PatternID(i),
            })
            .sorted_by_key(|m| m.offset)
            .collect()
    }
}

impl PatternMatcher for NaiveManyMatcher {
    fn find_matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Match<'a>> + 'a {
        text.char_indices()
            .map(|(pos, symbol)| pos + symbol.len_utf8())
            .flat_map(move |end| self.matches_ending_at(text, end))
    }
}
