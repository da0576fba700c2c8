//! Construction of Aho-Corasick automata.
//!
//! Building happens in two phases. Patterns are first inserted one by one
//! into a prefix trie, in which every state represents a prefix of at least
//! one pattern. Compiling the trie then adds a failure link to every state
//! but the root, pointing to the state of the longest proper suffix of its
//! prefix that is itself in the trie.
//!
//! Consider the patterns `he`, `she`, `his` and `hers`. Their trie is shown
//! below, where states are numbered in creation order and marked with an
//! asterisk (`*`) if a pattern ends there.
//!
//! ```text
//!      h - S1 - e - S2* - r - S8 - s - S9*
//!     /      \
//!    /        i - S6 - s - S7*
//!   /
//! S0 - s - S3 - h - S4 - e - S5*
//! ```
//!
//! The failure link of S5 (`she`) is S2 (`he`), that of S7 (`his`) and S9
//! (`hers`) is S3 (`s`) and that of S4 (`sh`) is S1 (`h`). All other states
//! fail back to the root. Because `he` is a suffix of `she`, reaching S5 must
//! report both patterns: compiling also copies the outputs of every failure
//! state into the state that fails to it.
//!
//! Failure links are computed breadth first. The failure link of a child
//! `v` of `r` on symbol `c` is found by following failure links from `r`
//! until reaching a state with a transition on `c`; the target of that
//! transition is the failure state of `v`. Every state on that walk is
//! strictly shallower than `v`, hence its failure link is already known.

use std::collections::VecDeque;

use itertools::Itertools;
use thiserror::Error;

use crate::PatternID;

use super::{Automaton, State, StateID};

/// Errors that occur when inserting patterns.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidPattern {
    /// The empty string cannot be a pattern.
    #[error("Cannot insert an empty pattern")]
    Empty,
}

/// Configuration for building an automaton
///
/// Only affects how patterns are read from external sources (see
/// [AutomatonBuilder::read_patterns]); patterns passed to
/// [AutomatonBuilder::insert] directly are always validated the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Skip blank lines when reading patterns, instead of rejecting them as
    /// empty patterns.
    pub skip_blank_lines: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            skip_blank_lines: true,
        }
    }
}

/// Create automata from lists of patterns.
///
/// The builder owns the prefix trie while patterns are inserted. It is
/// consumed by [AutomatonBuilder::compile], so that no pattern can be added
/// to an automaton whose failure links have been computed.
#[derive(Clone, Default)]
pub struct AutomatonBuilder {
    /// The automaton being built, without failure links
    matcher: Automaton,
    config: BuildConfig,
}

impl AutomatonBuilder {
    /// Construct an empty automaton builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty automaton builder with a custom configuration.
    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            matcher: Automaton::new(),
            config,
        }
    }

    /// Construct an automaton builder from a list of patterns.
    ///
    /// Return an error if any of the patterns is empty.
    pub fn try_from_patterns<I>(patterns: I) -> Result<Self, InvalidPattern>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        patterns
            .into_iter()
            .try_fold(Self::new(), |mut builder, pattern| {
                builder.insert(pattern.as_ref())?;
                Ok(builder)
            })
    }

    /// The configuration of the builder.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Add a pattern to the trie.
    ///
    /// Walks the trie from the root, following the existing transitions and
    /// creating new states for the symbols that have none. The state reached
    /// after the last symbol reports the pattern.
    ///
    /// Inserting a string that was already inserted is a no-op and returns
    /// the ID it was first given.
    pub fn insert(&mut self, pattern: &str) -> Result<PatternID, InvalidPattern> {
        if pattern.is_empty() {
            return Err(InvalidPattern::Empty);
        }

        let mut id = StateID::ROOT;
        for symbol in pattern.chars() {
            id = match self.matcher.state(id).next_state(symbol) {
                Some(next) => next,
                None => {
                    let depth = self.matcher.state(id).depth + 1;
                    let next = self.push_state(depth);
                    self.state_mut(id).trans.insert(symbol, next);
                    next
                }
            };
        }

        // A state is reached by exactly one string, so any pattern already
        // reported here is the same pattern.
        if let Some(&existing) = self.matcher.state(id).outputs.first() {
            return Ok(existing);
        }
        let pattern_id = PatternID(self.matcher.patterns.len());
        self.matcher.patterns.push(pattern.to_string());
        self.state_mut(id).outputs.push(pattern_id);
        tracing::trace!(pattern, %id, "inserted pattern {pattern_id:?}");
        Ok(pattern_id)
    }

    /// Get the number of states in the trie
    pub fn n_states(&self) -> usize {
        self.matcher.n_states()
    }

    /// Get the number of distinct patterns inserted so far
    pub fn n_patterns(&self) -> usize {
        self.matcher.n_patterns()
    }

    /// The DOT representation of the trie, without failure links.
    pub fn dot_string(&self) -> String {
        self.matcher.dot_string()
    }

    /// Construct the automaton.
    ///
    /// Computes the failure link of every state but the root, and extends the
    /// outputs of every state with the outputs of its failure state. The
    /// returned automaton respects the invariants:
    ///  - every failure chain ends at the root,
    ///  - the outputs of a state contain the outputs of its failure state.
    pub fn compile(mut self) -> Automaton {
        self.fill_failure_links();
        tracing::debug!(
            n_states = self.matcher.n_states(),
            n_patterns = self.matcher.n_patterns(),
            "compiled automaton"
        );
        self.matcher
    }

    fn fill_failure_links(&mut self) {
        // The children of the root can only fail back to the root. They seed
        // the breadth first search.
        let mut queue = VecDeque::new();
        for (_, child) in self.children(StateID::ROOT) {
            self.state_mut(child).fail = Some(StateID::ROOT);
            queue.push_back(child);
        }

        while let Some(curr) = queue.pop_front() {
            for (symbol, next) in self.children(curr) {
                queue.push_back(next);

                let fail = self.find_failure(curr, symbol);
                tracing::trace!(state = %next, %fail, "failure link");
                self.state_mut(next).fail = Some(fail);
                self.copy_outputs(fail, next);
            }
        }
    }

    /// The failure state of the child of `parent` on `symbol`.
    ///
    /// `parent` must not be the root, and the failure links of all states at
    /// most as deep as `parent` must be known. The loop terminates because
    /// failure links strictly decrease the depth and the root never fails.
    fn find_failure(&self, parent: StateID, symbol: char) -> StateID {
        let mut id = self.fail_of(parent);
        loop {
            if let Some(next) = self.matcher.step(id, symbol) {
                return next;
            }
            id = self.fail_of(id);
        }
    }

    fn fail_of(&self, id: StateID) -> StateID {
        self.matcher
            .state(id)
            .fail
            .expect("failure links are computed in breadth first order")
    }

    /// The transitions out of `id`, ordered by target state.
    fn children(&self, id: StateID) -> Vec<(char, StateID)> {
        self.matcher
            .state(id)
            .trans
            .iter()
            .map(|(&symbol, &next)| (symbol, next))
            .sorted_by_key(|&(_, next)| next)
            .collect()
    }

    fn copy_outputs(&mut self, src: StateID, dst: StateID) {
        assert!(src != dst, "src {src} must not be equal to dst {dst}");

        // Simply gets a mutable reference to both states.
        let (i, j) = (src.0, dst.0);
        let states = &mut self.matcher.states;
        let (src, dst) = if i < j {
            let (left, right) = states.split_at_mut(j);
            (&left[i], &mut right[0])
        } else {
            let (left, right) = states.split_at_mut(i);
            (&right[0], &mut left[j])
        };

        dst.outputs.extend_from_slice(&src.outputs);
    }

    fn push_state(&mut self, depth: usize) -> StateID {
        let id = StateID(self.matcher.states.len());
        self.matcher.states.push(State::new(depth));
        id
    }

    fn state_mut(&mut self, id: StateID) -> &mut State {
        &mut self.matcher.states[id.0]
    }
}
