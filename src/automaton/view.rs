use std::iter;

use itertools::Itertools;

use crate::PatternID;

use super::{Automaton, StateID};

/// Accessors taking a [StateID] panic if the ID was obtained from a different
/// automaton with more states.
impl Automaton {
    /// The combined goto function.
    ///
    /// Returns the target of the trie transition out of `state` on `symbol`.
    /// If there is none, the root stays at the root, whereas any other state
    /// returns `None`: the caller must then retry from the failure state.
    pub fn step(&self, state: StateID, symbol: char) -> Option<StateID> {
        match self.state(state).next_state(symbol) {
            Some(next) => Some(next),
            None if state.is_root() => Some(StateID::ROOT),
            None => None,
        }
    }

    /// The failure link of `state`.
    ///
    /// `None` for the root, which never fails.
    pub fn failure(&self, state: StateID) -> Option<StateID> {
        self.state(state).fail
    }

    /// The states visited by following failure links from `state`, excluding
    /// `state` itself. Always ends with the root, unless `state` is the root.
    pub fn failure_chain(&self, state: StateID) -> impl Iterator<Item = StateID> + '_ {
        iter::successors(self.failure(state), move |&s| self.failure(s))
    }

    /// The patterns reported when a scan reaches `state`.
    ///
    /// The pattern ending exactly at `state` comes first, followed by the
    /// patterns inherited through the failure chain, longest first.
    pub fn outputs(&self, state: StateID) -> impl Iterator<Item = PatternID> + '_ {
        self.state(state).outputs.iter().copied()
    }

    /// The trie transitions out of `state`, ordered by symbol.
    pub fn transitions(&self, state: StateID) -> impl Iterator<Item = (char, StateID)> + '_ {
        self.state(state)
            .trans
            .iter()
            .map(|(&symbol, &next)| (symbol, next))
            .sorted()
    }

    /// The state reached from the root by following trie transitions only.
    ///
    /// `None` if `prefix` is not a prefix of any pattern.
    pub fn walk(&self, prefix: &str) -> Option<StateID> {
        prefix
            .chars()
            .try_fold(StateID::ROOT, |id, symbol| self.state(id).next_state(symbol))
    }

    /// The number of symbols on the trie path from the root to `state`.
    pub fn depth(&self, state: StateID) -> usize {
        self.state(state).depth
    }

    /// The pattern string with the given ID.
    ///
    /// Panics if the ID was not returned when building this automaton.
    pub fn pattern(&self, id: PatternID) -> &str {
        &self.patterns[id.0]
    }

    /// All patterns, in insertion order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = (PatternID, &str)> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (PatternID(i), p.as_str()))
    }

    /// All states, in creation order.
    pub fn states(&self) -> impl ExactSizeIterator<Item = StateID> {
        (0..self.n_states()).map(StateID)
    }
}
