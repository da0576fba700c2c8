use std::str::CharIndices;

use crate::{Match, PatternID};

use super::{Automaton, StateID};

impl Automaton {
    /// Run the automaton on `text`.
    ///
    /// Returns a lazy iterator over all occurrences of all patterns in `text`,
    /// overlapping ones included. Matches are ordered by the position of
    /// their last symbol; matches ending at the same position are ordered as
    /// the outputs of the state they were found at, longest first.
    ///
    /// Every call starts afresh from the root, so scanning the same text
    /// twice yields the same matches.
    pub fn find_all<'a, 't>(&'a self, text: &'t str) -> FindIter<'a, 't> {
        FindIter::new(self, text)
    }

    /// The state reached from `state` on `symbol`, falling back along failure
    /// links until a transition exists.
    ///
    /// Terminates since the root has a transition for every symbol.
    fn next_state(&self, mut state: StateID, symbol: char) -> StateID {
        loop {
            if let Some(next) = self.step(state, symbol) {
                return next;
            }
            state = self
                .failure(state)
                .expect("only the root has no failure link");
        }
    }
}

/// An iterator over the matches of an [Automaton] in a text.
///
/// Created by [Automaton::find_all].
#[derive(Clone, Debug)]
pub struct FindIter<'a, 't> {
    automaton: &'a Automaton,
    symbols: CharIndices<'t>,
    /// The current state of the automaton
    state: StateID,
    /// The byte position in the text right after the last symbol read
    end: usize,
    /// The number of outputs of `state` that were already reported
    n_reported: usize,
}

impl<'a, 't> FindIter<'a, 't> {
    fn new(automaton: &'a Automaton, text: &'t str) -> Self {
        Self {
            automaton,
            symbols: text.char_indices(),
            state: StateID::ROOT,
            end: 0,
            n_reported: 0,
        }
    }

    /// The next unreported output of the current state.
    fn next_output(&mut self) -> Option<PatternID> {
        let output = self.automaton.outputs(self.state).nth(self.n_reported)?;
        self.n_reported += 1;
        Some(output)
    }
}

impl<'a, 't> Iterator for FindIter<'a, 't> {
    type Item = Match<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.next_output() {
                let pattern = self.automaton.pattern(id);
                return Some(Match {
                    offset: self.end - pattern.len(),
                    pattern,
                    id,
                });
            }
            let (pos, symbol) = self.symbols.next()?;
            self.state = self.automaton.next_state(self.state, symbol);
            self.end = pos + symbol.len_utf8();
            self.n_reported = 0;
        }
    }
}
