//! Core `Automaton` data structure and builder.
//!
//! Use [AutomatonBuilder] to insert patterns into a prefix trie, then
//! [AutomatonBuilder::compile] it into an [Automaton] that can be run on any
//! number of texts.
//!
//! States are stored in an arena and referred to by [StateID]s. Every state
//! holds three pieces of the automaton:
//!  - its goto transitions, i.e. the trie edges created when inserting
//!    patterns,
//!  - its failure link, the state to retry from when no goto transition
//!    matches the next symbol,
//!  - its outputs, the patterns that are reported whenever the scan reaches
//!    the state.

mod builder;
mod dot;
mod traversal;
mod view;

use std::fmt::{self, Debug};

use derive_more::Into;
use smallvec::SmallVec;

use crate::{HashMap, PatternID};

pub use builder::{AutomatonBuilder, BuildConfig, InvalidPattern};
pub use traversal::FindIter;

/// An Aho-Corasick automaton recognising a fixed set of patterns.
///
/// Obtained by compiling an [AutomatonBuilder]. Once built the automaton is
/// never modified again: [Automaton::find_all] only borrows it, so the same
/// automaton may be shared between any number of concurrent scans.
#[derive(Clone)]
pub struct Automaton {
    /// The state arena, indexed by [StateID]. The root is always first.
    states: Vec<State>,
    /// The pattern strings, indexed by [PatternID].
    patterns: Vec<String>,
}

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    /// An automaton with no patterns.
    ///
    /// It consists of the root state only and never reports a match. Use the
    /// [AutomatonBuilder] to construct an automaton from a list of patterns.
    pub fn new() -> Self {
        Self {
            states: vec![State::new(0)],
            patterns: Vec::new(),
        }
    }

    /// Insert and compile all `patterns` at once.
    ///
    /// Return an error if any of the patterns is empty.
    pub fn try_from_patterns<I>(patterns: I) -> Result<Self, InvalidPattern>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(AutomatonBuilder::try_from_patterns(patterns)?.compile())
    }

    /// The initial state, representing the empty prefix.
    pub fn root(&self) -> StateID {
        StateID::ROOT
    }

    /// Get the number of states in the automaton
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Get the number of distinct patterns in the automaton
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    fn state(&self, id: StateID) -> &State {
        &self.states[id.0]
    }
}

impl Debug for Automaton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dot_string())
    }
}

/// A state ID in an automaton.
///
/// IDs are handed out in the order states are created while inserting
/// patterns, starting from [StateID::ROOT]. Apart from the root, IDs can only
/// be obtained from an automaton, e.g. through [Automaton::states],
/// [Automaton::walk] or [Automaton::step].
///
/// Passing an ID to an automaton other than the one it was obtained from
/// panics if the ID is out of range.
///
/// ```compile_fail
/// let forged = ahomatch::StateID(99);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Into, Hash, Debug)]
pub struct StateID(usize);

impl StateID {
    /// The initial state of every automaton.
    pub const ROOT: StateID = StateID(0);

    /// Whether this is the initial state.
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

impl fmt::Display for StateID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the automaton
///
/// Nodes have zero, one or many patterns that are output when the state is
/// traversed.
#[derive(Clone, Debug)]
struct State {
    /// The goto transitions out of the state.
    trans: HashMap<char, StateID>,
    /// The failure transition. None for the root, and for every state until
    /// the automaton is compiled.
    fail: Option<StateID>,
    /// The patterns reported at this state.
    ///
    /// The pattern spelt by the path from the root comes first, if any; after
    /// compilation it is followed by the outputs of the failure state.
    outputs: SmallVec<[PatternID; 2]>,
    /// The distance from the root, i.e. the length in symbols of the prefix
    /// the state represents.
    depth: usize,
}

impl State {
    fn new(depth: usize) -> Self {
        Self {
            trans: HashMap::default(),
            fail: None,
            outputs: SmallVec::new(),
            depth,
        }
    }

    fn next_state(&self, symbol: char) -> Option<StateID> {
        self.trans.get(&symbol).copied()
    }
}
