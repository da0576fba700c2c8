#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod automaton;
pub mod loader;
pub mod matcher;

pub use automaton::{Automaton, AutomatonBuilder, BuildConfig, FindIter, InvalidPattern, StateID};
pub use loader::LoadError;
pub use matcher::{Match, NaiveManyMatcher, PatternID, PatternMatcher};

pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
