use std::collections::HashSet;

use itertools::Itertools;
use proptest::prelude::*;

use ahomatch::{Automaton, AutomatonBuilder, NaiveManyMatcher, PatternMatcher, StateID};

/// Patterns over a small alphabet, so that they share many prefixes and
/// suffixes.
fn arb_patterns() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,5}", 1..10)
}

fn arb_text() -> impl Strategy<Value = String> {
    "[a-dé]{0,40}"
}

proptest! {
    #[test]
    fn same_matches_as_naive(patterns in arb_patterns(), text in arb_text()) {
        let automaton = Automaton::try_from_patterns(&patterns).unwrap();
        let naive = NaiveManyMatcher::try_from_patterns(&patterns).unwrap();

        let found = automaton.find_matches(&text).collect_vec();
        let expected = naive.find_matches(&text).collect_vec();
        prop_assert_eq!(found, expected);
    }

    #[test]
    fn matches_are_occurrences(patterns in arb_patterns(), text in arb_text()) {
        let automaton = Automaton::try_from_patterns(&patterns).unwrap();
        let mut seen = HashSet::new();
        for m in automaton.find_all(&text) {
            prop_assert_eq!(&text[m.range()], m.pattern);
            // Each occurrence is reported exactly once
            prop_assert!(seen.insert((m.offset, m.pattern)));
        }
    }

    #[test]
    fn scanning_is_idempotent(patterns in arb_patterns(), text in arb_text()) {
        let automaton = Automaton::try_from_patterns(&patterns).unwrap();
        let first = automaton.find_all(&text).collect_vec();
        let second = automaton.find_all(&text).collect_vec();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn root_never_fails(patterns in arb_patterns(), symbol in any::<char>()) {
        let automaton = Automaton::try_from_patterns(&patterns).unwrap();
        prop_assert!(automaton.step(StateID::ROOT, symbol).is_some());
    }

    #[test]
    fn failure_links_are_well_formed(patterns in arb_patterns()) {
        let automaton = Automaton::try_from_patterns(&patterns).unwrap();
        for state in automaton.states().skip(1) {
            // Every failure chain ends at the root, getting shallower at
            // every step
            let chain = automaton.failure_chain(state).collect_vec();
            prop_assert_eq!(chain.last(), Some(&StateID::ROOT));
            let depths = std::iter::once(state)
                .chain(chain.iter().copied())
                .map(|s| automaton.depth(s))
                .collect_vec();
            prop_assert!(depths.windows(2).all(|w| w[0] > w[1]));

            // Outputs are inherited along failure links
            let fail = automaton.failure(state).unwrap();
            let outputs = automaton.outputs(state).collect::<HashSet<_>>();
            prop_assert!(automaton.outputs(fail).all(|p| outputs.contains(&p)));
        }
    }

    #[test]
    fn terminal_states_do_not_depend_on_order(patterns in arb_patterns()) {
        let mut forward = AutomatonBuilder::new();
        let terminals = patterns
            .iter()
            .map(|p| {
                let id = forward.insert(p).unwrap();
                (p.clone(), id)
            })
            .collect_vec();
        // Re-inserting reaches the same state and keeps the same ID
        for (p, id) in &terminals {
            prop_assert_eq!(forward.insert(p).unwrap(), *id);
        }
        let forward = forward.compile();
        let backward = Automaton::try_from_patterns(patterns.iter().rev()).unwrap();

        for p in &patterns {
            let f = forward.walk(p).unwrap();
            let b = backward.walk(p).unwrap();
            prop_assert_eq!(forward.depth(f), p.chars().count());
            prop_assert_eq!(forward.pattern(forward.outputs(f).next().unwrap()), p.as_str());
            prop_assert_eq!(backward.pattern(backward.outputs(b).next().unwrap()), p.as_str());
        }
        prop_assert_eq!(forward.n_states(), backward.n_states());
    }
}
