//! GraphViz rendering of automata, for debugging.

use std::fmt;

use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};

use super::{Automaton, StateID};

/// The node weights of the rendered graph.
enum DotNode<'a> {
    State(StateID),
    Output(&'a str),
}

/// The edge weights of the rendered graph.
enum DotEdge {
    Goto(char),
    Failure,
    Output,
}

impl fmt::Display for DotNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotNode::State(id) => write!(f, "{id}"),
            DotNode::Output(pattern) => write!(f, "{pattern}"),
        }
    }
}

impl fmt::Display for DotEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotEdge::Goto(symbol) => write!(f, "{symbol}"),
            DotEdge::Failure => write!(f, "fail"),
            DotEdge::Output => Ok(()),
        }
    }
}

impl Automaton {
    /// Get its dot string representation
    ///
    /// Every state is a node labelled by its ID and every pattern a boxed
    /// node. Trie transitions are solid edges labelled by their symbol,
    /// failure links are dashed and each state has a dotted edge to every
    /// pattern it reports.
    pub fn dot_string(&self) -> String {
        let graph = self.dot_graph();
        let dot = Dot::with_attr_getters(
            &graph,
            &[],
            &|_, edge| match edge.weight() {
                DotEdge::Goto(_) => String::new(),
                DotEdge::Failure => "style = dashed constraint = false ".to_string(),
                DotEdge::Output => "style = dotted ".to_string(),
            },
            &|_, (_, node)| match node {
                DotNode::State(_) => String::new(),
                DotNode::Output(_) => "shape = box ".to_string(),
            },
        );
        format!("{dot}")
    }

    fn dot_graph(&self) -> DiGraph<DotNode<'_>, DotEdge> {
        let mut graph = DiGraph::new();
        // State nodes are added first, so that node `i` is state `i`
        for id in self.states() {
            graph.add_node(DotNode::State(id));
        }
        let pattern_nodes = self
            .patterns()
            .map(|(_, pattern)| graph.add_node(DotNode::Output(pattern)))
            .collect::<Vec<_>>();

        for id in self.states() {
            let node = NodeIndex::new(id.0);
            for (symbol, next) in self.transitions(id) {
                graph.add_edge(node, NodeIndex::new(next.0), DotEdge::Goto(symbol));
            }
            if let Some(fail) = self.failure(id) {
                graph.add_edge(node, NodeIndex::new(fail.0), DotEdge::Failure);
            }
            for pattern in self.outputs(id) {
                graph.add_edge(node, pattern_nodes[pattern.0], DotEdge::Output);
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::automaton::tests::she_his_hers;
    use crate::AutomatonBuilder;

    use super::*;

    #[rstest]
    fn test_dot_string(she_his_hers: Automaton) {
        let dot = she_his_hers.dot_string();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("label = \"hers\""));
        // 9 goto edges, 9 failure links
        assert_eq!(dot.matches("label = \"fail\"").count(), 9);
        assert_eq!(dot.matches("style = dashed").count(), 9);
        // `she` reports both `she` and `he`
        assert_eq!(dot.matches("style = dotted").count(), 5);
        assert_eq!(format!("{she_his_hers:?}"), dot);
    }

    #[test]
    fn test_dot_string_without_failures() {
        let mut builder = AutomatonBuilder::new();
        builder.insert("ab").unwrap();
        let dot = builder.dot_string();
        assert!(!dot.contains("dashed"));
        assert!(dot.contains("label = \"a\""));
        assert!(dot.contains("label = \"b\""));
        assert_eq!(dot.matches("style = dotted").count(), 1);
    }
}
