//! Minimum pushes and longest chain reaction over a domino graph.
//!
//! The number of pushes is the number of sources, which the graph keeps
//! up to date while edges are inserted. The longest chain is found with a
//! single relaxation pass over a topological order: because every parent
//! is visited before its children, a node's distance is final by the time
//! it is visited.

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::graph::{DominoGraph, NodeId};

/// Result of solving a domino graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Solution {
    /// Number of pieces that must be pushed by hand
    pub interventions: usize,
    /// Number of pieces in the longest chain reaction (at least 1)
    pub longest_chain: usize,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interventions, self.longest_chain)
    }
}

/// Computes the number of pushes and the longest chain.
///
/// `order` must be a topological order of `graph`, such as the one returned
/// by [`DominoGraph::topological_order`]. Distances are re-seeded from the
/// in-degrees before the pass, so solving twice gives the same answer.
///
/// # Example
///
/// ```rust
/// use domino_chain::graph::DominoGraph;
/// use domino_chain::solver::solve;
///
/// let mut graph = DominoGraph::from_edges(4, [(1, 2), (1, 3), (2, 4), (3, 4)]);
/// let order = graph.topological_order();
/// let solution = solve(&mut graph, &order);
///
/// assert_eq!(solution.interventions, 1);
/// assert_eq!(solution.longest_chain, 3);
/// assert_eq!(solution.to_string(), "1 3");
/// ```
pub fn solve(graph: &mut DominoGraph, order: &[NodeId]) -> Solution {
    graph.reset_distances();

    let mut longest = 1;

    for &node in order {
        // Not reached from any source; nothing to propagate
        let Some(distance) = graph.distance(node) else {
            continue;
        };
        let candidate = distance + 1;

        let (children, nodes) = graph.children_and_nodes_mut(node);
        for &child in children {
            let info = &mut nodes[child - 1];
            if info.distance.map_or(true, |d| d < candidate) {
                trace!(node, child, distance = candidate, "relaxed");
                info.distance = Some(candidate);
                longest = longest.max(candidate);
            }
        }
    }

    let solution = Solution {
        interventions: graph.source_count(),
        longest_chain: longest,
    };
    debug!(
        interventions = solution.interventions,
        longest_chain = solution.longest_chain,
        "solved domino graph"
    );
    solution
}

impl DominoGraph {
    /// Orders the graph and solves it in one call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let mut graph = DominoGraph::new(3);
    /// assert_eq!(graph.solve().to_string(), "3 1");
    /// ```
    pub fn solve(&mut self) -> Solution {
        let order = self.topological_order();
        solve(self, &order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve_edges(nodes: usize, edges: &[(NodeId, NodeId)]) -> Solution {
        DominoGraph::from_edges(nodes, edges.iter().copied()).solve()
    }

    #[test]
    fn test_no_edges() {
        let solution = solve_edges(3, &[]);
        assert_eq!(solution.interventions, 3);
        assert_eq!(solution.longest_chain, 1);
    }

    #[test]
    fn test_empty_graph() {
        let solution = solve_edges(0, &[]);
        assert_eq!(solution.interventions, 0);
        assert_eq!(solution.longest_chain, 1);
    }

    #[test]
    fn test_single_chain() {
        let solution = solve_edges(5, &[(1, 2), (2, 3), (3, 4), (4, 5)]);
        assert_eq!(solution.interventions, 1);
        assert_eq!(solution.longest_chain, 5);
    }

    #[test]
    fn test_diamond() {
        let solution = solve_edges(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(solution.interventions, 1);
        assert_eq!(solution.longest_chain, 3);
    }

    #[test]
    fn test_two_disjoint_chains() {
        let solution = solve_edges(5, &[(1, 2), (3, 4), (4, 5)]);
        assert_eq!(solution.interventions, 2);
        assert_eq!(solution.longest_chain, 3);
    }

    #[test]
    fn test_shortcut_does_not_shorten_chain() {
        // 1 -> 4 directly, and 1 -> 2 -> 3 -> 4
        let solution = solve_edges(4, &[(1, 4), (1, 2), (2, 3), (3, 4)]);
        assert_eq!(solution.interventions, 1);
        assert_eq!(solution.longest_chain, 4);
    }

    #[test]
    fn test_longest_chain_through_late_source() {
        // The longer branch starts at a higher-numbered source
        let solution = solve_edges(6, &[(1, 6), (2, 3), (3, 4), (4, 5), (5, 6)]);
        assert_eq!(solution.interventions, 2);
        assert_eq!(solution.longest_chain, 5);
    }

    #[test]
    fn test_duplicate_edges() {
        let solution = solve_edges(2, &[(1, 2), (1, 2)]);
        assert_eq!(solution.interventions, 1);
        assert_eq!(solution.longest_chain, 2);
    }

    #[test]
    fn test_distances_after_solve() {
        let mut graph = DominoGraph::from_edges(4, [(1, 2), (1, 3), (2, 4), (3, 4)]);
        graph.solve();

        assert_eq!(graph.distance(1), Some(1));
        assert_eq!(graph.distance(2), Some(2));
        assert_eq!(graph.distance(3), Some(2));
        assert_eq!(graph.distance(4), Some(3));
    }

    #[test]
    fn test_solve_is_repeatable() {
        let mut graph = DominoGraph::from_edges(5, [(1, 2), (2, 3), (4, 5)]);
        let order = graph.topological_order();

        let first = solve(&mut graph, &order);
        let second = solve(&mut graph, &order);
        assert_eq!(first, second);
        assert_eq!(first.longest_chain, 3);
    }

    #[test]
    fn test_pure_cycle_has_no_sources() {
        let mut graph = DominoGraph::from_edges(3, [(1, 2), (2, 3), (3, 1)]);
        let solution = graph.solve();

        assert_eq!(solution.interventions, 0);
        assert_eq!(solution.longest_chain, 1);
        // Nothing on the cycle is reached from a source
        assert!(graph.node_ids().all(|id| graph.distance(id).is_none()));
    }

    #[test]
    fn test_unreached_node_still_relaxed_as_target() {
        // 2 <-> 3 is a cycle fed by source 1; order is [1, 2, 3, 4] and
        // 3 -> 2 raises 2 again after it was visited
        let mut graph = DominoGraph::from_edges(4, [(1, 2), (2, 3), (3, 2), (3, 4)]);
        let order = graph.topological_order();
        assert_eq!(order, vec![1, 2, 3, 4]);

        let first = solve(&mut graph, &order);
        assert_eq!(first.interventions, 1);
        assert_eq!(first.longest_chain, 4);
        assert_eq!(graph.distance(4), Some(4));

        // Deterministic across repeated runs
        assert_eq!(graph.solve(), first);
    }

    #[test]
    fn test_unreached_node_skipped_as_source() {
        // 1 <-> 2 never gets a distance, so 3 is never relaxed from it
        let mut graph = DominoGraph::from_edges(4, [(1, 2), (2, 1), (2, 3), (4, 3)]);
        let solution = graph.solve();

        assert_eq!(solution.interventions, 1);
        assert_eq!(solution.longest_chain, 2);
        assert_eq!(graph.distance(1), None);
        assert_eq!(graph.distance(2), None);
        assert_eq!(graph.distance(3), Some(2));
    }

    #[test]
    fn test_solution_display() {
        let solution = Solution {
            interventions: 2,
            longest_chain: 7,
        };
        assert_eq!(format!("{}", solution), "2 7");
    }

    #[test]
    fn test_solution_serialize() {
        let solution = Solution {
            interventions: 1,
            longest_chain: 3,
        };
        let json = serde_json::to_string(&solution).unwrap();
        assert_eq!(json, r#"{"interventions":1,"longest_chain":3}"#);
    }
}
