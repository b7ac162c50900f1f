//! Iterative depth-first topological ordering.

use tracing::debug;

use super::domino_graph::{Color, DominoGraph, NodeId};

impl DominoGraph {
    /// Returns the nodes in topological order: for every edge
    /// `parent -> child`, `parent` comes before `child`.
    ///
    /// The traversal uses an explicit stack, so long chains cannot overflow
    /// the call stack. Roots are tried in increasing id order and children
    /// are pushed in adjacency order, which makes the result deterministic
    /// for a given edge insertion order. Colors are reset on entry, so
    /// calling this again on an unmodified graph gives the same sequence.
    ///
    /// The graph must be acyclic. On cyclic input the traversal still
    /// terminates, but the returned order is meaningless.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let mut graph = DominoGraph::from_edges(3, [(3, 1), (1, 2)]);
    /// assert_eq!(graph.topological_order(), vec![3, 1, 2]);
    /// ```
    pub fn topological_order(&mut self) -> Vec<NodeId> {
        self.reset_colors();

        let mut stack: Vec<NodeId> = Vec::new();
        let mut finished: Vec<NodeId> = Vec::with_capacity(self.node_count());

        for root in 1..=self.node_count() {
            if self.color(root) != Color::Unvisited {
                continue;
            }
            stack.push(root);

            while let Some(&node) = stack.last() {
                match self.color(node) {
                    Color::Unvisited => {
                        self.set_color(node, Color::InProgress);
                        stack.extend(
                            self.adjacent(node)
                                .iter()
                                .copied()
                                .filter(|&child| self.color(child) == Color::Unvisited),
                        );
                    }
                    // Everything pushed above this entry has been popped,
                    // so every descendant is already finished.
                    Color::InProgress => {
                        stack.pop();
                        self.set_color(node, Color::Done);
                        finished.push(node);
                    }
                    // A second entry for a node reached from two parents
                    // before it was expanded.
                    Color::Done => {
                        stack.pop();
                    }
                }
            }
        }

        finished.reverse();
        debug!(nodes = finished.len(), "computed topological order");
        finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[NodeId]) -> Vec<usize> {
        let mut pos = vec![usize::MAX; order.len() + 1];
        for (i, &id) in order.iter().enumerate() {
            pos[id] = i;
        }
        pos
    }

    fn assert_valid(graph: &DominoGraph, order: &[NodeId]) {
        assert_eq!(order.len(), graph.node_count());
        let pos = position(order);
        for parent in graph.node_ids() {
            assert_ne!(pos[parent], usize::MAX, "node {parent} missing");
            for &child in graph.adjacent(parent) {
                assert!(
                    pos[parent] < pos[child],
                    "edge {parent}->{child} out of order in {order:?}"
                );
            }
        }
    }

    #[test]
    fn test_empty_graph_order() {
        let mut graph = DominoGraph::new(0);
        assert!(graph.topological_order().is_empty());
    }

    #[test]
    fn test_isolated_nodes_order() {
        let mut graph = DominoGraph::new(3);
        let order = graph.topological_order();

        // Each root finishes immediately; reversal puts the last one first
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_chain_order() {
        let mut graph = DominoGraph::from_edges(4, [(1, 2), (2, 3), (3, 4)]);
        assert_eq!(graph.topological_order(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_reverse_numbered_chain() {
        let mut graph = DominoGraph::from_edges(4, [(4, 3), (3, 2), (2, 1)]);
        assert_eq!(graph.topological_order(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_diamond_order() {
        let mut graph = DominoGraph::from_edges(4, [(1, 2), (1, 3), (2, 4), (3, 4)]);
        let order = graph.topological_order();

        assert_eq!(order, vec![1, 2, 3, 4]);
        assert_valid(&graph, &order);
    }

    #[test]
    fn test_node_pushed_twice_emitted_once() {
        // 3 is pushed by 1 and again by 2 before it is expanded
        let mut graph = DominoGraph::from_edges(3, [(1, 3), (1, 2), (2, 3)]);
        let order = graph.topological_order();

        assert_eq!(order, vec![1, 2, 3]);
        assert_valid(&graph, &order);
    }

    #[test]
    fn test_all_nodes_done_after_order() {
        let mut graph = DominoGraph::from_edges(5, [(2, 1), (4, 5)]);
        graph.topological_order();

        assert!(graph.node_ids().all(|id| graph.color(id) == Color::Done));
    }

    #[test]
    fn test_order_is_repeatable() {
        let mut graph = DominoGraph::from_edges(6, [(5, 1), (1, 2), (6, 2), (2, 3), (4, 3)]);
        let first = graph.topological_order();
        let second = graph.topological_order();

        assert_eq!(first, second);
        assert_valid(&graph, &first);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000;
        let mut graph = DominoGraph::from_edges(n, (1..n).map(|i| (i, i + 1)));
        let order = graph.topological_order();

        assert_eq!(order.len(), n);
        assert_eq!(order.first(), Some(&1));
        assert_eq!(order.last(), Some(&n));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = DominoGraph::from_edges(3, [(1, 2), (2, 3), (3, 1)]);
        let order = graph.topological_order();

        // 3 -> 1 finds 1 in progress and does not push it again
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(graph.topological_order(), order);
        assert!(graph.node_ids().all(|id| graph.color(id) == Color::Done));
    }
}
