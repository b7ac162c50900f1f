//! Domino graph implementation using dense per-node tables.
//!
//! Provides a directed graph structure for modeling which domino pieces
//! knock over which, with in-degree tracking and per-node traversal state.

use std::fmt;

/// Identifier of a domino piece. Ids are 1-indexed: a graph with `n`
/// pieces uses ids `1..=n`.
pub type NodeId = usize;

/// Traversal state of a node during depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not reached yet
    #[default]
    Unvisited,
    /// Reached, children not finished
    InProgress,
    /// Closed; all descendants have been emitted
    Done,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvisited => write!(f, "unvisited"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Per-node metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo {
    /// Traversal marker
    pub color: Color,
    /// Number of edges ending at this node
    pub in_degree: usize,
    /// Length (in nodes) of the longest chain ending here.
    ///
    /// `None` means no chain from a source has reached the node yet.
    pub distance: Option<usize>,
}

impl NodeInfo {
    /// Creates the record of a fresh node, which counts as a source until
    /// an edge points at it.
    pub fn new() -> Self {
        Self {
            color: Color::Unvisited,
            in_degree: 0,
            distance: Some(1),
        }
    }

    /// Returns true if no edge ends at this node.
    pub fn is_source(&self) -> bool {
        self.in_degree == 0
    }

    /// Distance a node starts the longest-path pass with.
    pub fn initial_distance(&self) -> Option<usize> {
        self.is_source().then_some(1)
    }
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self::new()
    }
}

/// A directed acyclic graph of domino pieces.
///
/// Node metadata and adjacency lists are parallel vectors indexed by
/// `id - 1`. Edges point from the piece that falls first (parent) to the
/// piece it knocks over (child). Duplicate edges and self-loops are stored
/// as given.
///
/// The number of sources is maintained while edges are added, so it is
/// available without another pass over the nodes.
///
/// # Example
///
/// ```rust
/// use domino_chain::graph::DominoGraph;
///
/// let mut graph = DominoGraph::new(3);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.source_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DominoGraph {
    /// Metadata of node `id` lives at `id - 1`
    nodes: Vec<NodeInfo>,
    /// Children of node `id` live at `id - 1`
    adjacent: Vec<Vec<NodeId>>,
    /// Live count of nodes with in-degree 0
    interventions: usize,
    edge_count: usize,
}

impl DominoGraph {
    /// Creates a graph of `nodes` pieces and no edges.
    ///
    /// Every piece starts as a source, so `source_count() == nodes`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let graph = DominoGraph::new(4);
    /// assert_eq!(graph.source_count(), 4);
    /// assert_eq!(graph.distance(2), Some(1));
    /// ```
    pub fn new(nodes: usize) -> Self {
        Self {
            nodes: vec![NodeInfo::new(); nodes],
            adjacent: vec![Vec::new(); nodes],
            interventions: nodes,
            edge_count: 0,
        }
    }

    /// Creates a graph whose adjacency lists are sized exactly.
    ///
    /// `out_degrees[id - 1]` is the number of edges that will leave `id`.
    /// Nodes with no outgoing edges get no allocation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let mut graph = DominoGraph::with_out_degrees(&[2, 0, 0]);
    /// graph.add_edge(1, 2);
    /// graph.add_edge(1, 3);
    /// assert_eq!(graph.source_count(), 1);
    /// ```
    pub fn with_out_degrees(out_degrees: &[usize]) -> Self {
        let nodes = out_degrees.len();
        Self {
            nodes: vec![NodeInfo::new(); nodes],
            adjacent: out_degrees.iter().map(|&d| Vec::with_capacity(d)).collect(),
            interventions: nodes,
            edge_count: 0,
        }
    }

    /// Builds a graph from an edge iterator.
    ///
    /// # Panics
    ///
    /// Panics if an edge names an id outside `1..=nodes`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let graph = DominoGraph::from_edges(4, [(1, 2), (1, 3), (2, 4), (3, 4)]);
    /// assert_eq!(graph.source_count(), 1);
    /// assert_eq!(graph.in_degree(4), 2);
    /// ```
    pub fn from_edges<I>(nodes: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut graph = Self::new(nodes);
        for (parent, child) in edges {
            graph.add_edge(parent, child);
        }
        graph
    }

    /// Inserts an edge from `parent` to `child`.
    ///
    /// The first edge that reaches `child` removes it from the sources and
    /// clears its distance, since its chain length must now come from a
    /// predecessor.
    ///
    /// # Panics
    ///
    /// Panics if either id is outside `1..=node_count()`. Callers are
    /// expected to validate ids at the input boundary.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) {
        assert!(self.contains(parent), "parent {parent} out of range");
        assert!(self.contains(child), "child {child} out of range");

        self.adjacent[parent - 1].push(child);

        let info = &mut self.nodes[child - 1];
        if info.in_degree == 0 {
            self.interventions -= 1;
            info.distance = None;
        }
        info.in_degree += 1;
        self.edge_count += 1;
    }

    /// Returns true if `id` names a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        (1..=self.nodes.len()).contains(&id)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the number of pieces that need a push of their own.
    pub fn source_count(&self) -> usize {
        self.interventions
    }

    /// Returns the metadata record of a node.
    pub fn node(&self, id: NodeId) -> &NodeInfo {
        &self.nodes[id - 1]
    }

    pub fn in_degree(&self, id: NodeId) -> usize {
        self.nodes[id - 1].in_degree
    }

    /// Returns the children of a node in insertion order.
    pub fn adjacent(&self, id: NodeId) -> &[NodeId] {
        &self.adjacent[id - 1]
    }

    pub fn distance(&self, id: NodeId) -> Option<usize> {
        self.nodes[id - 1].distance
    }

    pub fn set_distance(&mut self, id: NodeId, distance: Option<usize>) {
        self.nodes[id - 1].distance = distance;
    }

    pub fn color(&self, id: NodeId) -> Color {
        self.nodes[id - 1].color
    }

    pub fn set_color(&mut self, id: NodeId, color: Color) {
        self.nodes[id - 1].color = color;
    }

    /// Iterates over all node ids in increasing order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        1..=self.nodes.len()
    }

    /// Iterates over the ids of all sources in increasing order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domino_chain::graph::DominoGraph;
    ///
    /// let graph = DominoGraph::from_edges(4, [(1, 2), (3, 2)]);
    /// let sources: Vec<_> = graph.sources().collect();
    /// assert_eq!(sources, vec![1, 3, 4]);
    /// ```
    pub fn sources(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, info)| info.is_source())
            .map(|(idx, _)| idx + 1)
    }

    /// Returns the children of `id` together with the mutable node table,
    /// so children can be updated while their parent's list is borrowed.
    pub(crate) fn children_and_nodes_mut(&mut self, id: NodeId) -> (&[NodeId], &mut [NodeInfo]) {
        (self.adjacent[id - 1].as_slice(), self.nodes.as_mut_slice())
    }

    /// Puts every distance back to what a freshly built graph would hold:
    /// `Some(1)` for sources and `None` for everything else.
    pub(crate) fn reset_distances(&mut self) {
        for info in &mut self.nodes {
            info.distance = info.initial_distance();
        }
    }

    pub(crate) fn reset_colors(&mut self) {
        for info in &mut self.nodes {
            info.color = Color::Unvisited;
        }
    }
}
