//! Parser for whitespace-separated edge lists.
//!
//! Two framings are accepted:
//!
//! - [`InputMode::Counted`]: a header `N E` followed by exactly `E` pairs
//!   `parent child`. Anything after the last pair is ignored.
//! - [`InputMode::Stream`]: a header line `N` (an edge count on the same
//!   line is read and ignored) followed by pairs until the input ends.
//!
//! Node ids are 1-indexed and checked against `N` here, so the graph never
//! receives an id it cannot store.

use std::fs;
use std::io::{BufRead, Read};
use std::path::Path;

use crate::graph::{DominoGraph, NodeId};

/// Largest node count accepted from an input header.
///
/// The graph allocates its node tables up front, so the header is checked
/// before anything is built from it.
pub const MAX_NODES: usize = 1 << 26;

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the input.
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    /// A token is not a non-negative integer.
    #[error("Invalid integer '{token}' on line {line}")]
    InvalidToken { token: String, line: usize },

    /// The node count (or, for counted input, the edge count) is missing.
    #[error("Missing header: expected node and edge counts")]
    MissingHeader,

    /// Counted input ended before all announced edges were read.
    #[error("Expected {expected} edges but input ended after {found}")]
    TruncatedEdges { expected: usize, found: usize },

    /// Input ended in the middle of a pair.
    #[error("Edge on line {line} has a parent but no child")]
    DanglingToken { line: usize },

    /// The header announces more nodes than [`MAX_NODES`].
    #[error("Node count {nodes} exceeds the limit of {limit}")]
    TooManyNodes { nodes: usize, limit: usize },

    /// An edge names a node outside `1..=nodes`.
    #[error("Node {node} on line {line} is outside 1..={nodes}")]
    NodeOutOfRange {
        node: usize,
        nodes: usize,
        line: usize,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// How the edge list is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// `N E` header, then exactly `E` pairs
    #[default]
    Counted,
    /// `N` header, then pairs until end of input
    Stream,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Counted => write!(f, "counted"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

/// A parsed node count and edge list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgeList {
    /// Number of pieces
    pub nodes: usize,
    /// Edges in input order
    pub edges: Vec<(NodeId, NodeId)>,
}

impl EdgeList {
    /// Builds the graph described by this list.
    pub fn into_graph(self) -> DominoGraph {
        let mut out_degrees = vec![0; self.nodes];
        for &(parent, _) in &self.edges {
            out_degrees[parent - 1] += 1;
        }

        let mut graph = DominoGraph::with_out_degrees(&out_degrees);
        for (parent, child) in self.edges {
            graph.add_edge(parent, child);
        }
        graph
    }
}

/// Parses an edge list from a file path.
pub fn parse_file(path: &Path, mode: InputMode) -> ParseResult<EdgeList> {
    let content = fs::read_to_string(path)?;
    parse_str(&content, mode)
}

/// Parses an edge list from a buffered reader, consuming it to the end.
pub fn parse_reader<R: BufRead>(mut reader: R, mode: InputMode) -> ParseResult<EdgeList> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_str(&content, mode)
}

/// Parses an edge list from a string.
///
/// # Example
///
/// ```
/// use domino_chain::parser::{parse_str, InputMode};
///
/// let list = parse_str("4 4\n1 2\n1 3\n2 4\n3 4\n", InputMode::Counted).unwrap();
/// assert_eq!(list.nodes, 4);
/// assert_eq!(list.edges, vec![(1, 2), (1, 3), (2, 4), (3, 4)]);
/// ```
pub fn parse_str(content: &str, mode: InputMode) -> ParseResult<EdgeList> {
    let mut tokens = Tokens::new(content);

    let (nodes, header_line) = tokens.next_number()?.ok_or(ParseError::MissingHeader)?;
    if nodes > MAX_NODES {
        return Err(ParseError::TooManyNodes {
            nodes,
            limit: MAX_NODES,
        });
    }

    let edges = match mode {
        InputMode::Counted => {
            let (expected, _) = tokens.next_number()?.ok_or(ParseError::MissingHeader)?;
            let mut edges = Vec::with_capacity(expected.min(1 << 20));
            while edges.len() < expected {
                match tokens.next_pair(nodes)? {
                    Some(edge) => edges.push(edge),
                    None => {
                        return Err(ParseError::TruncatedEdges {
                            expected,
                            found: edges.len(),
                        })
                    }
                }
            }
            edges
        }
        InputMode::Stream => {
            if tokens.peek_line() == Some(header_line) {
                tokens.next_number()?;
            }
            let mut edges = Vec::new();
            while let Some(edge) = tokens.next_pair(nodes)? {
                edges.push(edge);
            }
            edges
        }
    };

    Ok(EdgeList { nodes, edges })
}

/// Whitespace tokenizer that remembers the 1-based line of each token.
struct Tokens<'a> {
    inner: std::iter::Peekable<Box<dyn Iterator<Item = (usize, &'a str)> + 'a>>,
}

impl<'a> Tokens<'a> {
    fn new(content: &'a str) -> Self {
        let iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a> = Box::new(
            content
                .lines()
                .enumerate()
                .flat_map(|(idx, line)| line.split_whitespace().map(move |tok| (idx + 1, tok))),
        );
        Self {
            inner: iter.peekable(),
        }
    }

    fn peek_line(&mut self) -> Option<usize> {
        self.inner.peek().map(|&(line, _)| line)
    }

    fn next_number(&mut self) -> ParseResult<Option<(usize, usize)>> {
        let Some((line, token)) = self.inner.next() else {
            return Ok(None);
        };
        let value = token.parse().map_err(|_| ParseError::InvalidToken {
            token: token.to_string(),
            line,
        })?;
        Ok(Some((value, line)))
    }

    fn next_node(&mut self, nodes: usize) -> ParseResult<Option<(NodeId, usize)>> {
        match self.next_number()? {
            Some((node, line)) if node == 0 || node > nodes => {
                Err(ParseError::NodeOutOfRange { node, nodes, line })
            }
            other => Ok(other),
        }
    }

    /// Reads one `parent child` pair. `None` means the input ended cleanly
    /// before the pair started.
    fn next_pair(&mut self, nodes: usize) -> ParseResult<Option<(NodeId, NodeId)>> {
        let Some((parent, line)) = self.next_node(nodes)? else {
            return Ok(None);
        };
        match self.next_node(nodes)? {
            Some((child, _)) => Ok(Some((parent, child))),
            None => Err(ParseError::DanglingToken { line }),
        }
    }
}
