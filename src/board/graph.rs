//! The location graph.
//!
//! Nodes are integer location identifiers; edges are unordered pairs
//! annotated with a non-empty set of transports. The graph is externally
//! supplied, built once through `GraphBuilder`, and immutable afterwards.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Transport;

/// A location identifier on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u16);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for NodeId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transports available on one edge. Few in practice, so inline storage.
pub type EdgeTransports = SmallVec<[Transport; 2]>;

/// An undirected multigraph of locations.
///
/// ```
/// use rust_pursuit::board::{Graph, NodeId};
/// use rust_pursuit::core::Transport;
///
/// let graph = Graph::builder()
///     .edge(1, 2, Transport::Taxi)
///     .edge(1, 2, Transport::Bus)
///     .edge(2, 3, Transport::Taxi)
///     .build();
///
/// assert_eq!(graph.node_count(), 3);
/// let mut adjacent: Vec<_> = graph.adjacent_nodes(NodeId::new(2)).collect();
/// adjacent.sort();
/// assert_eq!(adjacent, vec![NodeId::new(1), NodeId::new(3)]);
/// assert_eq!(graph.transports(NodeId::new(2), NodeId::new(1)).len(), 2);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Graph {
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, EdgeTransports>>,
}

impl Graph {
    /// Start building a graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Check if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Check if a node exists.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over the nodes adjacent to `node`.
    pub fn adjacent_nodes(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.keys().copied())
    }

    /// Transports available between two nodes. Empty if they are not adjacent.
    #[must_use]
    pub fn transports(&self, a: NodeId, b: NodeId) -> &[Transport] {
        self.adjacency
            .get(&a)
            .and_then(|neighbours| neighbours.get(&b))
            .map_or(&[], |transports| transports.as_slice())
    }
}

/// Accumulates nodes and edges, then freezes them into a `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    adjacency: FxHashMap<NodeId, FxHashMap<NodeId, EdgeTransports>>,
}

impl GraphBuilder {
    /// Add an isolated node. Redundant for nodes that appear in an edge.
    #[must_use]
    pub fn node(mut self, node: impl Into<NodeId>) -> Self {
        self.adjacency.entry(node.into()).or_default();
        self
    }

    /// Add `transport` to the undirected edge between `a` and `b`.
    ///
    /// Repeated calls accumulate transports; duplicates are ignored.
    #[must_use]
    pub fn edge(mut self, a: impl Into<NodeId>, b: impl Into<NodeId>, transport: Transport) -> Self {
        let (a, b) = (a.into(), b.into());
        self.insert_directed(a, b, transport);
        self.insert_directed(b, a, transport);
        self
    }

    fn insert_directed(&mut self, from: NodeId, to: NodeId, transport: Transport) {
        let transports = self
            .adjacency
            .entry(from)
            .or_default()
            .entry(to)
            .or_default();
        if !transports.contains(&transport) {
            transports.push(transport);
        }
    }

    /// Freeze into an immutable graph.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
        }
    }
}
