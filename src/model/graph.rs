//! Symmetric weighted similarity graph.

use hashbrown::HashMap;
use super::NodeId;

/// Neighbor weights of a single node.
pub type Neighbors = HashMap<NodeId, f64>;

/// Undirected weighted adjacency keyed by [`NodeId`].
///
/// Every edge is stored in both directions with the same weight. Adding an
/// edge between a pair that is already connected overwrites the weight on
/// both sides. Self-loops are stored once.
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraph {
    adjacency: HashMap<NodeId, Neighbors>,
    edge_count: usize,
}

impl SimilarityGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) {
        let previous = self.adjacency.entry(a).or_default().insert(b, weight);
        self.adjacency.entry(b).or_default().insert(a, weight);
        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    /// Neighbors of `node`, or `None` if the node has no edges.
    pub fn neighbors(&self, node: NodeId) -> Option<&Neighbors> {
        self.adjacency.get(&node)
    }

    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.adjacency.get(&a).and_then(|n| n.get(&b)).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes with at least one edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Every stored `(from, to, weight)` entry, both directions included.
    pub fn entries(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, n)| n.iter().map(move |(to, w)| (*from, *to, *w)))
    }
}
