//! Path strengths — the per-seed propagation result.

use hashbrown::HashMap;
use super::{Neighbors, NodeId};

/// Sparse map of best discovered path strength from one seed.
///
/// Absent entries read as `0.0`. The map is owned by the propagation call
/// that fills it and is handed to the aggregator by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathStrengths {
    inner: HashMap<NodeId, f64>,
}

impl PathStrengths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strength to `node`, `0.0` if never reached.
    pub fn get(&self, node: NodeId) -> f64 {
        self.inner.get(&node).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.inner.contains_key(&node)
    }

    /// Raise the entry for `node` to `candidate` if that is an improvement.
    /// Returns true if the map changed.
    pub fn relax(&mut self, node: NodeId, candidate: f64) -> bool {
        if candidate > self.get(node) {
            self.inner.insert(node, candidate);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.inner.iter().map(|(k, v)| (*k, *v))
    }
}

impl From<&Neighbors> for PathStrengths {
    fn from(neighbors: &Neighbors) -> Self {
        Self { inner: neighbors.clone() }
    }
}

impl FromIterator<(NodeId, f64)> for PathStrengths {
    fn from_iter<I: IntoIterator<Item = (NodeId, f64)>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl IntoIterator for PathStrengths {
    type Item = (NodeId, f64);
    type IntoIter = hashbrown::hash_map::IntoIter<NodeId, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
