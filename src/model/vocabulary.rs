//! Vocabulary — the name ↔ identifier bijection.

use hashbrown::HashMap;
use super::NodeId;

/// Bijection between item names and dense [`NodeId`]s.
///
/// Identifiers are handed out in first-seen order, so they are always
/// contiguous in `[0, len)`. Once a `Vocabulary` leaves the loader it is
/// only read.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    ids: HashMap<String, NodeId>,
    names: Vec<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `name`, assigning the next identifier if it is new.
    pub(crate) fn intern(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = NodeId(self.names.len());
        self.names.push(name.to_owned());
        self.ids.insert(name.to_owned(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Items in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.names.iter().enumerate().map(|(i, n)| (NodeId(i), n.as_str()))
    }
}
