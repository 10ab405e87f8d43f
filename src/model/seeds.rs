//! Seed sets — nodes whose polarity is known up front.

use hashbrown::HashSet;
use super::{NodeId, Polarity};

/// Positive and negative seed sets.
///
/// Membership is a set: order is irrelevant and duplicates collapse. The two
/// sets are expected to be disjoint but nothing enforces it; a node seeded in
/// both classes contributes to each class independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSets {
    positive: HashSet<NodeId>,
    negative: HashSet<NodeId>,
}

impl SeedSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sets(positive: HashSet<NodeId>, negative: HashSet<NodeId>) -> Self {
        Self { positive, negative }
    }

    /// Returns true if the seed was not already present in that class.
    pub fn insert(&mut self, polarity: Polarity, id: NodeId) -> bool {
        match polarity {
            Polarity::Positive => self.positive.insert(id),
            Polarity::Negative => self.negative.insert(id),
        }
    }

    pub fn get(&self, polarity: Polarity) -> &HashSet<NodeId> {
        match polarity {
            Polarity::Positive => &self.positive,
            Polarity::Negative => &self.negative,
        }
    }

    pub fn positive(&self) -> &HashSet<NodeId> {
        &self.positive
    }

    pub fn negative(&self) -> &HashSet<NodeId> {
        &self.negative
    }

    /// Total number of propagation tasks: one per seed per class.
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every seed tagged with the class it came from.
    pub fn tagged(&self) -> impl Iterator<Item = (NodeId, Polarity)> + '_ {
        Polarity::BOTH
            .into_iter()
            .flat_map(move |p| self.get(p).iter().map(move |id| (*id, p)))
    }
}
