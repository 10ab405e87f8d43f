//! Node identity and polarity classes.

use serde::{Deserialize, Serialize};

/// Dense vocabulary identifier, assigned in first-seen order by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which seed class a node (or a propagation result) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const BOTH: [Polarity; 2] = [Polarity::Positive, Polarity::Negative];

    pub fn is_positive(self) -> bool {
        matches!(self, Polarity::Positive)
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Polarity::Positive => f.write_str("positive"),
            Polarity::Negative => f.write_str("negative"),
        }
    }
}
