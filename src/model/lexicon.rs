//! Lexicon — the final item → score mapping.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Summary of one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconStats {
    /// Propagation results consumed for the positive class.
    pub positive_results: usize,
    /// Propagation results consumed for the negative class.
    pub negative_results: usize,
    /// Sum of every strength accumulated into the positive class.
    pub total_positive: f64,
    /// Sum of every strength accumulated into the negative class.
    pub total_negative: f64,
    /// Normalization factor `total_positive / total_negative`.
    pub beta: f64,
    pub vocabulary_size: usize,
    /// Items dropped because `|score| < threshold`.
    pub omitted: usize,
}

/// Signed polarity score per item.
///
/// Only items whose absolute score reached the threshold are present;
/// absent items are neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub scores: HashMap<String, f64>,
    pub stats: LexiconStats,
}

impl Lexicon {
    pub fn get(&self, item: &str) -> Option<f64> {
        self.scores.get(item).copied()
    }

    /// Score of `item`, `0.0` when it was omitted.
    pub fn score(&self, item: &str) -> f64 {
        self.get(item).unwrap_or(0.0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.scores.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries sorted by descending score, ties broken by name.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> =
            self.scores.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}
