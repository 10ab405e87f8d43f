//! # Polarity Aggregation
//!
//! Folds per-seed path strengths into two class totals, normalizes them
//! against each other and thresholds the result:
//!
//! ```text
//! beta     = total_p / total_n
//! score(v) = pos[v] - beta * neg[v]        kept iff |score(v)| >= threshold
//! ```
//!
//! The aggregator is the only writer of the totals and runs on a single
//! thread, draining the scheduler's stream. Results are buffered by
//! `(polarity, seed)` and folded in that order, each seed's entries in
//! `NodeId` order, so the floating-point sums do not depend on which worker
//! finished first.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use tracing::debug;

use crate::config::validate_threshold;
use crate::model::*;
use crate::propagation::SeedResult;
use crate::{Error, Result};

/// Collects drained per-seed results for one run.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    pending: BTreeMap<(Polarity, NodeId), Vec<PathStrengths>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of one seed's strengths.
    pub fn accumulate(&mut self, result: SeedResult) {
        self.pending
            .entry((result.polarity, result.seed))
            .or_default()
            .push(result.strengths);
    }

    /// Drain `results` to the end of the stream.
    pub fn consume(&mut self, results: impl IntoIterator<Item = SeedResult>) {
        for result in results {
            self.accumulate(result);
        }
    }

    /// Fold everything received so far into per-class totals.
    pub fn totals(&self) -> ClassTotals {
        let mut totals = ClassTotals::default();
        for ((polarity, _), maps) in &self.pending {
            for strengths in maps {
                let mut entries: Vec<(NodeId, f64)> = strengths.iter().collect();
                entries.sort_unstable_by_key(|(node, _)| *node);
                totals.add(*polarity, entries);
            }
        }
        totals
    }

    /// Score every vocabulary item and keep those with `|score| >= threshold`.
    pub fn finish(self, vocabulary: &Vocabulary, threshold: f64) -> Result<Lexicon> {
        validate_threshold(threshold)?;
        let totals = self.totals();
        let beta = totals.beta()?;

        let mut scores = HashMap::new();
        let mut omitted = 0;
        for (id, name) in vocabulary.iter() {
            let score = totals.total(Polarity::Positive, id) - beta * totals.total(Polarity::Negative, id);
            if score.abs() < threshold {
                omitted += 1;
                continue;
            }
            scores.insert(name.to_string(), score);
        }

        let stats = LexiconStats {
            positive_results: totals.positive_results,
            negative_results: totals.negative_results,
            total_positive: totals.total_p,
            total_negative: totals.total_n,
            beta,
            vocabulary_size: vocabulary.len(),
            omitted,
        };
        debug!(kept = scores.len(), omitted, beta, "aggregation finished");
        Ok(Lexicon { scores, stats })
    }
}

/// Per-node and grand totals of both classes.
#[derive(Debug, Clone, Default)]
pub struct ClassTotals {
    pos_totals: HashMap<NodeId, f64>,
    neg_totals: HashMap<NodeId, f64>,
    total_p: f64,
    total_n: f64,
    positive_results: usize,
    negative_results: usize,
}

impl ClassTotals {
    fn add(&mut self, polarity: Polarity, entries: Vec<(NodeId, f64)>) {
        let (totals, grand_total, count) = match polarity {
            Polarity::Positive => (&mut self.pos_totals, &mut self.total_p, &mut self.positive_results),
            Polarity::Negative => (&mut self.neg_totals, &mut self.total_n, &mut self.negative_results),
        };
        for (node, strength) in entries {
            *totals.entry(node).or_insert(0.0) += strength;
            *grand_total += strength;
        }
        *count += 1;
    }

    /// Accumulated total for `node` in `polarity`'s class.
    pub fn total(&self, polarity: Polarity, node: NodeId) -> f64 {
        let totals = match polarity {
            Polarity::Positive => &self.pos_totals,
            Polarity::Negative => &self.neg_totals,
        };
        totals.get(&node).copied().unwrap_or(0.0)
    }

    /// Grand sum of every strength added to `polarity`'s class.
    pub fn class_total(&self, polarity: Polarity) -> f64 {
        match polarity {
            Polarity::Positive => self.total_p,
            Polarity::Negative => self.total_n,
        }
    }

    /// Normalization factor `total_p / total_n`.
    ///
    /// A positive class with no mass gives `beta = 0`, which is finite.
    ///
    /// # Errors
    ///
    /// [`Error::DegenerateNormalization`] when the negative class has no mass,
    /// or either total is non-finite.
    pub fn beta(&self) -> Result<f64> {
        for polarity in Polarity::BOTH {
            let total = self.class_total(polarity);
            if !total.is_finite() {
                return Err(Error::DegenerateNormalization { polarity, total });
            }
        }
        if self.total_n == 0.0 {
            return Err(Error::DegenerateNormalization { polarity: Polarity::Negative, total: self.total_n });
        }
        let beta = self.total_p / self.total_n;
        if !beta.is_finite() {
            return Err(Error::DegenerateNormalization { polarity: Polarity::Negative, total: self.total_n });
        }
        Ok(beta)
    }
}

/// Drain a result stream and produce the thresholded lexicon.
pub fn aggregate(
    results: impl IntoIterator<Item = SeedResult>,
    vocabulary: &Vocabulary,
    threshold: f64,
) -> Result<Lexicon> {
    let mut aggregator = Aggregator::new();
    aggregator.consume(results);
    aggregator.finish(vocabulary, threshold)
}
