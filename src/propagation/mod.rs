//! # Seed Propagation
//!
//! Bounded maximum-product relaxation from a single seed, plus the worker
//! pool that runs it for every seed of a corpus.
//!
//! For a seed `s`, the strength of node `j` is the best product of edge
//! weights over paths from `s` that the relaxation discovers within
//! `hop_budget` rounds:
//!
//! ```text
//! round 0      strengths = w(s, ·)            frontier = {s}
//! round t+1    strengths[j] = max(strengths[j], strengths[k] * w(k, j))
//!                              for k in frontier, j in neighbors(k)
//!              frontier ∪= neighbors(frontier)
//! ```
//!
//! The frontier only ever grows. Nodes keep being re-relaxed in every round
//! after they were first reached, which is what gives `hop_budget > 1` its
//! results; pruning visited nodes would change them.

pub mod scheduler;

use hashbrown::{HashMap, HashSet};
use crate::model::*;

pub use scheduler::{run_all, ResultStream, SeedResult};

/// Path strengths from `seed` after `hop_budget` relaxation rounds.
///
/// All candidates of a round are computed from the strengths as they stood
/// when the round began; improvements are applied together when it ends.
/// The result therefore depends only on the graph, the seed and the budget,
/// never on hash iteration order.
///
/// A seed with no edges produces an empty map.
pub fn propagate(graph: &SimilarityGraph, seed: NodeId, hop_budget: usize) -> PathStrengths {
    let Some(direct) = graph.neighbors(seed) else {
        return PathStrengths::new();
    };

    let mut strengths = PathStrengths::from(direct);
    let mut frontier: HashSet<NodeId> = HashSet::new();
    frontier.insert(seed);

    for _ in 0..hop_budget {
        let mut improved: HashMap<NodeId, f64> = HashMap::new();
        let mut reached: Vec<NodeId> = Vec::new();

        for &k in &frontier {
            let Some(neighbors) = graph.neighbors(k) else { continue };
            let base = strengths.get(k);
            for (&j, &w) in neighbors {
                let candidate = base * w;
                if candidate > strengths.get(j) {
                    improved
                        .entry(j)
                        .and_modify(|best| *best = best.max(candidate))
                        .or_insert(candidate);
                }
                reached.push(j);
            }
        }

        for (node, candidate) in improved {
            strengths.relax(node, candidate);
        }
        frontier.extend(reached);
    }

    strengths
}
