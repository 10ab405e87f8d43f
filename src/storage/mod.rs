//! # Corpus Store
//!
//! The in-memory graph store: vocabulary, similarity graph and seed sets.
//! A `Corpus` is assembled once (from files via [`loader`] or in code via
//! [`CorpusBuilder`]) and is read-only afterwards, which is what lets the
//! propagation workers share it by plain reference.
//!
//! ## Construction paths
//!
//! | Path | Entry point |
//! |------|-------------|
//! | Directory with `similarity.csv`, `positive.txt`, `negative.txt` | [`loader::load_corpus_dir`] |
//! | Arbitrary readers | [`loader::load_similarities`] + [`loader::load_seeds`] |
//! | Programmatic | [`CorpusBuilder`] |

pub mod loader;

use crate::config::UnknownSeedPolicy;
use crate::model::*;
use crate::{Error, Result};

pub use loader::{load_corpus_dir, load_corpus_dir_with_config, load_seeds, load_similarities};

// ============================================================================
// Corpus
// ============================================================================

/// Vocabulary, similarity graph and seeds for one lexicon run.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    vocabulary: Vocabulary,
    graph: SimilarityGraph,
    seeds: SeedSets,
}

impl Corpus {
    pub fn new(vocabulary: Vocabulary, graph: SimilarityGraph, seeds: SeedSets) -> Self {
        Self { vocabulary, graph, seeds }
    }

    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    pub fn seeds(&self) -> &SeedSets {
        &self.seeds
    }

    /// Resolve an item name, for callers working with names.
    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.vocabulary.id(name)
    }
}

// ============================================================================
// CorpusBuilder
// ============================================================================

/// Programmatic corpus construction.
///
/// Edges intern their endpoints in first-seen order exactly like the file
/// loader. Seeds are resolved against the vocabulary at [`build`] time, so
/// they may be declared before the edges that introduce them.
///
/// [`build`]: CorpusBuilder::build
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    vocabulary: Vocabulary,
    graph: SimilarityGraph,
    pending_seeds: Vec<(String, Polarity)>,
    unknown_seeds: UnknownSeedPolicy,
}

impl CorpusBuilder {
    pub fn edge(mut self, a: &str, b: &str, weight: f64) -> Self {
        self.add_edge(a, b, weight);
        self
    }

    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> &mut Self {
        let a = self.vocabulary.intern(a);
        let b = self.vocabulary.intern(b);
        self.graph.add_edge(a, b, weight);
        self
    }

    pub fn positive(mut self, name: &str) -> Self {
        self.pending_seeds.push((name.to_owned(), Polarity::Positive));
        self
    }

    pub fn negative(mut self, name: &str) -> Self {
        self.pending_seeds.push((name.to_owned(), Polarity::Negative));
        self
    }

    pub fn unknown_seeds(mut self, policy: UnknownSeedPolicy) -> Self {
        self.unknown_seeds = policy;
        self
    }

    pub fn build(self) -> Result<Corpus> {
        for (from, to, weight) in self.graph.entries() {
            if !weight.is_finite() {
                let name = |id| self.vocabulary.name(id).unwrap_or_default().to_owned();
                return Err(Error::InvalidEdgeWeight { from: name(from), to: name(to), weight });
            }
        }

        let mut seeds = SeedSets::new();
        for (name, polarity) in &self.pending_seeds {
            if let Some(id) = loader::resolve_seed(&self.vocabulary, name, *polarity, self.unknown_seeds)? {
                seeds.insert(*polarity, id);
            }
        }
        Ok(Corpus::new(self.vocabulary, self.graph, seeds))
    }
}
