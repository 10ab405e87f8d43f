//! # polarity-rs — Graph Propagation Lexicon Induction
//!
//! Induces a signed polarity score (e.g. sentiment) for every item of a
//! vocabulary from a weighted similarity graph and two small seed sets.
//!
//! ## Design Principles
//!
//! 1. **Read-only store**: a `Corpus` is built once and shared by reference
//!    with every propagation worker; nothing locks the graph
//! 2. **Owned results**: each seed's `PathStrengths` is produced by one
//!    worker and moved to the aggregator
//! 3. **Single writer**: only the aggregator touches the class totals
//! 4. **Fail whole**: a run returns a complete lexicon or a named error
//!
//! ## Quick Start
//!
//! ```rust
//! use polarity_rs::{build_lexicon, Corpus};
//!
//! # fn example() -> polarity_rs::Result<()> {
//! let corpus = Corpus::builder()
//!     .edge("good", "nice", 0.9)
//!     .edge("nice", "fine", 0.6)
//!     .edge("fine", "poor", 0.2)
//!     .edge("poor", "bad", 0.9)
//!     .positive("good")
//!     .negative("bad")
//!     .build()?;
//!
//! let lexicon = build_lexicon(&corpus, 2, 0.01, 4)?;
//! assert!(lexicon.score("nice") > 0.0);
//! assert!(lexicon.score("poor") < 0.0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Threads |
//! |-------|--------|---------|
//! | Load | `storage` | caller |
//! | Propagate | `propagation` | `workers` |
//! | Aggregate | `aggregate` | caller |
//! | Export | `export` | caller |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod storage;
pub mod propagation;
pub mod aggregate;
pub mod export;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    NodeId, Polarity, Vocabulary, SimilarityGraph, SeedSets,
    PathStrengths, Lexicon, LexiconStats,
};
pub use config::{LexiconConfig, UnknownSeedPolicy};
pub use storage::{Corpus, CorpusBuilder};
pub use propagation::{propagate, run_all, ResultStream, SeedResult};
pub use aggregate::{aggregate, Aggregator, ClassTotals};

use tracing::info;

// ============================================================================
// Entry points
// ============================================================================

/// Run propagation for every seed on `workers` threads and aggregate the
/// results into a lexicon. Blocks until the whole run completes.
///
/// # Errors
///
/// - [`Error::Config`] for `workers < 1` or an invalid threshold, before any
///   work starts.
/// - [`Error::DegenerateNormalization`] if the negative seeds propagated no
///   strength at all. A positive class with no strength yields all-zero
///   scores instead.
/// - [`Error::Worker`] if a propagation thread panicked.
#[tracing::instrument(skip(corpus), fields(items = corpus.vocabulary().len()))]
pub fn build_lexicon(
    corpus: &Corpus,
    hop_budget: usize,
    polarity_threshold: f64,
    workers: usize,
) -> Result<Lexicon> {
    let config = LexiconConfig::new()
        .with_hop_budget(hop_budget)
        .with_threshold(polarity_threshold)
        .with_workers(workers);
    corpus.build_lexicon(&config)
}

impl Corpus {
    /// [`build_lexicon`] driven by a [`LexiconConfig`].
    pub fn build_lexicon(&self, config: &LexiconConfig) -> Result<Lexicon> {
        config.validate()?;

        let seeds = self.seeds();
        info!(
            positive = seeds.positive().len(),
            negative = seeds.negative().len(),
            workers = config.workers,
            hop_budget = config.hop_budget,
            "propagating seeds"
        );

        let aggregator = run_all(
            self.graph(),
            seeds,
            config.hop_budget,
            config.workers,
            config.queue_capacity(),
            |stream| {
                let mut aggregator = Aggregator::new();
                aggregator.consume(stream);
                aggregator
            },
        )?;

        let lexicon = aggregator.finish(self.vocabulary(), config.polarity_threshold)?;
        info!(entries = lexicon.len(), beta = lexicon.stats.beta, "lexicon built");
        Ok(lexicon)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Malformed similarity record at line {line}: {message}")]
    Load { line: usize, message: String },

    #[error("Invalid similarity weight at line {line}: {value:?}")]
    InvalidWeight { line: usize, value: String },

    #[error("Invalid similarity weight on edge {from:?} -- {to:?}: {weight}")]
    InvalidEdgeWeight { from: String, to: String, weight: f64 },

    #[error("Unknown {polarity} seed: {name:?} is not in the vocabulary")]
    UnknownSeed { name: String, polarity: Polarity },

    #[error("Degenerate normalization: {polarity} seeds accumulated total strength {total}")]
    DegenerateNormalization { polarity: Polarity, total: f64 },

    #[error("Worker error: {0}")]
    Worker(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
