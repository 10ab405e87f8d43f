//! # Lexicon Data Model
//!
//! Plain data shared by the loader, the propagation engine and the
//! aggregator. No I/O, no threads, no logging in here.

pub mod node;
pub mod vocabulary;
pub mod graph;
pub mod seeds;
pub mod strength;
pub mod lexicon;

pub use node::{NodeId, Polarity};
pub use vocabulary::Vocabulary;
pub use graph::{Neighbors, SimilarityGraph};
pub use seeds::SeedSets;
pub use strength::PathStrengths;
pub use lexicon::{Lexicon, LexiconStats};
