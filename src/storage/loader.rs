//! Corpus loader — similarity records and seed lists.
//!
//! ```text
//! similarity.csv   itemA,itemB,weight   (one undirected edge per line)
//! positive.txt     one item name per line
//! negative.txt     one item name per line
//! ```
//!
//! Every error here is fatal: a corpus is either loaded completely or not
//! at all, so propagation never starts on partially-invalid data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;
use tracing::{debug, info, warn};

use crate::config::{LexiconConfig, UnknownSeedPolicy};
use crate::model::*;
use crate::{Error, Result};
use super::Corpus;

pub const SIMILARITY_FILE: &str = "similarity.csv";
pub const POSITIVE_FILE: &str = "positive.txt";
pub const NEGATIVE_FILE: &str = "negative.txt";

/// Read `itemA,itemB,weight` records into a vocabulary and a symmetric graph.
///
/// Identifiers are assigned on first occurrence. Blank lines are skipped and
/// fields are trimmed. Extra fields past the weight are ignored.
pub fn load_similarities<R: BufRead>(reader: R) -> Result<(Vocabulary, SimilarityGraph)> {
    let mut vocabulary = Vocabulary::new();
    let mut graph = SimilarityGraph::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.split(',').map(str::trim);
        let (Some(a), Some(b), Some(raw)) = (fields.next(), fields.next(), fields.next()) else {
            return Err(Error::Load {
                line: line_no,
                message: format!("expected `itemA,itemB,weight`, got {line:?}"),
            });
        };
        if a.is_empty() || b.is_empty() {
            return Err(Error::Load { line: line_no, message: "empty item name".into() });
        }

        let weight = parse_weight(raw, line_no)?;
        let a = vocabulary.intern(a);
        let b = vocabulary.intern(b);
        graph.add_edge(a, b, weight);
    }

    debug!(items = vocabulary.len(), edges = graph.edge_count(), "similarity graph loaded");
    Ok((vocabulary, graph))
}

fn parse_weight(raw: &str, line: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(Error::InvalidWeight { line, value: raw.to_string() }),
    }
}

/// Read a newline-delimited seed list and resolve each name.
pub fn load_seeds<R: BufRead>(
    reader: R,
    vocabulary: &Vocabulary,
    polarity: Polarity,
    policy: UnknownSeedPolicy,
) -> Result<HashSet<NodeId>> {
    let mut seeds = HashSet::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if let Some(id) = resolve_seed(vocabulary, name, polarity, policy)? {
            seeds.insert(id);
        }
    }
    Ok(seeds)
}

pub(crate) fn resolve_seed(
    vocabulary: &Vocabulary,
    name: &str,
    polarity: Polarity,
    policy: UnknownSeedPolicy,
) -> Result<Option<NodeId>> {
    match (vocabulary.id(name), policy) {
        (Some(id), _) => Ok(Some(id)),
        (None, UnknownSeedPolicy::Reject) => Err(Error::UnknownSeed {
            name: name.to_string(),
            polarity,
        }),
        (None, UnknownSeedPolicy::Skip) => {
            warn!(seed = name, %polarity, "seed not in vocabulary, skipping");
            Ok(None)
        }
    }
}

/// Load `similarity.csv`, `positive.txt` and `negative.txt` from `dir`.
#[tracing::instrument(skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn load_corpus_dir(dir: impl AsRef<Path>, policy: UnknownSeedPolicy) -> Result<Corpus> {
    let dir = dir.as_ref();
    let (vocabulary, graph) = load_similarities(open(&dir.join(SIMILARITY_FILE))?)?;

    let positive = load_seeds(open(&dir.join(POSITIVE_FILE))?, &vocabulary, Polarity::Positive, policy)?;
    let negative = load_seeds(open(&dir.join(NEGATIVE_FILE))?, &vocabulary, Polarity::Negative, policy)?;

    info!(
        items = vocabulary.len(),
        edges = graph.edge_count(),
        positive = positive.len(),
        negative = negative.len(),
        "corpus loaded"
    );
    Ok(Corpus::new(vocabulary, graph, SeedSets::from_sets(positive, negative)))
}

/// [`load_corpus_dir`] with the unknown-seed policy taken from `config`.
pub fn load_corpus_dir_with_config(dir: impl AsRef<Path>, config: &LexiconConfig) -> Result<Corpus> {
    load_corpus_dir(dir, config.unknown_seeds)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    Ok(BufReader::new(File::open(path)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_similarities() {
        let csv = "a,b,0.8\nb,c,0.5\n";
        let (vocab, graph) = load_similarities(csv.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 3);
        let (a, b, c) = (vocab.id("a").unwrap(), vocab.id("b").unwrap(), vocab.id("c").unwrap());
        assert_eq!(graph.weight(a, b), Some(0.8));
        assert_eq!(graph.weight(b, a), Some(0.8));
        assert_eq!(graph.weight(c, b), Some(0.5));
        assert_eq!(graph.weight(a, c), None);
    }

    #[test]
    fn test_blank_lines_and_whitespace() {
        let csv = "\n a , b , 0.25 \n\n";
        let (vocab, graph) = load_similarities(csv.as_bytes()).unwrap();
        assert_eq!(vocab.len(), 2);
        assert_eq!(graph.weight(NodeId(0), NodeId(1)), Some(0.25));
    }

    #[test]
    fn test_malformed_weight_is_fatal() {
        let csv = "a,b,0.8\nb,c,high\n";
        let err = load_similarities(csv.as_bytes()).unwrap_err();
        match err {
            Error::InvalidWeight { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_weight_is_fatal() {
        assert!(matches!(
            load_similarities("a,b,NaN".as_bytes()),
            Err(Error::InvalidWeight { line: 1, .. })
        ));
        assert!(matches!(
            load_similarities("a,b,inf".as_bytes()),
            Err(Error::InvalidWeight { line: 1, .. })
        ));
    }

    #[test]
    fn test_missing_field_is_fatal() {
        let err = load_similarities("a,b\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Load { line: 1, .. }));
    }

    #[test]
    fn test_load_seeds_resolves_names() {
        let (vocab, _) = load_similarities("good,fine,0.7\nbad,awful,0.9\n".as_bytes()).unwrap();
        let seeds = load_seeds(
            "good\n\nfine\ngood\n".as_bytes(),
            &vocab,
            Polarity::Positive,
            UnknownSeedPolicy::Reject,
        )
        .unwrap();
        assert_eq!(seeds.len(), 2);
        assert!(seeds.contains(&vocab.id("good").unwrap()));
    }

    #[test]
    fn test_unknown_seed_rejected() {
        let (vocab, _) = load_similarities("good,fine,0.7\n".as_bytes()).unwrap();
        let err = load_seeds("nope\n".as_bytes(), &vocab, Polarity::Negative, UnknownSeedPolicy::Reject)
            .unwrap_err();
        match err {
            Error::UnknownSeed { name, polarity } => {
                assert_eq!(name, "nope");
                assert_eq!(polarity, Polarity::Negative);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_seed_skipped() {
        let (vocab, _) = load_similarities("good,fine,0.7\n".as_bytes()).unwrap();
        let seeds = load_seeds("nope\ngood\n".as_bytes(), &vocab, Polarity::Positive, UnknownSeedPolicy::Skip)
            .unwrap();
        assert_eq!(seeds.len(), 1);
    }
}
