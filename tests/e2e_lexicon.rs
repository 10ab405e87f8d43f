//! End-to-end tests for lexicon induction.
//!
//! Each test exercises: corpus → propagate (worker pool) → aggregate →
//! lexicon, through the public API only.

use pretty_assertions::assert_eq;
use polarity_rs::{
    build_lexicon, propagate, run_all, Corpus, Error, LexiconConfig, NodeId, Polarity,
};

// ============================================================================
// Helper: the three-node chain a –0.8– b –0.5– c
// ============================================================================

fn abc_corpus() -> Corpus {
    Corpus::builder()
        .edge("a", "b", 0.8)
        .edge("b", "c", 0.5)
        .positive("a")
        .negative("c")
        .build()
        .unwrap()
}

/// A small sentiment graph with two clusters joined by a weak bridge.
fn sentiment_corpus() -> Corpus {
    Corpus::builder()
        .edge("good", "great", 0.9)
        .edge("good", "nice", 0.8)
        .edge("nice", "pleasant", 0.7)
        .edge("great", "excellent", 0.9)
        .edge("pleasant", "okay", 0.3)
        .edge("okay", "mediocre", 0.3)
        .edge("mediocre", "poor", 0.7)
        .edge("poor", "bad", 0.8)
        .edge("bad", "awful", 0.9)
        .edge("awful", "terrible", 0.9)
        .positive("good")
        .positive("excellent")
        .negative("bad")
        .negative("terrible")
        .build()
        .unwrap()
}

// ============================================================================
// 1. The a–b–c scenario, step by step
// ============================================================================

#[test]
fn test_abc_scenario_propagation() {
    let corpus = abc_corpus();
    let (a, b, c) = (corpus.id("a").unwrap(), corpus.id("b").unwrap(), corpus.id("c").unwrap());

    let from_a: Vec<(NodeId, f64)> = propagate(corpus.graph(), a, 1).into_iter().collect();
    let from_c: Vec<(NodeId, f64)> = propagate(corpus.graph(), c, 1).into_iter().collect();
    assert_eq!(from_a, vec![(b, 0.8)]);
    assert_eq!(from_c, vec![(b, 0.5)]);
}

#[test]
fn test_abc_scenario_zero_threshold_keeps_zero_scores() {
    let lexicon = build_lexicon(&abc_corpus(), 1, 0.0, 2).unwrap();

    assert_eq!(lexicon.stats.total_positive, 0.8);
    assert_eq!(lexicon.stats.total_negative, 0.5);
    assert_eq!(lexicon.stats.beta, 1.6);
    assert_eq!(lexicon.get("b"), Some(0.0));
    assert_eq!(lexicon.get("a"), Some(0.0));
    assert_eq!(lexicon.get("c"), Some(0.0));
}

#[test]
fn test_abc_scenario_positive_threshold_omits_everything() {
    let lexicon = build_lexicon(&abc_corpus(), 1, 0.01, 2).unwrap();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.stats.omitted, 3);
    assert_eq!(lexicon.score("b"), 0.0);
}

// ============================================================================
// 2. Polarity separates the clusters
// ============================================================================

#[test]
fn test_clusters_get_opposite_signs() {
    let lexicon = build_lexicon(&sentiment_corpus(), 3, 0.0, 4).unwrap();

    for word in ["great", "nice", "pleasant"] {
        assert!(lexicon.score(word) > 0.0, "{word} should be positive: {}", lexicon.score(word));
    }
    for word in ["awful", "poor"] {
        assert!(lexicon.score(word) < 0.0, "{word} should be negative: {}", lexicon.score(word));
    }
}

#[test]
fn test_threshold_omission_matches_scores() {
    let corpus = sentiment_corpus();
    let all = build_lexicon(&corpus, 3, 0.0, 2).unwrap();
    let gamma = 0.5;
    let kept = build_lexicon(&corpus, 3, gamma, 2).unwrap();

    for (item, score) in &all.scores {
        if score.abs() >= gamma {
            let kept_score = kept.get(item).unwrap();
            assert!((kept_score - score).abs() < 1e-9, "{item}: {kept_score} vs {score}");
        } else {
            assert!(!kept.contains(item), "{item} ({score}) should have been omitted");
        }
    }
}

// ============================================================================
// 3. Worker count does not change the result
// ============================================================================

#[test]
fn test_worker_count_order_independence() {
    let corpus = sentiment_corpus();
    let single = build_lexicon(&corpus, 4, 0.05, 1).unwrap();

    for workers in [2, 3, 8] {
        let pooled = build_lexicon(&corpus, 4, 0.05, workers).unwrap();
        assert_eq!(single, pooled, "workers = {workers}");
    }
}

// ============================================================================
// 4. Error conditions
// ============================================================================

#[test]
fn test_zero_workers_is_config_error() {
    let err = build_lexicon(&abc_corpus(), 1, 0.0, 0).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_negative_threshold_is_config_error() {
    let err = build_lexicon(&abc_corpus(), 1, -0.5, 1).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_no_negative_seeds_is_degenerate() {
    let corpus = Corpus::builder().edge("a", "b", 0.8).positive("a").build().unwrap();
    let err = build_lexicon(&corpus, 2, 0.0, 2).unwrap_err();
    assert!(matches!(
        err,
        Error::DegenerateNormalization { polarity: Polarity::Negative, .. }
    ));
}

#[test]
fn test_isolated_negative_seed_is_degenerate() {
    // "c" has a self-loop of weight 0, so it propagates no mass.
    let corpus = Corpus::builder()
        .edge("a", "b", 0.8)
        .edge("c", "c", 0.0)
        .positive("a")
        .negative("c")
        .build()
        .unwrap();
    let err = build_lexicon(&corpus, 3, 0.0, 1).unwrap_err();
    assert!(matches!(err, Error::DegenerateNormalization { .. }));
}

#[test]
fn test_isolated_positive_seed_scores_zero() {
    let corpus = Corpus::builder()
        .edge("p", "x", 0.0)
        .edge("n", "y", 0.5)
        .positive("p")
        .negative("n")
        .build()
        .unwrap();
    let lexicon = build_lexicon(&corpus, 2, 0.0, 2).unwrap();
    assert_eq!(lexicon.stats.total_positive, 0.0);
    assert_eq!(lexicon.stats.beta, 0.0);
    assert_eq!(lexicon.len(), 4);
    for item in ["p", "x", "n", "y"] {
        assert_eq!(lexicon.get(item), Some(0.0), "{item}");
    }
}

// ============================================================================
// 5. Config-driven runs and the raw stream
// ============================================================================

#[test]
fn test_config_driven_run() {
    let corpus = sentiment_corpus();
    let config = LexiconConfig::from_json_str(
        r#"{"hop_budget": 3, "polarity_threshold": 0.0, "workers": 2, "queue_capacity": 1}"#,
    )
    .unwrap();
    let via_config = corpus.build_lexicon(&config).unwrap();
    let direct = build_lexicon(&corpus, 3, 0.0, 3).unwrap();
    assert_eq!(via_config.len(), direct.len());
    assert_eq!(via_config.stats.positive_results, 2);
    assert_eq!(via_config.stats.negative_results, 2);
}

#[test]
fn test_stream_delivers_every_seed_once() {
    let corpus = sentiment_corpus();
    let mut seen = run_all(corpus.graph(), corpus.seeds(), 2, 3, 2, |stream| {
        stream.map(|r| (r.seed, r.polarity)).collect::<Vec<_>>()
    })
    .unwrap();
    seen.sort();

    let mut expected: Vec<_> = corpus.seeds().tagged().collect();
    expected.sort();
    assert_eq!(seen, expected);
}
