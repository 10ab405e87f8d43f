//! Run configuration.
//!
//! Every field has a default, so a config can be built from an empty JSON
//! object (`{}`) or with the `with_*` setters.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// How the loader treats seed names that are not in the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownSeedPolicy {
    /// Fail loading with [`Error::UnknownSeed`].
    #[default]
    Reject,
    /// Log a warning and drop the name.
    Skip,
}

/// Parameters of one lexicon induction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconConfig {
    /// Number of relaxation rounds per seed.
    pub hop_budget: usize,
    /// Minimum `|score|` for an item to appear in the lexicon (gamma).
    pub polarity_threshold: f64,
    /// Size of the propagation worker pool. Must be at least 1.
    pub workers: usize,
    /// Bound of the seed task queue. Defaults to `workers`.
    pub queue_capacity: Option<usize>,
    pub unknown_seeds: UnknownSeedPolicy,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            hop_budget: 3,
            polarity_threshold: 0.0,
            workers: std::thread::available_parallelism().map_or(1, |n| n.get()),
            queue_capacity: None,
            unknown_seeds: UnknownSeedPolicy::Reject,
        }
    }
}

impl LexiconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_hop_budget(mut self, hop_budget: usize) -> Self {
        self.hop_budget = hop_budget;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.polarity_threshold = threshold;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = Some(capacity);
        self
    }

    pub fn with_unknown_seeds(mut self, policy: UnknownSeedPolicy) -> Self {
        self.unknown_seeds = policy;
        self
    }

    /// Effective task queue bound.
    pub fn queue_capacity(&self) -> usize {
        self.queue_capacity.unwrap_or(self.workers).max(1)
    }

    /// Fail-fast checks, run before any work is scheduled.
    pub fn validate(&self) -> Result<()> {
        validate_workers(self.workers)?;
        validate_threshold(self.polarity_threshold)?;
        if self.queue_capacity == Some(0) {
            return Err(Error::Config("queue_capacity must be at least 1".into()));
        }
        Ok(())
    }
}

pub(crate) fn validate_workers(workers: usize) -> Result<()> {
    if workers < 1 {
        return Err(Error::Config(format!("workers must be at least 1, got {workers}")));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(Error::Config(format!(
            "polarity_threshold must be a finite value >= 0, got {threshold}"
        )));
    }
    Ok(())
}
