//! Candidate extraction across all strategies.
//!
//! [`analyze`] never fails. Every strategy runs in isolation: an error or a
//! panic in one of them only removes that strategy's entry from the result.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::strategy::{InputKind, Source, Strategy, StrategyError};
use crate::text::{clean, segment_lines};
use crate::MIN_CANDIDATE_LEN;

/// A cleaned candidate produced by one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The strategy that produced it.
    pub strategy: Strategy,
    /// Letters only, longer than [`MIN_CANDIDATE_LEN`].
    pub text: String,
}

impl Candidate {
    /// Display name of the producing strategy.
    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }
}

/// Ordered mapping from strategy name to cleaned candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    entries: Vec<Candidate>,
}

impl Candidates {
    /// Returns the candidate for a strategy display name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.text.as_str())
    }

    /// Returns the candidate for a strategy.
    pub fn get_strategy(&self, strategy: Strategy) -> Option<&str> {
        self.get(strategy.name())
    }

    /// Iterates candidates in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Strategy names present, in registry order.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(Candidate::name).collect()
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Runs a fixed, ordered set of strategies over text.
#[derive(Debug, Clone)]
pub struct Analyzer {
    strategies: Vec<Strategy>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl Analyzer {
    /// Creates an analyzer with the full registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry, in presentation order.
    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Extracts every candidate from `text`.
    ///
    /// Empty text yields an empty mapping without running any strategy.
    pub fn analyze(&self, text: &str) -> Candidates {
        if text.is_empty() {
            return Candidates::default();
        }

        let lines = segment_lines(text);
        trace!(lines = lines.len(), "segmented input");

        let outcomes = self.strategies.iter().map(|&strategy| {
            let source = match strategy.input_kind() {
                InputKind::Lines => Source::Lines(&lines),
                InputKind::Text => Source::Text(text),
            };
            (strategy, run_isolated(strategy, source))
        });

        collect_candidates(outcomes)
    }

    /// Like [`Analyzer::analyze`] but accepts a missing text.
    pub fn analyze_opt(&self, text: Option<&str>) -> Candidates {
        text.map(|t| self.analyze(t)).unwrap_or_default()
    }
}

/// Extracts candidates with the default registry.
pub fn analyze(text: &str) -> Candidates {
    Analyzer::new().analyze(text)
}

/// Runs one strategy, turning a panic into [`StrategyError::Panicked`].
pub fn run_isolated(strategy: Strategy, source: Source<'_>) -> Result<String, StrategyError> {
    isolate(strategy, || strategy.extract(source))
}

/// Calls `extract` on behalf of `strategy`, catching any panic.
pub fn isolate<F>(strategy: Strategy, extract: F) -> Result<String, StrategyError>
where
    F: FnOnce() -> Result<String, StrategyError>,
{
    panic::catch_unwind(AssertUnwindSafe(extract)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_default();
        Err(StrategyError::Panicked {
            strategy: strategy.name(),
            message,
        })
    })
}

/// Folds per-strategy outcomes into the result mapping.
///
/// Failed strategies and candidates of [`MIN_CANDIDATE_LEN`] letters or
/// fewer are dropped.
pub fn collect_candidates<I>(outcomes: I) -> Candidates
where
    I: IntoIterator<Item = (Strategy, Result<String, StrategyError>)>,
{
    let mut entries = Vec::new();

    for (strategy, outcome) in outcomes {
        let raw = match outcome {
            Ok(raw) => raw,
            Err(err) => {
                debug!(strategy = strategy.name(), error = %err, "strategy skipped");
                continue;
            }
        };

        let text = clean(&raw);
        if text.chars().count() <= MIN_CANDIDATE_LEN {
            trace!(strategy = strategy.name(), candidate = %text, "candidate too short");
            continue;
        }

        entries.push(Candidate { strategy, text });
    }

    Candidates { entries }
}
