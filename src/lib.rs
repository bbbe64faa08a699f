//! # Acrotext - find acrostics hidden in text
//!
//! Acrotext pulls candidate hidden messages out of prose or verse by
//! selecting letters at fixed positions, then scores each candidate against
//! a dictionary.
//!
//! ## Strategies
//!
//! - First character of every line
//! - Last letter of every line
//! - First letter of every sentence (sentences may span lines)
//! - Second letter of every line
//! - First letter of the second word of every line
//! - First and last letters of every line
//!
//! Only basic Latin and Cyrillic letters count. A candidate is kept when it
//! has more than [`MIN_CANDIDATE_LEN`] letters after cleaning.
//!
//! ## Example Usage
//!
//! ```rust
//! use acrotext::{analyze, Strategy};
//!
//! let candidates = analyze("Alpha\nBeta\nGamma");
//! assert_eq!(candidates.get_strategy(Strategy::FirstLetters), Some("ABG"));
//!
//! // Nothing to extract from empty text
//! assert!(analyze("").is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`text`]: Line/sentence segmentation and letter filtering
//! - [`strategy`]: The extraction strategies and their registry
//! - [`analyzer`]: Running all strategies with failure isolation
//! - [`scorer`]: Dictionary scoring of candidates
//! - [`report`]: Thresholding and the result table
//! - [`config`]: Settings

/// Candidates this short or shorter are discarded.
pub const MIN_CANDIDATE_LEN: usize = 2;

pub mod analyzer;
pub mod config;
pub mod report;
pub mod scorer;
pub mod strategy;
pub mod text;

// Re-export commonly used types at the crate root
pub use analyzer::{analyze, isolate, run_isolated, Analyzer, Candidate, Candidates};
pub use config::{ConfigError, Settings};
pub use report::{FileReport, ReportRow};
pub use scorer::{DictionaryScorer, Score, Scorer, ScorerError};
pub use strategy::{InputKind, Source, Strategy, StrategyError};
pub use text::{clean, segment_lines, segment_sentences};
