//! Dictionary scoring of candidates.
//!
//! A [`Scorer`] judges how word-like a candidate is. The bundled
//! [`DictionaryScorer`] segments the candidate into dictionary words and
//! reports the share of letters those words cover.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Errors that can occur when building a scorer.
#[derive(Error, Debug)]
pub enum ScorerError {
    #[error("Failed to read dictionary {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dictionary contains no usable words (min length {min_word_len})")]
    EmptyDictionary { min_word_len: usize },
}

/// How word-like a candidate is.
#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    /// Share of letters covered by dictionary words, in `[0, 1]`.
    pub value: f64,
    /// Candidate split into words and leftover runs, space separated.
    pub segmented: String,
}

impl Score {
    /// The score of an empty candidate.
    pub fn zero() -> Self {
        Self {
            value: 0.0,
            segmented: String::new(),
        }
    }
}

/// Judges candidates. Must accept any input, including the empty string.
pub trait Scorer {
    fn score(&self, candidate: &str) -> Score;
}

/// A scorer backed by a word list.
#[derive(Debug, Clone)]
pub struct DictionaryScorer {
    words: HashSet<String>,
    min_word_len: usize,
    max_word_len: usize,
}

/// Best segmentation of a prefix.
#[derive(Debug, Clone, Copy)]
struct Cell {
    covered: usize,
    pieces: usize,
    start: usize,
    is_word: bool,
}

impl Cell {
    fn beats(&self, other: &Cell) -> bool {
        self.covered > other.covered
            || (self.covered == other.covered && self.pieces < other.pieces)
    }
}

impl DictionaryScorer {
    /// Builds a scorer from words. Words are trimmed and lowercased; words
    /// shorter than `min_word_len` characters are ignored.
    pub fn from_words<I, S>(words: I, min_word_len: usize) -> Result<Self, ScorerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let min_word_len = min_word_len.max(1);
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| w.chars().count() >= min_word_len)
            .collect();

        if words.is_empty() {
            return Err(ScorerError::EmptyDictionary { min_word_len });
        }

        let max_word_len = words.iter().map(|w| w.chars().count()).max().unwrap_or(0);

        Ok(Self {
            words,
            min_word_len,
            max_word_len,
        })
    }

    /// Loads a word list with one word per line.
    pub fn load(path: &Path, min_word_len: usize) -> Result<Self, ScorerError> {
        let contents = fs::read_to_string(path).map_err(|source| ScorerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let scorer = Self::from_words(contents.lines(), min_word_len)?;
        debug!(
            path = %path.display(),
            words = scorer.len(),
            "loaded dictionary"
        );
        Ok(scorer)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns true if `word` (any case) is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn segment(&self, lowered: &[char]) -> Vec<Cell> {
        let n = lowered.len();
        let mut best = vec![
            Cell {
                covered: 0,
                pieces: 0,
                start: 0,
                is_word: false,
            };
            n + 1
        ];

        for end in 1..=n {
            let prev = best[end - 1];
            let mut cell = Cell {
                covered: prev.covered,
                pieces: prev.pieces + 1,
                start: end - 1,
                is_word: false,
            };

            let longest = self.max_word_len.min(end);
            for len in (self.min_word_len..=longest).rev() {
                let start = end - len;
                let piece: String = lowered[start..end].iter().collect();
                if !self.words.contains(&piece) {
                    continue;
                }
                let option = Cell {
                    covered: best[start].covered + len,
                    pieces: best[start].pieces + 1,
                    start,
                    is_word: true,
                };
                if option.beats(&cell) {
                    cell = option;
                }
            }

            best[end] = cell;
        }

        best
    }
}

impl Scorer for DictionaryScorer {
    fn score(&self, candidate: &str) -> Score {
        let original: Vec<char> = candidate.chars().collect();
        if original.is_empty() {
            return Score::zero();
        }

        // Lowercasing char by char keeps positions aligned
        let lowered: Vec<char> = original
            .iter()
            .map(|c| c.to_lowercase().next().unwrap_or(*c))
            .collect();

        let best = self.segment(&lowered);
        let n = original.len();

        let mut spans = Vec::new();
        let mut end = n;
        while end > 0 {
            let cell = best[end];
            spans.push((cell.start, end, cell.is_word));
            end = cell.start;
        }
        spans.reverse();

        // Merge adjacent leftover letters into runs
        let mut pieces: Vec<String> = Vec::new();
        let mut run = String::new();
        for (start, end, is_word) in spans {
            let text: String = original[start..end].iter().collect();
            if is_word {
                if !run.is_empty() {
                    pieces.push(std::mem::take(&mut run));
                }
                pieces.push(text);
            } else {
                run.push_str(&text);
            }
        }
        if !run.is_empty() {
            pieces.push(run);
        }

        Score {
            value: best[n].covered as f64 / n as f64,
            segmented: pieces.join(" "),
        }
    }
}
