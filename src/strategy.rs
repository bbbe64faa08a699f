//! Acrostic extraction strategies.
//!
//! Each [`Strategy`] selects letters from a text by position and
//! concatenates them into a raw candidate. Five strategies read segmented
//! lines; the strict sentence strategy reads the whole text because line
//! segmentation would cut sentences that wrap.
//!
//! The registry order in [`Strategy::ALL`] is the presentation order used
//! by reports.

use std::fmt;

use thiserror::Error;

use crate::text::{is_letter, letters_only, segment_sentences, split_space};

/// Errors raised by a single strategy run.
///
/// These never escape [`crate::analyze`]; a failing strategy is dropped
/// from the result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// The strategy was handed the wrong kind of input.
    #[error("{strategy} expects {expected} input")]
    WrongInput {
        /// Display name of the strategy.
        strategy: &'static str,
        /// The input kind it needs.
        expected: InputKind,
    },

    /// The strategy panicked while extracting.
    #[error("{strategy} panicked: {message}")]
    Panicked {
        /// Display name of the strategy.
        strategy: &'static str,
        /// Panic payload, if it was a string.
        message: String,
    },
}

/// The kind of input a strategy consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Trimmed, non-empty lines.
    Lines,
    /// The raw text.
    Text,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Lines => write!(f, "line"),
            InputKind::Text => write!(f, "raw text"),
        }
    }
}

/// Input handed to a strategy.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Lines from [`crate::text::segment_lines`].
    Lines(&'a [&'a str]),
    /// The original text.
    Text(&'a str),
}

/// One positional letter-selection heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// First character of every line, taken verbatim.
    FirstLetters,
    /// Last letter of every line.
    LastLetters,
    /// First letter found in every sentence of the whole text.
    SentenceFirstLetters,
    /// Second letter of every line.
    SecondLetters,
    /// First letter of the second word of every line.
    SecondWordFirstLetters,
    /// First and last letters of every line.
    LineEdges,
}

impl Strategy {
    /// All strategies in registry order.
    pub const ALL: [Strategy; 6] = [
        Strategy::FirstLetters,
        Strategy::LastLetters,
        Strategy::SentenceFirstLetters,
        Strategy::SecondLetters,
        Strategy::SecondWordFirstLetters,
        Strategy::LineEdges,
    ];

    /// Stable display name. Also the key of the result mapping.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::FirstLetters => "First letters of lines (verse)",
            Strategy::LastLetters => "Last letters of lines (verse)",
            Strategy::SentenceFirstLetters => "First letters of sentences (prose)",
            Strategy::SecondLetters => "Second letters of lines",
            Strategy::SecondWordFirstLetters => "First letters of the second word",
            Strategy::LineEdges => "Line edges (first + last)",
        }
    }

    /// Looks up a strategy by its display name.
    pub fn from_name(name: &str) -> Option<Strategy> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Which input this strategy consumes.
    pub fn input_kind(self) -> InputKind {
        match self {
            Strategy::SentenceFirstLetters => InputKind::Text,
            _ => InputKind::Lines,
        }
    }

    /// Runs the strategy and returns its raw, uncleaned candidate.
    pub fn extract(self, source: Source<'_>) -> Result<String, StrategyError> {
        let raw = match (self, source) {
            (Strategy::FirstLetters, Source::Lines(lines)) => first_letters(lines),
            (Strategy::LastLetters, Source::Lines(lines)) => last_letters(lines),
            (Strategy::SentenceFirstLetters, Source::Text(text)) => sentence_first_letters(text),
            (Strategy::SecondLetters, Source::Lines(lines)) => second_letters(lines),
            (Strategy::SecondWordFirstLetters, Source::Lines(lines)) => {
                second_word_first_letters(lines)
            }
            (Strategy::LineEdges, Source::Lines(lines)) => line_edges(lines),
            (strategy, _) => {
                return Err(StrategyError::WrongInput {
                    strategy: strategy.name(),
                    expected: strategy.input_kind(),
                })
            }
        };
        Ok(raw)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First character of each line, not filtered for letters.
fn first_letters(lines: &[&str]) -> String {
    lines.iter().filter_map(|line| line.chars().next()).collect()
}

fn last_letters(lines: &[&str]) -> String {
    lines
        .iter()
        .filter_map(|line| letters_only(line).chars().last())
        .collect()
}

/// First letter anywhere in each sentence, not only in its first word.
fn sentence_first_letters(text: &str) -> String {
    segment_sentences(text)
        .iter()
        .filter_map(|sentence| sentence.chars().find(|&c| is_letter(c)))
        .collect()
}

fn second_letters(lines: &[&str]) -> String {
    lines
        .iter()
        .filter_map(|line| letters_only(line).chars().nth(1))
        .collect()
}

fn second_word_first_letters(lines: &[&str]) -> String {
    lines
        .iter()
        .filter_map(|line| split_space(line).nth(1))
        .filter_map(|word| word.chars().find(|&c| is_letter(c)))
        .collect()
}

fn line_edges(lines: &[&str]) -> String {
    let mut res = String::new();
    for line in lines {
        let letters: Vec<char> = letters_only(line).chars().collect();
        match letters.as_slice() {
            [] => {}
            [only] => res.push(*only),
            [first, .., last] => {
                res.push(*first);
                res.push(*last);
            }
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::segment_lines;

    fn run(strategy: Strategy, text: &str) -> String {
        let lines = segment_lines(text);
        let source = match strategy.input_kind() {
            InputKind::Lines => Source::Lines(&lines),
            InputKind::Text => Source::Text(text),
        };
        strategy.extract(source).unwrap()
    }

    #[test]
    fn test_registry_names_unique() {
        let mut names: Vec<_> = Strategy::ALL.iter().map(|s| s.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Strategy::ALL.len());
    }

    #[test]
    fn test_from_name_roundtrip() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::from_name(strategy.name()), Some(strategy));
        }
        assert_eq!(Strategy::from_name("nope"), None);
    }

    #[test]
    fn test_first_letters() {
        assert_eq!(run(Strategy::FirstLetters, "Alpha\nBeta\nGamma"), "ABG");
    }

    #[test]
    fn test_first_letters_verbatim() {
        // Punctuation and digits come through unfiltered
        assert_eq!(run(Strategy::FirstLetters, "\"Quote\n1 two\nThree"), "\"1T");
    }

    #[test]
    fn test_last_letters_skip_punctuation() {
        assert_eq!(run(Strategy::LastLetters, "Cat!\nDog?\nEel."), "tgl");
        assert_eq!(run(Strategy::LastLetters, "Cat\n123\nEel"), "tl");
    }

    #[test]
    fn test_sentence_first_letters() {
        assert_eq!(
            run(Strategy::SentenceFirstLetters, "Hello world. Yes it works! Zebra runs."),
            "HYZ"
        );
    }

    #[test]
    fn test_sentence_first_letters_scans_whole_sentence() {
        // Leading quote and digits are skipped, not the first word only
        assert_eq!(
            run(Strategy::SentenceFirstLetters, "\"Oh,\" she said. 42 apples! ... ?"),
            "Oa"
        );
    }

    #[test]
    fn test_second_letters() {
        assert_eq!(run(Strategy::SecondLetters, "Ab\nCd\nE"), "bd");
        assert_eq!(run(Strategy::SecondLetters, "A-b\n!Cd"), "bd");
    }

    #[test]
    fn test_second_word_first_letters() {
        let text = "one Two three\nsolo\nfour (five)\nsix 77 seven";
        // "77" has no letter, "solo" has no second word
        assert_eq!(run(Strategy::SecondWordFirstLetters, text), "Tf");
    }

    #[test]
    fn test_second_word_split_on_information_separator() {
        assert_eq!(
            run(Strategy::SecondWordFirstLetters, "one\u{1f}two\nthree\u{1c}four\nfive six"),
            "tfs"
        );
    }

    #[test]
    fn test_line_edges() {
        assert_eq!(run(Strategy::LineEdges, "Sun\nGo\nX"), "SnGoX");
        assert_eq!(run(Strategy::LineEdges, "Sun\n---\nX!"), "SnX");
    }

    #[test]
    fn test_cyrillic_lines() {
        let text = "Мороз и солнце;\nДень чудесный!";
        assert_eq!(run(Strategy::FirstLetters, text), "МД");
        assert_eq!(run(Strategy::LastLetters, text), "ей");
        assert_eq!(run(Strategy::SecondLetters, text), "ое");
        assert_eq!(run(Strategy::SecondWordFirstLetters, text), "ич");
        assert_eq!(run(Strategy::LineEdges, text), "МеДй");
    }

    #[test]
    fn test_wrong_input_is_error() {
        let err = Strategy::FirstLetters.extract(Source::Text("abc")).unwrap_err();
        assert_eq!(
            err,
            StrategyError::WrongInput {
                strategy: Strategy::FirstLetters.name(),
                expected: InputKind::Lines,
            }
        );

        let lines = ["abc"];
        let err = Strategy::SentenceFirstLetters
            .extract(Source::Lines(&lines))
            .unwrap_err();
        assert!(matches!(err, StrategyError::WrongInput { expected: InputKind::Text, .. }));
    }

    #[test]
    fn test_every_line_strategy_rejects_text() {
        for strategy in Strategy::ALL {
            if strategy.input_kind() == InputKind::Lines {
                assert!(strategy.extract(Source::Text("Alpha\nBeta")).is_err());
            }
        }
    }
}
