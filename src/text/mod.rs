//! Text processing for acrostic extraction.
//!
//! This module provides:
//! - Line segmentation (trimmed, empty lines dropped)
//! - Strict sentence segmentation (split after `.`, `!`, `?` plus whitespace)
//! - Letter filtering over the Cyrillic and basic Latin alphabets

pub mod clean;
pub mod segment;

pub use clean::{clean, is_letter, letters_only};
pub use segment::{
    is_blank, is_space, segment_lines, segment_sentences, split_space, trim_space,
};
