//! Runtime settings.
//!
//! Settings come from defaults, an optional TOML file, then command-line
//! overrides applied by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default word list path.
pub const DEFAULT_DICTIONARY: &str = "russian_words.txt";

/// Default score a candidate must exceed to be reported.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Default maximum width of the segmented text column.
pub const DEFAULT_DISPLAY_WIDTH: usize = 80;

/// Default shortest dictionary word.
pub const DEFAULT_MIN_WORD_LEN: usize = 2;

/// Errors that can occur when loading settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Analysis and report settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Word list used by the dictionary scorer.
    pub dictionary: PathBuf,

    /// Candidates must score strictly above this to be shown.
    pub threshold: f64,

    /// Segmented text longer than this is truncated with `...`.
    pub display_width: usize,

    /// Dictionary words shorter than this are ignored.
    pub min_word_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            threshold: DEFAULT_THRESHOLD,
            display_width: DEFAULT_DISPLAY_WIDTH,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

impl Settings {
    /// Parses settings from TOML. Missing keys take their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Loads settings from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::Invalid(format!(
                "threshold must be between 0 and 1, got {}",
                self.threshold
            )));
        }
        if self.display_width < 4 {
            return Err(ConfigError::Invalid(format!(
                "display_width must be at least 4, got {}",
                self.display_width
            )));
        }
        if self.min_word_len == 0 {
            return Err(ConfigError::Invalid(
                "min_word_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.dictionary, PathBuf::from("russian_words.txt"));
        assert_eq!(settings.threshold, 0.3);
        assert_eq!(settings.display_width, 80);
        assert_eq!(settings.min_word_len, 2);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let settings = Settings::from_toml("threshold = 0.5\n").unwrap();
        assert_eq!(settings.threshold, 0.5);
        assert_eq!(settings.display_width, DEFAULT_DISPLAY_WIDTH);
    }

    #[test]
    fn test_full_toml() {
        let toml = r#"
            dictionary = "words/en.txt"
            threshold = 0.75
            display_width = 40
            min_word_len = 3
        "#;
        let settings = Settings::from_toml(toml).unwrap();
        assert_eq!(settings.dictionary, PathBuf::from("words/en.txt"));
        assert_eq!(settings.display_width, 40);
        assert_eq!(settings.min_word_len, 3);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Settings::from_toml("threshold = 1.5"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml("display_width = 2"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            Settings::from_toml("min_word_len = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            Settings::from_toml("threshold = \"high\""),
            Err(ConfigError::TomlParseError(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("acrotext.toml");
        fs::write(&path, "min_word_len = 4\n").unwrap();

        let settings = Settings::load_or_default(Some(&path)).unwrap();
        assert_eq!(settings.min_word_len, 4);

        let defaults = Settings::load_or_default(None).unwrap();
        assert_eq!(defaults, Settings::default());
    }
}
