//! Command module - Strategy pattern for CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor` trait.

mod analyze;
mod batch;
mod strategies;

pub use analyze::AnalyzeCommand;
pub use batch::BatchCommand;
pub use strategies::StrategiesCommand;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use acrotext::{Analyzer, DictionaryScorer, FileReport, Settings};

/// Trait for command execution - Strategy pattern.
///
/// Each command struct holds its parsed arguments and implements
/// this trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}

/// Options shared by the commands that score text.
#[derive(Args, Debug, Clone)]
pub struct ScanOptions {
    /// TOML settings file (dictionary, threshold, display_width, min_word_len)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Word list for scoring, one word per line (default: russian_words.txt)
    #[arg(long)]
    pub dictionary: Option<PathBuf>,

    /// Minimum score (0-1, exclusive) for a candidate to be shown (default: 0.3)
    #[arg(long)]
    pub threshold: Option<f64>,
}

impl ScanOptions {
    /// Loads settings from the config file and applies flag overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        };

        if let Some(dictionary) = &self.dictionary {
            settings.dictionary = dictionary.clone();
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }

        settings.validate().context("Invalid settings")?;
        Ok(settings)
    }
}

/// Everything needed to scan files.
pub struct Scanner {
    pub analyzer: Analyzer,
    pub scorer: DictionaryScorer,
    pub settings: Settings,
}

impl Scanner {
    /// Builds a scanner, loading the dictionary named in the settings.
    pub fn new(settings: Settings) -> Result<Self> {
        let scorer = DictionaryScorer::load(&settings.dictionary, settings.min_word_len)
            .with_context(|| {
                format!(
                    "Failed to load dictionary {}",
                    settings.dictionary.display()
                )
            })?;
        info!(words = scorer.len(), "dictionary ready");

        Ok(Self {
            analyzer: Analyzer::new(),
            scorer,
            settings,
        })
    }

    /// Analyzes one text and prints its report. Returns true if anything
    /// scored above the threshold.
    pub fn scan(&self, path: &Path, text: &str) -> bool {
        println!("\n--- Analyzing file: '{}' ---", path.display());
        println!(
            "File '{}' loaded ({} characters).",
            path.display(),
            text.chars().count()
        );
        println!("--- Running analysis... ---\n");

        let candidates = self.analyzer.analyze(text);
        info!(
            path = %path.display(),
            candidates = candidates.len(),
            "extracted candidates"
        );

        let report = FileReport::build(&candidates, &self.scorer, &self.settings);
        print!("{}", report.render());
        report.found_any()
    }
}
