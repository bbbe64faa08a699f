//! Analyze command - scan a single text file.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use acrotext::text::is_blank;

use super::{CommandExecutor, ScanOptions, Scanner};

/// Default input file when none is given.
const DEFAULT_INPUT: &str = "input.txt";

/// Search one text file for hidden messages.
#[derive(Args, Debug)]
pub struct AnalyzeCommand {
    /// Input text file (UTF-8)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    #[command(flatten)]
    pub options: ScanOptions,
}

impl CommandExecutor for AnalyzeCommand {
    fn execute(&self) -> Result<()> {
        let scanner = Scanner::new(self.options.settings()?)?;

        if !self.input.exists() {
            bail!("File '{}' not found", self.input.display());
        }

        let text = fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;

        if is_blank(&text) {
            bail!("File '{}' is empty", self.input.display());
        }

        scanner.scan(&self.input, &text);
        Ok(())
    }
}
