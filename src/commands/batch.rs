//! Batch command - scan every `.txt` file in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use tracing::{error, warn};

use acrotext::text::is_blank;

use super::{CommandExecutor, ScanOptions, Scanner};

/// Search all .txt files in a directory for hidden messages.
#[derive(Args, Debug)]
pub struct BatchCommand {
    /// Directory containing .txt files
    #[arg(short = 'd', long)]
    pub input_dir: PathBuf,

    #[command(flatten)]
    pub options: ScanOptions,
}

impl CommandExecutor for BatchCommand {
    fn execute(&self) -> Result<()> {
        let scanner = Scanner::new(self.options.settings()?)?;

        if !self.input_dir.is_dir() {
            bail!(
                "Directory '{}' not found or is not a directory",
                self.input_dir.display()
            );
        }

        let files = list_text_files(&self.input_dir)?;
        if files.is_empty() {
            bail!("No .txt files found in '{}'", self.input_dir.display());
        }

        let (total, found) = scan_files(&scanner, &files);

        println!(
            "\nDone. Files analyzed: {}. Potential messages found: {}.",
            total, found
        );
        Ok(())
    }
}

/// Scans each file, skipping unreadable and blank ones.
///
/// Returns `(visited, found)`: every path counts as visited, while only files
/// with a candidate above the threshold count as found.
pub fn scan_files(scanner: &Scanner, files: &[PathBuf]) -> (usize, usize) {
    let mut found = 0;

    for path in files {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to read file");
                continue;
            }
        };

        if is_blank(&text) {
            warn!(path = %path.display(), "file is empty, skipping");
            continue;
        }

        if scanner.scan(path, &text) {
            found += 1;
        }
    }

    (files.len(), found)
}

/// Regular files ending in `.txt` (any case), sorted by file name.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        let is_txt = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.to_lowercase().ends_with(".txt"));
        if path.is_file() && is_txt {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
