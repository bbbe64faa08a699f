//! Scoring candidates and rendering the result table.

use std::fmt::Write;

use crate::analyzer::Candidates;
use crate::config::Settings;
use crate::scorer::Scorer;

/// Width of the method column.
pub const METHOD_WIDTH: usize = 40;

/// Width of the score column.
pub const SCORE_WIDTH: usize = 8;

/// Length of the horizontal rule.
pub const RULE_WIDTH: usize = 100;

/// A candidate that passed the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub method: &'static str,
    pub score: f64,
    pub segmented: String,
}

/// Scored candidates of one text.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub rows: Vec<ReportRow>,
    pub threshold: f64,
    pub display_width: usize,
}

impl FileReport {
    /// Scores every candidate, keeping those strictly above the threshold.
    pub fn build<S: Scorer + ?Sized>(
        candidates: &Candidates,
        scorer: &S,
        settings: &Settings,
    ) -> Self {
        let rows = candidates
            .iter()
            .filter_map(|candidate| {
                let score = scorer.score(&candidate.text);
                (score.value > settings.threshold).then(|| ReportRow {
                    method: candidate.name(),
                    score: score.value,
                    segmented: score.segmented,
                })
            })
            .collect();

        Self {
            rows,
            threshold: settings.threshold,
            display_width: settings.display_width,
        }
    }

    /// True if any candidate passed.
    pub fn found_any(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Renders the table followed by the verdict line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "-".repeat(RULE_WIDTH);

        let _ = writeln!(
            out,
            "{:<mw$} | {:<sw$} | {}",
            "METHOD",
            "SCORE",
            "RESULT",
            mw = METHOD_WIDTH,
            sw = SCORE_WIDTH
        );
        let _ = writeln!(out, "{}", rule);

        for row in &self.rows {
            let score = format!("{:.1}%", row.score * 100.0);
            let _ = writeln!(
                out,
                "{:<mw$} | {:<sw$} | {}",
                row.method,
                score,
                truncate(&row.segmented, self.display_width),
                mw = METHOD_WIDTH,
                sw = SCORE_WIDTH
            );
        }

        let _ = writeln!(out, "{}", rule);

        if self.found_any() {
            let _ = writeln!(out, "Analysis complete.");
        } else {
            let _ = writeln!(
                out,
                "No hidden messages found (score below {:.0}%).",
                self.threshold * 100.0
            );
        }

        out
    }
}

/// Cuts `text` to `width` characters, ending in `...` when shortened.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}
