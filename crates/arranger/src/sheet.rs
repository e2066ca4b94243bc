//! Bracket sheet storage and reporting.

use serde::{Deserialize, Serialize};
use std::path::Path;

use bracket_core::{Bracket, MatchKind, Pairing, SizeAdjustment};
use thiserror::Error;

/// Failures while saving or loading a bracket sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("failed to access sheet file: {0}")]
    Io(#[from] std::io::Error),

    #[error("sheet is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete first-round sheet: everything needed to print or export
/// the draw again later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketSheet {
    /// Title shown on reports.
    pub title: String,
    /// Match format the bracket is shot under.
    pub kind: MatchKind,
    /// Wall-clock time the draw was generated.
    pub generated_at: String,
    /// Entrants supplied by the roster.
    pub entrant_count: u32,
    /// Normalized bracket size.
    pub size: u32,
    /// Present when the roster was cut to fill the bracket.
    pub adjustment: Option<SizeAdjustment>,
    /// First-round matches in lane order.
    pub matches: Vec<Pairing>,
}

impl BracketSheet {
    pub fn new(title: &str, kind: MatchKind, entrant_count: u32, bracket: Bracket) -> Self {
        Self {
            title: title.to_string(),
            kind,
            generated_at: chrono::Local::now()
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            entrant_count,
            size: bracket.size,
            adjustment: bracket.adjustment,
            matches: bracket.matches,
        }
    }

    /// Save the sheet to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), SheetError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a sheet from a JSON file
    pub fn load(path: &Path) -> Result<Self, SheetError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate the post-draw summary
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("=== {} ===\n\n", self.title));
        summary.push_str(&format!("Generated: {}\n", self.generated_at));
        summary.push_str(&format!(
            "Format: {} ({} arrows per set)\n",
            self.kind.label(),
            self.kind.arrows_per_set()
        ));
        summary.push_str(&format!("Entrants: {}\n", self.entrant_count));
        summary.push_str(&format!("Bracket size: {}\n", self.size));
        summary.push_str(&format!("First-round matches: {}\n", self.matches.len()));
        if let Some(adj) = &self.adjustment {
            summary.push_str(&format!(
                "Roster had {} entrants; the top {} were drawn, the bottom {} cut\n",
                adj.supplied, adj.size, adj.dropped
            ));
        }
        summary.push_str("Top half seed: #1\n");
        summary.push_str("Bottom half seed: #2\n");
        summary
    }

    /// Print summary to stdout
    pub fn print_summary(&self) {
        println!("{}", self.summary());
    }

    /// Render the pairing table shown after a draw
    pub fn pairing_table(&self) -> String {
        let mut table = String::new();
        table.push_str(&format!(
            "{:<12} {:<10} {:<24} {:^4} {:<24} {:<10} {}\n",
            "Round", "Match", "Left (A target)", "", "Right (B target)", "Lane", "Colors"
        ));
        table.push_str(&"-".repeat(100));
        table.push('\n');
        for m in &self.matches {
            table.push_str(&format!(
                "{:<12} {:<10} {:<24} {:^4} {:<24} {:<10} {}\n",
                m.round,
                format!("Match {}", m.number),
                m.left.to_string(),
                "VS",
                m.right.to_string(),
                m.lane_label(),
                m.color_label()
            ));
        }
        table
    }
}
