//! Roster reading: qualification results as delimited text.

use std::path::Path;

use bracket_core::Entrant;
use thiserror::Error;

/// Failures while reading a qualification roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: a roster row needs at least rank and name columns")]
    TooFewColumns { line: usize },

    #[error("line {line}: rank column is not a positive integer: '{value}'")]
    InvalidRank { line: usize, value: String },

    #[error("line {line}: name column is empty")]
    EmptyName { line: usize },
}

/// Reads a roster file into entrants.
///
/// The first column is the qualification rank, the second the name; any
/// further columns are ignored. `.tsv` and `.tab` files are read
/// tab-separated, everything else comma-separated. Set `skip_header`
/// when the file carries a heading row.
pub fn read_roster(path: &Path, skip_header: bool) -> Result<Vec<Entrant>, RosterError> {
    let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
        Some("tsv") | Some("tab") => b'\t',
        _ => b',',
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(skip_header)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut entrants = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based file line, accounting for a skipped heading row
        let line = i + 1 + usize::from(skip_header);
        if record.len() < 2 {
            return Err(RosterError::TooFewColumns { line });
        }
        let rank_field = &record[0];
        let rank: u32 = match rank_field.parse() {
            Ok(rank) if rank > 0 => rank,
            _ => {
                return Err(RosterError::InvalidRank {
                    line,
                    value: rank_field.to_string(),
                })
            }
        };
        let name = &record[1];
        if name.is_empty() {
            return Err(RosterError::EmptyName { line });
        }
        entrants.push(Entrant::new(rank, name));
    }

    Ok(entrants)
}

#[cfg(test)]
#[path = "roster_tests.rs"]
mod roster_tests;
