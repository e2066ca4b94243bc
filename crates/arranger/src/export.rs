//! Table and printable-report exports for bracket sheets.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::sheet::BracketSheet;

/// Failures while exporting a sheet.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: generate a bracket first")]
    NothingToExport,

    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Column headings of the table export.
pub const TABLE_HEADER: [&str; 6] = ["round", "match", "left", "right", "lane", "colors"];

/// Writes the sheet as a spreadsheet-style CSV table.
///
/// The left/right columns carry the `#rank name` label, so a written
/// table can be parsed back into the same rank pairings.
pub fn write_table<W: Write>(writer: W, sheet: &BracketSheet) -> Result<(), ExportError> {
    if sheet.matches.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(TABLE_HEADER)?;
    for m in &sheet.matches {
        wtr.write_record(&[
            m.round.clone(),
            format!("Match {}", m.number),
            m.left.to_string(),
            m.right.to_string(),
            m.lane_label(),
            m.color_label(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the table export to a file.
pub fn save_table(path: &Path, sheet: &BracketSheet) -> Result<(), ExportError> {
    // Checked before creating the file so a rejected export leaves
    // nothing behind
    if sheet.matches.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let file = std::fs::File::create(path)?;
    write_table(file, sheet)
}

/// Renders the printable report: a title block followed by one block
/// per match, separated by divider lines.
pub fn text_report(sheet: &BracketSheet) -> Result<String, ExportError> {
    if sheet.matches.is_empty() {
        return Err(ExportError::NothingToExport);
    }
    let mut report = String::new();
    report.push_str(&"=".repeat(80));
    report.push('\n');
    report.push_str(&format!("{:^80}\n", sheet.title));
    report.push_str(&format!(
        "{:^80}\n",
        format!("Generated {}", sheet.generated_at)
    ));
    report.push_str(&"=".repeat(80));
    report.push_str("\n\n");

    for m in &sheet.matches {
        report.push_str(&format!("[{}] Match {}\n", m.round, m.number));
        report.push_str(&format!("  {}\n", m.lane_label()));
        report.push_str(&format!("  A target {}: {}\n", m.left_color, m.left));
        report.push_str("       VS\n");
        report.push_str(&format!("  B target {}: {}\n", m.right_color, m.right));
        report.push_str(&"-".repeat(80));
        report.push_str("\n\n");
    }

    Ok(report)
}

/// Writes the printable report to a file.
pub fn save_text(path: &Path, sheet: &BracketSheet) -> Result<(), ExportError> {
    let report = text_report(sheet)?;
    std::fs::write(path, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_core::{generate, Entrant, MatchKind};
    use std::str::FromStr;
    use tempfile::tempdir;

    fn sheet_of(count: u32) -> BracketSheet {
        let entrants: Vec<Entrant> = (1..=count)
            .map(|rank| Entrant::new(rank, &format!("Archer {}", rank)))
            .collect();
        let bracket = generate(&entrants).unwrap();
        BracketSheet::new("Club Championship", MatchKind::Individual, count, bracket)
    }

    fn empty_sheet() -> BracketSheet {
        let mut sheet = sheet_of(8);
        sheet.matches.clear();
        sheet
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let sheet = empty_sheet();
        let mut buf = Vec::new();

        assert!(matches!(
            write_table(&mut buf, &sheet),
            Err(ExportError::NothingToExport)
        ));
        assert!(matches!(
            text_report(&sheet),
            Err(ExportError::NothingToExport)
        ));
    }

    #[test]
    fn test_rejected_export_writes_no_file() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("bracket.csv");
        let txt_path = dir.path().join("bracket.txt");
        let sheet = empty_sheet();

        assert!(save_table(&csv_path, &sheet).is_err());
        assert!(save_text(&txt_path, &sheet).is_err());
        assert!(!csv_path.exists());
        assert!(!txt_path.exists());
    }

    #[test]
    fn test_table_round_trip_reproduces_pairings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracket.csv");
        let sheet = sheet_of(8);

        save_table(&path, &sheet).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let mut pairs = Vec::new();
        for record in reader.records() {
            let record = record.unwrap();
            let left = Entrant::from_str(&record[2]).unwrap();
            let right = Entrant::from_str(&record[3]).unwrap();
            pairs.push((left.rank, right.rank));
        }

        assert_eq!(pairs, vec![(1, 8), (2, 7), (3, 6), (4, 5)]);
    }

    #[test]
    fn test_table_columns() {
        let mut buf = Vec::new();
        write_table(&mut buf, &sheet_of(8)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("round,match,left,right,lane,colors"));
        assert_eq!(
            lines.next(),
            Some("1/4 finals,Match 1,#1 Archer 1,#8 Archer 8,Target 1,green vs red")
        );
    }

    #[test]
    fn test_text_report_shape() {
        let sheet = sheet_of(8);
        let report = text_report(&sheet).unwrap();

        assert!(report.starts_with(&"=".repeat(80)));
        assert!(report.contains("Club Championship"));
        assert!(report.contains(&format!("Generated {}", sheet.generated_at)));
        assert!(report.contains("[1/4 finals] Match 1"));
        assert!(report.contains("A target green: #1 Archer 1"));
        assert!(report.contains("       VS"));
        assert!(report.contains("B target red: #8 Archer 8"));
        // One divider line per match
        assert_eq!(report.matches(&"-".repeat(80)).count(), 4);
    }

    #[test]
    fn test_save_text_writes_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bracket.txt");
        let sheet = sheet_of(4);

        save_text(&path, &sheet).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, text_report(&sheet).unwrap());
    }
}
