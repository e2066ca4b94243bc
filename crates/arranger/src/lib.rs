//! Archery Bracket Arranger
//!
//! This crate provides infrastructure for:
//! - Reading qualification rosters from CSV/TSV files
//! - Generating first-round elimination pairings with lanes and colors
//! - Saving bracket sheets and exporting tables and printable reports
//!
//! # Usage
//!
//! ```bash
//! # Generate a bracket from a qualification roster
//! cargo run -p arranger -- generate roster.csv --out sheet.json
//!
//! # Re-export a saved sheet as a table and a printable report
//! cargo run -p arranger -- export sheet.json --csv bracket.csv --txt bracket.txt
//! ```

mod config;
mod export;
mod roster;
mod sheet;

pub use config::*;
pub use export::*;
pub use roster::*;
pub use sheet::*;
