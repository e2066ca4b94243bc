//! Bracket pairing rules for archery elimination rounds.
//!
//! This crate holds the pure half of the arranger:
//! - Domain types (entrants, pairings, lane colors, match kinds)
//! - Bracket size normalization for rosters that are not a power of two
//! - The first-round pairing generator (rank 1 meets rank N)
//!
//! No I/O happens here; reading rosters and writing sheets and exports
//! lives in the `arranger` crate.

pub mod bracket;
pub mod error;
pub mod types;

pub use bracket::*;
pub use error::*;
pub use types::*;
