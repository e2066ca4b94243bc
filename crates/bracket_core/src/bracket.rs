//! Bracket size normalization and the first-round pairing generator.

use serde::{Deserialize, Serialize};

use crate::error::BracketError;
use crate::types::{round_label, Entrant, LaneColor, Pairing};

/// Bracket sizes recommended to organizers.
pub const SUPPORTED_SIZES: [u32; 5] = [8, 16, 32, 64, 128];

/// Largest field a single bracket can hold.
pub const MAX_SIZE: u32 = 128;

/// A generated first round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bracket {
    /// Normalized bracket size, always a power of two.
    pub size: u32,
    /// Matches in lane order.
    pub matches: Vec<Pairing>,
    /// Present when the roster was cut down to fill the bracket.
    pub adjustment: Option<SizeAdjustment>,
}

/// Caller-visible record of a size normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeAdjustment {
    /// Entrants supplied in the roster.
    pub supplied: u32,
    /// Bracket size actually drawn.
    pub size: u32,
    /// Entrants cut from the bottom of the ranking.
    pub dropped: u32,
}

/// Picks the bracket size for a roster of `count` entrants.
///
/// A power-of-two count is used as-is, capped at [`MAX_SIZE`]. Anything
/// else rounds down to the largest power of two the roster can fill:
/// rounding up would claim seats nobody holds and leave the bottom seeds
/// without opponents.
pub fn normalized_size(count: usize) -> Result<u32, BracketError> {
    if count < 2 {
        return Err(BracketError::TooFewEntrants { count });
    }
    let capped = count.min(MAX_SIZE as usize) as u32;
    if capped.is_power_of_two() {
        Ok(capped)
    } else {
        // next_power_of_two rounds up, so halving it lands on the
        // largest power of two below `capped`.
        Ok(capped.next_power_of_two() / 2)
    }
}

/// Generates the first round for a ranked roster.
///
/// Roster ranks must be exactly `1..=N` with no duplicates. Rank 1 meets
/// rank `size`, rank 2 meets rank `size - 1`, and so on down to the two
/// middle seeds. The higher seed takes the green (A) side of the lane,
/// the lower seed the red (B) side. Match numbers and lanes run 1-based
/// in step.
pub fn generate(entrants: &[Entrant]) -> Result<Bracket, BracketError> {
    let count = entrants.len();
    let size = normalized_size(count)?;

    // Ranks must cover 1..=count before any truncation; a stray or
    // out-of-range value always surfaces as a duplicate or a hole.
    let mut by_rank: Vec<Option<&Entrant>> = vec![None; count];
    for entrant in entrants {
        let rank = entrant.rank as usize;
        if rank >= 1 && rank <= count {
            let slot = &mut by_rank[rank - 1];
            if slot.is_some() {
                return Err(BracketError::DuplicateRank { rank: entrant.rank });
            }
            *slot = Some(entrant);
        }
    }
    let mut seeds: Vec<&Entrant> = Vec::with_capacity(count);
    for (i, slot) in by_rank.iter().enumerate() {
        match *slot {
            Some(entrant) => seeds.push(entrant),
            None => {
                return Err(BracketError::MissingRank {
                    rank: (i + 1) as u32,
                })
            }
        }
    }

    let adjustment = if (size as usize) != count {
        Some(SizeAdjustment {
            supplied: count as u32,
            size,
            dropped: count as u32 - size,
        })
    } else {
        None
    };

    let round = round_label(size);
    let half = (size / 2) as usize;
    let mut matches = Vec::with_capacity(half);
    for i in 0..half {
        matches.push(Pairing {
            round: round.clone(),
            number: (i + 1) as u32,
            left: seeds[i].clone(),
            right: seeds[size as usize - i - 1].clone(),
            lane: (i + 1) as u32,
            left_color: LaneColor::Green,
            right_color: LaneColor::Red,
        });
    }

    Ok(Bracket {
        size,
        matches,
        adjustment,
    })
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
