//! Domain types shared by the generator and the exporters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;
use std::str::FromStr;

/// A ranked competitor.
///
/// Ranks come from the qualification round; rank 1 is the top seed and
/// ranks are unique within a bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub rank: u32,
    pub name: String,
}

impl Entrant {
    pub fn new(rank: u32, name: &str) -> Self {
        Self {
            rank,
            name: name.to_string(),
        }
    }
}

/// Renders the roster label used everywhere a competitor is shown,
/// e.g. `#3 Kim`.
impl fmt::Display for Entrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.rank, self.name)
    }
}

/// Raised when a string does not parse as an entrant label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entrant labels look like \"#3 Kim\"")]
pub struct ParseEntrantError;

impl FromStr for Entrant {
    type Err = ParseEntrantError;

    /// Parses the `#rank name` label back into an entrant. This is the
    /// inverse of `Display` and lets exported tables be re-imported.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix('#').ok_or(ParseEntrantError)?;
        let (rank, name) = rest.split_once(' ').ok_or(ParseEntrantError)?;
        let rank: u32 = rank.parse().map_err(|_| ParseEntrantError)?;
        let name = name.trim();
        if rank == 0 || name.is_empty() {
            return Err(ParseEntrantError);
        }
        Ok(Self {
            rank,
            name: name.to_string(),
        })
    }
}

/// Lane color tag. The higher seed always shoots green, the lower seed red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaneColor {
    Green,
    Red,
}

impl fmt::Display for LaneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaneColor::Green => write!(f, "green"),
            LaneColor::Red => write!(f, "red"),
        }
    }
}

/// Match format. Sets how many arrows each set is shot with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    #[default]
    Individual,
    Team,
}

impl MatchKind {
    pub fn arrows_per_set(self) -> u32 {
        match self {
            MatchKind::Individual => 3,
            MatchKind::Team => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchKind::Individual => "individual",
            MatchKind::Team => "team",
        }
    }
}

/// A single first-round match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Round label encoding the round size, e.g. `1/4 finals`.
    pub round: String,
    /// 1-based match number, sequential over the round.
    pub number: u32,
    /// Higher seed, shoots from the A side of the lane.
    pub left: Entrant,
    /// Lower seed, shoots from the B side of the lane.
    pub right: Entrant,
    /// 1-based target assignment.
    pub lane: u32,
    pub left_color: LaneColor,
    pub right_color: LaneColor,
}

impl Pairing {
    /// Target label shown on sheets and exports, e.g. `Target 3`.
    pub fn lane_label(&self) -> String {
        format!("Target {}", self.lane)
    }

    /// Combined color column for the table export.
    pub fn color_label(&self) -> String {
        format!("{} vs {}", self.left_color, self.right_color)
    }
}

/// Human-readable first-round label for a bracket of `size` entrants.
///
/// Encodes the number of matches in the round: 8 entrants shoot the
/// `1/4 finals`, 16 entrants the `1/8 finals`.
pub fn round_label(size: u32) -> String {
    format!("1/{} finals", size / 2)
}
