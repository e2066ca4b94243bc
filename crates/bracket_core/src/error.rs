use thiserror::Error;

/// Validation failures raised while turning a roster into a bracket.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("at least 2 entrants are required, got {count}")]
    TooFewEntrants { count: usize },

    #[error("rank {rank} appears more than once")]
    DuplicateRank { rank: u32 },

    #[error("no entrant holds rank {rank}")]
    MissingRank { rank: u32 },
}
