//! Error types for match play

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Round rejected: match already concluded at {player_score}-{opponent_score}")]
    InvalidState {
        player_score: u32,
        opponent_score: u32,
    },

    #[error("Unknown move `{0}` (expected rock, paper or scissors)")]
    UnknownMove(String),

    #[error("Invalid match config: {0}")]
    InvalidConfig(String),
}
