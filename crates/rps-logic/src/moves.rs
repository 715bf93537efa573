//! Moves, outcomes and the beats relation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::error::MatchError;

/// A move in Rock-Paper-Scissors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in index order
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Map an index in [0, 3) onto a move. Larger values wrap.
    pub fn from_index(index: u32) -> Self {
        Self::ALL[(index % 3) as usize]
    }

    /// Lowercase name, as shown in result text
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// True when `self` defeats `other`.
    ///
    /// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Rock, Move::Scissors) => true,
            (Move::Scissors, Move::Paper) => true,
            (Move::Paper, Move::Rock) => true,
            (Move::Rock, Move::Rock)
            | (Move::Rock, Move::Paper)
            | (Move::Paper, Move::Paper)
            | (Move::Paper, Move::Scissors)
            | (Move::Scissors, Move::Scissors)
            | (Move::Scissors, Move::Rock) => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = MatchError;

    /// Accepts full names or first letters, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(MatchError::UnknownMove(s.trim().to_string())),
        }
    }
}

/// Result of a round, relative to the player
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// Decide the outcome of `player` against `opponent`
    pub fn of(player: Move, opponent: Move) -> Self {
        if player == opponent {
            Outcome::Draw
        } else if player.beats(opponent) {
            Outcome::Win
        } else {
            Outcome::Lose
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Win => "win",
            Outcome::Lose => "lose",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
