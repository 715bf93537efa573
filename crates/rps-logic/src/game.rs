//! Round resolution and match state

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use crate::error::MatchError;
use crate::moves::{Move, Outcome};
use crate::random::MoveSource;

/// Result of a single round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

/// Which side took the match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Opponent,
}

/// Match configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// First side to reach this many round wins takes the match
    winning_score: u32,
}

impl MatchConfig {
    pub const DEFAULT_WINNING_SCORE: u32 = 5;

    pub fn new(winning_score: u32) -> Result<Self, MatchError> {
        if winning_score == 0 {
            return Err(MatchError::InvalidConfig(
                "winning_score must be at least 1".to_string(),
            ));
        }
        Ok(Self { winning_score })
    }

    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// Parse from JSON, e.g. `{"winning_score": 3}`. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, MatchError> {
        let config: MatchConfig = serde_json::from_str(json)
            .map_err(|e| MatchError::InvalidConfig(e.to_string()))?;
        Self::new(config.winning_score)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { winning_score: Self::DEFAULT_WINNING_SCORE }
    }
}

/// Running state of a first-to-N match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub player_score: u32,
    pub opponent_score: u32,
    /// Outcomes in the order they were played
    pub history: Vec<Outcome>,
    pub winning_score: u32,
    pub concluded: bool,
}

impl MatchState {
    pub fn new(config: MatchConfig) -> Self {
        reset_match(config.winning_score())
    }

    /// Record a resolved round.
    ///
    /// Fails with [`MatchError::InvalidState`] once the match has concluded;
    /// the state is left untouched in that case.
    pub fn apply_round(&mut self, result: &RoundResult) -> Result<(), MatchError> {
        if self.concluded {
            warn!(
                "round rejected, match already concluded at {}-{}",
                self.player_score, self.opponent_score
            );
            return Err(MatchError::InvalidState {
                player_score: self.player_score,
                opponent_score: self.opponent_score,
            });
        }

        match result.outcome {
            Outcome::Win => self.player_score += 1,
            Outcome::Lose => self.opponent_score += 1,
            Outcome::Draw => {}
        }
        self.history.push(result.outcome);
        self.concluded = self.player_score >= self.winning_score
            || self.opponent_score >= self.winning_score;

        debug!(
            "round {}: {} vs {} -> {} ({}-{})",
            self.history.len(),
            result.player_move,
            result.opponent_move,
            result.outcome,
            self.player_score,
            self.opponent_score
        );
        if self.concluded {
            info!(
                "match concluded {}-{} after {} rounds",
                self.player_score,
                self.opponent_score,
                self.history.len()
            );
        }

        Ok(())
    }

    /// Reset in place, keeping the winning score
    pub fn reset(&mut self) {
        *self = reset_match(self.winning_score);
    }

    pub fn winner(&self) -> Option<Side> {
        if !self.concluded {
            None
        } else if self.player_score >= self.winning_score {
            Some(Side::Player)
        } else {
            Some(Side::Opponent)
        }
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    pub fn draws(&self) -> usize {
        self.history.iter().filter(|o| **o == Outcome::Draw).count()
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

/// Draw the opponent's move. Each move has probability 1/3.
pub fn choose_opponent_move<S: MoveSource + ?Sized>(source: &mut S) -> Move {
    source.next_move()
}

/// Resolve one round against a freshly drawn opponent move
pub fn resolve_round<S: MoveSource + ?Sized>(player_move: Move, source: &mut S) -> RoundResult {
    let opponent_move = choose_opponent_move(source);
    RoundResult {
        player_move,
        opponent_move,
        outcome: Outcome::of(player_move, opponent_move),
    }
}

/// Apply a round result, returning the updated state
pub fn apply_round(mut state: MatchState, result: &RoundResult) -> Result<MatchState, MatchError> {
    state.apply_round(result)?;
    Ok(state)
}

/// Fresh match at 0-0 with an empty history.
///
/// Never fails. A zero `winning_score` is not rejected here: such a match
/// concludes on its first round. Use [`MatchConfig::new`] to validate input.
pub fn reset_match(winning_score: u32) -> MatchState {
    info!("new match, first to {}", winning_score);
    MatchState {
        player_score: 0,
        opponent_score: 0,
        history: Vec::new(),
        winning_score,
        concluded: false,
    }
}

/// Resolve and apply one round.
///
/// A concluded match is rejected before any randomness is drawn.
pub fn play_round<S: MoveSource + ?Sized>(
    state: &mut MatchState,
    player_move: Move,
    source: &mut S,
) -> Result<RoundResult, MatchError> {
    if state.concluded {
        return Err(MatchError::InvalidState {
            player_score: state.player_score,
            opponent_score: state.opponent_score,
        });
    }
    let result = resolve_round(player_move, source);
    state.apply_round(&result)?;
    Ok(result)
}
