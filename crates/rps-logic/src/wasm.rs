//! WASM bindings for the browser game

#![cfg(feature = "wasm")]

use serde::Serialize;
use wasm_bindgen::prelude::*;
use crate::{
    play_round, MatchConfig, MatchError, MatchState, Move, MoveSource, Outcome, RoundResult,
    SeededRng, Uniform,
};

fn js_err(e: MatchError) -> JsError {
    JsError::new(&e.to_string())
}

fn parse_move(name: &str) -> Result<Move, JsError> {
    name.parse::<Move>().map_err(js_err)
}

fn seed_from_bytes(seed: &[u8]) -> Result<[u8; 32], MatchError> {
    seed.try_into()
        .map_err(|_| MatchError::InvalidConfig(format!("Seed must be exactly 32 bytes, got {}", seed.len())))
}

fn outcome_name(player: &str, opponent: &str) -> Result<&'static str, MatchError> {
    Ok(Outcome::of(player.parse()?, opponent.parse()?).name())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

#[derive(Serialize)]
struct PlayResponse<'a> {
    round: RoundResult,
    state: &'a MatchState,
}

/// One match, owned by the page
#[wasm_bindgen]
pub struct WasmMatch {
    state: MatchState,
    source: Box<dyn MoveSource>,
}

#[wasm_bindgen]
impl WasmMatch {
    /// New match with an entropy-seeded opponent
    #[wasm_bindgen(constructor)]
    pub fn new(winning_score: u32) -> Result<WasmMatch, JsError> {
        let config = MatchConfig::new(winning_score).map_err(js_err)?;
        Ok(Self {
            state: MatchState::new(config),
            source: Box::new(Uniform::from_entropy()),
        })
    }

    /// New match from a JSON config, e.g. `{"winning_score": 3}`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<WasmMatch, JsError> {
        let config = MatchConfig::from_json(config_json).map_err(js_err)?;
        Ok(Self {
            state: MatchState::new(config),
            source: Box::new(Uniform::from_entropy()),
        })
    }

    /// Reproducible match: same seed = same opponent moves
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(winning_score: u32, seed: &[u8]) -> Result<WasmMatch, JsError> {
        let config = MatchConfig::new(winning_score).map_err(js_err)?;
        let seed_arr = seed_from_bytes(seed).map_err(js_err)?;
        Ok(Self {
            state: MatchState::new(config),
            source: Box::new(SeededRng::new(&seed_arr, 0)),
        })
    }

    /// Play a round. Returns `{ round, state }`.
    ///
    /// Throws if the move is unknown or the match has already concluded.
    pub fn play(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let player_move = parse_move(player_move)?;
        let round = play_round(&mut self.state, player_move, &mut self.source)
            .map_err(js_err)?;
        to_js(&PlayResponse { round, state: &self.state })
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.state)
    }

    #[wasm_bindgen(js_name = isConcluded)]
    pub fn is_concluded(&self) -> bool {
        self.state.concluded
    }
}

/// Outcome for the player: "win", "lose" or "draw"
#[wasm_bindgen(js_name = determineOutcome)]
pub fn determine_outcome(player: &str, opponent: &str) -> Result<String, JsError> {
    outcome_name(player, opponent).map(str::to_string).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_must_be_32_bytes() {
        assert_eq!(seed_from_bytes(&[9u8; 32]).unwrap(), [9u8; 32]);
        assert!(matches!(seed_from_bytes(&[9u8; 31]), Err(MatchError::InvalidConfig(_))));
        assert!(matches!(seed_from_bytes(&[9u8; 33]), Err(MatchError::InvalidConfig(_))));
        assert!(seed_from_bytes(&[]).is_err());
    }

    #[test]
    fn test_outcome_name() {
        assert_eq!(outcome_name("rock", "scissors").unwrap(), "win");
        assert_eq!(outcome_name("Rock", "paper").unwrap(), "lose");
        assert_eq!(outcome_name("s", "scissors").unwrap(), "draw");
        assert!(matches!(outcome_name("rock", "well"), Err(MatchError::UnknownMove(_))));
    }
}
