//! Match Logic for Rock-Paper-Scissors
//!
//! Core round resolution and first-to-N match state.
//! This crate is compiled to:
//! - Native (for the terminal front end)
//! - WASM (for the browser game)

mod error;
mod game;
mod moves;
mod random;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::MatchError;
pub use game::{
    apply_round, choose_opponent_move, play_round, reset_match, resolve_round, MatchConfig,
    MatchState, RoundResult, Side,
};
pub use moves::{Move, Outcome};
pub use random::{MoveSource, Scripted, SeededRng, Uniform};
