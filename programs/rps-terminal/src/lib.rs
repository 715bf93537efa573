//! Terminal front end for Rock-Paper-Scissors
//!
//! Reads moves from a line-based input, holds the reveal for a short
//! suspense window, then renders the round, the score and the history strip.

pub mod config;
pub mod render;
pub mod session;

pub use config::Args;
pub use render::Renderer;
pub use session::{Command, Session};
