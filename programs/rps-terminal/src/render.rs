//! Text rendering for rounds, scores and the history strip

use colored::{ColoredString, Colorize};
use rps_logic::{MatchState, Outcome, RoundResult, Side};

pub const PROMPT: &str = "Choose your weapon!";
pub const SUSPENSE: &str = "Rock, Paper, Scissors...";

#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, outcome: Outcome) -> String {
        if !self.color {
            return text.to_string();
        }
        let painted: ColoredString = match outcome {
            Outcome::Win => text.green().bold(),
            Outcome::Lose => text.red().bold(),
            Outcome::Draw => text.yellow(),
        };
        painted.to_string()
    }

    /// e.g. "You win! Rock beats scissors"
    pub fn round_text(&self, round: &RoundResult) -> String {
        let text = match round.outcome {
            Outcome::Win => format!(
                "You win! {} beats {}",
                capitalize(round.player_move.name()),
                round.opponent_move
            ),
            Outcome::Lose => format!(
                "You lose! {} beats {}",
                capitalize(round.opponent_move.name()),
                round.player_move
            ),
            Outcome::Draw => format!("It's a draw! Both chose {}", round.player_move),
        };
        self.paint(&text, round.outcome)
    }

    pub fn hands(&self, round: &RoundResult) -> String {
        format!("You: {:<9} Computer: {}", round.player_move.name(), round.opponent_move)
    }

    pub fn scoreboard(&self, state: &MatchState) -> String {
        format!(
            "You {} - {} Computer  (first to {})",
            state.player_score, state.opponent_score, state.winning_score
        )
    }

    /// One marker per round, oldest first
    pub fn history_strip(&self, history: &[Outcome]) -> String {
        history
            .iter()
            .map(|o| {
                let marker = match o {
                    Outcome::Win => "W",
                    Outcome::Lose => "L",
                    Outcome::Draw => "D",
                };
                self.paint(marker, *o)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn game_over(&self, winner: Side) -> String {
        match winner {
            Side::Player => self.paint("🏆 You won the game! 🏆", Outcome::Win),
            Side::Opponent => self.paint("😢 Computer won the game! 😢", Outcome::Lose),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
