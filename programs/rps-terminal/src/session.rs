//! Interactive match loop

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{debug, info};
use rps_logic::{play_round, MatchError, MatchState, Move, MoveSource};

use crate::render::{Renderer, PROMPT, SUSPENSE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Move),
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, MatchError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "reset" | "new" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => other.parse::<Move>().map(Command::Play),
        }
    }
}

const HELP: &str = "Moves: rock (r), paper (p), scissors (s). Commands: reset, help, quit.";

pub struct Session<S, R, W> {
    state: MatchState,
    source: S,
    input: R,
    output: W,
    renderer: Renderer,
    reveal_delay: Duration,
}

impl<S: MoveSource, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(state: MatchState, source: S, input: R, output: W) -> Self {
        Self {
            state,
            source,
            input,
            output,
            renderer: Renderer::new(false),
            reveal_delay: Duration::ZERO,
        }
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Run until `quit` or end of input. Returns the final match state.
    pub fn run(mut self) -> anyhow::Result<MatchState> {
        writeln!(self.output, "{}", self.renderer.scoreboard(&self.state))?;
        writeln!(self.output, "{}", PROMPT)?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Reset) => self.reset()?,
                Ok(Command::Play(m)) => self.play(m)?,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!(
            "session ended at {}-{} after {} rounds",
            self.state.player_score,
            self.state.opponent_score,
            self.state.rounds_played()
        );
        Ok(self.state)
    }

    fn reset(&mut self) -> anyhow::Result<()> {
        self.state.reset();
        writeln!(self.output, "{}", self.renderer.scoreboard(&self.state))?;
        writeln!(self.output, "{}", PROMPT)?;
        Ok(())
    }

    fn play(&mut self, player_move: Move) -> anyhow::Result<()> {
        // Moves stay locked until the concluded match is reset
        if self.state.concluded {
            debug!("ignoring {} on concluded match", player_move);
            writeln!(self.output, "The match is over. Type `reset` to play again.")?;
            return Ok(());
        }

        let round = play_round(&mut self.state, player_move, &mut self.source)?;

        writeln!(self.output, "{}", SUSPENSE)?;
        self.output.flush()?;
        if !self.reveal_delay.is_zero() {
            thread::sleep(self.reveal_delay);
        }

        writeln!(self.output, "{}", self.renderer.hands(&round))?;
        writeln!(self.output, "{}", self.renderer.round_text(&round))?;
        writeln!(self.output, "{}", self.renderer.scoreboard(&self.state))?;
        writeln!(self.output, "History: {}", self.renderer.history_strip(&self.state.history))?;

        if let Some(winner) = self.state.winner() {
            writeln!(self.output, "{}", self.renderer.game_over(winner))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use rps_logic::{reset_match, Outcome, Scripted};

    fn run(script: &str, opponent: Vec<Move>, winning_score: u32) -> (MatchState, String) {
        let mut out = Vec::new();
        let state = Session::new(
            reset_match(winning_score),
            Scripted::new(opponent),
            Cursor::new(script.to_string()),
            &mut out,
        )
        .run()
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("rock\n").unwrap(), Command::Play(Move::Rock));
        assert_eq!(Command::parse("S").unwrap(), Command::Play(Move::Scissors));
        assert_eq!(Command::parse("reset").unwrap(), Command::Reset);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert!(matches!(Command::parse("spock"), Err(MatchError::UnknownMove(_))));
    }

    #[test]
    fn test_single_round() {
        let (state, out) = run("rock\nquit\n", vec![Move::Scissors], 5);
        assert_eq!(state.history, vec![Outcome::Win]);
        assert!(out.contains(SUSPENSE));
        assert!(out.contains("You win! Rock beats scissors"));
        assert!(out.contains("History: W"));
    }

    #[test]
    fn test_history_in_order() {
        let (state, out) = run(
            "rock\nrock\nrock\n",
            vec![Move::Scissors, Move::Rock, Move::Paper],
            5,
        );
        assert_eq!(state.history, vec![Outcome::Win, Outcome::Draw, Outcome::Lose]);
        assert!(out.contains("History: W D L"));
    }

    #[test]
    fn test_match_end_locks_moves() {
        let (state, out) = run("paper\npaper\nscissors\n", vec![Move::Rock], 2);
        assert!(state.concluded);
        assert_eq!(state.player_score, 2);
        assert_eq!(state.rounds_played(), 2);
        assert!(out.contains("You won the game!"));
        assert!(out.contains("The match is over"));
    }

    #[test]
    fn test_reset_after_conclusion() {
        let (state, out) = run("rock\nreset\nrock\n", vec![Move::Paper], 1);
        assert!(out.contains("Computer won the game!"));
        assert_eq!(state.history, vec![Outcome::Lose]);
        assert!(state.concluded);
        assert_eq!(out.matches(PROMPT).count(), 2);
    }

    #[test]
    fn test_unknown_input_reported() {
        let (state, out) = run("lizard\n\n", vec![Move::Rock], 5);
        assert_eq!(state.rounds_played(), 0);
        assert!(out.contains("Unknown move `lizard`"));
    }

    #[test]
    fn test_eof_ends_session() {
        let (state, _) = run("", vec![Move::Rock], 5);
        assert_eq!(state, reset_match(5));
    }
}
