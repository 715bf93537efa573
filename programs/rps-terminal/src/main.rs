use std::io;

use clap::Parser;
use env_logger::Env;
use rps_logic::MatchState;
use rps_terminal::{Args, Renderer, Session};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = args.log_level {
        logger.filter_level(level);
    }
    logger.init();

    if args.no_color {
        colored::control::set_override(false);
    }

    let state = MatchState::new(args.match_config()?);
    let source = args.move_source()?;
    log::info!(
        "starting match: first to {}, {} opponent",
        state.winning_score,
        if args.seed.is_some() { "seeded" } else { "random" }
    );

    let stdin = io::stdin();
    let final_state = Session::new(state, source, stdin.lock(), io::stdout())
        .with_renderer(Renderer::new(!args.no_color))
        .with_reveal_delay(args.reveal_delay())
        .run()?;

    println!(
        "Final score: You {} - {} Computer",
        final_state.player_score, final_state.opponent_score
    );
    Ok(())
}
