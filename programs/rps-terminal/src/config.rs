//! Command-line configuration

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use rps_logic::{MatchConfig, MoveSource, SeededRng, Uniform};

#[derive(Parser, Debug, Clone)]
#[command(name = "rps", about = "Rock, Paper, Scissors: first to N wins")]
pub struct Args {
    /// Round wins needed to take the match
    #[arg(long, default_value_t = MatchConfig::DEFAULT_WINNING_SCORE,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub winning_score: u32,

    /// 32-byte seed as 64 hex characters, for a reproducible opponent
    #[arg(long)]
    pub seed: Option<String>,

    /// Pause before revealing each round, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub reveal_delay_ms: u64,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<log::LevelFilter>,
}

impl Args {
    pub fn match_config(&self) -> anyhow::Result<MatchConfig> {
        Ok(MatchConfig::new(self.winning_score)?)
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    /// Seeded source when `--seed` is given, entropy otherwise
    pub fn move_source(&self) -> anyhow::Result<Box<dyn MoveSource>> {
        match &self.seed {
            Some(hex) => {
                let seed = parse_seed(hex).context("invalid --seed")?;
                Ok(Box::new(SeededRng::new(&seed, 0)))
            }
            None => Ok(Box::new(Uniform::from_entropy())),
        }
    }
}

pub fn parse_seed(hex: &str) -> anyhow::Result<[u8; 32]> {
    let hex = hex.trim();
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if hex.len() != 64 {
        bail!("expected 64 hex characters, got {}", hex.len());
    }
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        bail!("seed must contain only hex digits");
    }
    let mut seed = [0u8; 32];
    for (i, byte) in seed.iter_mut().enumerate() {
        let pair = &hex[i * 2..i * 2 + 2];
        *byte = u8::from_str_radix(pair, 16)
            .with_context(|| format!("bad hex byte `{}`", pair))?;
    }
    Ok(seed)
}
