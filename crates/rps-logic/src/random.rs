//! Random sources for opponent moves
//!
//! The resolver only needs a uniform draw over the three moves, so every
//! source is reduced to the [`MoveSource`] trait:
//! - [`Uniform`] adapts any `rand` generator (entropy-seeded for real play)
//! - [`SeededRng`] is a deterministic xorshift for reproducible matches
//! - [`Scripted`] replays a fixed sequence of moves

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::moves::Move;

/// Supplies opponent moves, one per call, each with probability 1/3.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Uniform move source backed by a `rand` generator
#[derive(Clone, Debug)]
pub struct Uniform<R> {
    rng: R,
}

impl<R: Rng> Uniform<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl Uniform<SmallRng> {
    /// Seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_os_rng())
    }

    pub fn from_u64(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSource for Uniform<R> {
    fn next_move(&mut self) -> Move {
        Move::from_index(self.rng.random_range(0..3u32))
    }
}

/// Deterministic opponent for reproducible matches.
///
/// The same seed and stream always yield the same moves. Different streams
/// over one seed give independent opponents (e.g. one per match in a series).
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    const WARMUP: usize = 8;

    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let folded = seed
            .chunks_exact(8)
            .map(|chunk| {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                u64::from_le_bytes(word)
            })
            .fold(0u64, |acc, word| acc.rotate_left(17) ^ word);
        let state = folded ^ u64::from(stream).wrapping_mul(0x517cc1b727220a95);

        // xorshift is stuck at zero
        let mut rng = Self {
            state: if state == 0 { 0x9e3779b97f4a7c15 } else { state },
        };
        for _ in 0..Self::WARMUP {
            rng.step();
        }
        rng
    }

    /// xorshift64*, high half
    fn step(&mut self) -> u32 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        (self.state.wrapping_mul(0x2545f4914f6cdd1d) >> 32) as u32
    }

    /// Uniform value in [0, bound), rejection-sampled. `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32 {
        let limit = u32::MAX - u32::MAX % bound;
        loop {
            let v = self.step();
            if v < limit {
                return v % bound;
            }
        }
    }
}

impl MoveSource for SeededRng {
    fn next_move(&mut self) -> Move {
        Move::from_index(self.below(3))
    }
}

/// Replays a fixed list of moves, cycling when exhausted
#[derive(Clone, Debug)]
pub struct Scripted {
    moves: Vec<Move>,
    cursor: usize,
}

impl Scripted {
    /// Panics if `moves` is empty
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "scripted source needs at least one move");
        Self { moves, cursor: 0 }
    }

    /// Always plays `m`
    pub fn always(m: Move) -> Self {
        Self::new(vec![m])
    }
}

impl MoveSource for Scripted {
    fn next_move(&mut self) -> Move {
        let m = self.moves[self.cursor];
        self.cursor = (self.cursor + 1) % self.moves.len();
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frequencies(source: &mut impl MoveSource, samples: usize) -> [f64; 3] {
        let mut counts = [0usize; 3];
        for _ in 0..samples {
            let idx = match source.next_move() {
                Move::Rock => 0,
                Move::Paper => 1,
                Move::Scissors => 2,
            };
            counts[idx] += 1;
        }
        counts.map(|c| c as f64 / samples as f64)
    }

    fn seeded_moves(seed: [u8; 32], stream: u32, n: usize) -> Vec<Move> {
        let mut rng = SeededRng::new(&seed, stream);
        (0..n).map(|_| rng.next_move()).collect()
    }

    #[test]
    fn test_seeded_moves_reproducible() {
        assert_eq!(seeded_moves([7u8; 32], 3, 50), seeded_moves([7u8; 32], 3, 50));
    }

    #[test]
    fn test_seeded_opponents_differ() {
        let base = seeded_moves([42u8; 32], 0, 40);
        assert_ne!(base, seeded_moves([43u8; 32], 0, 40), "seed ignored");
        assert_ne!(base, seeded_moves([42u8; 32], 1, 40), "stream ignored");
    }

    #[test]
    fn test_zero_seed_plays_every_move() {
        let moves = seeded_moves([0u8; 32], 0, 60);
        for m in Move::ALL {
            assert!(moves.contains(&m), "{} never drawn", m);
        }
    }

    #[test]
    fn test_below_bounds() {
        let mut rng = SeededRng::new(&[42u8; 32], 0);
        for bound in [1u32, 3, 10, 1000, u32::MAX] {
            for _ in 0..100 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_uniform_frequencies() {
        let mut source = Uniform::from_u64(0xdecaf);
        for (i, f) in frequencies(&mut source, 30_000).iter().enumerate() {
            assert!((f - 1.0 / 3.0).abs() < 0.02, "move {} frequency {}", i, f);
        }
    }

    #[test]
    fn test_entropy_frequencies() {
        let mut source = Uniform::from_entropy();
        for (i, f) in frequencies(&mut source, 30_000).iter().enumerate() {
            assert!((f - 1.0 / 3.0).abs() < 0.02, "move {} frequency {}", i, f);
        }
    }

    #[test]
    fn test_seeded_frequencies() {
        let mut source = SeededRng::new(&[42u8; 32], 0);
        for (i, f) in frequencies(&mut source, 30_000).iter().enumerate() {
            assert!((f - 1.0 / 3.0).abs() < 0.02, "move {} frequency {}", i, f);
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = Scripted::new(vec![Move::Paper, Move::Rock]);
        assert_eq!(source.next_move(), Move::Paper);
        assert_eq!(source.next_move(), Move::Rock);
        assert_eq!(source.next_move(), Move::Paper);
    }

    #[test]
    #[should_panic]
    fn test_scripted_rejects_empty() {
        Scripted::new(Vec::new());
    }
}
