//! Deterministic random number generation for secret codes.
//!
//! Secrets are drawn with ChaCha8 so a seeded engine replays the same
//! sequence of games. Each position is sampled independently and uniformly
//! from the palette (repeats allowed).
//!
//! ```
//! use mastermind_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_code(), b.gen_code());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::code::Code;
use super::config::{CODE_LENGTH, PALETTE_SIZE};
use super::symbol::Symbol;

/// Seedable RNG that draws palette symbols and secret codes.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one set symbol uniformly from the palette.
    pub fn gen_symbol(&mut self) -> Symbol {
        let value = self.inner.gen_range(1..=PALETTE_SIZE);
        match Symbol::new(value) {
            Some(symbol) => symbol,
            None => unreachable!("palette value {value} has no symbol"),
        }
    }

    /// Draw a code, sampling each position independently.
    pub fn gen_code(&mut self) -> Code {
        let mut symbols = [Symbol::EMPTY; CODE_LENGTH];
        for slot in &mut symbols {
            *slot = self.gen_symbol();
        }
        Code::from_set_symbols(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_code(), rng2.gen_code());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_code()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_code()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_symbols_stay_in_palette() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let s = rng.gen_symbol();
            assert!(s.is_set());
            assert!(s.raw() <= PALETTE_SIZE);
        }
    }

    #[test]
    fn test_generated_codes_are_fully_set() {
        for seed in 0..50 {
            let mut rng = GameRng::new(seed);
            for _ in 0..20 {
                let code = rng.gen_code();
                assert!(code.iter().all(|s| s.is_set() && s.raw() <= PALETTE_SIZE));
                assert!(code.cells().is_complete());
            }
        }
    }

    #[test]
    fn test_every_symbol_is_drawn() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; PALETTE_SIZE as usize + 1];
        for _ in 0..500 {
            seen[rng.gen_symbol().index()] = true;
        }
        assert!(!seen[0]);
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn test_seed_is_kept() {
        assert_eq!(GameRng::new(99).seed(), 99);
    }
}
