//! Board dimensions and engine configuration.
//!
//! The board shape is fixed: a 4-symbol code drawn from a 6-symbol palette,
//! broken within 10 guesses. `GameConfig` only carries knobs that do not
//! change difficulty (the RNG seed and an optional fixed first secret).

use super::code::Code;

/// Number of symbols in a code (and cells in a guess row).
pub const CODE_LENGTH: usize = 4;

/// Number of distinct set symbols in the palette.
pub const PALETTE_SIZE: u8 = 6;

/// Number of guesses the player may submit before the game is lost.
pub const MAX_GUESSES: usize = 10;

/// Engine configuration.
///
/// ## Example
///
/// ```
/// use mastermind_engine::core::{Code, GameConfig};
///
/// let config = GameConfig::new()
///     .with_seed(7)
///     .with_secret("1234".parse::<Code>().unwrap());
///
/// assert_eq!(config.seed, Some(7));
/// assert!(config.secret.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Secret for the first game. Every reset draws a fresh one from the RNG.
    pub secret: Option<Code>,
}

impl GameConfig {
    /// Create a configuration with an entropy-seeded RNG and a random secret.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the secret of the first game.
    #[must_use]
    pub fn with_secret(mut self, secret: Code) -> Self {
        self.secret = Some(secret);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.secret, None);
    }

    #[test]
    fn test_config_builder() {
        let secret = Code::new([1, 2, 3, 4]).unwrap();
        let config = GameConfig::new().with_seed(42).with_secret(secret);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.secret, Some(secret));
    }

    #[test]
    fn test_board_dimensions() {
        assert_eq!(CODE_LENGTH, 4);
        assert_eq!(PALETTE_SIZE, 6);
        assert_eq!(MAX_GUESSES, 10);
    }
}
