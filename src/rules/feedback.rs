//! Black/white feedback for a guess against the secret.
//!
//! - **Black**: same symbol in the same position.
//! - **White**: symbol present at a different position, counted with
//!   multiset capping after black matches are removed from both sides.
//!
//! A position that scores black never contributes to white, so
//! `black + white <= CODE_LENGTH` always holds.

use serde::{Deserialize, Serialize};

use crate::core::{Code, CODE_LENGTH, PALETTE_SIZE};

const TABLE_SIZE: usize = PALETTE_SIZE as usize + 1;

/// One hint slot as shown next to a submitted row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HintPeg {
    /// Right symbol, right position.
    Exact,
    /// Right symbol, wrong position.
    Partial,
    /// No match.
    Blank,
}

impl HintPeg {
    /// Display character: `B` for exact, `W` for partial, space for blank.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            HintPeg::Exact => 'B',
            HintPeg::Partial => 'W',
            HintPeg::Blank => ' ',
        }
    }
}

/// Feedback counts for one submitted guess.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Feedback {
    /// Exact (position and symbol) matches.
    pub black: u8,
    /// Symbol matches at other positions.
    pub white: u8,
}

impl Feedback {
    /// Compute feedback for `guess` against `secret`.
    ///
    /// ```
    /// use mastermind_engine::core::Code;
    /// use mastermind_engine::rules::Feedback;
    ///
    /// let secret: Code = "1123".parse().unwrap();
    /// let guess: Code = "1222".parse().unwrap();
    /// let fb = Feedback::compute(&guess, &secret);
    /// assert_eq!((fb.black, fb.white), (2, 0));
    /// ```
    #[must_use]
    pub fn compute(guess: &Code, secret: &Code) -> Self {
        let mut black = 0u8;
        let mut guess_remaining = [0u8; TABLE_SIZE];
        let mut secret_remaining = [0u8; TABLE_SIZE];

        for (g, s) in guess.iter().zip(secret.iter()) {
            debug_assert!(g.is_set() && s.is_set());
            if g == s {
                black += 1;
            } else {
                guess_remaining[g.index()] += 1;
                secret_remaining[s.index()] += 1;
            }
        }

        let white = guess_remaining
            .iter()
            .zip(secret_remaining.iter())
            .map(|(&g, &s)| g.min(s))
            .sum();

        Self { black, white }
    }

    /// Check if every position matched.
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.black as usize == CODE_LENGTH
    }

    /// Hint pegs: `black` exact, then `white` partial, then blanks.
    ///
    /// Peg order carries no positional meaning relative to guess columns.
    #[must_use]
    pub fn pegs(self) -> [HintPeg; CODE_LENGTH] {
        let mut pegs = [HintPeg::Blank; CODE_LENGTH];
        let black = self.black as usize;
        let white = self.white as usize;
        for (i, peg) in pegs.iter_mut().enumerate() {
            if i < black {
                *peg = HintPeg::Exact;
            } else if i < black + white {
                *peg = HintPeg::Partial;
            }
        }
        pegs
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for peg in self.pegs() {
            write!(f, "{}", peg.to_char())?;
        }
        Ok(())
    }
}
