//! Game outcome state machine.
//!
//! `InProgress → Won` on a submit scoring all black, `InProgress → Lost`
//! when the guess budget runs out otherwise. Both are terminal until reset.

use serde::{Deserialize, Serialize};

use super::feedback::Feedback;
use crate::core::MAX_GUESSES;

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Guesses may still be edited and submitted.
    #[default]
    InProgress,
    /// The last submitted guess matched the secret.
    Won,
    /// The guess budget ran out without a match.
    Lost,
}

impl GameStatus {
    /// Status after a submission.
    ///
    /// A winning guess on the final allowed row is `Won`: the win check
    /// runs before the budget check.
    #[must_use]
    pub fn after_submit(last: Feedback, guesses_used: usize) -> Self {
        if last.is_win() {
            GameStatus::Won
        } else if guesses_used >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Check if the game has ended.
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}
