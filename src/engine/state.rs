//! Game state and every read query.
//!
//! ## GameState
//!
//! - Secret code (hidden unless revealed)
//! - Submitted guesses with their feedback, in order
//! - The pending (editable) row
//! - Reveal flag and game status
//!
//! History is an `im::Vector`, so cloning a `GameState` for a snapshot is
//! O(1). `guesses_used` is derived from the history length and cannot drift.
//!
//! Mutators here are crate-private and report whether anything changed;
//! `GameEngine` wraps them with logging and observer notification.
//!
//! Deserializing a snapshot re-checks it against the rules: at most
//! `MAX_GUESSES` rows, each row's feedback matching the secret, no rows
//! after a win. The stored status is ignored and derived from the history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cells, Code, Symbol, MAX_GUESSES};
use crate::rules::{Feedback, GameStatus};

/// A submitted guess and the feedback it earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guess as submitted.
    pub code: Code,
    /// Feedback against the secret at submission time.
    pub feedback: Feedback,
}

/// One of the `MAX_GUESSES` rows on the board, as a presentation layer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardRow {
    /// Already submitted; feedback is fixed.
    Submitted(GuessRecord),
    /// The row currently being edited.
    Pending(Cells),
    /// Not reached (or never will be, once the game is over).
    Blank,
}

impl BoardRow {
    /// Cells to draw for this row.
    #[must_use]
    pub fn cells(&self) -> Cells {
        match self {
            BoardRow::Submitted(record) => record.code.cells(),
            BoardRow::Pending(cells) => *cells,
            BoardRow::Blank => Cells::empty(),
        }
    }

    /// Feedback for this row, if it has been submitted.
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            BoardRow::Submitted(record) => Some(record.feedback),
            _ => None,
        }
    }
}

/// Error rebuilding a `GameState` from a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// More rows than the guess budget allows.
    #[display("{} guesses recorded, at most {} allowed", _0, MAX_GUESSES)]
    TooManyGuesses(usize),

    /// A row's feedback does not score its guess against the secret.
    #[display("row {} feedback does not match the secret", _0)]
    FeedbackMismatch(usize),

    /// A row was recorded after a winning guess.
    #[display("row {} follows a winning guess", _0)]
    GuessAfterWin(usize),
}

impl std::error::Error for SnapshotError {}

/// Wire form of `GameState`. Status is derived, so it is not read.
#[derive(Deserialize)]
struct RawGameState {
    secret: Code,
    history: Vector<GuessRecord>,
    pending: Cells,
    revealed: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = SnapshotError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let RawGameState {
            secret,
            history,
            pending,
            revealed,
        } = raw;

        if history.len() > MAX_GUESSES {
            return Err(SnapshotError::TooManyGuesses(history.len()));
        }

        let mut status = GameStatus::InProgress;
        for (row, record) in history.iter().enumerate() {
            if status.is_over() {
                return Err(SnapshotError::GuessAfterWin(row));
            }
            if record.feedback != Feedback::compute(&record.code, &secret) {
                return Err(SnapshotError::FeedbackMismatch(row));
            }
            status = GameStatus::after_submit(record.feedback, row + 1);
        }

        Ok(Self {
            secret,
            history,
            pending,
            revealed,
            status,
        })
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    secret: Code,
    history: Vector<GuessRecord>,
    pending: Cells,
    revealed: bool,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh game around a secret.
    ///
    /// Empty history, all-unset pending row, solution hidden.
    #[must_use]
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            history: Vector::new(),
            pending: Cells::empty(),
            revealed: false,
            status: GameStatus::InProgress,
        }
    }

    // === Progress ===

    /// Current status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game has ended (won or lost).
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Check if the most recent guess matched the secret.
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Number of guesses submitted.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the budget runs out.
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Index of the editable row, or `None` once the game is over.
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        if self.is_over() {
            None
        } else {
            Some(self.history.len())
        }
    }

    // === Rows ===

    /// The editable row, or `None` once the game is over.
    #[must_use]
    pub fn pending(&self) -> Option<Cells> {
        self.current_row().map(|_| self.pending)
    }

    /// Check if the pending row can be submitted.
    ///
    /// True iff the game is still running and every pending cell is set.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_over() && self.pending.is_complete()
    }

    /// Submitted guesses, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &GuessRecord> {
        self.history.iter()
    }

    /// Most recent feedback, if any guess has been submitted.
    #[must_use]
    pub fn last_feedback(&self) -> Option<Feedback> {
        self.history.last().map(|record| record.feedback)
    }

    /// Row `index` of the board, or `None` past `MAX_GUESSES`.
    #[must_use]
    pub fn history_row(&self, index: usize) -> Option<BoardRow> {
        if index >= MAX_GUESSES {
            return None;
        }
        if let Some(record) = self.history.get(index) {
            return Some(BoardRow::Submitted(*record));
        }
        if self.current_row() == Some(index) {
            return Some(BoardRow::Pending(self.pending));
        }
        Some(BoardRow::Blank)
    }

    /// All `MAX_GUESSES` board rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = BoardRow> + '_ {
        (0..MAX_GUESSES).filter_map(move |i| self.history_row(i))
    }

    // === Solution ===

    /// Check if the solution is revealed.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The secret while revealed, an all-unset row otherwise.
    #[must_use]
    pub fn solution(&self) -> Cells {
        if self.revealed {
            self.secret.cells()
        } else {
            Cells::empty()
        }
    }

    // === Mutation ===

    fn accepts_edit(&self, row: usize) -> bool {
        self.current_row() == Some(row)
    }

    /// Cycle one pending cell. Returns the new symbol, or `None` if ignored.
    pub(crate) fn cycle_cell(&mut self, row: usize, column: usize) -> Option<Symbol> {
        if !self.accepts_edit(row) {
            return None;
        }
        self.pending.cycle(column)
    }

    /// Set one pending cell. Returns whether the cell changed.
    pub(crate) fn set_cell(&mut self, row: usize, column: usize, symbol: Symbol) -> bool {
        self.accepts_edit(row) && self.pending.set(column, symbol)
    }

    /// Score and record the pending row. Returns `None` if it cannot be submitted.
    pub(crate) fn submit(&mut self) -> Option<GuessRecord> {
        if !self.can_submit() {
            return None;
        }
        let code = self.pending.to_code()?;
        let feedback = Feedback::compute(&code, &self.secret);
        let record = GuessRecord { code, feedback };

        self.history.push_back(record);
        self.pending = Cells::empty();
        self.status = GameStatus::after_submit(feedback, self.history.len());
        Some(record)
    }

    /// Flip the reveal flag. Returns the new value.
    pub(crate) fn toggle_reveal(&mut self) -> bool {
        self.revealed = !self.revealed;
        self.revealed
    }
}
