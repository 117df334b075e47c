//! The game engine: state, secret generation, and notification.
//!
//! Every mutator runs to completion, then (if anything changed) bumps the
//! revision counter and notifies observers exactly once before returning.
//! Out-of-turn calls (editing a non-current row, submitting an incomplete
//! row, anything after the game ends) are no-ops, not errors.

use tracing::{debug, info, instrument, trace};

use crate::core::{Cells, Code, GameConfig, GameRng, Symbol};
use crate::events::{ObserverId, ObserverRegistry, StateObserver};
use crate::rules::{Feedback, GameStatus};

use super::state::{BoardRow, GameState};

/// A single-player code-breaking game.
///
/// ```
/// use mastermind_engine::GameEngine;
///
/// let mut engine = GameEngine::with_secret("1123".parse().unwrap());
/// for column in 0..4 {
///     engine.cycle_cell(0, column);
/// }
/// let feedback = engine.submit().unwrap();
/// assert_eq!((feedback.black, feedback.white), (2, 0));
/// assert_eq!(engine.remaining_guesses(), 9);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    state: GameState,
    rng: GameRng,
    observers: ObserverRegistry,
    revision: u64,
}

impl GameEngine {
    /// Start a game with an entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(GameConfig::new())
    }

    /// Start a deterministic game.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_config(GameConfig::new().with_seed(seed))
    }

    /// Start a game with a known first secret. Resets draw random secrets.
    #[must_use]
    pub fn with_secret(secret: Code) -> Self {
        Self::from_config(GameConfig::new().with_secret(secret))
    }

    /// Start a game from a configuration.
    #[must_use]
    pub fn from_config(config: GameConfig) -> Self {
        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let secret = config.secret.unwrap_or_else(|| rng.gen_code());
        debug!(seed = rng.seed(), "Starting game");

        Self {
            state: GameState::new(secret),
            rng,
            observers: ObserverRegistry::new(),
            revision: 0,
        }
    }

    // === State access ===

    /// Borrow the current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// O(1) copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Seed of the engine's RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Counter bumped once per state change. Compare to poll for updates.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // === Queries ===

    /// See [`GameState::status`].
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// See [`GameState::is_over`].
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// See [`GameState::is_victory`].
    #[must_use]
    pub fn is_victory(&self) -> bool {
        self.state.is_victory()
    }

    /// See [`GameState::remaining_guesses`].
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.state.remaining_guesses()
    }

    /// See [`GameState::can_submit`].
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// See [`GameState::history_row`].
    #[must_use]
    pub fn history_row(&self, index: usize) -> Option<BoardRow> {
        self.state.history_row(index)
    }

    /// See [`GameState::solution`].
    #[must_use]
    pub fn solution(&self) -> Cells {
        self.state.solution()
    }

    // === Mutators ===

    /// Cycle a pending cell: unset → 1 → … → 6 → unset.
    ///
    /// Ignored unless `row` is the current row and the game is running.
    /// Returns whether the state changed.
    pub fn cycle_cell(&mut self, row: usize, column: usize) -> bool {
        match self.state.cycle_cell(row, column) {
            Some(symbol) => {
                trace!(row, column, %symbol, "Cycled cell");
                self.changed();
                true
            }
            None => {
                trace!(row, column, "Ignored cell cycle");
                false
            }
        }
    }

    /// Set a pending cell directly. Same guards as [`cycle_cell`](Self::cycle_cell).
    ///
    /// Setting a cell to its current value is not a change.
    pub fn set_cell(&mut self, row: usize, column: usize, symbol: Symbol) -> bool {
        if self.state.set_cell(row, column, symbol) {
            trace!(row, column, %symbol, "Set cell");
            self.changed();
            true
        } else {
            trace!(row, column, %symbol, "Ignored cell set");
            false
        }
    }

    /// Submit the pending row.
    ///
    /// Returns its feedback, or `None` (and does nothing) if
    /// [`can_submit`](Self::can_submit) is false.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Option<Feedback> {
        let Some(record) = self.state.submit() else {
            trace!("Ignored submit");
            return None;
        };

        debug!(
            row = self.state.guesses_used() - 1,
            guess = %record.code,
            black = record.feedback.black,
            white = record.feedback.white,
            "Scored guess"
        );
        if self.state.is_over() {
            info!(
                status = %self.state.status(),
                guesses = self.state.guesses_used(),
                "Game over"
            );
        }

        self.changed();
        Some(record.feedback)
    }

    /// Start a new game with a fresh random secret.
    ///
    /// Clears history and the pending row and hides the solution.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let secret = self.rng.gen_code();
        self.state = GameState::new(secret);
        debug!("Reset game");
        self.changed();
    }

    /// Show or hide the solution. Returns the new reveal flag.
    pub fn toggle_reveal(&mut self) -> bool {
        let revealed = self.state.toggle_reveal();
        debug!(revealed, "Toggled reveal");
        self.changed();
        revealed
    }

    // === Observers ===

    /// Subscribe a closure to state changes.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&GameState) + 'static,
    {
        self.subscribe_observer(Box::new(observer))
    }

    /// Subscribe a boxed observer to state changes.
    pub fn subscribe_observer(&mut self, observer: Box<dyn StateObserver>) -> ObserverId {
        let id = self.observers.register(observer);
        debug!(%id, observers = self.observers.len(), "Subscribed");
        id
    }

    /// Stop notifying an observer. Returns whether it was subscribed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    fn changed(&mut self) {
        self.revision += 1;
        self.observers.notify(&self.state);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
