//! # mastermind-engine
//!
//! A single-player code-breaking game engine. A secret code of
//! [`CODE_LENGTH`] symbols is drawn from a palette of [`PALETTE_SIZE`]
//! symbols (repeats allowed). The player fills in a guess row one cell at a
//! time, submits it, and receives black (right symbol, right place) and
//! white (right symbol, wrong place) counts, until they match the secret or
//! use all [`MAX_GUESSES`] guesses.
//!
//! ## Design Principles
//!
//! 1. **No-op, not error**: out-of-turn calls (editing a row that is not
//!    current, submitting an incomplete row, playing after the game ended)
//!    change nothing and return `false`/`None`.
//!
//! 2. **Observable**: every state change notifies subscribed observers
//!    exactly once, synchronously, after the state is fully updated.
//!    The engine knows nothing about rendering.
//!
//! 3. **Deterministic when seeded**: secrets come from a seeded ChaCha8 RNG.
//!
//! ## Modules
//!
//! - `core`: Symbols, rows and codes, board dimensions, RNG, configuration
//! - `rules`: Feedback scoring and the win/loss state machine
//! - `events`: Observer registry
//! - `engine`: `GameState` queries and the `GameEngine` mutators
//!
//! ## Example
//!
//! ```
//! use mastermind_engine::{Code, GameEngine, GameStatus};
//!
//! let secret: Code = "3333".parse().unwrap();
//! let mut engine = GameEngine::with_secret(secret);
//!
//! for column in 0..4 {
//!     for _ in 0..3 {
//!         engine.cycle_cell(0, column);
//!     }
//! }
//! assert!(engine.can_submit());
//!
//! let feedback = engine.submit().unwrap();
//! assert_eq!((feedback.black, feedback.white), (4, 0));
//! assert_eq!(engine.status(), GameStatus::Won);
//! ```

pub mod core;
pub mod rules;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Symbol, Cells, Code, CodeError,
    GameConfig, GameRng,
    CODE_LENGTH, MAX_GUESSES, PALETTE_SIZE,
};

pub use crate::rules::{Feedback, HintPeg, GameStatus};

pub use crate::events::{ObserverId, ObserverRegistry, StateObserver};

pub use crate::engine::{BoardRow, GameEngine, GameState, GuessRecord, SnapshotError};
