//! Scoring and game outcome rules.
//!
//! - [`Feedback`]: black/white counts for a guess against the secret
//! - [`HintPeg`]: per-slot display form of a feedback
//! - [`GameStatus`]: in progress, won, or lost

mod feedback;
mod status;

pub use feedback::{Feedback, HintPeg};
pub use status::GameStatus;
