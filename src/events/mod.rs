//! State-change notification channel.
//!
//! The engine owns an [`ObserverRegistry`]. Presentation code subscribes a
//! closure (or any [`StateObserver`]) and re-reads state on each call.
//! Consumers that prefer polling compare `GameEngine::revision()` instead.
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use mastermind_engine::GameEngine;
//!
//! let mut engine = GameEngine::with_seed(1);
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! engine.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! engine.toggle_reveal();
//! assert_eq!(calls.get(), 1);
//! ```

mod registry;

pub use registry::{ObserverId, ObserverRegistry, StateObserver};
