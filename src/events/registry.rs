//! Observer registry.
//!
//! Observers are notified synchronously, in subscription order, once per
//! state-changing call. The notification carries no event payload; observers
//! read whatever they need from the `GameState` they are handed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::engine::GameState;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObserverId(pub u32);

impl ObserverId {
    /// Create a new observer ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObserverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Observer({})", self.0)
    }
}

/// Something that wants to hear about state changes.
///
/// Implemented for every `FnMut(&GameState)` closure.
pub trait StateObserver {
    /// Called after the state has been fully updated.
    fn state_changed(&mut self, state: &GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState),
{
    fn state_changed(&mut self, state: &GameState) {
        self(state);
    }
}

/// Storage for observers, kept in subscription order.
///
/// A presentation layer registers a handful of observers, so they live
/// inline in a `SmallVec`.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: SmallVec<[(ObserverId, Box<dyn StateObserver>); 4]>,
    next_id: u32,
}

impl ObserverRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer, returns its ID.
    pub fn register(&mut self, observer: Box<dyn StateObserver>) -> ObserverId {
        let id = ObserverId::new(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Unregister an observer. Returns whether it was registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        match self.observers.iter().position(|(oid, _)| *oid == id) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Notify every observer, oldest subscription first.
    pub fn notify(&mut self, state: &GameState) {
        for (_, observer) in &mut self.observers {
            observer.state_changed(state);
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
