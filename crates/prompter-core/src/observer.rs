//! Subscribe/notify fan-out for controller state changes.

use heapless::Vec;

use crate::app::Snapshot;

/// Receives a [`Snapshot`] after every state change.
pub trait StateObserver {
    fn notify(&mut self, snapshot: &Snapshot);
}

impl<F> StateObserver for F
where
    F: FnMut(&Snapshot),
{
    fn notify(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Bounded observer registry.
pub struct Observers<O, const N: usize> {
    entries: Vec<O, N>,
}

impl<O, const N: usize> Observers<O, N>
where
    O: StateObserver,
{
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hands the observer back when the registry is full.
    pub fn subscribe(&mut self, observer: O) -> Result<(), O> {
        self.entries.push(observer)
    }

    pub fn notify(&mut self, snapshot: &Snapshot) {
        for observer in self.entries.iter_mut() {
            observer.notify(snapshot);
        }
    }
}

impl<O, const N: usize> Default for Observers<O, N>
where
    O: StateObserver,
{
    fn default() -> Self {
        Self::new()
    }
}
