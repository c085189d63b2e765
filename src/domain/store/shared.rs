//! Shared handle for multi-threaded hosts
//!
//! All four pieces of state sit behind one mutex, so a writer always moves
//! the store from one consistent state to the next.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::AppState;

#[derive(Debug, Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<AppState>>,
}

impl SharedStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// Run `f` against a consistent view of the state
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    /// Run `f` with exclusive access; other readers and writers wait
    pub fn write<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        f(&mut self.lock())
    }

    /// Clone of the current state
    pub fn snapshot(&self) -> AppState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, AppState> {
        // A writer that panicked may have applied only part of its closure;
        // that state is kept as-is.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
