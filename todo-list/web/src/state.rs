//! Signal-backed holder for the task state.

use dioxus::prelude::*;
use todo_list_core::{StateHolder, TodoState};

/// Lets the core update function write straight into the component's signal.
///
/// Every update takes a fresh write guard and drops it before returning, so
/// overlapping commands never hold the state across a request.
#[derive(Clone, Copy)]
pub struct SignalState {
    inner: Signal<TodoState>,
}

impl SignalState {
    pub fn new(inner: Signal<TodoState>) -> Self {
        Self { inner }
    }
}

impl StateHolder for SignalState {
    fn update<R>(&mut self, f: impl FnOnce(&mut TodoState) -> R) -> R {
        let mut state = self.inner.write();
        f(&mut *state)
    }
}
