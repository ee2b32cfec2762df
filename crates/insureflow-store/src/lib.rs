pub mod error;
pub mod query;
pub mod repo;
pub mod snapshot;

use insureflow_core::domain::{Lead, LeadId};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory lead store. Insertion order is preserved for iteration; an id
/// index keeps lookups O(1). Single-threaded single-writer: repo handles
/// borrow the interior state only for the duration of one call.
#[derive(Debug, Default)]
pub struct Store {
    state: RefCell<State>,
}

#[derive(Debug, Default)]
pub(crate) struct State {
    pub(crate) leads: Vec<Lead>,
    pub(crate) index: HashMap<LeadId, usize>,
}

impl State {
    pub(crate) fn position(&self, id: LeadId) -> Option<usize> {
        self.index.get(&id).copied()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leads(&self) -> repo::LeadsRepo<'_> {
        repo::LeadsRepo::new(self)
    }

    pub fn interactions(&self) -> repo::InteractionsRepo<'_> {
        repo::InteractionsRepo::new(self)
    }

    pub fn analytics(&self) -> repo::AnalyticsView<'_> {
        repo::AnalyticsView::new(self)
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        f(&self.state.borrow())
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    pub(crate) fn with_leads<R>(&self, f: impl FnOnce(&[Lead]) -> R) -> R {
        self.with_state(|state| f(&state.leads))
    }
}
