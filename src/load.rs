//! Ticket Load State
//!
//! Tri-state result of the ticket fetch plus the generation guard that
//! discards results from superseded or torn-down load attempts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::LoadError;
use crate::models::Ticket;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loaded(Vec<Ticket>),
    /// `stale` holds whatever a previous successful load delivered; a failure
    /// never clears it.
    Failed { error: LoadError, stale: Vec<Ticket> },
}

impl LoadState {
    /// Replace the collection wholesale. A recorded failure stays in place;
    /// there is no recovery path out of `Failed`.
    pub fn succeed(&mut self, tickets: Vec<Ticket>) {
        match self {
            LoadState::Failed { stale, .. } => *stale = tickets,
            _ => *self = LoadState::Loaded(tickets),
        }
    }

    pub fn fail(&mut self, error: LoadError) {
        let stale = match std::mem::take(self) {
            LoadState::NotLoaded => Vec::new(),
            LoadState::Loaded(tickets) => tickets,
            LoadState::Failed { stale, .. } => stale,
        };
        *self = LoadState::Failed { error, stale };
    }

    /// Tickets currently held, including stale ones after a failure.
    pub fn tickets(&self) -> &[Ticket] {
        match self {
            LoadState::NotLoaded => &[],
            LoadState::Loaded(tickets) => tickets,
            LoadState::Failed { stale, .. } => stale,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            LoadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

/// Token for one load attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadAttempt(u64);

impl LoadAttempt {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// Monotonic counter shared between the component and its in-flight fetches.
///
/// Only the most recently started attempt is current. `invalidate` makes every
/// outstanding attempt stale, which is what teardown does.
#[derive(Debug, Clone, Default)]
pub struct LoadGeneration(Arc<AtomicU64>);

impl LoadGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> LoadAttempt {
        LoadAttempt(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, attempt: LoadAttempt) -> bool {
        self.0.load(Ordering::SeqCst) == attempt.0
    }

    pub fn invalidate(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}
