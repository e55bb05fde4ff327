//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::backend::Backend;
use crate::error::LoadError;
use crate::filter::TicketFilter;
use crate::load::{LoadAttempt, LoadGeneration, LoadState};
use crate::models::Ticket;
use crate::view_state::BoardView;

/// Component-local board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Result of the latest applied load
    pub load: LoadState,
    /// User-entered filter criteria
    pub filter: TicketFilter,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

// ========================
// Store Helper Functions
// ========================

/// Replace the text filter in place
pub fn store_set_filter_text(store: &BoardStore, text: String) {
    store.filter().write().set_text(text);
}

/// Flip the completed flag of the current filter
pub fn store_toggle_completed(store: &BoardStore) {
    store.filter().write().toggle_completed();
}

pub fn store_apply_tickets(store: &BoardStore, tickets: Vec<Ticket>) {
    store.load().write().succeed(tickets);
}

pub fn store_apply_failure(store: &BoardStore, error: LoadError) {
    store.load().write().fail(error);
}

/// Fetch from `backend` and apply the outcome, unless `attempt` has been
/// superseded or invalidated by the time the fetch completes.
pub async fn store_load_tickets(
    store: BoardStore,
    backend: Backend,
    generation: LoadGeneration,
    attempt: LoadAttempt,
) {
    let outcome = backend.tickets().await;
    if !generation.is_current(attempt) {
        log::debug!("discarding superseded load (attempt {})", attempt.number());
        return;
    }
    match outcome {
        Ok(tickets) => {
            log::info!("loaded {} tickets", tickets.len());
            store_apply_tickets(&store, tickets);
        }
        Err(e) => {
            log::error!("ticket load failed: {}", e);
            store_apply_failure(&store, e);
        }
    }
}

/// What to render right now. Recomputed on every call.
pub fn store_board_view(store: &BoardStore) -> BoardView {
    BoardView::derive(&store.load().read(), &store.filter().read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FixtureBackend;
    use crate::error::LOAD_FAILED_MESSAGE;
    use futures::executor::block_on;

    fn sample() -> Vec<Ticket> {
        vec![
            Ticket::new(1, "Fix bug", false),
            Ticket::new(2, "Write docs", true),
        ]
    }

    #[test]
    fn test_setters_compose_in_same_tick() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            store_set_filter_text(&store, "docs".to_string());
            store_toggle_completed(&store);
            store_toggle_completed(&store);
            store_toggle_completed(&store);

            let filter = store.filter().get_untracked();
            assert_eq!(filter.text, "docs");
            assert!(filter.completed);
        });
    }

    #[test]
    fn test_board_view_tracks_store() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            assert_eq!(store_board_view(&store), BoardView::Empty);

            store_apply_tickets(&store, sample());
            assert_eq!(
                store_board_view(&store),
                BoardView::List(vec![Ticket::new(1, "Fix bug", false)])
            );

            store_toggle_completed(&store);
            assert_eq!(
                store_board_view(&store),
                BoardView::List(vec![Ticket::new(2, "Write docs", true)])
            );

            store_apply_failure(&store, LoadError::Transport("offline".into()));
            assert!(matches!(store_board_view(&store), BoardView::Error(_)));
            assert_eq!(store.load().read_untracked().tickets().len(), 2);
        });
    }

    #[test]
    fn test_load_applies_current_attempt() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            let generation = LoadGeneration::new();
            store_apply_tickets(&store, vec![Ticket::new(9, "Old", false)]);

            let attempt = generation.begin();
            let backend = Backend::new(FixtureBackend::new(sample()));
            block_on(store_load_tickets(store, backend, generation.clone(), attempt));

            assert_eq!(store.load().get_untracked(), LoadState::Loaded(sample()));
        });
    }

    #[test]
    fn test_load_drops_superseded_attempt() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            let generation = LoadGeneration::new();

            let first = generation.begin();
            let _second = generation.begin();
            let backend = Backend::new(FixtureBackend::new(sample()));
            block_on(store_load_tickets(store, backend, generation.clone(), first));

            assert_eq!(store.load().get_untracked(), LoadState::NotLoaded);
        });
    }

    #[test]
    fn test_load_drops_result_after_invalidate() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            let generation = LoadGeneration::new();

            let attempt = generation.begin();
            generation.invalidate();
            let backend = Backend::new(FixtureBackend::failing(LoadError::Backend("down".into())));
            block_on(store_load_tickets(store, backend, generation.clone(), attempt));

            assert_eq!(store.load().get_untracked(), LoadState::NotLoaded);
            assert_eq!(store_board_view(&store), BoardView::Empty);
        });
    }

    #[test]
    fn test_load_failure_shows_error() {
        let owner = Owner::new();
        owner.with(|| {
            let store = BoardStore::new(BoardState::default());
            let generation = LoadGeneration::new();

            let attempt = generation.begin();
            let backend = Backend::new(FixtureBackend::failing(LoadError::Backend("down".into())));
            block_on(store_load_tickets(store, backend, generation.clone(), attempt));

            assert_eq!(store_board_view(&store), BoardView::Error(LOAD_FAILED_MESSAGE));
        });
    }
}
