//! Ticket Board App
//!
//! Loads the ticket collection from the backend and renders the filtered board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::Backend;
use crate::components::{TicketFilters, TicketList};
use crate::config::AppConfig;
use crate::context::BoardContext;
use crate::load::LoadGeneration;
use crate::store::{store_board_view, store_load_tickets, BoardState, BoardStore};
use crate::view_state::BoardView;

#[component]
pub fn App(
    /// Reloads whenever this changes to a different handle
    #[prop(into)]
    backend: Signal<Backend>,
    config: AppConfig,
) -> impl IntoView {
    let store: BoardStore = BoardStore::new(BoardState::default());
    let generation = LoadGeneration::new();

    provide_context(BoardContext::new(store, config));

    // Load tickets on mount and on backend change
    Effect::new({
        let generation = generation.clone();
        move |prev: Option<Backend>| {
            let backend = backend.get();
            if prev.as_ref() == Some(&backend) {
                return backend;
            }
            let attempt = generation.begin();
            log::debug!("loading tickets from {} (attempt {})", backend.name(), attempt.number());

            spawn_local(store_load_tickets(store, backend.clone(), generation.clone(), attempt));
            backend
        }
    });

    on_cleanup(move || generation.invalidate());

    view! {
        <div class="app">
            <h2>"Tickets"</h2>

            <TicketFilters />

            {move || match store_board_view(&store) {
                BoardView::Error(message) => view! { <p class="error">{message}</p> }.into_any(),
                BoardView::List(tickets) => view! { <TicketList tickets=tickets /> }.into_any(),
                BoardView::Empty => view! { <p class="empty">"No tickets"</p> }.into_any(),
            }}
        </div>
    }
}
