//! Ticket Filters Component
//!
//! Description filter, completed toggle and the "Add" link.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::routes;
use crate::store::{store_set_filter_text, store_toggle_completed, BoardStateStoreFields};

#[component]
pub fn TicketFilters() -> impl IntoView {
    let ctx = use_board_context();
    let store = ctx.store;
    let add_href = routes::add_href(&ctx.routes());

    view! {
        <form class="ticket-filters" on:submit=|ev| ev.prevent_default()>
            <fieldset>
                <legend>"Filters"</legend>
                <label>"Description"</label>
                <input
                    type="text"
                    name="filter"
                    aria-label="filter"
                    prop:value=move || store.filter().read().text.clone()
                    on:input=move |ev| store_set_filter_text(&store, event_target_value(&ev))
                />
                <label>"Completed tasks?"</label>
                <input
                    type="checkbox"
                    name="completed"
                    prop:checked=move || store.filter().read().completed
                    on:change=move |_| store_toggle_completed(&store)
                />
                <a href=add_href>"Add"</a>
            </fieldset>
        </form>
    }
}
