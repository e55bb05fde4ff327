use leptos::prelude::*;

use crate::context::use_board_context;
use crate::models::Ticket;
use crate::routes;

/// Filtered tickets, each linking to its details page.
/// Renders an empty container when nothing matches.
#[component]
pub fn TicketList(tickets: Vec<Ticket>) -> impl IntoView {
    let routes = use_board_context().routes();

    view! {
        <ul class="ticket-list" data-testid="tickets">
            <For
                each=move || tickets.clone()
                key=|ticket| ticket.id.clone()
                children=move |ticket| {
                    let href = routes::details_href(&routes, &ticket.id);
                    view! {
                        <li class="ticket-item" class:completed=ticket.completed>
                            <a href=href>{ticket.label()}</a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
