//! UI Components
//!
//! Leptos components that make up the ticket board.

mod ticket_filters;
mod ticket_list;

pub use ticket_filters::TicketFilters;
pub use ticket_list::TicketList;
