//! Board View Derivation
//!
//! Decides what the board shows for a given load state and filter.

use crate::filter::TicketFilter;
use crate::load::LoadState;
use crate::models::Ticket;

#[derive(Debug, Clone, PartialEq)]
pub enum BoardView {
    /// Load failed; carries the generic message only
    Error(&'static str),
    /// Filtered tickets. May be empty when nothing matches.
    List(Vec<Ticket>),
    /// Nothing loaded
    Empty,
}

impl BoardView {
    pub fn derive(load: &LoadState, filter: &TicketFilter) -> Self {
        if let Some(error) = load.error() {
            return BoardView::Error(error.summary());
        }
        let tickets = load.tickets();
        if tickets.is_empty() {
            BoardView::Empty
        } else {
            BoardView::List(filter.apply(tickets))
        }
    }
}
