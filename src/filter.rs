//! Ticket Filter
//!
//! Client-side filter criteria and the predicate applied at render time.

use crate::models::Ticket;

/// User-entered filter criteria.
///
/// `completed` is an exact match, so the default state shows only open
/// tickets. There is no "show both" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Case-insensitive substring matched against the description
    pub text: String,
    /// Required value of `Ticket::completed`
    pub completed: bool,
}

impl TicketFilter {
    /// Replace the text criterion. An empty string disables text filtering.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// Visible subset of `tickets`, in original order.
    pub fn apply(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let matcher = Matcher::new(self);
        tickets
            .iter()
            .filter(|t| matcher.matches(t))
            .cloned()
            .collect()
    }
}

/// Filter with the needle lowercased once per pass
struct Matcher {
    needle: String,
    completed: bool,
}

impl Matcher {
    fn new(filter: &TicketFilter) -> Self {
        Self {
            needle: filter.text.to_lowercase(),
            completed: filter.completed,
        }
    }

    fn matches(&self, ticket: &Ticket) -> bool {
        ticket.completed == self.completed
            && (self.needle.is_empty() || ticket.description.to_lowercase().contains(&self.needle))
    }
}
