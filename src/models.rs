//! Frontend Models
//!
//! Data structures matching backend entities.

use std::fmt;

use serde::{Deserialize, Deserializer};

/// Opaque ticket identifier.
///
/// Backends send either a JSON number or a string; both are kept verbatim
/// so the id displays and routes exactly as it was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TicketId(String);

impl TicketId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for TicketId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for TicketId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TicketId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => TicketId(number_text(&n)),
            RawId::Text(s) => TicketId(s),
        })
    }
}

/// Integral floats (`1.0`, `1e2`) print as plain integers.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if !n.is_i64() && !n.is_u64() && f.is_finite() && f.fract() == 0.0 => {
            format!("{:.0}", f)
        }
        _ => n.to_string(),
    }
}

/// Ticket data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub description: String,
    pub completed: bool,
}

impl Ticket {
    pub fn new(id: impl Into<TicketId>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            completed,
        }
    }

    /// Link text shown in the list
    pub fn label(&self) -> String {
        format!("Ticket: {}, {}", self.id, self.description)
    }
}
