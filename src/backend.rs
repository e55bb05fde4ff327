//! Ticket Backend
//!
//! The collaborator the board loads from. `Backend` is the handle the app
//! holds; a different handle means a different backend and triggers a reload.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::commands;
use crate::config::{AppConfig, BackendKind};
use crate::error::LoadError;
use crate::models::Ticket;

#[async_trait(?Send)]
pub trait TicketBackend: Send + Sync {
    /// Full ticket collection
    async fn tickets(&self) -> Result<Vec<Ticket>, LoadError>;

    fn name(&self) -> &str;
}

/// Loads through Tauri IPC
pub struct TauriBackend {
    command: String,
}

impl TauriBackend {
    pub fn new(command: impl Into<String>) -> Self {
        Self { command: command.into() }
    }
}

#[async_trait(?Send)]
impl TicketBackend for TauriBackend {
    async fn tickets(&self) -> Result<Vec<Ticket>, LoadError> {
        commands::list_tickets(&self.command).await
    }

    fn name(&self) -> &str {
        "tauri"
    }
}

/// In-memory backend for running outside a Tauri shell
pub struct FixtureBackend {
    outcome: Result<Vec<Ticket>, LoadError>,
}

impl FixtureBackend {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { outcome: Ok(tickets) }
    }

    pub fn failing(error: LoadError) -> Self {
        Self { outcome: Err(error) }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Ticket::new(0, "Install a monitor arm", false),
            Ticket::new(1, "Move the desk to the new location", false),
        ])
    }
}

#[async_trait(?Send)]
impl TicketBackend for FixtureBackend {
    async fn tickets(&self) -> Result<Vec<Ticket>, LoadError> {
        self.outcome.clone()
    }

    fn name(&self) -> &str {
        "fixture"
    }
}

#[derive(Clone)]
pub struct Backend(Arc<dyn TicketBackend>);

impl Backend {
    pub fn new(backend: impl TicketBackend + 'static) -> Self {
        Self(Arc::new(backend))
    }

    pub fn from_config(config: &AppConfig) -> Self {
        match config.backend {
            BackendKind::Tauri => Self::new(TauriBackend::new(config.list_command.clone())),
            BackendKind::Fixture => Self::new(FixtureBackend::seeded()),
        }
    }

    pub async fn tickets(&self) -> Result<Vec<Ticket>, LoadError> {
        self.0.tickets().await
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }
}

impl PartialEq for Backend {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backend").field(&self.name()).finish()
    }
}
